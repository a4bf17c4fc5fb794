use crate::errors::*;
use actix_web::{http::StatusCode, HttpResponse};

pub fn forbidden(message: &str) -> Result<HttpResponse, ApiError> {
    warn!("Forbidden: {}", message);
    let error: ApiError = AuthError::forbidden(message).into();
    // Error required for triggering middleware rollback
    Ok(HttpResponse::from_error(error.into())
        .into_builder()
        .status(StatusCode::FORBIDDEN)
        .json(json!({ "error": message.to_string() })))
}

pub fn no_content() -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::new(StatusCode::NO_CONTENT))
}
