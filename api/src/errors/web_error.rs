use crate::errors::*;
use crate::jwt::errors::{Error as JwtError, ErrorKind as JwtErrorKind};
use actix_web::{http::StatusCode, HttpResponse};
use db::prelude::ErrorCode::ValidationError;
use db::prelude::*;
use diesel::result::Error as DieselError;
use serde_json::Error as SerdeError;
use std::error::Error;
use std::fmt::Debug;
use std::string::ToString;

pub trait ConvertToWebError: Debug + Error + ToString {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
    fn to_response(&self) -> HttpResponse;
}

fn internal_error(message: &str) -> HttpResponse {
    status_code_and_message(StatusCode::INTERNAL_SERVER_ERROR, message)
}

fn status_code_and_message(code: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(code).json(json!({ "error": message.to_string() }))
}

impl ConvertToWebError for dyn Error {
    fn to_response(&self) -> HttpResponse {
        error!("General error: {}", self);
        internal_error("Internal error")
    }
}

impl ConvertToWebError for DieselError {
    fn to_response(&self) -> HttpResponse {
        error!("Diesel error: {}", self);
        internal_error("Internal error")
    }
}

impl ConvertToWebError for r2d2::Error {
    fn to_response(&self) -> HttpResponse {
        error!("R2D2 error: {}", self);
        internal_error("Internal error")
    }
}

impl ConvertToWebError for NotFoundError {
    fn status_code(&self) -> StatusCode {
        StatusCode::NOT_FOUND
    }
    fn to_response(&self) -> HttpResponse {
        status_code_and_message(StatusCode::NOT_FOUND, "Not found")
    }
}

impl ConvertToWebError for JwtError {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }
    fn to_response(&self) -> HttpResponse {
        match self.kind().clone() {
            JwtErrorKind::ExpiredSignature => info!("JWT error: {}", self),
            _ => warn!("JWT error: {}", self),
        }
        status_code_and_message(StatusCode::UNAUTHORIZED, "Invalid token")
    }
}

impl ConvertToWebError for SerdeError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
    fn to_response(&self) -> HttpResponse {
        error!("Serde error: {}", self);
        status_code_and_message(StatusCode::BAD_REQUEST, "Invalid request body")
    }
}

impl ConvertToWebError for uuid::Error {
    fn to_response(&self) -> HttpResponse {
        error!("UUID parse error: {}", self);
        internal_error("Internal error")
    }
}

impl ConvertToWebError for EnumParseError {
    fn to_response(&self) -> HttpResponse {
        error!("Enum parse error: {}", self);
        internal_error("Internal error")
    }
}

impl ConvertToWebError for ApplicationError {
    fn to_response(&self) -> HttpResponse {
        error!("Application error: {}", self.reason);
        internal_error(&self.reason)
    }
}

impl ConvertToWebError for AuthError {
    fn status_code(&self) -> StatusCode {
        match self.error_type {
            AuthErrorType::Forbidden => StatusCode::FORBIDDEN,
            AuthErrorType::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }
    fn to_response(&self) -> HttpResponse {
        status_code_and_message(self.status_code(), &self.reason)
    }
}

impl ConvertToWebError for DatabaseError {
    fn status_code(&self) -> StatusCode {
        match self.code {
            1000 | 1100 => StatusCode::BAD_REQUEST,
            2000 => StatusCode::NOT_FOUND,
            // Duplicate keys and lost status races both surface as conflicts
            3400 | 7100 => StatusCode::CONFLICT,
            6000 => StatusCode::FORBIDDEN,
            7000 | 7200 => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
    fn to_response(&self) -> HttpResponse {
        let message = match self.code {
            1000 => "Invalid input",
            1100 => "Missing input",
            2000 => "No results",
            3000 => "Query error",
            3100 => "Could not insert record",
            3200 => "Could not update record",
            3300 => "Could not delete record",
            3400 => "Duplicate record exists",
            4000 => "Connection error",
            7000 => self.cause.as_ref().map(|s| s.as_str()).unwrap_or("Unknown Cause"),
            7100 => "The record is being changed by another request, try again",
            7200 => match &self.error_code {
                ValidationError { errors } => {
                    return HttpResponse::UnprocessableEntity()
                        .json(json!({"error": "Validation error".to_string(), "fields": errors}))
                }
                _ => "Validation error",
            },
            5000 | 7300 => "Internal error",
            _ => "Unknown error",
        };
        status_code_and_message(self.status_code(), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use db::prelude::*;

    #[test]
    fn database_error_status_codes() {
        let not_found = DatabaseError::new(ErrorCode::NoResults, None);
        assert_eq!(StatusCode::NOT_FOUND, ConvertToWebError::status_code(&not_found));

        let conflict = DatabaseError::new(ErrorCode::DuplicateKeyError, None);
        assert_eq!(StatusCode::CONFLICT, ConvertToWebError::status_code(&conflict));

        let race = DatabaseError::new(ErrorCode::ConcurrencyError, None);
        assert_eq!(StatusCode::CONFLICT, ConvertToWebError::status_code(&race));

        let business = DatabaseError::new(ErrorCode::BusinessProcessError, None);
        assert_eq!(
            StatusCode::UNPROCESSABLE_ENTITY,
            ConvertToWebError::status_code(&business)
        );

        let connection = DatabaseError::new(ErrorCode::ConnectionError, None);
        assert_eq!(
            StatusCode::INTERNAL_SERVER_ERROR,
            ConvertToWebError::status_code(&connection)
        );
    }

    #[test]
    fn auth_error_status_codes() {
        assert_eq!(
            StatusCode::UNAUTHORIZED,
            ConvertToWebError::status_code(&AuthError::unauthorized("nope"))
        );
        assert_eq!(
            StatusCode::FORBIDDEN,
            ConvertToWebError::status_code(&AuthError::forbidden("nope"))
        );
    }
}
