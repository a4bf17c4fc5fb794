use crate::auth::claims::RefreshToken;
use crate::auth::TokenResponse;
use crate::database::Connection;
use crate::errors::*;
use crate::jwt::{decode, Validation};
use crate::server::AppState;
use actix_web::{
    web::{Data, Json},
    HttpResponse,
};
use db::prelude::*;

#[derive(Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Deserialize)]
pub struct RefreshRequest {
    refresh_token: String,
}

impl LoginRequest {
    pub fn new(email: &str, password: &str) -> Self {
        LoginRequest {
            email: String::from(email),
            password: String::from(password),
        }
    }
}

impl RefreshRequest {
    pub fn new(refresh_token: &str) -> Self {
        RefreshRequest {
            refresh_token: String::from(refresh_token),
        }
    }
}

pub async fn token(
    (state, connection, login_request): (Data<AppState>, Connection, Json<LoginRequest>),
) -> Result<HttpResponse, ApiError> {
    // Generic messaging to prevent exposing user is member of system
    let login_failure_messaging = "Email or password incorrect";

    let user = match User::find_by_email(&login_request.email, connection.get()) {
        Ok(u) => u,
        Err(_e) => return Err(AuthError::unauthorized(login_failure_messaging).into()),
    };

    if !user.check_password(&login_request.password) {
        return Err(AuthError::unauthorized(login_failure_messaging).into());
    }

    let response = TokenResponse::create_from_user(
        &state.config.token_secret,
        &state.config.token_issuer,
        state.config.jwt_expiry_time_mins,
        &user,
    )?;
    Ok(HttpResponse::Ok().json(response))
}

pub async fn token_refresh(
    (state, connection, refresh_request): (Data<AppState>, Connection, Json<RefreshRequest>),
) -> Result<HttpResponse, ApiError> {
    let mut validation = Validation::default();
    validation.validate_exp = false;
    let token = decode::<RefreshToken>(
        &refresh_request.refresh_token,
        state.config.token_secret.as_bytes(),
        &validation,
    )?;
    let user = User::find(token.claims.get_id()?, connection.get())?;

    let response = TokenResponse::create_from_refresh_token(
        &state.config.token_secret,
        &state.config.token_issuer,
        state.config.jwt_expiry_time_mins,
        &user,
        &refresh_request.refresh_token,
    )?;
    Ok(HttpResponse::Ok().json(response))
}
