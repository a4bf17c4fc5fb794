use crate::auth::claims::{AccessToken, RefreshToken};
use crate::errors::ApiError;
use crate::jwt::{encode, Header};
use db::prelude::User;

#[derive(Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
}

impl TokenResponse {
    pub fn create_from_user(
        token_secret: &str,
        token_issuer: &str,
        expiry_in_minutes: i64,
        user: &User,
    ) -> Result<Self, ApiError> {
        let access_token_claims = AccessToken::new(
            user.id,
            token_issuer.to_string(),
            expiry_in_minutes,
            user.get_global_scopes(),
        );
        let refresh_token_claims = RefreshToken::new(user.id, token_issuer.to_string());

        Ok(TokenResponse {
            access_token: encode(&Header::default(), &access_token_claims, token_secret.as_bytes())?,
            refresh_token: encode(&Header::default(), &refresh_token_claims, token_secret.as_bytes())?,
        })
    }

    pub fn create_from_refresh_token(
        token_secret: &str,
        token_issuer: &str,
        expiry_in_minutes: i64,
        user: &User,
        signed_refresh_token: &str,
    ) -> Result<Self, ApiError> {
        let access_token_claims = AccessToken::new(
            user.id,
            token_issuer.to_string(),
            expiry_in_minutes,
            user.get_global_scopes(),
        );

        Ok(TokenResponse {
            access_token: encode(&Header::default(), &access_token_claims, token_secret.as_bytes())?,
            refresh_token: signed_refresh_token.to_string(),
        })
    }
}
