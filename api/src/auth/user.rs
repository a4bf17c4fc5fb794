use crate::errors::*;
use actix_web::HttpRequest;
use db::prelude::User as DbUser;
use db::prelude::{DisplayUser, ForDisplay, Scopes};
use log::Level::Warn;
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct User {
    pub user: DbUser,
    pub scopes: Vec<String>,
    pub ip_address: Option<String>,
    pub uri: String,
    pub method: String,
}

impl User {
    pub fn new(user: DbUser, request: &HttpRequest, scopes: Vec<String>) -> User {
        User {
            user,
            scopes,
            ip_address: request.connection_info().remote().map(|i| i.to_string()),
            uri: request.uri().to_string(),
            method: request.method().to_string(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.user.id
    }

    pub fn email(&self) -> String {
        self.user.email.clone()
    }

    pub fn has_scope(&self, scope: Scopes) -> bool {
        self.scopes.contains(&scope.to_string())
    }

    pub fn requires_scope(&self, scope: Scopes) -> Result<(), ApiError> {
        if self.has_scope(scope) {
            return Ok(());
        }
        let mut logging_data = HashMap::new();
        logging_data.insert("accessed_scope", json!(scope.to_string()));
        logging_data.insert("scopes", json!(self.scopes));
        self.log_unauthorized_access_attempt(logging_data);
        Err(AuthError::new(
            AuthErrorType::Unauthorized,
            "User does not have the required permissions".to_string(),
        )
        .into())
    }

    pub fn for_display(self) -> Result<DisplayUser, ApiError> {
        Ok(self.user.for_display()?)
    }

    pub fn log_unauthorized_access_attempt(&self, mut logging_data: HashMap<&'static str, Value>) {
        logging_data.insert("user_id", json!(self.id()));
        logging_data.insert("user_name", json!(self.user.full_name()));
        logging_data.insert("ip_address", json!(self.ip_address));
        logging_data.insert("url", json!(self.uri));
        logging_data.insert("method", json!(self.method));
        jlog!(Warn, "Unauthorized access attempt", logging_data);
    }
}
