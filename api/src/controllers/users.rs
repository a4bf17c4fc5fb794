use crate::auth::user::User as AuthUser;
use crate::database::{Connection, ReadonlyConnection};
use crate::errors::*;
use crate::models::RegisterRequest;
use actix_web::{
    web::{Json, Query},
    HttpResponse,
};
use db::prelude::*;

#[derive(Deserialize)]
pub struct AvailabilityParameters {
    pub email: Option<String>,
    pub cpf: Option<String>,
}

#[derive(Serialize)]
pub struct AvailabilityResult {
    pub email_available: Option<bool>,
    pub cpf_available: Option<bool>,
}

pub async fn register(
    (connection, register_request): (Connection, Json<RegisterRequest>),
) -> Result<HttpResponse, ApiError> {
    let new_user: NewUser = (&*register_request).into();
    let user = new_user.commit(connection.get())?;
    Ok(HttpResponse::Created().json(user.for_display()?))
}

/// Backs the registration form's debounced uniqueness checks. The check is
/// advisory; the unique indexes still reject a duplicate that registers
/// between this call and the commit.
pub async fn availability(
    (connection, query): (ReadonlyConnection, Query<AvailabilityParameters>),
) -> Result<HttpResponse, ApiError> {
    let connection = connection.get();

    let email_available = match query.email {
        Some(ref email) => Some(User::email_available(email, connection)?),
        None => None,
    };
    let cpf_available = match query.cpf {
        Some(ref cpf) => Some(User::cpf_available(cpf, connection)?),
        None => None,
    };

    Ok(HttpResponse::Ok().json(AvailabilityResult {
        email_available,
        cpf_available,
    }))
}

pub async fn current_user(auth_user: AuthUser) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(auth_user.for_display()?))
}
