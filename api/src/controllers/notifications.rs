use crate::auth::user::User as AuthUser;
use crate::database::Connection;
use crate::errors::*;
use crate::helpers::application;
use crate::models::PathParameters;
use actix_web::{web::Path, HttpResponse};
use db::prelude::*;

pub async fn index((connection, auth_user): (Connection, AuthUser)) -> Result<HttpResponse, ApiError> {
    auth_user.requires_scope(Scopes::NotificationRead)?;

    let notifications = Notification::find_for_user(auth_user.id(), connection.get())?;
    Ok(HttpResponse::Ok().json(json!({ "data": notifications })))
}

pub async fn mark_read(
    (connection, path, auth_user): (Connection, Path<PathParameters>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    auth_user.requires_scope(Scopes::NotificationRead)?;

    let connection = connection.get();
    let notification = Notification::find(path.id, connection)?;
    if notification.user_id != auth_user.id() {
        return application::forbidden("Notification belongs to another user");
    }

    let notification = notification.mark_read(connection)?;
    Ok(HttpResponse::Ok().json(notification))
}

pub async fn mark_all_read((connection, auth_user): (Connection, AuthUser)) -> Result<HttpResponse, ApiError> {
    auth_user.requires_scope(Scopes::NotificationRead)?;

    let updated = Notification::mark_all_read(auth_user.id(), connection.get())?;
    Ok(HttpResponse::Ok().json(json!({ "updated": updated })))
}
