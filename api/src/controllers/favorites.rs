use crate::auth::user::User as AuthUser;
use crate::database::Connection;
use crate::errors::*;
use crate::helpers::application;
use crate::models::{EventListItem, PathParameters};
use actix_web::{web::Path, HttpResponse};
use db::prelude::*;

pub async fn add(
    (connection, path, auth_user): (Connection, Path<PathParameters>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    auth_user.requires_scope(Scopes::FavoriteWrite)?;

    let connection = connection.get();
    let event = Event::find(path.id, connection)?;
    let favorite = Favorite::create(event.id, auth_user.id()).commit(connection)?;

    Ok(HttpResponse::Created().json(favorite))
}

pub async fn remove(
    (connection, path, auth_user): (Connection, Path<PathParameters>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    auth_user.requires_scope(Scopes::FavoriteWrite)?;

    Favorite::remove(path.id, auth_user.id(), connection.get())?;
    application::no_content()
}

pub async fn index((connection, auth_user): (Connection, AuthUser)) -> Result<HttpResponse, ApiError> {
    auth_user.requires_scope(Scopes::FavoriteWrite)?;

    let connection = connection.get();
    let favorites = Favorite::find_for_user(auth_user.id(), connection)?;
    let event_ids: Vec<i64> = favorites.iter().map(|favorite| favorite.event_id).collect();
    let events = Event::find_by_ids(&event_ids, connection)?;

    let results: Vec<EventListItem> = events.iter().map(EventListItem::from).collect();
    Ok(HttpResponse::Ok().json(json!({ "data": results })))
}
