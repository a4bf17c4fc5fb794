use crate::auth::user::User as AuthUser;
use crate::database::{Connection, ReadonlyConnection};
use crate::errors::*;
use crate::helpers::application;
use crate::models::{EventListItem, EventShowResult, PathParameters};
use crate::server::AppState;
use actix_web::{
    web::{Data, Json, Path, Query},
    HttpResponse,
};
use chrono::NaiveDateTime;
use db::prelude::*;
use log::Level;

#[derive(Deserialize)]
pub struct SearchParameters {
    pub query: Option<String>,
}

#[derive(Deserialize, Serialize)]
pub struct CreateEventRequest {
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub event_start: NaiveDateTime,
    pub timezone: String,
    pub min_age: Option<i32>,
    pub promo_image_url: Option<String>,
}

/// Public listing, served from the replica pool. Freshly deleted events that
/// the replica still returns are masked by the tombstone set before the rows
/// are reshaped for display.
pub async fn index(
    (state, connection, parameters): (Data<AppState>, ReadonlyConnection, Query<SearchParameters>),
) -> Result<HttpResponse, ApiError> {
    let events = Event::search(parameters.query.as_deref(), connection.get())?;
    let events = state.tombstones().filter_deleted(events, |event| event.id);

    let results: Vec<EventListItem> = events.iter().map(EventListItem::from).collect();
    Ok(HttpResponse::Ok().json(json!({ "data": results })))
}

pub async fn show(
    (state, connection, path): (Data<AppState>, ReadonlyConnection, Path<PathParameters>),
) -> Result<HttpResponse, ApiError> {
    if state.tombstones().contains(path.id) {
        return Err(NotFoundError {}.into());
    }

    let connection = connection.get();
    let event = Event::find(path.id, connection)?;
    Ok(HttpResponse::Ok().json(EventShowResult::from_event(&event, connection)?))
}

/// Producer console listing: the user's own events in every status.
pub async fn owned((connection, auth_user): (Connection, AuthUser)) -> Result<HttpResponse, ApiError> {
    auth_user.requires_scope(Scopes::EventWrite)?;

    let events = Event::find_for_user(auth_user.id(), connection.get())?;
    let results: Vec<EventListItem> = events.iter().map(EventListItem::from).collect();
    Ok(HttpResponse::Ok().json(json!({ "data": results })))
}

pub async fn create(
    (connection, create_request, auth_user): (Connection, Json<CreateEventRequest>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    auth_user.requires_scope(Scopes::EventWrite)?;

    let create_request = create_request.into_inner();
    let mut new_event = Event::create(
        auth_user.id(),
        &create_request.name,
        create_request.event_start,
        &create_request.timezone,
    );
    new_event.description = create_request.description;
    new_event.location = create_request.location;
    new_event.min_age = create_request.min_age;
    new_event.promo_image_url = create_request.promo_image_url;

    let event = new_event.commit(connection.get())?;
    Ok(HttpResponse::Created().json(EventShowResult::from_event(&event, connection.get())?))
}

pub async fn update(
    (connection, path, attributes, auth_user): (
        Connection,
        Path<PathParameters>,
        Json<EventEditableAttributes>,
        AuthUser,
    ),
) -> Result<HttpResponse, ApiError> {
    auth_user.requires_scope(Scopes::EventWrite)?;

    let connection = connection.get();
    let event = Event::find(path.id, connection)?;
    if event.user_id != auth_user.id() && !auth_user.user.is_admin() {
        return application::forbidden("Event belongs to another producer");
    }

    let updated = event.update(&attributes, connection)?;
    Ok(HttpResponse::Ok().json(EventShowResult::from_event(&updated, connection)?))
}

pub async fn pause(
    (state, connection, path, auth_user): (Data<AppState>, Connection, Path<PathParameters>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    transition(&state, &connection, path.id, &auth_user, Event::pause)
}

pub async fn resume(
    (state, connection, path, auth_user): (Data<AppState>, Connection, Path<PathParameters>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    transition(&state, &connection, path.id, &auth_user, Event::resume)
}

pub async fn cancel(
    (state, connection, path, auth_user): (Data<AppState>, Connection, Path<PathParameters>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    transition(&state, &connection, path.id, &auth_user, Event::cancel)
}

/// Hard delete with manual cascade, then a tombstone so replica-served list
/// reads stop returning the event immediately.
pub async fn destroy(
    (state, connection, path, auth_user): (Data<AppState>, Connection, Path<PathParameters>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    auth_user.requires_scope(Scopes::EventDelete)?;

    let _guard = match state.in_flight.begin(path.id) {
        Some(guard) => guard,
        None => return Err(operation_in_flight_error(path.id)),
    };

    let connection = connection.get();
    let event = Event::find(path.id, connection)?;
    event.destroy(connection)?;

    // Best effort: a failed tombstone write only means the mask falls back
    // to replica catch-up
    if let Err(e) = state.tombstones().add(path.id) {
        jlog!(Level::Warn, "vamos_api::events", "Could not tombstone deleted event", {
            "event_id": path.id,
            "error": e.to_string()
        });
    }

    application::no_content()
}

fn transition<F>(
    state: &AppState,
    connection: &Connection,
    event_id: i64,
    auth_user: &AuthUser,
    apply: F,
) -> Result<HttpResponse, ApiError>
where
    F: Fn(&Event, &diesel::PgConnection) -> Result<Event, DatabaseError>,
{
    auth_user.requires_scope(Scopes::EventWrite)?;

    let _guard = match state.in_flight.begin(event_id) {
        Some(guard) => guard,
        None => return Err(operation_in_flight_error(event_id)),
    };

    let connection = connection.get();
    let event = Event::find(event_id, connection)?;
    if event.user_id != auth_user.id() && !auth_user.user.is_admin() {
        return application::forbidden("Event belongs to another producer");
    }

    let event = apply(&event, connection)?;
    Ok(HttpResponse::Ok().json(EventShowResult::from_event(&event, connection)?))
}

fn operation_in_flight_error(event_id: i64) -> ApiError {
    DatabaseError::new(
        ErrorCode::ConcurrencyError,
        Some(format!("Another operation is already in flight for event {}", event_id)),
    )
    .into()
}
