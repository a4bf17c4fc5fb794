use crate::auth::user::User as AuthUser;
use crate::database::{Connection, ReadonlyConnection};
use crate::errors::*;
use crate::helpers::application;
use crate::models::{DisplayTicketType, PathParameters};
use actix_web::{
    web::{Json, Path},
    HttpResponse,
};
use db::prelude::*;
use diesel::PgConnection;

#[derive(Deserialize, Serialize)]
pub struct CreateTicketTypeRequest {
    pub name: String,
    pub description: Option<String>,
    pub price_in_cents: i64,
    pub quantity: i32,
    pub max_per_order: i32,
}

pub async fn index(
    (connection, path): (ReadonlyConnection, Path<PathParameters>),
) -> Result<HttpResponse, ApiError> {
    let connection = connection.get();
    let ticket_types = TicketType::find_by_event_id(path.id, connection)?
        .iter()
        .map(|ticket_type| DisplayTicketType::from_ticket_type(ticket_type, connection))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(HttpResponse::Ok().json(json!({ "data": ticket_types })))
}

pub async fn create(
    (connection, create_request, path, auth_user): (
        Connection,
        Json<CreateTicketTypeRequest>,
        Path<PathParameters>,
        AuthUser,
    ),
) -> Result<HttpResponse, ApiError> {
    auth_user.requires_scope(Scopes::TicketTypeWrite)?;

    let connection = connection.get();
    let event = Event::find(path.id, connection)?;
    if let Some(response) = check_ownership(&event, &auth_user)? {
        return Ok(response);
    }

    let create_request = create_request.into_inner();
    let ticket_type = event.add_ticket_type(
        create_request.name,
        create_request.description,
        create_request.price_in_cents,
        create_request.quantity,
        create_request.max_per_order,
        connection,
    )?;

    Ok(HttpResponse::Created().json(DisplayTicketType::from_ticket_type(&ticket_type, connection)?))
}

pub async fn update(
    (connection, path, attributes, auth_user): (
        Connection,
        Path<PathParameters>,
        Json<TicketTypeEditableAttributes>,
        AuthUser,
    ),
) -> Result<HttpResponse, ApiError> {
    auth_user.requires_scope(Scopes::TicketTypeWrite)?;

    let connection = connection.get();
    let (ticket_type, event) = find_with_event(path.id, connection)?;
    if let Some(response) = check_ownership(&event, &auth_user)? {
        return Ok(response);
    }

    let updated = ticket_type.update(attributes.into_inner(), connection)?;
    Ok(HttpResponse::Ok().json(DisplayTicketType::from_ticket_type(&updated, connection)?))
}

/// Removal is rejected by the model once tickets have been sold against the
/// type.
pub async fn destroy(
    (connection, path, auth_user): (Connection, Path<PathParameters>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    auth_user.requires_scope(Scopes::TicketTypeWrite)?;

    let connection = connection.get();
    let (ticket_type, event) = find_with_event(path.id, connection)?;
    if let Some(response) = check_ownership(&event, &auth_user)? {
        return Ok(response);
    }

    ticket_type.destroy(connection)?;
    application::no_content()
}

fn find_with_event(ticket_type_id: i64, conn: &PgConnection) -> Result<(TicketType, Event), ApiError> {
    let ticket_type = TicketType::find(ticket_type_id, conn)?;
    let event = ticket_type.event(conn)?;
    Ok((ticket_type, event))
}

fn check_ownership(event: &Event, auth_user: &AuthUser) -> Result<Option<HttpResponse>, ApiError> {
    if event.user_id != auth_user.id() && !auth_user.user.is_admin() {
        return application::forbidden("Event belongs to another producer").map(Some);
    }
    Ok(None)
}
