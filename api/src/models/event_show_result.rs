use crate::models::{placeholder_image_url, DisplayTicketType};
use chrono::NaiveDateTime;
use db::prelude::*;
use diesel::PgConnection;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct EventShowResult {
    pub id: i64,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub location: String,
    pub event_start: NaiveDateTime,
    pub localized_start: Option<String>,
    pub timezone: String,
    pub min_age: Option<i32>,
    pub promo_image_url: String,
    pub status: EventStatus,
    pub cancelled_at: Option<NaiveDateTime>,
    pub ticket_types: Vec<DisplayTicketType>,
    pub updated_at: NaiveDateTime,
}

impl EventShowResult {
    pub fn from_event(event: &Event, conn: &PgConnection) -> Result<EventShowResult, DatabaseError> {
        let ticket_types = event
            .ticket_types(conn)?
            .iter()
            .map(|ticket_type| DisplayTicketType::from_ticket_type(ticket_type, conn))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(EventShowResult {
            id: event.id,
            user_id: event.user_id,
            name: event.name.clone(),
            description: event.description.clone().unwrap_or_default(),
            location: event.location.clone().unwrap_or_default(),
            event_start: event.event_start,
            localized_start: event.localized_start_string(),
            timezone: event.timezone.clone(),
            min_age: event.min_age,
            promo_image_url: event
                .promo_image_url
                .clone()
                .unwrap_or_else(|| placeholder_image_url(event.id)),
            status: event.status,
            cancelled_at: event.cancelled_at,
            ticket_types,
            updated_at: event.updated_at,
        })
    }
}
