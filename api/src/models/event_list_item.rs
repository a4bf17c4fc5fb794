use chrono::NaiveDateTime;
use db::prelude::*;
use uuid::Uuid;

/// Row shape for the public and producer event listings. Reshaping is pure:
/// optional text fields default to empty strings and a missing banner is
/// replaced with a placeholder seeded by the event id, so the same row always
/// formats to the same item.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EventListItem {
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
}

pub fn placeholder_image_url(event_id: i64) -> String {
    format!("https://picsum.photos/seed/vamos-event-{}/800/450", event_id)
}

impl From<&Event> for EventListItem {
    fn from(event: &Event) -> Self {
        EventListItem {
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
        }
    }
}
