use chrono::prelude::*;
use chrono_tz::Tz;
use diesel;
use diesel::expression::dsl;
use diesel::prelude::*;
use log::Level;
use models::*;
use schema::{events, favorites, notifications, order_items, orders, ticket_types, tickets};
use serde_with::rust::double_option;
use std::borrow::Cow;
use utils::errors::*;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};
use validators::{append_validation_error, create_validation_error};

#[derive(Associations, Identifiable, Queryable, Clone, Serialize, Deserialize, PartialEq, Debug)]
#[belongs_to(User)]
#[table_name = "events"]
pub struct Event {
    pub id: i64,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub event_start: NaiveDateTime,
    pub timezone: String,
    pub min_age: Option<i32>,
    pub promo_image_url: Option<String>,
    pub status: EventStatus,
    pub cancelled_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Serialize, Deserialize, Validate, Clone)]
#[table_name = "events"]
pub struct NewEvent {
    pub user_id: Uuid,
    #[validate(length(min = "1", max = "255", message = "Name must be between 1 and 255 characters long"))]
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub event_start: NaiveDateTime,
    pub timezone: String,
    pub min_age: Option<i32>,
    #[validate(url(message = "Promo image URL is invalid"))]
    pub promo_image_url: Option<String>,
    #[serde(default = "NewEvent::default_status", skip_deserializing)]
    pub status: EventStatus,
}

#[derive(AsChangeset, Default, Deserialize, Validate, Serialize)]
#[table_name = "events"]
pub struct EventEditableAttributes {
    #[validate(length(min = "1", max = "255", message = "Name must be between 1 and 255 characters long"))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option::deserialize")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option::deserialize")]
    pub location: Option<Option<String>>,
    pub event_start: Option<NaiveDateTime>,
    pub timezone: Option<String>,
    #[serde(default, deserialize_with = "double_option::deserialize")]
    pub min_age: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option::deserialize")]
    pub promo_image_url: Option<Option<String>>,
}

impl NewEvent {
    pub fn commit(&self, conn: &PgConnection) -> Result<Event, DatabaseError> {
        self.validate_record()?;

        diesel::insert_into(events::table)
            .values(self)
            .get_result(conn)
            .to_db_error(ErrorCode::InsertError, "Could not create new event")
    }

    pub fn default_status() -> EventStatus {
        EventStatus::Active
    }

    fn validate_record(&self) -> Result<(), DatabaseError> {
        let mut validation_errors = self.validate();
        validation_errors =
            append_validation_error(validation_errors, "timezone", Event::timezone_valid(&self.timezone));
        Ok(validation_errors?)
    }
}

impl Event {
    pub fn create(
        user_id: Uuid,
        name: &str,
        event_start: NaiveDateTime,
        timezone: &str,
    ) -> NewEvent {
        NewEvent {
            user_id,
            name: name.into(),
            description: None,
            location: None,
            event_start,
            timezone: timezone.into(),
            min_age: None,
            promo_image_url: None,
            status: NewEvent::default_status(),
        }
    }

    pub fn find(id: i64, conn: &PgConnection) -> Result<Event, DatabaseError> {
        events::table
            .find(id)
            .first::<Event>(conn)
            .to_db_error(ErrorCode::QueryError, "Error loading event")
    }

    pub fn find_by_ids(ids: &[i64], conn: &PgConnection) -> Result<Vec<Event>, DatabaseError> {
        events::table
            .filter(events::id.eq_any(ids))
            .order_by(events::event_start.asc())
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Error loading events")
    }

    /// The public listing: active and paused events, soonest first, optionally
    /// filtered on name.
    pub fn search(query: Option<&str>, conn: &PgConnection) -> Result<Vec<Event>, DatabaseError> {
        let mut events = events::table
            .filter(events::status.ne(EventStatus::Cancelled))
            .order_by(events::event_start.asc())
            .into_boxed();

        if let Some(query) = query {
            events = events.filter(events::name.ilike(format!("%{}%", query.trim())));
        }

        events
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Unable to load all events")
    }

    /// The producer console listing: every event the user owns, regardless of
    /// status, newest first.
    pub fn find_for_user(user_id: Uuid, conn: &PgConnection) -> Result<Vec<Event>, DatabaseError> {
        events::table
            .filter(events::user_id.eq(user_id))
            .order_by((events::created_at.desc(), events::id.desc()))
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Unable to load events for user")
    }

    pub fn update(&self, attributes: &EventEditableAttributes, conn: &PgConnection) -> Result<Event, DatabaseError> {
        let mut validation_errors = attributes.validate();
        if let Some(ref timezone) = attributes.timezone {
            validation_errors =
                append_validation_error(validation_errors, "timezone", Event::timezone_valid(timezone));
        }
        if let Some(Some(ref promo_image_url)) = attributes.promo_image_url {
            validation_errors =
                append_validation_error(validation_errors, "promo_image_url", Event::url_valid(promo_image_url));
        }
        validation_errors?;

        diesel::update(self)
            .set((attributes, events::updated_at.eq(dsl::now)))
            .get_result(conn)
            .to_db_error(ErrorCode::UpdateError, "Error updating event")
    }

    pub fn pause(&self, conn: &PgConnection) -> Result<Event, DatabaseError> {
        self.transition(EventStatus::Active, EventStatus::Paused, conn)
    }

    pub fn resume(&self, conn: &PgConnection) -> Result<Event, DatabaseError> {
        self.transition(EventStatus::Paused, EventStatus::Active, conn)
    }

    /// Terminal transition. Valid from `Active` or `Paused`; every user who
    /// favorited the event is notified.
    pub fn cancel(&self, conn: &PgConnection) -> Result<Event, DatabaseError> {
        if self.status == EventStatus::Cancelled {
            let mut validation_error =
                create_validation_error("event_already_cancelled", "Event has already been cancelled");
            validation_error.add_param(Cow::from("event_id"), &self.id);
            let mut errors = ValidationErrors::new();
            errors.add("status", validation_error);
            return Err(errors.into());
        }

        // The current status in the WHERE clause makes racing transitions
        // resolve to exactly one winner
        let rows_affected = diesel::update(
            events::table
                .filter(events::id.eq(self.id))
                .filter(events::status.eq(self.status)),
        )
        .set((
            events::status.eq(EventStatus::Cancelled),
            events::cancelled_at.eq(dsl::now.nullable()),
            events::updated_at.eq(dsl::now),
        ))
        .execute(conn)
        .to_db_error(ErrorCode::UpdateError, "Could not cancel event")?;

        if rows_affected != 1 {
            return DatabaseError::concurrency_error(
                "Could not cancel event because it was changed by another request",
            );
        }

        for user_id in Favorite::user_ids_for_event(self.id, conn)? {
            Notification::create(
                user_id,
                Some(self.id),
                NotificationKind::EventCancelled,
                &format!("Event '{}' has been cancelled", self.name),
            )
            .commit(conn)?;
        }

        jlog!(Level::Info, "vamos_db::events", "Event cancelled", { "event_id": self.id });

        Event::find(self.id, conn)
    }

    fn transition(&self, from: EventStatus, to: EventStatus, conn: &PgConnection) -> Result<Event, DatabaseError> {
        if self.status != from {
            let mut validation_error = create_validation_error(
                "invalid_status_transition",
                "Event status does not allow this transition",
            );
            validation_error.add_param(Cow::from("event_id"), &self.id);
            validation_error.add_param(Cow::from("status"), &self.status.to_string());
            let mut errors = ValidationErrors::new();
            errors.add("status", validation_error);
            return Err(errors.into());
        }

        let rows_affected = diesel::update(
            events::table
                .filter(events::id.eq(self.id))
                .filter(events::status.eq(from)),
        )
        .set((events::status.eq(to), events::updated_at.eq(dsl::now)))
        .execute(conn)
        .to_db_error(ErrorCode::UpdateError, "Could not update event status")?;

        if rows_affected != 1 {
            return DatabaseError::concurrency_error(
                "Could not update event status because it was changed by another request",
            );
        }

        Event::find(self.id, conn)
    }

    /// Hard delete with the cascade performed in application code, children
    /// first: notifications, favorites, tickets, order items, orders touching
    /// this event's ticket types, the ticket types, then the event row.
    pub fn destroy(self, conn: &PgConnection) -> Result<(), DatabaseError> {
        let ticket_type_ids: Vec<i64> = ticket_types::table
            .filter(ticket_types::event_id.eq(self.id))
            .select(ticket_types::id)
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load ticket types for event")?;

        let order_ids: Vec<i64> = order_items::table
            .filter(order_items::ticket_type_id.eq_any(&ticket_type_ids))
            .select(order_items::order_id)
            .distinct()
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load orders for event")?;

        diesel::delete(notifications::table.filter(notifications::event_id.eq(self.id)))
            .execute(conn)
            .to_db_error(ErrorCode::DeleteError, "Could not delete notifications for event")?;

        diesel::delete(favorites::table.filter(favorites::event_id.eq(self.id)))
            .execute(conn)
            .to_db_error(ErrorCode::DeleteError, "Could not delete favorites for event")?;

        diesel::delete(tickets::table.filter(tickets::ticket_type_id.eq_any(&ticket_type_ids)))
            .execute(conn)
            .to_db_error(ErrorCode::DeleteError, "Could not delete tickets for event")?;

        diesel::delete(order_items::table.filter(order_items::order_id.eq_any(&order_ids)))
            .execute(conn)
            .to_db_error(ErrorCode::DeleteError, "Could not delete order items for event")?;

        diesel::delete(orders::table.filter(orders::id.eq_any(&order_ids)))
            .execute(conn)
            .to_db_error(ErrorCode::DeleteError, "Could not delete orders for event")?;

        diesel::delete(ticket_types::table.filter(ticket_types::event_id.eq(self.id)))
            .execute(conn)
            .to_db_error(ErrorCode::DeleteError, "Could not delete ticket types for event")?;

        diesel::delete(&self)
            .execute(conn)
            .to_db_error(ErrorCode::DeleteError, "Could not delete event")?;

        jlog!(Level::Info, "vamos_db::events", "Event deleted", { "event_id": self.id });

        Ok(())
    }

    pub fn ticket_types(&self, conn: &PgConnection) -> Result<Vec<TicketType>, DatabaseError> {
        TicketType::find_by_event_id(self.id, conn)
    }

    pub fn add_ticket_type(
        &self,
        name: String,
        description: Option<String>,
        price_in_cents: i64,
        quantity: i32,
        max_per_order: i32,
        conn: &PgConnection,
    ) -> Result<TicketType, DatabaseError> {
        TicketType::create(self.id, name, description, price_in_cents, quantity, max_per_order).commit(conn)
    }

    pub fn localized_start(&self) -> Option<DateTime<Tz>> {
        Event::localized_time(self.event_start, &self.timezone)
    }

    /// Event start formatted to rfc2822 in the event's own timezone.
    pub fn localized_start_string(&self) -> Option<String> {
        self.localized_start().map(|s| s.to_rfc2822())
    }

    pub fn localized_time(utc_datetime: NaiveDateTime, timezone_string: &str) -> Option<DateTime<Tz>> {
        let tz: Tz = match timezone_string.parse() {
            Ok(t) => t,
            Err(e) => {
                jlog!(Level::Error, "vamos_db::events", "Could not parse timezone", {
                    "timezone": timezone_string,
                    "error": e
                });
                return None;
            }
        };
        let utc = chrono_tz::UTC
            .ymd(utc_datetime.year(), utc_datetime.month(), utc_datetime.day())
            .and_hms(utc_datetime.hour(), utc_datetime.minute(), utc_datetime.second());
        Some(utc.with_timezone(&tz))
    }

    fn url_valid(url: &str) -> Result<(), validator::ValidationError> {
        if !validator::validate_url(url) {
            let mut validation_error = create_validation_error("url", "Promo image URL is invalid");
            validation_error.add_param(Cow::from("promo_image_url"), &url);
            return Err(validation_error);
        }
        Ok(())
    }

    fn timezone_valid(timezone: &str) -> Result<(), validator::ValidationError> {
        if timezone.parse::<Tz>().is_err() {
            let mut validation_error = create_validation_error("timezone_invalid", "Timezone is not a valid IANA name");
            validation_error.add_param(Cow::from("timezone"), &timezone);
            return Err(validation_error);
        }
        Ok(())
    }
}
