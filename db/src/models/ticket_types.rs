use chrono::NaiveDateTime;
use diesel;
use diesel::expression::dsl;
use diesel::prelude::*;
use models::*;
use schema::ticket_types;
use serde_with::rust::double_option;
use utils::errors::{ConvertToDatabaseError, DatabaseError, ErrorCode};
use validator::Validate;
use validators;

#[derive(Identifiable, Associations, Queryable, Clone, Serialize, Deserialize, PartialEq, Debug)]
#[belongs_to(Event)]
#[table_name = "ticket_types"]
pub struct TicketType {
    pub id: i64,
    pub event_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price_in_cents: i64,
    pub quantity: i32,
    pub max_per_order: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Deserialize, Validate)]
#[table_name = "ticket_types"]
pub struct NewTicketType {
    pub event_id: i64,
    #[validate(length(min = "1", max = "255", message = "Name must be between 1 and 255 characters long"))]
    pub name: String,
    pub description: Option<String>,
    pub price_in_cents: i64,
    pub quantity: i32,
    pub max_per_order: i32,
}

#[derive(AsChangeset, Default, Deserialize, Validate)]
#[table_name = "ticket_types"]
pub struct TicketTypeEditableAttributes {
    #[validate(length(min = "1", max = "255", message = "Name must be between 1 and 255 characters long"))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option::deserialize")]
    pub description: Option<Option<String>>,
    pub price_in_cents: Option<i64>,
    pub quantity: Option<i32>,
    pub max_per_order: Option<i32>,
}

impl NewTicketType {
    pub fn commit(self, conn: &PgConnection) -> Result<TicketType, DatabaseError> {
        self.validate_record()?;
        diesel::insert_into(ticket_types::table)
            .values(self)
            .get_result(conn)
            .to_db_error(ErrorCode::InsertError, "Could not create ticket type")
    }

    fn validate_record(&self) -> Result<(), DatabaseError> {
        let mut validation_errors = self.validate();
        validation_errors = validators::append_validation_error(
            validation_errors,
            "price_in_cents",
            validators::validate_greater_than_or_equal(
                self.price_in_cents,
                0,
                "price_negative",
                "Price cannot be negative",
            ),
        );
        validation_errors = validators::append_validation_error(
            validation_errors,
            "quantity",
            validators::validate_greater_than_or_equal(
                self.quantity,
                0,
                "quantity_negative",
                "Quantity cannot be negative",
            ),
        );
        validation_errors = validators::append_validation_error(
            validation_errors,
            "max_per_order",
            validators::validate_greater_than_or_equal(
                self.max_per_order,
                1,
                "max_per_order_invalid",
                "Max per order must be at least one",
            ),
        );
        Ok(validation_errors?)
    }
}

impl TicketType {
    pub fn create(
        event_id: i64,
        name: String,
        description: Option<String>,
        price_in_cents: i64,
        quantity: i32,
        max_per_order: i32,
    ) -> NewTicketType {
        NewTicketType {
            event_id,
            name,
            description,
            price_in_cents,
            quantity,
            max_per_order,
        }
    }

    pub fn find(id: i64, conn: &PgConnection) -> Result<TicketType, DatabaseError> {
        ticket_types::table
            .filter(ticket_types::id.eq(id))
            .get_result(conn)
            .to_db_error(ErrorCode::QueryError, "Could not find ticket type")
    }

    pub fn find_by_event_id(event_id: i64, conn: &PgConnection) -> Result<Vec<TicketType>, DatabaseError> {
        ticket_types::table
            .filter(ticket_types::event_id.eq(event_id))
            .order_by(ticket_types::name)
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load ticket types for event")
    }

    pub fn update(
        &self,
        attributes: TicketTypeEditableAttributes,
        conn: &PgConnection,
    ) -> Result<TicketType, DatabaseError> {
        let mut validation_errors = attributes.validate();
        if let Some(price_in_cents) = attributes.price_in_cents {
            validation_errors = validators::append_validation_error(
                validation_errors,
                "price_in_cents",
                validators::validate_greater_than_or_equal(
                    price_in_cents,
                    0,
                    "price_negative",
                    "Price cannot be negative",
                ),
            );
        }
        if let Some(max_per_order) = attributes.max_per_order {
            validation_errors = validators::append_validation_error(
                validation_errors,
                "max_per_order",
                validators::validate_greater_than_or_equal(
                    max_per_order,
                    1,
                    "max_per_order_invalid",
                    "Max per order must be at least one",
                ),
            );
        }
        validation_errors?;

        diesel::update(self)
            .set((attributes, ticket_types::updated_at.eq(dsl::now)))
            .get_result(conn)
            .to_db_error(ErrorCode::UpdateError, "Could not update ticket type")
    }

    pub fn event(&self, conn: &PgConnection) -> Result<Event, DatabaseError> {
        Event::find(self.event_id, conn)
    }

    pub fn sold_count(&self, conn: &PgConnection) -> Result<i64, DatabaseError> {
        Ticket::count_for_ticket_type(self.id, conn)
    }

    /// Tickets still purchasable: quantity on the type minus admissions sold.
    pub fn available(&self, conn: &PgConnection) -> Result<i64, DatabaseError> {
        Ok(self.quantity as i64 - self.sold_count(conn)?)
    }

    pub fn eligible_for_deletion(&self, conn: &PgConnection) -> Result<bool, DatabaseError> {
        Ok(self.sold_count(conn)? == 0)
    }

    pub fn destroy(self, conn: &PgConnection) -> Result<(), DatabaseError> {
        if !self.eligible_for_deletion(conn)? {
            return DatabaseError::business_process_error(
                "Ticket type is ineligible for deletion because tickets have been sold against it",
            );
        }

        diesel::delete(&self)
            .execute(conn)
            .to_db_error(ErrorCode::DeleteError, "Could not delete ticket type")?;
        Ok(())
    }
}
