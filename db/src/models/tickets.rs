use chrono::NaiveDateTime;
use diesel;
use diesel::dsl;
use diesel::prelude::*;
use models::*;
use schema::tickets;
use utils::errors::{ConvertToDatabaseError, DatabaseError, ErrorCode};
use uuid::Uuid;

#[derive(Associations, Identifiable, Queryable, Clone, Serialize, Deserialize, PartialEq, Debug)]
#[belongs_to(Order)]
#[belongs_to(TicketType)]
#[belongs_to(User)]
#[table_name = "tickets"]
pub struct Ticket {
    pub id: i64,
    pub order_id: i64,
    pub ticket_type_id: i64,
    pub user_id: Uuid,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[table_name = "tickets"]
pub struct NewTicket {
    pub order_id: i64,
    pub ticket_type_id: i64,
    pub user_id: Uuid,
}

impl NewTicket {
    pub fn commit(&self, conn: &PgConnection) -> Result<Ticket, DatabaseError> {
        diesel::insert_into(tickets::table)
            .values(self)
            .get_result(conn)
            .to_db_error(ErrorCode::InsertError, "Could not create ticket")
    }
}

impl Ticket {
    pub fn create(order_id: i64, ticket_type_id: i64, user_id: Uuid) -> NewTicket {
        NewTicket {
            order_id,
            ticket_type_id,
            user_id,
        }
    }

    pub fn find_for_order(order_id: i64, conn: &PgConnection) -> Result<Vec<Ticket>, DatabaseError> {
        tickets::table
            .filter(tickets::order_id.eq(order_id))
            .order_by(tickets::id)
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load tickets for order")
    }

    pub fn count_for_ticket_type(ticket_type_id: i64, conn: &PgConnection) -> Result<i64, DatabaseError> {
        tickets::table
            .filter(tickets::ticket_type_id.eq(ticket_type_id))
            .select(dsl::count(tickets::id))
            .first(conn)
            .to_db_error(ErrorCode::QueryError, "Could not count tickets for ticket type")
    }
}
