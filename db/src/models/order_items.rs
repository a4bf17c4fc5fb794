use chrono::NaiveDateTime;
use diesel;
use diesel::prelude::*;
use models::*;
use schema::order_items;
use utils::errors::{ConvertToDatabaseError, DatabaseError, ErrorCode};

#[derive(Associations, Identifiable, Queryable, Clone, Serialize, Deserialize, PartialEq, Debug)]
#[belongs_to(Order)]
#[belongs_to(TicketType)]
#[table_name = "order_items"]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub ticket_type_id: i64,
    pub quantity: i32,
    pub unit_price_in_cents: i64,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[table_name = "order_items"]
pub struct NewOrderItem {
    pub order_id: i64,
    pub ticket_type_id: i64,
    pub quantity: i32,
    pub unit_price_in_cents: i64,
}

impl NewOrderItem {
    pub fn commit(&self, conn: &PgConnection) -> Result<OrderItem, DatabaseError> {
        diesel::insert_into(order_items::table)
            .values(self)
            .get_result(conn)
            .to_db_error(ErrorCode::InsertError, "Could not create order item")
    }
}

impl OrderItem {
    pub fn create(order_id: i64, ticket_type_id: i64, quantity: i32, unit_price_in_cents: i64) -> NewOrderItem {
        NewOrderItem {
            order_id,
            ticket_type_id,
            quantity,
            unit_price_in_cents,
        }
    }

    pub fn find_for_order(order_id: i64, conn: &PgConnection) -> Result<Vec<OrderItem>, DatabaseError> {
        order_items::table
            .filter(order_items::order_id.eq(order_id))
            .order_by(order_items::id)
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load order items")
    }
}
