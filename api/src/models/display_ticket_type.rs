use db::prelude::*;
use diesel::PgConnection;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DisplayTicketType {
    pub id: i64,
    pub event_id: i64,
    pub name: String,
    pub description: String,
    pub price_in_cents: i64,
    pub quantity: i32,
    pub max_per_order: i32,
    pub available: i64,
}

impl DisplayTicketType {
    pub fn from_ticket_type(ticket_type: &TicketType, conn: &PgConnection) -> Result<DisplayTicketType, DatabaseError> {
        let available = ticket_type.available(conn)?;
        Ok(DisplayTicketType {
            id: ticket_type.id,
            event_id: ticket_type.event_id,
            name: ticket_type.name.clone(),
            description: ticket_type.description.clone().unwrap_or_default(),
            price_in_cents: ticket_type.price_in_cents,
            quantity: ticket_type.quantity,
            max_per_order: ticket_type.max_per_order,
            available,
        })
    }
}
