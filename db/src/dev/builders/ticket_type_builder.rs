use diesel::prelude::*;
use models::*;

pub struct TicketTypeBuilder<'a> {
    event_id: Option<i64>,
    name: String,
    price_in_cents: i64,
    quantity: i32,
    max_per_order: i32,
    connection: &'a PgConnection,
}

impl<'a> TicketTypeBuilder<'a> {
    pub fn new(connection: &'a PgConnection) -> TicketTypeBuilder<'a> {
        TicketTypeBuilder {
            event_id: None,
            name: "General Admission".into(),
            price_in_cents: 5_000,
            quantity: 100,
            max_per_order: 10,
            connection,
        }
    }

    pub fn with_event(mut self, event: &Event) -> Self {
        self.event_id = Some(event.id);
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_price_in_cents(mut self, price_in_cents: i64) -> Self {
        self.price_in_cents = price_in_cents;
        self
    }

    pub fn with_quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_max_per_order(mut self, max_per_order: i32) -> Self {
        self.max_per_order = max_per_order;
        self
    }

    pub fn finish(&mut self) -> TicketType {
        use dev::builders::EventBuilder;

        let event_id = self
            .event_id
            .unwrap_or_else(|| EventBuilder::new(self.connection).finish().id);

        TicketType::create(
            event_id,
            self.name.clone(),
            None,
            self.price_in_cents,
            self.quantity,
            self.max_per_order,
        )
        .commit(self.connection)
        .unwrap()
    }
}
