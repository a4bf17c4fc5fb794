use dev::builders::*;
use diesel::prelude::*;
use models::*;

pub struct OrderBuilder<'a> {
    user: Option<User>,
    ticket_type_id: Option<i64>,
    quantity: i32,
    coupon_code: Option<String>,
    connection: &'a PgConnection,
}

impl<'a> OrderBuilder<'a> {
    pub fn new(connection: &'a PgConnection) -> OrderBuilder<'a> {
        OrderBuilder {
            user: None,
            ticket_type_id: None,
            quantity: 2,
            coupon_code: None,
            connection,
        }
    }

    pub fn for_user(mut self, user: &User) -> Self {
        self.user = Some(user.clone());
        self
    }

    pub fn for_event(mut self, event: &Event) -> Self {
        self.ticket_type_id = Some(event.ticket_types(self.connection).unwrap()[0].id);
        self
    }

    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_coupon_code(mut self, code: &str) -> Self {
        self.coupon_code = Some(code.to_string());
        self
    }

    pub fn finish(mut self) -> Order {
        if self.user.is_none() {
            self.user = Some(UserBuilder::new(self.connection).finish());
        }
        if self.ticket_type_id.is_none() {
            let event = EventBuilder::new(self.connection).with_ticket_type().finish();
            self.ticket_type_id = Some(event.ticket_types(self.connection).unwrap()[0].id);
        }

        let items = vec![CheckoutItem {
            ticket_type_id: self.ticket_type_id.unwrap(),
            quantity: self.quantity,
        }];

        Order::checkout(
            self.user.as_ref().unwrap().id,
            &items,
            self.coupon_code.as_ref().map(|c| c.as_str()),
            self.connection,
        )
        .unwrap()
    }
}
