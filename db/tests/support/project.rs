use diesel::{Connection, PgConnection};
use dotenv::dotenv;
use std::env;
use vamos_db::dev::builders::*;

pub struct TestProject {
    pub connection: PgConnection,
}

#[allow(dead_code)]
impl TestProject {
    /// Returns `None` when `TEST_DATABASE_URL` is not configured so that the
    /// database suite is skipped rather than failing on machines without a
    /// test database. Every statement runs inside a test transaction that is
    /// rolled back when the connection drops.
    pub fn try_new() -> Option<Self> {
        dotenv().ok();
        let conn_str = match env::var("TEST_DATABASE_URL") {
            Ok(conn_str) => conn_str,
            Err(_) => return None,
        };
        let connection = PgConnection::establish(&conn_str).expect("Could not get access to test database");
        connection
            .begin_test_transaction()
            .expect("Could not start testing transaction");
        Some(TestProject { connection })
    }

    pub fn create_coupon(&self) -> CouponBuilder {
        CouponBuilder::new(&self.connection)
    }

    pub fn create_event(&self) -> EventBuilder {
        EventBuilder::new(&self.connection)
    }

    pub fn create_order(&self) -> OrderBuilder {
        OrderBuilder::new(&self.connection)
    }

    pub fn create_ticket_type(&self) -> TicketTypeBuilder {
        TicketTypeBuilder::new(&self.connection)
    }

    pub fn create_user(&self) -> UserBuilder {
        UserBuilder::new(&self.connection)
    }
}
