use dev::times;
use diesel::prelude::*;
use models::*;
use rand::prelude::*;

pub struct CouponBuilder<'a> {
    code: String,
    discount_in_cents: Option<i64>,
    discount_as_percentage: Option<i64>,
    max_uses: i64,
    connection: &'a PgConnection,
}

impl<'a> CouponBuilder<'a> {
    pub fn new(connection: &'a PgConnection) -> CouponBuilder<'a> {
        let x: u16 = random();
        CouponBuilder {
            code: format!("SAVE{}", x),
            discount_in_cents: Some(500),
            discount_as_percentage: None,
            max_uses: 10,
            connection,
        }
    }

    pub fn with_code(mut self, code: &str) -> Self {
        self.code = code.to_string();
        self
    }

    pub fn with_discount_in_cents(mut self, discount_in_cents: i64) -> Self {
        self.discount_in_cents = Some(discount_in_cents);
        self.discount_as_percentage = None;
        self
    }

    pub fn with_discount_as_percentage(mut self, percentage: i64) -> Self {
        self.discount_as_percentage = Some(percentage);
        self.discount_in_cents = None;
        self
    }

    pub fn with_max_uses(mut self, max_uses: i64) -> Self {
        self.max_uses = max_uses;
        self
    }

    pub fn finish(&mut self) -> Coupon {
        Coupon::create(
            &self.code,
            self.discount_in_cents,
            self.discount_as_percentage,
            self.max_uses,
            times::zero(),
            times::infinity(),
        )
        .commit(self.connection)
        .unwrap()
    }
}
