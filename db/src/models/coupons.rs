use chrono::prelude::*;
use diesel;
use diesel::dsl;
use diesel::prelude::*;
use schema::{coupons, orders};
use std::cmp;
use utils::errors::*;
use validator::Validate;
use validators::{self, append_validation_error};

#[derive(Clone, Debug, Deserialize, Identifiable, PartialEq, Queryable, Serialize)]
#[table_name = "coupons"]
pub struct Coupon {
    pub id: i64,
    pub code: String,
    pub discount_in_cents: Option<i64>,
    pub discount_as_percentage: Option<i64>,
    pub max_uses: i64,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Deserialize, Validate)]
#[table_name = "coupons"]
pub struct NewCoupon {
    #[validate(length(min = "3", message = "Code must be at least 3 characters long"))]
    pub code: String,
    pub discount_in_cents: Option<i64>,
    pub discount_as_percentage: Option<i64>,
    pub max_uses: i64,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
}

impl NewCoupon {
    pub fn commit(&self, conn: &PgConnection) -> Result<Coupon, DatabaseError> {
        self.validate_record()?;
        diesel::insert_into(coupons::table)
            .values(self)
            .get_result(conn)
            .to_db_error(ErrorCode::InsertError, "Could not create coupon")
    }

    fn validate_record(&self) -> Result<(), DatabaseError> {
        let mut validation_errors = self.validate();
        validation_errors = append_validation_error(
            validation_errors,
            "discount_in_cents",
            validators::single_discount_type_valid(self.discount_in_cents, self.discount_as_percentage),
        );
        if let Some(percentage) = self.discount_as_percentage {
            validation_errors = append_validation_error(
                validation_errors,
                "discount_as_percentage",
                validators::validate_greater_than_or_equal(
                    percentage,
                    1,
                    "percentage_invalid",
                    "Percentage discount must be between 1 and 100",
                ),
            );
            validation_errors = append_validation_error(
                validation_errors,
                "discount_as_percentage",
                validators::validate_less_than_or_equal(
                    percentage,
                    100,
                    "percentage_invalid",
                    "Percentage discount must be between 1 and 100",
                ),
            );
        }
        validation_errors = append_validation_error(
            validation_errors,
            "max_uses",
            validators::validate_greater_than_or_equal(self.max_uses, 1, "max_uses_invalid", "Max uses must be at least one"),
        );
        validation_errors = append_validation_error(
            validation_errors,
            "start_date",
            validators::start_date_valid(self.start_date, self.end_date),
        );
        Ok(validation_errors?)
    }
}

impl Coupon {
    pub fn create(
        code: &str,
        discount_in_cents: Option<i64>,
        discount_as_percentage: Option<i64>,
        max_uses: i64,
        start_date: NaiveDateTime,
        end_date: NaiveDateTime,
    ) -> NewCoupon {
        NewCoupon {
            code: code.trim().to_uppercase(),
            discount_in_cents,
            discount_as_percentage,
            max_uses,
            start_date,
            end_date,
        }
    }

    pub fn find(id: i64, conn: &PgConnection) -> Result<Coupon, DatabaseError> {
        coupons::table
            .find(id)
            .first(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load coupon")
    }

    pub fn find_by_code(code: &str, conn: &PgConnection) -> Result<Coupon, DatabaseError> {
        coupons::table
            .filter(coupons::code.eq(code.trim().to_uppercase()))
            .first(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load coupon with that code")
    }

    pub fn times_used(&self, conn: &PgConnection) -> Result<i64, DatabaseError> {
        orders::table
            .filter(orders::coupon_id.eq(self.id))
            .select(dsl::count(orders::id))
            .first(conn)
            .to_db_error(ErrorCode::QueryError, "Could not count coupon redemptions")
    }

    pub fn confirm_valid(&self, conn: &PgConnection) -> Result<(), DatabaseError> {
        let now = Utc::now().naive_utc();
        if now < self.start_date || now > self.end_date {
            return DatabaseError::validation_error("coupon_code", "Coupon not valid for current datetime");
        }
        if self.times_used(conn)? >= self.max_uses {
            return DatabaseError::validation_error("coupon_code", "Coupon has reached its use limit");
        }
        Ok(())
    }

    /// Discount in cents for a given subtotal, clamped so a total can never
    /// go negative. Pure function.
    pub fn calculate_discount(&self, subtotal_in_cents: i64) -> i64 {
        let discount = match (self.discount_in_cents, self.discount_as_percentage) {
            (Some(discount_in_cents), _) => discount_in_cents,
            (None, Some(percentage)) => subtotal_in_cents * percentage / 100,
            (None, None) => 0,
        };
        cmp::max(0, cmp::min(discount, subtotal_in_cents))
    }
}
