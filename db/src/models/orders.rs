use chrono::prelude::*;
use diesel;
use diesel::prelude::*;
use log::Level;
use models::*;
use schema::orders;
use std::borrow::Cow;
use utils::errors::*;
use uuid::Uuid;
use validator::ValidationErrors;
use validators::create_validation_error;

#[derive(Associations, Identifiable, Queryable, Clone, Serialize, Deserialize, PartialEq, Debug)]
#[belongs_to(User)]
#[table_name = "orders"]
pub struct Order {
    pub id: i64,
    pub user_id: Uuid,
    pub status: OrderStatus,
    pub coupon_id: Option<i64>,
    pub subtotal_in_cents: i64,
    pub discount_in_cents: i64,
    pub total_in_cents: i64,
    pub paid_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[table_name = "orders"]
struct NewOrder {
    user_id: Uuid,
    status: OrderStatus,
    coupon_id: Option<i64>,
    subtotal_in_cents: i64,
    discount_in_cents: i64,
    total_in_cents: i64,
    paid_at: Option<NaiveDateTime>,
}

#[derive(Clone, Deserialize, Serialize)]
pub struct CheckoutItem {
    pub ticket_type_id: i64,
    pub quantity: i32,
}

impl Order {
    /// Single-step checkout: validates per-order maximums and remaining
    /// availability for every line, snapshots unit prices into order items,
    /// applies an optional coupon and writes one ticket row per admission.
    pub fn checkout(
        user_id: Uuid,
        items: &[CheckoutItem],
        coupon_code: Option<&str>,
        conn: &PgConnection,
    ) -> Result<Order, DatabaseError> {
        if items.is_empty() {
            return DatabaseError::validation_error("items", "An order must contain at least one item");
        }

        let coupon = match coupon_code {
            Some(code) => {
                let coupon = Coupon::find_by_code(code, conn)?;
                coupon.confirm_valid(conn)?;
                Some(coupon)
            }
            None => None,
        };

        let mut lines: Vec<(TicketType, i32)> = Vec::with_capacity(items.len());
        for item in items {
            let ticket_type = TicketType::find(item.ticket_type_id, conn)?;
            Order::validate_quantity(&ticket_type, item.quantity, conn)?;
            lines.push((ticket_type, item.quantity));
        }

        let subtotal_in_cents: i64 = lines
            .iter()
            .map(|(ticket_type, quantity)| ticket_type.price_in_cents * *quantity as i64)
            .sum();
        let discount_in_cents = coupon
            .as_ref()
            .map(|coupon| coupon.calculate_discount(subtotal_in_cents))
            .unwrap_or(0);

        let order: Order = diesel::insert_into(orders::table)
            .values(NewOrder {
                user_id,
                status: OrderStatus::Paid,
                coupon_id: coupon.as_ref().map(|coupon| coupon.id),
                subtotal_in_cents,
                discount_in_cents,
                total_in_cents: subtotal_in_cents - discount_in_cents,
                paid_at: Some(Utc::now().naive_utc()),
            })
            .get_result(conn)
            .to_db_error(ErrorCode::InsertError, "Could not create order")?;

        for (ticket_type, quantity) in &lines {
            OrderItem::create(order.id, ticket_type.id, *quantity, ticket_type.price_in_cents).commit(conn)?;
            for _ in 0..*quantity {
                Ticket::create(order.id, ticket_type.id, user_id).commit(conn)?;
            }
        }

        Notification::create(
            user_id,
            None,
            NotificationKind::OrderCompleted,
            &format!("Your order #{} has been completed", order.id),
        )
        .commit(conn)?;

        jlog!(Level::Info, "vamos_db::orders", "Order completed", {
            "order_id": order.id,
            "user_id": user_id,
            "total_in_cents": order.total_in_cents
        });

        Ok(order)
    }

    pub fn find(id: i64, conn: &PgConnection) -> Result<Order, DatabaseError> {
        orders::table
            .find(id)
            .first(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load order")
    }

    pub fn find_for_user(user_id: Uuid, conn: &PgConnection) -> Result<Vec<Order>, DatabaseError> {
        orders::table
            .filter(orders::user_id.eq(user_id))
            .order_by((orders::created_at.desc(), orders::id.desc()))
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load orders for user")
    }

    pub fn items(&self, conn: &PgConnection) -> Result<Vec<OrderItem>, DatabaseError> {
        OrderItem::find_for_order(self.id, conn)
    }

    pub fn tickets(&self, conn: &PgConnection) -> Result<Vec<Ticket>, DatabaseError> {
        Ticket::find_for_order(self.id, conn)
    }

    fn validate_quantity(ticket_type: &TicketType, quantity: i32, conn: &PgConnection) -> Result<(), DatabaseError> {
        let mut errors = ValidationErrors::new();

        if quantity < 1 {
            errors.add(
                "quantity",
                create_validation_error("quantity_invalid", "Quantity must be at least one"),
            );
        } else if quantity > ticket_type.max_per_order {
            let mut validation_error = create_validation_error(
                "quantity_over_maximum",
                "Quantity exceeds the maximum allowed per order",
            );
            validation_error.add_param(Cow::from("max_per_order"), &ticket_type.max_per_order);
            errors.add("quantity", validation_error);
        } else if quantity as i64 > ticket_type.available(conn)? {
            let mut validation_error =
                create_validation_error("quantity_over_available", "Not enough tickets are available");
            validation_error.add_param(Cow::from("ticket_type_id"), &ticket_type.id);
            errors.add("quantity", validation_error);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors.into())
        }
    }
}
