use chrono::NaiveDateTime;
use diesel;
use diesel::expression::dsl;
use diesel::prelude::*;
use models::*;
use schema::notifications;
use utils::errors::{ConvertToDatabaseError, DatabaseError, ErrorCode};
use uuid::Uuid;

#[derive(Associations, Identifiable, Queryable, Clone, Serialize, Deserialize, PartialEq, Debug)]
#[belongs_to(User)]
#[table_name = "notifications"]
pub struct Notification {
    pub id: i64,
    pub user_id: Uuid,
    pub event_id: Option<i64>,
    pub kind: NotificationKind,
    pub message: String,
    pub read_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[table_name = "notifications"]
pub struct NewNotification {
    pub user_id: Uuid,
    pub event_id: Option<i64>,
    pub kind: NotificationKind,
    pub message: String,
}

impl NewNotification {
    pub fn commit(&self, conn: &PgConnection) -> Result<Notification, DatabaseError> {
        diesel::insert_into(notifications::table)
            .values(self)
            .get_result(conn)
            .to_db_error(ErrorCode::InsertError, "Could not create notification")
    }
}

impl Notification {
    pub fn create(user_id: Uuid, event_id: Option<i64>, kind: NotificationKind, message: &str) -> NewNotification {
        NewNotification {
            user_id,
            event_id,
            kind,
            message: message.to_string(),
        }
    }

    pub fn find(id: i64, conn: &PgConnection) -> Result<Notification, DatabaseError> {
        notifications::table
            .find(id)
            .first(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load notification")
    }

    pub fn find_for_user(user_id: Uuid, conn: &PgConnection) -> Result<Vec<Notification>, DatabaseError> {
        notifications::table
            .filter(notifications::user_id.eq(user_id))
            .order_by((notifications::created_at.desc(), notifications::id.desc()))
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load notifications for user")
    }

    /// Idempotent, the original read timestamp is kept.
    pub fn mark_read(&self, conn: &PgConnection) -> Result<Notification, DatabaseError> {
        if self.read_at.is_some() {
            return Ok(self.clone());
        }

        diesel::update(self)
            .set(notifications::read_at.eq(dsl::now.nullable()))
            .get_result(conn)
            .to_db_error(ErrorCode::UpdateError, "Could not mark notification as read")
    }

    pub fn mark_all_read(user_id: Uuid, conn: &PgConnection) -> Result<usize, DatabaseError> {
        diesel::update(
            notifications::table
                .filter(notifications::user_id.eq(user_id))
                .filter(notifications::read_at.is_null()),
        )
        .set(notifications::read_at.eq(dsl::now.nullable()))
        .execute(conn)
        .to_db_error(ErrorCode::UpdateError, "Could not mark notifications as read")
    }
}
