use chrono::NaiveDateTime;
use diesel;
use diesel::prelude::*;
use models::*;
use schema::favorites;
use utils::errors::{ConvertToDatabaseError, DatabaseError, ErrorCode, SingleResult};
use uuid::Uuid;

#[derive(Associations, Identifiable, Queryable, Clone, Serialize, Deserialize, PartialEq, Debug)]
#[belongs_to(Event)]
#[belongs_to(User)]
#[table_name = "favorites"]
pub struct Favorite {
    pub id: i64,
    pub event_id: i64,
    pub user_id: Uuid,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[table_name = "favorites"]
pub struct NewFavorite {
    pub event_id: i64,
    pub user_id: Uuid,
}

impl NewFavorite {
    /// Idempotent: re-favoriting an event leaves the original row in place.
    pub fn commit(&self, conn: &PgConnection) -> Result<Favorite, DatabaseError> {
        diesel::insert_into(favorites::table)
            .values(self)
            .on_conflict_do_nothing()
            .execute(conn)
            .to_db_error(ErrorCode::InsertError, "Could not create favorite")?;

        favorites::table
            .filter(favorites::event_id.eq(self.event_id))
            .filter(favorites::user_id.eq(self.user_id))
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load favorite")
            .expect_single()
    }
}

impl Favorite {
    pub fn create(event_id: i64, user_id: Uuid) -> NewFavorite {
        NewFavorite { event_id, user_id }
    }

    pub fn remove(event_id: i64, user_id: Uuid, conn: &PgConnection) -> Result<usize, DatabaseError> {
        diesel::delete(
            favorites::table
                .filter(favorites::event_id.eq(event_id))
                .filter(favorites::user_id.eq(user_id)),
        )
        .execute(conn)
        .to_db_error(ErrorCode::DeleteError, "Could not remove favorite")
    }

    pub fn find_for_user(user_id: Uuid, conn: &PgConnection) -> Result<Vec<Favorite>, DatabaseError> {
        favorites::table
            .filter(favorites::user_id.eq(user_id))
            .order_by((favorites::created_at.desc(), favorites::id.desc()))
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load favorites for user")
    }

    pub fn user_favorite(event_id: i64, user_id: Uuid, conn: &PgConnection) -> Result<bool, DatabaseError> {
        let favorites: Vec<Favorite> = favorites::table
            .filter(favorites::event_id.eq(event_id))
            .filter(favorites::user_id.eq(user_id))
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load favorite")?;
        Ok(!favorites.is_empty())
    }

    pub fn user_ids_for_event(event_id: i64, conn: &PgConnection) -> Result<Vec<Uuid>, DatabaseError> {
        favorites::table
            .filter(favorites::event_id.eq(event_id))
            .select(favorites::user_id)
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load users who favorited event")
    }
}
