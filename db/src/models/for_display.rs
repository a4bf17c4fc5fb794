use utils::errors::DatabaseError;

pub trait ForDisplay<T> {
    fn for_display(self) -> Result<T, DatabaseError>;
}
