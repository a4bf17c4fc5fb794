pub use self::connection::*;
pub use self::connection_type::*;
pub use self::database::*;
pub use self::readonly_connection::*;

mod connection;
mod connection_type;
mod database;
mod readonly_connection;
