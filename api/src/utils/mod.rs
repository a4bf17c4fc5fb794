pub use self::in_flight::*;

mod in_flight;
