pub mod builders;
pub mod times;

pub use self::builders::*;
