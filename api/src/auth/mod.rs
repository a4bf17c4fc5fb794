pub mod claims;
mod token_response;
pub mod user;

pub use self::claims::*;
pub use self::token_response::*;
