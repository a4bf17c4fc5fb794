pub use self::access_token::*;
pub use self::refresh_token::*;

mod access_token;
mod refresh_token;
