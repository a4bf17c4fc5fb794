pub(crate) use self::access_token::*;

mod access_token;
mod user;
