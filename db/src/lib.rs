#[macro_use]
extern crate diesel;
extern crate argon2rs;
extern crate chrono;
extern crate chrono_tz;
extern crate dotenv;
#[macro_use]
extern crate log;
#[macro_use]
extern crate logging;
extern crate rand;
extern crate uuid;
#[macro_use]
extern crate serde_derive;
extern crate serde;
#[macro_use]
extern crate serde_json;
extern crate serde_with;
extern crate validator;
#[macro_use]
extern crate validator_derive;

pub mod dev;
pub mod models;
pub mod schema;
pub mod utils;
pub mod validators;

pub mod prelude {
    pub use models::*;
    pub use utils::errors::*;
}
