extern crate actix_rt;
extern crate logging;
extern crate vamos_api;

use vamos_api::config::{Config, Environment};
use vamos_api::server::Server;

#[actix_rt::main]
async fn main() {
    logging::setup_logger();
    let config = Config::new(Environment::Development);
    Server::start(config).await;
}
