extern crate dotenv;
#[macro_use]
extern crate log;
#[macro_use]
extern crate logging;
#[macro_use]
extern crate serde_json;

use dotenv::dotenv;
use encore_api::config::{Config, Environment};
use encore_api::server::Server;
use log::Level::Info;

#[actix_rt::main]
async fn main() {
    logging::setup_logger();
    info!("Loading environment");
    dotenv().ok();
    jlog!(Info, "Environment loaded");
    let config = Config::new(Environment::Development);
    jlog!(Info, "Starting server", {"app_name": config.app_name});
    Server::start(config).await;
}
