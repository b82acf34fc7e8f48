#[macro_use]
extern crate diesel;
extern crate backtrace;
extern crate chrono;
extern crate dotenv;
#[macro_use]
extern crate log;
#[macro_use]
extern crate logging;
#[macro_use]
extern crate serde_derive;
extern crate serde;
#[macro_use]
extern crate serde_json;
extern crate uuid;
#[macro_use]
extern crate validator_derive;
extern crate validator;

pub mod dev;
pub mod models;
pub mod prelude;
pub mod schema;
pub mod utils;
pub mod validators;
