pub use self::api_error::*;
pub use self::web_error::*;

mod api_error;
mod web_error;
