pub use self::path_parameters::*;
pub use self::search_parameters::*;

mod path_parameters;
mod search_parameters;
