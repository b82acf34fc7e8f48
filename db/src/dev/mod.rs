pub use self::project::*;

pub mod builders;
mod project;
