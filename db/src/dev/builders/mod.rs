pub use self::artist_builder::*;
pub use self::show_builder::*;
pub use self::venue_builder::*;

mod artist_builder;
mod show_builder;
mod venue_builder;
