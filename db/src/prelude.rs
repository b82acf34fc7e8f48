pub use crate::models::*;
pub use crate::utils::dates;
pub use crate::utils::errors::*;
