pub mod error;
pub mod extract;

pub use error::AppError;
pub use extract::{CurrentSort, SortContext};
