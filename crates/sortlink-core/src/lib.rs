pub mod config;
pub mod error;
pub mod html;
pub mod icon;
pub mod link;
pub mod query;
pub mod request;
pub mod types;

pub use error::{Result, SortlinkError};
