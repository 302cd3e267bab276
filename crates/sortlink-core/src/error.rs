use thiserror::Error;

#[derive(Debug, Error)]
pub enum SortlinkError {
    #[error("invalid sort key '{0}': a key is a column name with at most one relation prefix")]
    InvalidSortKey(String),

    #[error("invalid direction '{0}': expected 'asc' or 'desc'")]
    InvalidDirection(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, SortlinkError>;
