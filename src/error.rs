use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Ticket not found: {0}")]
    TicketNotFound(String),

    #[error("Duplicate ticket ID: {0}")]
    DuplicateTicketId(String),

    #[error("No {group_by} column named '{key}'")]
    UnknownGroup { group_by: String, key: String },

    #[error("Ticket {0} is not editable")]
    NotEditable(String),

    #[error("Invalid ticket ID format: {0}")]
    InvalidTicketId(String),

    #[error("Invalid grouping '{0}'. Valid groupings: status, user, priority")]
    InvalidGroupBy(String),

    #[error("Invalid ordering '{0}'. Valid orderings: priority, title")]
    InvalidSortBy(String),

    #[error("Data source error: {0}")]
    Source(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
