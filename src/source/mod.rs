use crate::{
    domain::{Ticket, User},
    error::Result,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod http_source;
pub mod static_source;

pub use http_source::HttpSource;
pub use static_source::StaticSource;

/// Body returned by the board endpoint. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardPayload {
    #[serde(default)]
    pub tickets: Vec<Ticket>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl BoardPayload {
    pub fn new(tickets: Vec<Ticket>, users: Vec<User>) -> Self {
        Self { tickets, users }
    }

    /// Decodes a raw response body
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }
}

/// Where the board's tickets and users come from
#[async_trait]
pub trait TicketSource: Send + Sync {
    /// Fetches both collections in one call
    async fn fetch(&self) -> Result<BoardPayload>;
}
