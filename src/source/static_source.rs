use crate::{
    error::{BoardError, Result},
    source::{BoardPayload, TicketSource},
};
use async_trait::async_trait;

/// In-memory source that always yields the same outcome
#[derive(Debug, Clone)]
pub struct StaticSource {
    outcome: std::result::Result<BoardPayload, String>,
}

impl StaticSource {
    pub fn new(payload: BoardPayload) -> Self {
        Self {
            outcome: Ok(payload),
        }
    }

    /// A source whose every fetch fails with `reason`
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: Err(reason.into()),
        }
    }
}

#[async_trait]
impl TicketSource for StaticSource {
    async fn fetch(&self) -> Result<BoardPayload> {
        self.outcome.clone().map_err(BoardError::Source)
    }
}
