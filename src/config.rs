use crate::domain::grouping::PriorityBinding;
use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tokio::fs;

/// Board configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Where the ticket and user collections are fetched from
    pub endpoint: String,
    pub id_prefix: String,
    pub placeholder_title: String,
    pub placeholder_tag: String,
    pub priority_binding: PriorityBinding,
    pub request_timeout_secs: u64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.quicksell.co/v1/internal/frontend-assignment".to_string(),
            id_prefix: "CAM".to_string(),
            placeholder_title: "New Task".to_string(),
            placeholder_tag: "General".to_string(),
            priority_binding: PriorityBinding::Position,
            request_timeout_secs: 30,
        }
    }
}

impl BoardConfig {
    /// Parses a JSON config; absent keys keep their defaults
    pub fn from_json(contents: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a JSON config file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref()).await?;
        Self::from_json(&contents)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(BoardError::Config("endpoint must not be empty".to_string()));
        }
        if self.id_prefix.is_empty() || !self.id_prefix.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(BoardError::Config(format!(
                "id_prefix must be alphanumeric, got '{}'",
                self.id_prefix
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(BoardError::Config(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.id_prefix, "CAM");
        assert_eq!(config.placeholder_title, "New Task");
        assert_eq!(config.priority_binding, PriorityBinding::Position);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = BoardConfig::from_json(r#"{"priority_binding": "declared"}"#).unwrap();
        assert_eq!(config.priority_binding, PriorityBinding::Declared);
        assert_eq!(config.placeholder_tag, "General");
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            BoardConfig::from_json(r#"{"id_prefix": "C-M"}"#),
            Err(BoardError::Config(_))
        ));
        assert!(matches!(
            BoardConfig::from_json(r#"{"request_timeout_secs": 0}"#),
            Err(BoardError::Config(_))
        ));
        assert!(matches!(
            BoardConfig::from_json("not json"),
            Err(BoardError::Serialization(_))
        ));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("board.json");
        tokio::fs::write(&path, r#"{"endpoint": "http://localhost:8080/board"}"#)
            .await
            .unwrap();

        let config = BoardConfig::load(&path).await.unwrap();
        assert_eq!(config.endpoint, "http://localhost:8080/board");
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = BoardConfig::load(temp_dir.path().join("missing.json")).await;
        assert!(matches!(result, Err(BoardError::Io(_))));
    }
}
