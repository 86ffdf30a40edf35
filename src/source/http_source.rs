use crate::{
    config::BoardConfig,
    error::Result,
    source::{BoardPayload, TicketSource},
};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};

/// Fetches the board with a single GET. No retries, no paging.
pub struct HttpSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSource {
    pub fn new(config: &BoardConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("camboard"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TicketSource for HttpSource {
    async fn fetch(&self) -> Result<BoardPayload> {
        tracing::debug!(endpoint = %self.endpoint, "fetching board");

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?;
        let body = response.bytes().await?;

        BoardPayload::from_slice(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves exactly one canned HTTP response and returns the endpoint URL
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{}/v1/board", addr)
    }

    fn source_for(endpoint: String) -> HttpSource {
        let config = BoardConfig {
            request_timeout_secs: 5,
            ..BoardConfig::default()
        }
        .with_endpoint(endpoint);
        HttpSource::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_payload() {
        let endpoint = serve_once(
            "200 OK",
            r#"{"tickets":[{"id":"CAM-1","title":"Fix login","tag":["Bug"],"userId":"usr-1","status":"Todo","priority":2}],"users":[{"id":"usr-1","name":"Ana"}]}"#,
        )
        .await;

        let payload = source_for(endpoint).fetch().await.unwrap();
        assert_eq!(payload.tickets.len(), 1);
        assert_eq!(payload.tickets[0].title, "Fix login");
        assert_eq!(payload.users[0].name, "Ana");
    }

    #[tokio::test]
    async fn test_fetch_error_status() {
        let endpoint = serve_once("503 Service Unavailable", "{}").await;

        let result = source_for(endpoint).fetch().await;
        assert!(matches!(result, Err(BoardError::Http(_))));
    }

    #[tokio::test]
    async fn test_fetch_malformed_body() {
        let endpoint = serve_once("200 OK", r#"{"tickets": "nope"}"#).await;

        let result = source_for(endpoint).fetch().await;
        assert!(matches!(result, Err(BoardError::Serialization(_))));
    }

    #[tokio::test]
    async fn test_fetch_unreachable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = source_for(format!("http://{}/v1/board", addr)).fetch().await;
        assert!(matches!(result, Err(BoardError::Http(_))));
    }
}
