//! Engines list hook.
//!
//! Fetches `/api/engines` once and reports the outcome as state. Failures
//! land in `EnginesState::error`; callers never see an `Err`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Message reported when the server answers with a non-success status.
pub const FETCH_ERROR: &str = "Error fetching engines";

/// An engine offered by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engine {
    pub id: String,
    pub name: String,
}

/// State exposed to the consumer of [`use_engines`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnginesState {
    pub engines: Vec<Engine>,
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Default for EnginesState {
    /// The state before the fetch settles.
    fn default() -> Self {
        Self {
            engines: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

/// HTTP client for the engines endpoint.
#[derive(Debug, Clone)]
pub struct EnginesClient {
    http: reqwest::Client,
    base_url: String,
}

impl EnginesClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/api/engines", self.base_url)
    }

    /// Fetch the engine list.
    pub async fn fetch_engines(&self) -> Result<Vec<Engine>> {
        let response = self.http.get(self.endpoint()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus(status.as_u16()));
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Run the fetch once and settle the state.
pub async fn use_engines(client: &EnginesClient) -> EnginesState {
    let mut state = EnginesState::default();
    tracing::debug!("Fetching engines from {}", client.endpoint());

    match client.fetch_engines().await {
        Ok(engines) => {
            tracing::debug!("Loaded {} engines", engines.len());
            state.engines = engines;
        }
        Err(Error::HttpStatus(code)) => {
            tracing::warn!("Engines endpoint returned status {}", code);
            state.error = Some(FETCH_ERROR.to_string());
        }
        Err(e) => {
            tracing::warn!("Failed to fetch engines: {}", e);
            state.error = Some(e.to_string());
        }
    }

    state.loading = false;
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve a single canned HTTP response and return the base URL.
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{addr}")
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = EnginesState::default();
        assert!(state.loading);
        assert!(state.engines.is_empty());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = EnginesClient::new("http://localhost:3000/");
        assert_eq!(client.endpoint(), "http://localhost:3000/api/engines");
    }

    #[tokio::test]
    async fn test_loads_engines() {
        let base = serve_once(
            "200 OK",
            r#"[{"id":"v8","name":"V8"},{"id":"sm","name":"SpiderMonkey"}]"#,
        )
        .await;

        let state = use_engines(&EnginesClient::new(&base)).await;

        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(
            state.engines,
            vec![
                Engine { id: "v8".into(), name: "V8".into() },
                Engine { id: "sm".into(), name: "SpiderMonkey".into() },
            ]
        );
    }

    #[tokio::test]
    async fn test_error_status_populates_error() {
        let base = serve_once("500 Internal Server Error", "{}").await;

        let state = use_engines(&EnginesClient::new(&base)).await;

        assert!(!state.loading);
        assert!(state.engines.is_empty());
        assert_eq!(state.error.as_deref(), Some(FETCH_ERROR));
    }

    #[tokio::test]
    async fn test_invalid_json_populates_error() {
        let base = serve_once("200 OK", "not json").await;

        let state = use_engines(&EnginesClient::new(&base)).await;

        assert!(!state.loading);
        assert!(state.error.is_some());
    }

    #[tokio::test]
    async fn test_fetch_reports_malformed_body_as_json_error() {
        let base = serve_once("200 OK", r#"[{"id":"v8"}]"#).await;

        let result = EnginesClient::new(&base).fetch_engines().await;

        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[tokio::test]
    async fn test_unreachable_server_populates_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let state = use_engines(&EnginesClient::new(&format!("http://{addr}"))).await;

        assert!(!state.loading);
        assert!(state.error.is_some());
    }
}
