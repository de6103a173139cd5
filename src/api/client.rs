use std::collections::BTreeMap;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::demo::DemoTransport;
use super::transport::{HttpRequest, HttpResponse, Method, Transport};
use crate::auth::{Navigator, Session, SessionStore, DEMO_TOKEN};
use crate::config::ClientConfig;

/// Header carrying the session token
pub const AUTH_HEADER: &str = "x-auth-token";

/// Requests to paths containing this fragment always hit the device backend
const DEVICE_FRAGMENT: &str = "esp32data";

/// API error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },
    #[error("Deserialization error: {0}")]
    Deserialization(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Unauthorized - please log in")]
    Unauthorized,
}

impl ApiError {
    /// Stable name of the variant, for callers outside Rust
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Network(_) => "network",
            ApiError::Http { .. } => "http",
            ApiError::Deserialization(_) => "deserialization",
            ApiError::Serialization(_) => "serialization",
            ApiError::Unauthorized => "unauthorized",
        }
    }

    /// HTTP status behind the error, if a response arrived
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Unauthorized => Some(401),
            _ => None,
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Decoded response together with its status and headers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
    pub data: T,
}

/// API client for making HTTP requests
#[derive(Clone)]
pub struct ApiClient {
    config: ClientConfig,
    session: Session,
    transport: Rc<dyn Transport>,
    demo: Rc<dyn Transport>,
}

impl ApiClient {
    pub fn new(
        config: ClientConfig,
        store: Rc<dyn SessionStore>,
        navigator: Rc<dyn Navigator>,
        transport: Rc<dyn Transport>,
    ) -> Self {
        Self {
            config,
            session: Session::new(store, navigator),
            transport,
            demo: Rc::new(DemoTransport::new()),
        }
    }

    /// Replace the synthetic transport used by demo sessions
    pub fn with_demo_transport(mut self, demo: Rc<dyn Transport>) -> Self {
        self.demo = demo;
        self
    }

    /// Client wired to localStorage, window.location and fetch
    #[cfg(target_arch = "wasm32")]
    pub fn browser() -> Self {
        use super::browser::BrowserTransport;
        use crate::auth::{BrowserNavigator, LocalStorageSession};

        Self::new(
            ClientConfig::from_env(),
            Rc::new(LocalStorageSession),
            Rc::new(BrowserNavigator),
            Rc::new(BrowserTransport),
        )
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Make a GET request and deserialize the response
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, ApiError> {
        let token = self.session.token();
        let request = self.build_request(Method::Get, path, token.as_deref());

        let transport = if is_demo_request(token.as_deref(), path) {
            log::debug!("{} {} (demo)", request.method, request.url);
            &self.demo
        } else {
            log::debug!("{} {}", request.method, request.url);
            &self.transport
        };

        let response = transport.send(&request).await?;
        self.handle_response(response)
    }

    /// Attach the JSON content type and, when logged in, the auth header
    fn build_request(&self, method: Method, path: &str, token: Option<&str>) -> HttpRequest {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            headers.push((AUTH_HEADER.to_string(), token.to_string()));
        }

        HttpRequest {
            method,
            path: path.to_string(),
            url: self.config.url_for(path),
            headers,
        }
    }

    /// Handle the HTTP response
    fn handle_response<T: DeserializeOwned>(
        &self,
        response: HttpResponse,
    ) -> Result<ApiResponse<T>, ApiError> {
        let status = response.status;

        if status == 401 {
            self.session.expire();
            return Err(ApiError::Unauthorized);
        }

        if !response.ok() {
            let message = if response.body.is_empty() {
                "Unknown error".to_string()
            } else {
                response.body
            };
            return Err(ApiError::Http { status, message });
        }

        let data = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::Deserialization(e.to_string()))?;

        Ok(ApiResponse {
            status,
            headers: response.headers,
            data,
        })
    }
}

fn is_demo_request(token: Option<&str>, path: &str) -> bool {
    token == Some(DEMO_TOKEN) && !path.contains(DEVICE_FRAGMENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_routing_depends_on_token_and_path() {
        assert!(is_demo_request(Some(DEMO_TOKEN), "/data/live"));
        assert!(is_demo_request(Some(DEMO_TOKEN), "/data/history/7day"));
        assert!(!is_demo_request(Some(DEMO_TOKEN), "/esp32data"));
        assert!(!is_demo_request(Some("real-token"), "/data/live"));
        assert!(!is_demo_request(None, "/data/live"));
    }

    #[test]
    fn error_kind_and_status() {
        assert_eq!(ApiError::Unauthorized.kind(), "unauthorized");
        assert_eq!(ApiError::Unauthorized.status(), Some(401));

        let http = ApiError::Http {
            status: 503,
            message: "Service Unavailable".to_string(),
        };
        assert_eq!(http.kind(), "http");
        assert_eq!(http.status(), Some(503));

        let network = ApiError::Network("connection refused".to_string());
        assert_eq!(network.kind(), "network");
        assert_eq!(network.status(), None);
    }
}
