//! Backend Command Wrappers
//!
//! Each action reads what it needs from the store, performs the REST call
//! off the event handler, then feeds the result back through the matching
//! state transition. Organized by domain.

mod auth;
mod catalog;
mod clipboard;
mod navigation;
mod suggestions;

use async_trait::async_trait;
use gear_catalog_core::{
    ApiClient, ApiError, ApiRequest, ApiResponse, ApiResult, Config, Method, SessionManager,
    Transport,
};
use gloo_net::http::Request;

use crate::storage::LocalTokenStorage;

// Re-export all public items
pub use auth::*;
pub use catalog::*;
pub use clipboard::*;
pub use navigation::*;
pub use suggestions::*;

/// `fetch`-based transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    config: Config,
}

impl HttpTransport {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

fn bearer_header(token: &str) -> String {
    format!("Bearer {}", token)
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let url = self.config.url(&request.path);
        let mut builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Delete => Request::delete(&url),
        };
        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &bearer_header(token));
        }

        let outgoing = match &request.body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = outgoing
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(ApiResponse::new(status, body))
    }
}

/// REST client for the configured backend
pub fn client() -> ApiClient<HttpTransport> {
    ApiClient::new(HttpTransport::new(Config::from_build_env()))
}

/// Session manager over `localStorage`
pub fn sessions() -> SessionManager<LocalTokenStorage> {
    SessionManager::new(LocalTokenStorage)
}
