//! REST Client
//!
//! Typed wrappers over the backend endpoints. The actual HTTP exchange is
//! delegated to a `Transport`, so the same client runs on `gloo-net` in the
//! browser and on an in-memory backend in tests.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Category, Gear, LoginDraft, NewUserDraft, Suggestion, SuggestionDraft};
use crate::role::Role;

/// Backend used when `GEAR_API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://localhost:8001";

// ========================
// Configuration
// ========================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
}

impl Config {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let url: String = api_base_url.into();
        Self {
            api_base_url: url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL baked in at compile time, the browser has no process environment
    pub fn from_build_env() -> Self {
        Self::from_value(option_env!("GEAR_API_URL"))
    }

    fn from_value(value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(url) => Self::new(url),
            None => Self::new(DEFAULT_API_URL),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

// ========================
// Transport
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path and query, relative to the base URL
    pub path: String,
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            bearer: None,
            body: None,
        }
    }

    fn bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_string());
        self
    }

    fn json<B: Serialize>(mut self, body: &B) -> ApiResult<Self> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never got a response
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status
    #[error("HTTP {status}{}", .detail.as_deref().map(|d| format!(": {}", d)).unwrap_or_default())]
    Status { status: u16, detail: Option<String> },
    /// The response body did not have the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// 401/403: the session is missing, expired or lacks the role
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401 | 403, .. })
    }

    /// Server-provided message, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Performs one HTTP exchange
#[async_trait(?Send)]
pub trait Transport {
    async fn execute(&self, request: ApiRequest) -> ApiResult<ApiResponse>;
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Backend answer to a successful login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub role: Role,
}

/// Status message returned by mutating endpoints
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

fn path_segment(id: &str) -> String {
    utf8_percent_encode(id, NON_ALPHANUMERIC).to_string()
}

// ========================
// Client
// ========================

/// Typed endpoint wrappers
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let method = request.method;
        let path = request.path.clone();
        let response = self.transport.execute(request).await?;
        log::debug!("{:?} {} -> {}", method, path, response.status);
        if response.is_success() {
            return Ok(response);
        }
        let detail = serde_json::from_str::<ErrorBody>(&response.body)
            .ok()
            .and_then(|body| body.detail);
        Err(ApiError::Status {
            status: response.status,
            detail,
        })
    }

    async fn send_json<R: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<R> {
        let response = self.send(request).await?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Decode a JSON array row by row; rows that do not decode are logged and skipped
    async fn send_rows<R: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<Vec<R>> {
        let path = request.path.clone();
        let rows: Vec<serde_json::Value> = self.send_json(request).await?;
        Ok(rows
            .into_iter()
            .filter_map(|row| match serde_json::from_value(row) {
                Ok(item) => Some(item),
                Err(e) => {
                    log::warn!("Skipping undecodable row from {}: {}", path, e);
                    None
                }
            })
            .collect())
    }

    /// Mutating endpoints answer with `{message}`; an empty body is tolerated
    async fn send_message(&self, request: ApiRequest) -> ApiResult<MessageResponse> {
        let response = self.send(request).await?;
        if response.body.trim().is_empty() {
            return Ok(MessageResponse::default());
        }
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    // ---- gears ----

    pub async fn list_gears(&self, category: Category) -> ApiResult<Vec<Gear>> {
        let path = format!("/api/gears?category={}", category.as_str());
        self.send_rows(ApiRequest::new(Method::Get, path)).await
    }

    pub async fn delete_gear(&self, token: &str, id: &str) -> ApiResult<MessageResponse> {
        let path = format!("/api/gears/{}", path_segment(id));
        self.send_message(ApiRequest::new(Method::Delete, path).bearer(token))
            .await
    }

    // ---- suggestions ----

    pub async fn list_suggestions(&self, token: &str) -> ApiResult<Vec<Suggestion>> {
        self.send_rows(ApiRequest::new(Method::Get, "/api/suggestions").bearer(token))
            .await
    }

    /// Anonymous, no bearer attached
    pub async fn submit_suggestion(&self, draft: &SuggestionDraft) -> ApiResult<MessageResponse> {
        let request = ApiRequest::new(Method::Post, "/api/suggestions").json(draft)?;
        self.send_message(request).await
    }

    pub async fn approve_suggestion(&self, token: &str, id: &str) -> ApiResult<MessageResponse> {
        let path = format!("/api/suggestions/{}/approve", path_segment(id));
        self.send_message(ApiRequest::new(Method::Post, path).bearer(token))
            .await
    }

    pub async fn reject_suggestion(&self, token: &str, id: &str) -> ApiResult<MessageResponse> {
        let path = format!("/api/suggestions/{}/reject", path_segment(id));
        self.send_message(ApiRequest::new(Method::Post, path).bearer(token))
            .await
    }

    // ---- auth ----

    pub async fn login(&self, draft: &LoginDraft) -> ApiResult<LoginResponse> {
        let request = ApiRequest::new(Method::Post, "/api/auth/login").json(draft)?;
        self.send_json(request).await
    }

    pub async fn create_user(&self, token: &str, draft: &NewUserDraft) -> ApiResult<MessageResponse> {
        let request = ApiRequest::new(Method::Post, "/api/auth/create-user")
            .bearer(token)
            .json(draft)?;
        self.send_message(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records requests and replays one canned response
    struct Canned {
        response: ApiResult<ApiResponse>,
        seen: RefCell<Vec<ApiRequest>>,
    }

    impl Canned {
        fn new(response: ApiResult<ApiResponse>) -> ApiClient<Self> {
            ApiClient::new(Self {
                response,
                seen: RefCell::new(Vec::new()),
            })
        }
    }

    #[async_trait(?Send)]
    impl Transport for Canned {
        async fn execute(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
            self.seen.borrow_mut().push(request);
            self.response.clone()
        }
    }

    #[test]
    fn test_config_trims_and_defaults() {
        assert_eq!(Config::new("https://api.example.org///").api_base_url, "https://api.example.org");
        assert_eq!(Config::from_value(None), Config::default());
        assert_eq!(Config::from_value(Some("  ")).api_base_url, DEFAULT_API_URL);
        assert_eq!(
            Config::new("http://h:1/").url("/api/gears"),
            "http://h:1/api/gears"
        );
    }

    #[tokio::test]
    async fn test_list_gears_request_shape() {
        let client = Canned::new(Ok(ApiResponse::new(200, "[]")));
        let gears = client.list_gears(Category::Evenements).await.unwrap();
        assert!(gears.is_empty());

        let seen = client.transport().seen.borrow();
        assert_eq!(seen[0].method, Method::Get);
        assert_eq!(seen[0].path, "/api/gears?category=evenements");
        assert_eq!(seen[0].bearer, None);
    }

    #[tokio::test]
    async fn test_bearer_and_encoded_path() {
        let client = Canned::new(Ok(ApiResponse::new(200, "")));
        client.delete_gear("tok", "a/b c").await.unwrap();

        let seen = client.transport().seen.borrow();
        assert_eq!(seen[0].method, Method::Delete);
        assert_eq!(seen[0].path, "/api/gears/a%2Fb%20c");
        assert_eq!(seen[0].bearer.as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn test_suggestion_submit_is_anonymous() {
        let client = Canned::new(Ok(ApiResponse::new(200, r#"{"message":"ok"}"#)));
        let draft = SuggestionDraft {
            name: "n".into(),
            ..Default::default()
        };
        let reply = client.submit_suggestion(&draft).await.unwrap();
        assert_eq!(reply.message.as_deref(), Some("ok"));

        let seen = client.transport().seen.borrow();
        assert_eq!(seen[0].bearer, None);
        assert_eq!(seen[0].body.as_ref().unwrap()["category"], "joueurs");
    }

    #[tokio::test]
    async fn test_status_error_carries_detail() {
        let client = Canned::new(Ok(ApiResponse::new(403, r#"{"detail":"Accès refusé"}"#)));
        let err = client.approve_suggestion("tok", "s1").await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.detail(), Some("Accès refusé"));
        assert_eq!(err.to_string(), "HTTP 403: Accès refusé");
    }

    #[tokio::test]
    async fn test_status_error_without_json_body() {
        let client = Canned::new(Ok(ApiResponse::new(500, "Internal Server Error")));
        let err = client.list_suggestions("tok").await.unwrap_err();
        assert_eq!(err, ApiError::Status { status: 500, detail: None });
        assert!(!err.is_unauthorized());
    }

    #[tokio::test]
    async fn test_bad_json_is_decode_error() {
        let client = Canned::new(Ok(ApiResponse::new(200, "{not json")));
        let err = client.list_gears(Category::Joueurs).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unknown_category_row_is_skipped() {
        let body = r#"[
            {"id":"s1","name":"Ok","nickname":"ok","gear_id":"1","image_url":"u","description":"d","category":"joueurs","status":"pending"},
            {"id":"s2","name":"Bad","nickname":"bad","gear_id":"2","image_url":"u","description":"d","category":"armes","status":"pending"}
        ]"#;
        let client = Canned::new(Ok(ApiResponse::new(200, body)));
        let suggestions = client.list_suggestions("tok").await.unwrap();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].id, "s1");
    }

    #[tokio::test]
    async fn test_network_error_passes_through() {
        let client = Canned::new(Err(ApiError::Network("offline".into())));
        let err = client.login(&LoginDraft::new("a", "b")).await.unwrap_err();
        assert_eq!(err, ApiError::Network("offline".into()));
    }
}
