//! Gear Catalog Core
//!
//! Platform-neutral half of the catalog client:
//! - model: catalog entities and form drafts
//! - role: role hierarchy and the UI capability table
//! - token: unverified bearer token decoding
//! - session: login, logout and restore over durable token storage
//! - api: typed REST client over a pluggable transport
//! - state: view state with pure update methods
//! - notice: user feedback produced by state transitions

pub mod api;
pub mod model;
pub mod notice;
pub mod role;
pub mod session;
pub mod state;
pub mod token;

pub use api::{ApiClient, ApiError, ApiRequest, ApiResponse, ApiResult, Config, LoginResponse, MessageResponse, Method, Transport};
pub use model::{Category, Gear, LoginDraft, NewUserDraft, Suggestion, SuggestionDraft, SuggestionStatus};
pub use notice::{Notice, NoticeLevel};
pub use role::{Capabilities, Role};
pub use session::{AuthError, MemoryTokenStorage, Session, SessionManager, StorageError, TokenStorage, TOKEN_KEY};
pub use state::{AppState, FetchTicket, Review, Theme, View};
pub use token::{decode_claims, TokenError, UntrustedClaims};
