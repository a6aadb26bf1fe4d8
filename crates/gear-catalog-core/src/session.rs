//! Session Manager
//!
//! Owns the single persisted token key: written on login, read on
//! startup, removed on logout or whenever the stored token does not decode.

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

use crate::api::{ApiClient, ApiError, Transport};
use crate::model::LoginDraft;
use crate::role::Role;
use crate::token::{decode_claims, TokenError, UntrustedClaims};

/// Durable storage key holding the raw token
pub const TOKEN_KEY: &str = "authToken";

/// Shown when the backend rejects credentials without a message
pub const BAD_CREDENTIALS: &str = "Nom d'utilisateur ou mot de passe incorrect";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage operation failed: {0}")]
    Failed(String),
}

/// Durable key/value slot for the token
pub trait TokenStorage {
    fn load(&self) -> Result<Option<String>, StorageError>;
    fn store(&self, token: &str) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

/// In-process storage, shared between clones
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStorage {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStorage {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(token.into()))),
        }
    }

    pub fn peek(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.slot.borrow().clone())
    }

    fn store(&self, token: &str) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = None;
        Ok(())
    }
}

/// Signed-in state: the raw token plus its unverified display claims
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
    claims: UntrustedClaims,
}

impl Session {
    /// Decode `token` into a session
    pub fn from_token(token: impl Into<String>) -> Result<Self, TokenError> {
        let token = token.into();
        let claims = decode_claims(&token)?;
        Ok(Self { token, claims })
    }

    pub fn username(&self) -> &str {
        &self.claims.username
    }

    pub fn role(&self) -> Role {
        self.claims.role
    }

    /// Raw token for the `Authorization: Bearer` header
    pub fn bearer(&self) -> &str {
        &self.token
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("{0}")]
    Rejected(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("login returned an unreadable token: {0}")]
    MalformedToken(TokenError),
    #[error(transparent)]
    Storage(StorageError),
}

impl AuthError {
    /// French text for the login notice
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Rejected(message) => message.clone(),
            AuthError::Network(_) => "Erreur de connexion".to_string(),
            AuthError::MalformedToken(_) => "Réponse de connexion invalide".to_string(),
            AuthError::Storage(_) => "Impossible d'enregistrer la session".to_string(),
        }
    }
}

impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Network(message) => AuthError::Network(message),
            ApiError::Status { detail, .. } => {
                AuthError::Rejected(detail.unwrap_or_else(|| BAD_CREDENTIALS.to_string()))
            }
            ApiError::Decode(_) => AuthError::Rejected(BAD_CREDENTIALS.to_string()),
        }
    }
}

/// Login, logout and startup restore over a `TokenStorage`
#[derive(Debug, Clone)]
pub struct SessionManager<S> {
    storage: S,
}

impl<S: TokenStorage> SessionManager<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the persisted token; anything that does not decode is wiped
    pub fn restore_session(&self) -> Option<Session> {
        let token = match self.storage.load() {
            Ok(Some(token)) => token,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("Token storage unreadable: {}", e);
                return None;
            }
        };
        match Session::from_token(token) {
            Ok(session) => {
                log::info!("Restored session for {}", session.username());
                Some(session)
            }
            Err(e) => {
                log::warn!("Discarding stored token: {}", e);
                self.wipe();
                None
            }
        }
    }

    /// POST the credentials, decode the returned token, then persist it
    pub async fn login<T: Transport>(
        &self,
        client: &ApiClient<T>,
        draft: &LoginDraft,
    ) -> Result<Session, AuthError> {
        let response = client.login(draft).await.map_err(|e| {
            log::error!("Login failed for {}: {}", draft.username, e);
            AuthError::from(e)
        })?;

        let session = match Session::from_token(response.access_token) {
            Ok(session) => session,
            Err(e) => {
                log::error!("Login token does not decode: {}", e);
                self.wipe();
                return Err(AuthError::MalformedToken(e));
            }
        };
        if session.role() != response.role {
            log::warn!(
                "Login response role {:?} differs from token role {:?}",
                response.role,
                session.role()
            );
        }

        self.storage
            .store(session.bearer())
            .map_err(AuthError::Storage)?;
        log::info!("Signed in as {} ({})", session.username(), session.role().as_str());
        Ok(session)
    }

    /// Always succeeds; no server round-trip
    pub fn logout(&self) {
        self.wipe();
        log::info!("Signed out");
    }

    fn wipe(&self) {
        if let Err(e) = self.storage.clear() {
            log::warn!("Could not clear token storage: {}", e);
        }
    }
}
