//! Application State
//!
//! Everything the shell renders from, with one pure method per user action
//! or network completion. Network calls happen outside: a `begin_*` method
//! hands out a `FetchTicket`, the caller performs the request, then feeds
//! the result to the matching `finish_*` method.

use crate::api::{ApiError, ApiResult, MessageResponse};
use crate::model::{Category, Gear, LoginDraft, NewUserDraft, Suggestion, SuggestionDraft};
use crate::notice::Notice;
use crate::role::Capabilities;
use crate::session::{AuthError, Session};

const RELOGIN_HINT: &str = "veuillez vous reconnecter";

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Suggest,
    Login,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// Identifies one list request; completions carrying an outdated ticket are dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Moderation decision on a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Review {
    Approve,
    Reject,
}

/// Error notice, with a re-login prompt when the backend refused the token
fn failure(message: &str, err: &ApiError) -> Notice {
    if err.is_unauthorized() {
        Notice::error(format!("{} : {}", message, RELOGIN_HINT))
    } else {
        Notice::error(message)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    session: Option<Session>,
    view: View,
    category: Category,
    gears: Vec<Gear>,
    loading: bool,
    /// Pending suggestions only
    suggestions: Vec<Suggestion>,
    gear_generation: u64,
    suggestion_generation: u64,
    pub theme: Theme,
    pub login_draft: LoginDraft,
    pub new_user_draft: NewUserDraft,
    pub suggestion_draft: SuggestionDraft,
}

impl AppState {
    pub fn new(session: Option<Session>) -> Self {
        Self {
            session,
            ..Default::default()
        }
    }

    // ========================
    // Queries
    // ========================

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn bearer(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.bearer().to_string())
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities::for_role(self.session.as_ref().map(Session::role))
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// The view to render; the admin panel never renders without a session
    pub fn active_view(&self) -> View {
        match self.view {
            View::Admin if self.session.is_none() => View::Home,
            view => view,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn gears(&self) -> &[Gear] {
        &self.gears
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn pending_suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    // ========================
    // Navigation
    // ========================

    /// Switch screens; returns false when the admin panel is requested while signed out
    pub fn navigate(&mut self, view: View) -> bool {
        if view == View::Admin && self.session.is_none() {
            return false;
        }
        self.view = view;
        true
    }

    pub fn toggle_theme(&mut self) {
        self.theme = match self.theme {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        };
    }

    // ========================
    // Catalog
    // ========================

    pub fn select_category(&mut self, category: Category) -> FetchTicket {
        self.category = category;
        self.begin_gear_refresh()
    }

    pub fn begin_gear_refresh(&mut self) -> FetchTicket {
        self.gear_generation += 1;
        self.loading = true;
        FetchTicket(self.gear_generation)
    }

    /// Replace the list wholesale on success, keep it untouched on failure
    pub fn finish_gear_refresh(
        &mut self,
        ticket: FetchTicket,
        result: ApiResult<Vec<Gear>>,
    ) -> Option<Notice> {
        if ticket.0 != self.gear_generation {
            log::debug!("Dropping superseded gear list response");
            return None;
        }
        self.loading = false;
        match result {
            Ok(gears) => {
                let category = self.category;
                let total = gears.len();
                self.gears = gears.into_iter().filter(|g| g.category == category).collect();
                if self.gears.len() != total {
                    log::warn!(
                        "Backend returned {} gears outside category {}",
                        total - self.gears.len(),
                        category.as_str()
                    );
                }
                None
            }
            Err(e) => {
                log::error!("Erreur lors du chargement des gears: {}", e);
                Some(failure("Erreur lors du chargement des gears", &e))
            }
        }
    }

    /// Bearer for a delete, only when the role may delete
    pub fn delete_authorization(&self) -> Option<String> {
        self.capabilities()
            .can_delete_gears
            .then(|| self.bearer())
            .flatten()
    }

    /// Caller refreshes the list when the notice is a success
    pub fn finish_gear_delete(&mut self, result: ApiResult<MessageResponse>) -> Notice {
        match result {
            Ok(_) => Notice::success("Gear supprimé avec succès !"),
            Err(e) => {
                log::error!("Erreur lors de la suppression: {}", e);
                failure("Erreur lors de la suppression", &e)
            }
        }
    }

    // ========================
    // Suggestions
    // ========================

    /// None when signed out: the list is only fetched with a session
    pub fn begin_suggestion_refresh(&mut self) -> Option<(FetchTicket, String)> {
        let bearer = self.bearer()?;
        self.suggestion_generation += 1;
        Some((FetchTicket(self.suggestion_generation), bearer))
    }

    pub fn finish_suggestion_refresh(
        &mut self,
        ticket: FetchTicket,
        result: ApiResult<Vec<Suggestion>>,
    ) -> Option<Notice> {
        if ticket.0 != self.suggestion_generation || self.session.is_none() {
            log::debug!("Dropping superseded suggestion list response");
            return None;
        }
        match result {
            Ok(suggestions) => {
                self.suggestions = suggestions.into_iter().filter(Suggestion::is_pending).collect();
                None
            }
            Err(e) => {
                log::error!("Erreur lors du chargement des suggestions: {}", e);
                Some(failure("Erreur lors du chargement des suggestions", &e))
            }
        }
    }

    /// Bearer for approve/reject, only when the role may review
    pub fn review_authorization(&self) -> Option<String> {
        self.capabilities()
            .can_review_suggestions
            .then(|| self.bearer())
            .flatten()
    }

    /// Caller refetches the pending list when the notice is a success
    pub fn finish_review(&mut self, review: Review, result: ApiResult<MessageResponse>) -> Notice {
        match (review, result) {
            (Review::Approve, Ok(_)) => Notice::success("Suggestion approuvée et gear créé !"),
            (Review::Reject, Ok(_)) => Notice::success("Suggestion rejetée"),
            (Review::Approve, Err(e)) => {
                log::error!("Erreur lors de l'approbation: {}", e);
                failure("Erreur lors de l'approbation", &e)
            }
            (Review::Reject, Err(e)) => {
                log::error!("Erreur lors du rejet: {}", e);
                failure("Erreur lors du rejet", &e)
            }
        }
    }

    /// Clears the draft only on success so a failed submission can be retried
    pub fn finish_suggestion_submit(&mut self, result: ApiResult<MessageResponse>) -> Notice {
        match result {
            Ok(_) => {
                self.suggestion_draft = SuggestionDraft::default();
                Notice::success("Suggestion soumise avec succès !")
            }
            Err(e) => {
                log::error!("Erreur lors de la soumission: {}", e);
                Notice::error("Erreur lors de la soumission")
            }
        }
    }

    // ========================
    // Session
    // ========================

    pub fn sign_in(&mut self, session: Session) {
        self.session = Some(session);
        self.view = View::Admin;
        self.login_draft = LoginDraft::default();
        self.new_user_draft = NewUserDraft::default();
        self.suggestions.clear();
    }

    pub fn finish_login(&mut self, result: Result<Session, AuthError>) -> Notice {
        match result {
            Ok(session) => {
                self.sign_in(session);
                Notice::success("Connexion réussie !")
            }
            Err(e) => {
                log::error!("Erreur de connexion: {}", e);
                Notice::error(e.user_message())
            }
        }
    }

    pub fn sign_out(&mut self) {
        self.session = None;
        self.view = View::Home;
        self.suggestions.clear();
        self.new_user_draft = NewUserDraft::default();
        // in-flight suggestion fetches must not repopulate the list
        self.suggestion_generation += 1;
    }

    // ========================
    // User administration
    // ========================

    /// Bearer and body for account creation, when the draft's role is assignable
    pub fn user_creation_request(&self) -> Option<(String, NewUserDraft)> {
        let caps = self.capabilities();
        if !caps.can_create_users || !caps.can_assign(self.new_user_draft.role) {
            return None;
        }
        Some((self.bearer()?, self.new_user_draft.clone()))
    }

    pub fn finish_user_creation(&mut self, result: ApiResult<MessageResponse>) -> Notice {
        match result {
            Ok(_) => {
                self.new_user_draft = NewUserDraft::default();
                Notice::success("Utilisateur créé avec succès !")
            }
            Err(e) => {
                log::error!("Erreur lors de la création de l'utilisateur: {}", e);
                let message = e
                    .detail()
                    .unwrap_or("Erreur lors de la création de l'utilisateur")
                    .to_string();
                failure(&message, &e)
            }
        }
    }
}
