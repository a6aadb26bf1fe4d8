//! Workflow Integration Tests
//!
//! Drives the session manager, REST client and state together against an
//! in-memory backend that follows the real server's rules.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use base64::Engine;
use serde_json::{json, Value};

use gear_catalog_core::{
    ApiClient, ApiError, ApiRequest, ApiResponse, ApiResult, AppState, Category, Gear, LoginDraft,
    MemoryTokenStorage, Method, Review, Role, Session, SessionManager, Suggestion, SuggestionDraft,
    SuggestionStatus, Transport, View,
};

// ========================
// In-memory backend
// ========================

struct Account {
    username: String,
    password: String,
    role: Role,
}

#[derive(Default)]
struct MockBackend {
    gears: RefCell<Vec<Gear>>,
    suggestions: RefCell<Vec<Suggestion>>,
    /// Stored verbatim, as the server keeps any category string it is sent
    raw_suggestions: RefCell<Vec<Value>>,
    accounts: RefCell<Vec<Account>>,
    next_id: Cell<u32>,
    offline: Cell<bool>,
    /// Returned from login instead of a well-formed token
    broken_tokens: Cell<bool>,
}

fn token_for(username: &str, role: Role) -> String {
    let payload = json!({"username": username, "role": role, "exp": 4102444800u64});
    let body = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("eyJhbGciOiJIUzI1NiJ9.{}.sig", body)
}

fn reply(status: u16, body: Value) -> ApiResult<ApiResponse> {
    Ok(ApiResponse::new(status, body.to_string()))
}

fn refused() -> ApiResult<ApiResponse> {
    reply(403, json!({"detail": "Accès refusé"}))
}

impl MockBackend {
    fn seeded() -> Self {
        let backend = Self::default();
        backend.accounts.borrow_mut().push(Account {
            username: "admin".into(),
            password: "admin123".into(),
            role: Role::Createur,
        });
        for (name, category) in [
            ("Sword of Light", Category::Joueurs),
            ("Basic Shield", Category::Joueurs),
            ("Admin Baton", Category::Moderateur),
            ("Event Crown", Category::Evenements),
            ("Banned Weapon", Category::Interdits),
        ] {
            let id = backend.fresh_id();
            backend.gears.borrow_mut().push(Gear {
                id: id.clone(),
                gear_id: format!("9{}", id),
                name: name.into(),
                nickname: name.to_lowercase(),
                image_url: format!("https://img.example.org/{}.png", id),
                description: format!("{} description", name),
                category,
            });
        }
        backend
    }

    fn fresh_id(&self) -> String {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        format!("id{}", id)
    }

    fn caller(&self, request: &ApiRequest) -> Option<Role> {
        let token = request.bearer.as_deref()?;
        Session::from_token(token).ok().map(|s| s.role())
    }

    fn route(&self, request: &ApiRequest) -> ApiResult<ApiResponse> {
        let (path, query) = request
            .path
            .split_once('?')
            .unwrap_or((request.path.as_str(), ""));
        let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();

        match (request.method, segments.as_slice()) {
            (Method::Post, ["api", "auth", "login"]) => {
                let body = request.body.clone().unwrap_or_default();
                let accounts = self.accounts.borrow();
                let account = accounts.iter().find(|a| {
                    a.username == body["username"] && a.password == body["password"]
                });
                match account {
                    Some(a) if self.broken_tokens.get() => {
                        reply(200, json!({"access_token": "not-a-token", "role": a.role}))
                    }
                    Some(a) => reply(
                        200,
                        json!({"access_token": token_for(&a.username, a.role), "token_type": "bearer", "role": a.role}),
                    ),
                    None => reply(401, json!({"detail": "Nom d'utilisateur ou mot de passe incorrect"})),
                }
            }
            (Method::Post, ["api", "auth", "create-user"]) => {
                let Some(role) = self.caller(request) else {
                    return reply(401, json!({"detail": "Token invalide"}));
                };
                let body = request.body.clone().unwrap_or_default();
                let wanted: Role = serde_json::from_value(body["role"].clone())
                    .map_err(|e| ApiError::Decode(e.to_string()))?;
                if !role.creatable_roles().contains(&wanted) {
                    return refused();
                }
                let username = body["username"].as_str().unwrap_or_default().to_string();
                if self.accounts.borrow().iter().any(|a| a.username == username) {
                    return reply(400, json!({"detail": "Nom d'utilisateur déjà existant"}));
                }
                self.accounts.borrow_mut().push(Account {
                    username,
                    password: body["password"].as_str().unwrap_or_default().to_string(),
                    role: wanted,
                });
                reply(200, json!({"message": "Utilisateur créé avec succès"}))
            }
            (Method::Get, ["api", "gears"]) => {
                let category = query.strip_prefix("category=").and_then(Category::parse);
                let gears: Vec<Gear> = self
                    .gears
                    .borrow()
                    .iter()
                    .filter(|g| category.map_or(true, |c| g.category == c))
                    .cloned()
                    .collect();
                reply(200, json!(gears))
            }
            (Method::Delete, ["api", "gears", id]) => {
                match self.caller(request) {
                    None => return reply(401, json!({"detail": "Token invalide"})),
                    Some(role) if role.is_lowest() => return refused(),
                    Some(_) => {}
                }
                let mut gears = self.gears.borrow_mut();
                let before = gears.len();
                gears.retain(|g| g.id != *id);
                if gears.len() == before {
                    return reply(404, json!({"detail": "Gear non trouvé"}));
                }
                reply(200, json!({"message": "Gear supprimé avec succès"}))
            }
            (Method::Get, ["api", "suggestions"]) => {
                if self.caller(request).is_none() {
                    return reply(401, json!({"detail": "Token invalide"}));
                }
                let mut rows: Vec<Value> = self
                    .suggestions
                    .borrow()
                    .iter()
                    .map(|s| json!(s))
                    .collect();
                rows.extend(self.raw_suggestions.borrow().iter().cloned());
                reply(200, Value::Array(rows))
            }
            (Method::Post, ["api", "suggestions"]) => {
                let draft: SuggestionDraft =
                    serde_json::from_value(request.body.clone().unwrap_or_default())
                        .map_err(|e| ApiError::Decode(e.to_string()))?;
                let id = self.fresh_id();
                self.suggestions.borrow_mut().push(Suggestion {
                    id,
                    name: draft.name,
                    nickname: draft.nickname,
                    gear_id: draft.gear_id,
                    image_url: draft.image_url,
                    description: draft.description,
                    category: draft.category,
                    status: SuggestionStatus::Pending,
                    created_at: None,
                });
                reply(200, json!({"message": "Suggestion soumise avec succès"}))
            }
            (Method::Post, ["api", "suggestions", id, action]) => {
                match self.caller(request) {
                    None => return reply(401, json!({"detail": "Token invalide"})),
                    Some(role) if role.is_lowest() => return refused(),
                    Some(_) => {}
                }
                let mut suggestions = self.suggestions.borrow_mut();
                let Some(suggestion) = suggestions.iter_mut().find(|s| s.id == *id) else {
                    return reply(404, json!({"detail": "Suggestion non trouvée"}));
                };
                match *action {
                    "approve" => {
                        suggestion.status = SuggestionStatus::Approved;
                        let gear = Gear {
                            id: format!("from-{}", suggestion.id),
                            gear_id: suggestion.gear_id.clone(),
                            name: suggestion.name.clone(),
                            nickname: suggestion.nickname.clone(),
                            image_url: suggestion.image_url.clone(),
                            description: suggestion.description.clone(),
                            category: suggestion.category,
                        };
                        self.gears.borrow_mut().push(gear);
                    }
                    "reject" => suggestion.status = SuggestionStatus::Rejected,
                    _ => return reply(404, json!({"detail": "Not Found"})),
                }
                reply(200, json!({"message": "ok"}))
            }
            _ => reply(404, json!({"detail": "Not Found"})),
        }
    }
}

#[async_trait(?Send)]
impl Transport for MockBackend {
    async fn execute(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        if self.offline.get() {
            return Err(ApiError::Network("connection refused".into()));
        }
        self.route(&request)
    }
}

// ========================
// Helpers
// ========================

struct Shell {
    client: ApiClient<MockBackend>,
    sessions: SessionManager<MemoryTokenStorage>,
    state: AppState,
}

impl Shell {
    fn start() -> Self {
        let sessions = SessionManager::new(MemoryTokenStorage::default());
        let state = AppState::new(sessions.restore_session());
        Self {
            client: ApiClient::new(MockBackend::seeded()),
            sessions,
            state,
        }
    }

    fn backend(&self) -> &MockBackend {
        self.client.transport()
    }

    async fn login(&mut self, username: &str, password: &str) -> bool {
        self.state.navigate(View::Login);
        self.state.login_draft = LoginDraft::new(username, password);
        let result = self.sessions.login(&self.client, &self.state.login_draft).await;
        let notice = self.state.finish_login(result);
        if notice.is_success() {
            self.refresh_suggestions().await;
        }
        notice.is_success()
    }

    async fn select(&mut self, category: Category) {
        let ticket = self.state.select_category(category);
        let result = self.client.list_gears(category).await;
        self.state.finish_gear_refresh(ticket, result);
    }

    async fn refresh_gears(&mut self) {
        let ticket = self.state.begin_gear_refresh();
        let result = self.client.list_gears(self.state.category()).await;
        self.state.finish_gear_refresh(ticket, result);
    }

    async fn refresh_suggestions(&mut self) {
        if let Some((ticket, bearer)) = self.state.begin_suggestion_refresh() {
            let result = self.client.list_suggestions(&bearer).await;
            self.state.finish_suggestion_refresh(ticket, result);
        }
    }

    async fn review(&mut self, review: Review, id: &str) -> bool {
        let bearer = match self.state.review_authorization() {
            Some(bearer) => bearer,
            None => return false,
        };
        let result = match review {
            Review::Approve => self.client.approve_suggestion(&bearer, id).await,
            Review::Reject => self.client.reject_suggestion(&bearer, id).await,
        };
        let ok = self.state.finish_review(review, result).is_success();
        if ok {
            self.refresh_suggestions().await;
        }
        ok
    }

    async fn submit(&mut self) -> bool {
        let draft = self.state.suggestion_draft.clone();
        let result = self.client.submit_suggestion(&draft).await;
        self.state.finish_suggestion_submit(result).is_success()
    }
}

fn fill(draft: &mut SuggestionDraft, name: &str, category: Category) {
    draft.name = name.into();
    draft.nickname = format!("{} surnom", name);
    draft.gear_id = "555000111".into();
    draft.image_url = "https://img.example.org/new.png".into();
    draft.description = "Proposé par un joueur".into();
    draft.category = category;
}

// ========================
// Tests
// ========================

#[tokio::test]
async fn test_admin_login_scenario() {
    let mut shell = Shell::start();
    assert!(shell.state.session().is_none());

    assert!(shell.login("admin", "admin123").await);

    let session = shell.state.session().unwrap();
    assert_eq!(session.username(), "admin");
    assert_eq!(session.role(), Role::Createur);
    assert_eq!(shell.state.active_view(), View::Admin);
    assert_eq!(
        shell.sessions.storage().peek().as_deref(),
        Some(session.bearer())
    );

    // a fresh start restores the same session from storage
    let restored = shell.sessions.restore_session().unwrap();
    assert_eq!(restored.username(), "admin");
}

#[tokio::test]
async fn test_wrong_password_surfaces_server_message() {
    let mut shell = Shell::start();
    assert!(!shell.login("admin", "nope").await);
    assert!(shell.state.session().is_none());
    assert_eq!(shell.state.active_view(), View::Login);
    assert_eq!(shell.sessions.storage().peek(), None);
}

#[tokio::test]
async fn test_undecodable_login_token_is_not_kept() {
    let mut shell = Shell::start();
    shell.backend().broken_tokens.set(true);
    assert!(!shell.login("admin", "admin123").await);
    assert!(shell.state.session().is_none());
    assert_eq!(shell.sessions.storage().peek(), None);
}

#[tokio::test]
async fn test_no_cross_category_leakage() {
    let mut shell = Shell::start();
    for category in Category::ALL {
        shell.select(category).await;
        assert!(!shell.state.gears().is_empty());
        assert!(shell.state.gears().iter().all(|g| g.category == category));
    }
}

#[tokio::test]
async fn test_offline_refresh_keeps_previous_list() {
    let mut shell = Shell::start();
    shell.select(Category::Joueurs).await;
    let before = shell.state.gears().to_vec();

    shell.backend().offline.set(true);
    shell.refresh_gears().await;
    assert_eq!(shell.state.gears(), before.as_slice());
    assert!(!shell.state.is_loading());
}

#[tokio::test]
async fn test_delete_then_refresh() {
    let mut shell = Shell::start();
    shell.login("admin", "admin123").await;
    shell.select(Category::Joueurs).await;
    let target = shell.state.gears()[0].id.clone();

    let bearer = shell.state.delete_authorization().unwrap();
    let result = shell.client.delete_gear(&bearer, &target).await;
    assert!(shell.state.finish_gear_delete(result).is_success());
    shell.refresh_gears().await;

    assert!(shell.state.gears().iter().all(|g| g.id != target));
}

#[tokio::test]
async fn test_submit_approve_reject_cycle() {
    let mut shell = Shell::start();

    fill(&mut shell.state.suggestion_draft, "Party Hat", Category::Evenements);
    assert!(shell.submit().await);
    assert_eq!(shell.state.suggestion_draft, SuggestionDraft::default());
    fill(&mut shell.state.suggestion_draft, "Glitch Gun", Category::Interdits);
    assert!(shell.submit().await);

    shell.login("admin", "admin123").await;
    let pending: Vec<String> = shell
        .state
        .pending_suggestions()
        .iter()
        .map(|s| s.id.clone())
        .collect();
    assert_eq!(pending.len(), 2);

    assert!(shell.review(Review::Approve, &pending[0]).await);
    assert!(shell.state.pending_suggestions().iter().all(|s| s.id != pending[0]));

    assert!(shell.review(Review::Reject, &pending[1]).await);
    assert!(shell.state.pending_suggestions().is_empty());

    // approval created the gear server side; it shows up on the next catalog refresh
    shell.select(Category::Evenements).await;
    assert!(shell.state.gears().iter().any(|g| g.name == "Party Hat"));
}

#[tokio::test]
async fn test_failed_submit_keeps_draft() {
    let mut shell = Shell::start();
    fill(&mut shell.state.suggestion_draft, "Party Hat", Category::Evenements);
    shell.backend().offline.set(true);

    assert!(!shell.submit().await);
    assert_eq!(shell.state.suggestion_draft.name, "Party Hat");
}

#[tokio::test]
async fn test_moderator_sees_list_but_cannot_act() {
    let mut shell = Shell::start();
    shell.backend().accounts.borrow_mut().push(Account {
        username: "modo".into(),
        password: "pw".into(),
        role: Role::Moderateur,
    });
    fill(&mut shell.state.suggestion_draft, "Cape", Category::Moderateur);
    shell.submit().await;

    assert!(shell.login("modo", "pw").await);
    assert_eq!(shell.state.pending_suggestions().len(), 1);

    let caps = shell.state.capabilities();
    assert!(!caps.can_review_suggestions);
    assert!(!caps.can_create_users);
    assert!(!caps.can_delete_gears);
    let id = shell.state.pending_suggestions()[0].id.clone();
    assert!(!shell.review(Review::Approve, &id).await);
}

#[tokio::test]
async fn test_create_user_respects_policy() {
    let mut shell = Shell::start();
    shell.login("admin", "admin123").await;

    shell.state.new_user_draft.username = "resp".into();
    shell.state.new_user_draft.password = "secret".into();
    shell.state.new_user_draft.role = Role::Responsable;
    let (bearer, draft) = shell.state.user_creation_request().unwrap();
    let result = shell.client.create_user(&bearer, &draft).await;
    assert!(shell.state.finish_user_creation(result).is_success());

    // duplicate username keeps the draft and shows the backend detail
    shell.state.new_user_draft.username = "resp".into();
    shell.state.new_user_draft.password = "again".into();
    let (bearer, draft) = shell.state.user_creation_request().unwrap();
    let result = shell.client.create_user(&bearer, &draft).await;
    let notice = shell.state.finish_user_creation(result);
    assert_eq!(notice.message, "Nom d'utilisateur déjà existant");
    assert_eq!(shell.state.new_user_draft.username, "resp");

    // a responsable may only hand out the moderator role
    shell.sessions.logout();
    shell.state.sign_out();
    assert!(shell.login("resp", "secret").await);
    shell.state.new_user_draft.role = Role::Responsable;
    assert!(shell.state.user_creation_request().is_none());
    shell.state.new_user_draft.role = Role::Moderateur;
    assert!(shell.state.user_creation_request().is_some());
}

#[tokio::test]
async fn test_logout_clears_everything() {
    let mut shell = Shell::start();
    shell.login("admin", "admin123").await;

    shell.sessions.logout();
    shell.state.sign_out();

    assert_eq!(shell.sessions.storage().peek(), None);
    assert!(shell.state.session().is_none());
    assert_eq!(shell.state.active_view(), View::Home);
    assert!(!shell.state.navigate(View::Admin));
}

#[tokio::test]
async fn test_rejected_token_prompts_relogin() {
    let mut shell = Shell::start();
    shell.login("admin", "admin123").await;

    // the backend cannot read this bearer and answers 401
    let result = shell.client.create_user("garbage", &shell.state.new_user_draft).await;
    let notice = shell.state.finish_user_creation(result);
    assert!(notice.message.contains("reconnecter"));
    assert!(shell.state.session().is_some());
}

#[tokio::test]
async fn test_unknown_category_does_not_hide_pending_queue() {
    let mut shell = Shell::start();
    fill(&mut shell.state.suggestion_draft, "Valid Blade", Category::Joueurs);
    assert!(shell.submit().await);
    shell.backend().raw_suggestions.borrow_mut().push(json!({
        "id": "raw1",
        "name": "Hache",
        "nickname": "hache",
        "gear_id": "123",
        "image_url": "https://img.example.org/hache.png",
        "description": "catégorie inconnue",
        "category": "armes",
        "status": "pending",
    }));

    assert!(shell.login("admin", "admin123").await);
    let pending = shell.state.pending_suggestions();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].name, "Valid Blade");
}
