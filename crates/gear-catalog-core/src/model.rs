//! Catalog Models
//!
//! Data structures matching backend entities, plus the form drafts the
//! client edits before submitting them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Gear category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Joueurs,
    Moderateur,
    Evenements,
    Interdits,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Joueurs,
        Category::Moderateur,
        Category::Evenements,
        Category::Interdits,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Joueurs => "joueurs",
            Category::Moderateur => "moderateur",
            Category::Evenements => "evenements",
            Category::Interdits => "interdits",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Joueurs => "Joueurs",
            Category::Moderateur => "Modérateur",
            Category::Evenements => "Événements",
            Category::Interdits => "Interdits",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Joueurs => "👥",
            Category::Moderateur => "🛡️",
            Category::Evenements => "🎉",
            Category::Interdits => "🚫",
        }
    }

    /// Forbidden gears are listed for reference only, their ID is not offered for copy
    pub fn allows_copy(&self) -> bool {
        !matches!(self, Category::Interdits)
    }
}

/// Catalog item (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gear {
    pub id: String,
    /// In-game identifier shown to players, distinct from `id`
    pub gear_id: String,
    pub name: String,
    pub nickname: String,
    pub image_url: String,
    pub description: String,
    pub category: Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionStatus {
    Pending,
    Approved,
    Rejected,
}

/// Gear proposal awaiting review (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    pub name: String,
    pub nickname: String,
    pub gear_id: String,
    pub image_url: String,
    pub description: String,
    pub category: Category,
    pub status: SuggestionStatus,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl Suggestion {
    pub fn is_pending(&self) -> bool {
        self.status == SuggestionStatus::Pending
    }

    /// Submission date as shown on review cards
    pub fn submitted_on(&self) -> Option<String> {
        self.created_at
            .map(|t| t.format("%d/%m/%Y %H:%M").to_string())
    }
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Suggestion form buffer, also the anonymous submission body
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SuggestionDraft {
    pub name: String,
    pub nickname: String,
    pub gear_id: String,
    pub image_url: String,
    pub description: String,
    pub category: Category,
}

impl SuggestionDraft {
    pub fn is_complete(&self) -> bool {
        filled(&self.name)
            && filled(&self.nickname)
            && filled(&self.gear_id)
            && filled(&self.image_url)
            && filled(&self.description)
    }
}

/// Login form buffer, also the login request body
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoginDraft {
    pub username: String,
    pub password: String,
}

impl LoginDraft {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        filled(&self.username) && filled(&self.password)
    }
}

/// Account creation form buffer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUserDraft {
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl Default for NewUserDraft {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            role: Role::Moderateur,
        }
    }
}

impl NewUserDraft {
    pub fn is_complete(&self) -> bool {
        filled(&self.username) && filled(&self.password)
    }
}
