//! UI Components
//!
//! Leptos components for each screen of the catalog.

mod admin_panel;
mod catalog_view;
mod category_bar;
mod create_user_form;
mod delete_confirm_button;
mod gear_card;
mod header;
mod log_journal;
mod login_form;
mod nav_bar;
mod notice_stack;
mod suggestion_card;
mod suggestion_form;

pub use admin_panel::AdminPanel;
pub use catalog_view::CatalogView;
pub use category_bar::CategoryBar;
pub use create_user_form::CreateUserForm;
pub use delete_confirm_button::DeleteConfirmButton;
pub use gear_card::GearCard;
pub use header::Header;
pub use log_journal::LogJournal;
pub use login_form::LoginForm;
pub use nav_bar::NavBar;
pub use notice_stack::NoticeStack;
pub use suggestion_card::SuggestionCard;
pub use suggestion_form::SuggestionForm;
