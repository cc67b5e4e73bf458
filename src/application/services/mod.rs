//! Business logic services for the application layer.

pub mod allocator;
pub mod registration_service;
pub mod shortcut_service;
pub mod stats_service;

pub use registration_service::RegistrationService;
pub use shortcut_service::ShortcutService;
pub use stats_service::{StatsService, UrlStats};
