#![allow(dead_code)]

use std::sync::Arc;

use url_shortcut::infrastructure::persistence::MemoryStore;
use url_shortcut::prelude::*;

pub type MemShortcutService = ShortcutService<MemoryStore, MemoryStore>;
pub type MemRegistrationService = RegistrationService<MemoryStore>;
pub type MemStatsService = StatsService<MemoryStore, MemoryStore>;

/// All services wired over one shared in-memory store.
pub struct TestApp {
    pub store: Arc<MemoryStore>,
    pub registration: MemRegistrationService,
    pub shortcuts: MemShortcutService,
    pub stats: MemStatsService,
}

pub fn test_app() -> TestApp {
    let store = Arc::new(MemoryStore::new());

    TestApp {
        store: store.clone(),
        registration: RegistrationService::new(store.clone()),
        shortcuts: ShortcutService::new(store.clone(), store.clone()),
        stats: StatsService::new(store.clone(), store),
    }
}

/// Registers a site and returns the generated login.
pub async fn register_site(app: &TestApp, site: &str) -> String {
    app.registration
        .register_site(site, "test-credential-hash")
        .await
        .unwrap()
        .login
}
