//! PostgreSQL repository tests.
//!
//! Run with `cargo test --features test-postgres` against a database
//! reachable through `DATABASE_URL`; each test gets its own schema via
//! `#[sqlx::test]`.

#![cfg(feature = "test-postgres")]

use std::sync::Arc;

use sqlx::PgPool;
use url_shortcut::config::Config;
use url_shortcut::domain::repositories::{InsertError, OwnerRepository, ShortcutRepository};
use url_shortcut::infrastructure::db;
use url_shortcut::infrastructure::persistence::{PgOwnerRepository, PgShortcutRepository};
use url_shortcut::prelude::*;

fn new_owner(login: &str, site: &str) -> NewOwner {
    NewOwner {
        login: login.to_string(),
        password_hash: "hash".to_string(),
        site: site.to_string(),
    }
}

fn new_shortcut(code: &str, long_url: &str, owner_id: i64) -> NewShortcut {
    NewShortcut {
        code: code.to_string(),
        long_url: long_url.to_string(),
        owner_id,
    }
}

async fn seed_owner(pool: &Arc<PgPool>, site: &str) -> Owner {
    PgOwnerRepository::new(pool.clone())
        .insert(new_owner(&format!("login-{site}"), site))
        .await
        .unwrap()
}

#[sqlx::test]
async fn test_insert_and_find_shortcut(pool: PgPool) {
    let pool = Arc::new(pool);
    let owner = seed_owner(&pool, "a.example").await;
    let repo = PgShortcutRepository::new(pool);

    let inserted = repo
        .insert(new_shortcut("code0001", "https://a.example/x", owner.id))
        .await
        .unwrap();
    assert_eq!(inserted.visits, 0);

    let by_code = repo.find_by_code("code0001").await.unwrap().unwrap();
    assert_eq!(by_code.long_url, "https://a.example/x");

    let by_url = repo
        .find_by_long_url("https://a.example/x")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_url.code, "code0001");

    assert!(repo.find_by_code("missing1").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_duplicate_code_classifies_as_collision(pool: PgPool) {
    let pool = Arc::new(pool);
    let owner = seed_owner(&pool, "a.example").await;
    let repo = PgShortcutRepository::new(pool);

    repo.insert(new_shortcut("code0001", "https://a.example/x", owner.id))
        .await
        .unwrap();

    let result = repo
        .insert(new_shortcut("code0001", "https://a.example/y", owner.id))
        .await;

    assert!(matches!(result, Err(InsertError::CodeCollision)));
}

#[sqlx::test]
async fn test_duplicate_url_classifies_as_duplicate_key(pool: PgPool) {
    let pool = Arc::new(pool);
    let owner = seed_owner(&pool, "a.example").await;
    let repo = PgShortcutRepository::new(pool);

    repo.insert(new_shortcut("code0001", "https://a.example/x", owner.id))
        .await
        .unwrap();

    let result = repo
        .insert(new_shortcut("code0002", "https://a.example/x", owner.id))
        .await;

    assert!(matches!(result, Err(InsertError::DuplicateKey)));
}

#[sqlx::test]
async fn test_missing_owner_is_not_a_uniqueness_conflict(pool: PgPool) {
    let repo = PgShortcutRepository::new(Arc::new(pool));

    // Foreign key violation: must pass through unclassified.
    let result = repo
        .insert(new_shortcut("code0001", "https://a.example/x", 4242))
        .await;

    assert!(matches!(result, Err(InsertError::Other(_))));
}

#[sqlx::test]
async fn test_visit_and_fetch_increments_atomically(pool: PgPool) {
    let pool = Arc::new(pool);
    let owner = seed_owner(&pool, "a.example").await;
    let repo = Arc::new(PgShortcutRepository::new(pool));

    repo.insert(new_shortcut("code0001", "https://a.example/x", owner.id))
        .await
        .unwrap();

    let first = repo.visit_and_fetch("code0001").await.unwrap().unwrap();
    assert_eq!(first.visits, 1);
    assert_eq!(first.long_url, "https://a.example/x");

    let mut handles = Vec::new();
    for _ in 0..10 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            for _ in 0..5 {
                repo.visit_and_fetch("code0001").await.unwrap().unwrap();
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let stored = repo.find_by_code("code0001").await.unwrap().unwrap();
    assert_eq!(stored.visits, 51);
}

#[sqlx::test]
async fn test_visit_and_fetch_unknown_code(pool: PgPool) {
    let repo = PgShortcutRepository::new(Arc::new(pool));

    assert!(repo.visit_and_fetch("missing1").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_list_by_owner_is_scoped(pool: PgPool) {
    let pool = Arc::new(pool);
    let first = seed_owner(&pool, "a.example").await;
    let second = seed_owner(&pool, "b.example").await;
    let repo = PgShortcutRepository::new(pool);

    repo.insert(new_shortcut("code0001", "https://a.example/1", first.id))
        .await
        .unwrap();
    repo.insert(new_shortcut("code0002", "https://a.example/2", first.id))
        .await
        .unwrap();
    repo.insert(new_shortcut("code0003", "https://b.example/1", second.id))
        .await
        .unwrap();

    let listed = repo.list_by_owner(first.id).await.unwrap();

    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|s| s.owner_id == first.id));
}

#[sqlx::test]
async fn test_owner_uniqueness_classification(pool: PgPool) {
    let repo = PgOwnerRepository::new(Arc::new(pool));

    repo.insert(new_owner("aaaa1111", "a.example")).await.unwrap();

    let same_login = repo.insert(new_owner("aaaa1111", "b.example")).await;
    assert!(matches!(same_login, Err(InsertError::CodeCollision)));

    let same_site = repo.insert(new_owner("bbbb2222", "a.example")).await;
    assert!(matches!(same_site, Err(InsertError::DuplicateKey)));
}

#[sqlx::test]
async fn test_find_owner_by_login(pool: PgPool) {
    let repo = PgOwnerRepository::new(Arc::new(pool));

    let inserted = repo.insert(new_owner("aaaa1111", "a.example")).await.unwrap();

    let found = repo.find_by_login("aaaa1111").await.unwrap().unwrap();
    assert_eq!(found.id, inserted.id);
    assert_eq!(found.site, "a.example");

    assert!(repo.find_by_login("missing1").await.unwrap().is_none());
}

#[tokio::test]
async fn test_connect_and_migrate_from_env() {
    let config = Config::from_env().unwrap();

    let pool = db::connect(&config).await.unwrap();
    db::migrate(&pool).await.unwrap();
    // Applying an already-applied history is a no-op.
    db::migrate(&pool).await.unwrap();
}

#[sqlx::test]
async fn test_services_over_postgres(pool: PgPool) {
    let pool = Arc::new(pool);
    let owners = Arc::new(PgOwnerRepository::new(pool.clone()));
    let shortcuts = Arc::new(PgShortcutRepository::new(pool));

    let registration = RegistrationService::new(owners.clone());
    let service = ShortcutService::new(shortcuts.clone(), owners.clone());
    let stats = StatsService::new(shortcuts, owners);

    let owner = registration
        .register_site("a.example", "credential-hash")
        .await
        .unwrap();

    let code = service
        .register(&owner.login, "http://a.example/x")
        .await
        .unwrap();
    assert_eq!(code.len(), 8);

    let target = service.resolve_and_track(&code).await.unwrap();
    assert_eq!(target.as_deref(), Some("http://a.example/x"));

    let report = stats.stats_for(&owner.login).await.unwrap();
    assert_eq!(
        report,
        vec![UrlStats {
            long_url: "http://a.example/x".to_string(),
            visits: 1,
        }]
    );
}
