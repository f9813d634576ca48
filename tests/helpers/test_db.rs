#![allow(dead_code)]
use chrono::{DateTime, TimeZone, Utc};
use coursedesk::bootstrap::{build_core_services, CoreServices};
use coursedesk::config::Config;
use coursedesk::domain::ports::Clock;
use coursedesk::infrastructure::persistence::Database;
use std::sync::Arc;
use uuid::Uuid;

/// RFC 3339 rendering of [`FixedClock`]'s instant
pub const FIXED_NOW: &str = "2026-03-01T12:00:00+00:00";

/// Clock pinned to 2026-03-01T12:00:00Z
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }
}

pub fn test_database_url() -> String {
    // File-based SQLite, one file per test for parallel execution
    let path = std::env::temp_dir().join(format!("coursedesk_test_{}.db", Uuid::new_v4()));
    format!("sqlite://{}?mode=rwc", path.display())
}

pub async fn setup_test_db() -> Database {
    let db = Database::connect(&test_database_url())
        .await
        .expect("Failed to connect to test database");

    db.run_migrations().await.expect("Failed to run migrations");

    db
}

pub fn test_config() -> Config {
    Config::from_lookup(|_| None).expect("default config")
}

pub fn test_services(db: &Database) -> CoreServices {
    build_core_services(db.clone(), &test_config(), Arc::new(FixedClock))
}
