// tests/support/helpers.rs
use std::sync::Arc;

use slugged::application::ports::{time::Clock, util::SlugGenerator};
use slugged::application::services::ApplicationServices;
use slugged::domain::page::{Page, PageRepository};
use slugged::domain::slug::SlugConfig;
use slugged::infrastructure::{database, util::DefaultSlugGenerator};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use super::mocks::FixedClock;

/// Fresh in-memory SQLite database with migrations applied.
///
/// A single connection keeps every query on the same in-memory database.
pub async fn memory_pool() -> Arc<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("open in-memory sqlite");
    database::run_migrations(&pool)
        .await
        .expect("run migrations");
    Arc::new(pool)
}

pub fn services_with<S>(repo: Arc<S>, clock: Arc<dyn Clock>, config: SlugConfig) -> ApplicationServices
where
    S: PageRepository + 'static,
{
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    ApplicationServices::new(repo, clock, slugger, config, 3).expect("valid services")
}

pub fn services<S>(repo: Arc<S>) -> ApplicationServices
where
    S: PageRepository + 'static,
{
    services_with(repo, Arc::new(FixedClock), Page::slug_config())
}
