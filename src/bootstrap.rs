use crate::application::services::{
    BulkTransitionService, ContentLifecycleService, GradingConfigService, GradingService,
};
use crate::config::Config;
use crate::domain::ports::{
    AuditLogRepository, Clock, ContentRepository, GradingConfigRepository,
    NotificationRepository, SubmissionRepository,
};
use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::persistence::Database;
use anyhow::Context;
use std::sync::Arc;

/// Service bundle held by the request-handling boundary
#[derive(Clone)]
pub struct CoreServices {
    pub lifecycle: ContentLifecycleService,
    pub bulk: BulkTransitionService,
    pub grading: GradingService,
    pub grading_config: GradingConfigService,
}

pub fn build_core_services(db: Database, config: &Config, clock: Arc<dyn Clock>) -> CoreServices {
    let content_repo: Arc<dyn ContentRepository> = Arc::new(db.clone());
    let audit_repo: Arc<dyn AuditLogRepository> = Arc::new(db.clone());
    let notification_repo: Arc<dyn NotificationRepository> = Arc::new(db.clone());
    let submission_repo: Arc<dyn SubmissionRepository> = Arc::new(db.clone());
    let config_repo: Arc<dyn GradingConfigRepository> = Arc::new(db);

    let lifecycle = ContentLifecycleService::new(
        content_repo.clone(),
        audit_repo,
        notification_repo,
        clock.clone(),
    )
    .with_action_url_base(config.action_url_base.clone());

    CoreServices {
        bulk: BulkTransitionService::new(lifecycle.clone()),
        lifecycle,
        grading: GradingService::new(content_repo.clone(), submission_repo, clock.clone()),
        grading_config: GradingConfigService::new(content_repo, config_repo, clock),
    }
}

/// Connects to the configured database, applies migrations and wires the services
pub async fn initialize(config: &Config) -> anyhow::Result<CoreServices> {
    let db = Database::connect(&config.database_url)
        .await
        .with_context(|| format!("connecting to {}", config.database_url))?;
    tracing::info!("Database connection established");

    db.run_migrations()
        .await
        .context("applying database migrations")?;
    tracing::info!("Database migrations applied");

    Ok(build_core_services(db, config, Arc::new(SystemClock)))
}
