pub mod audit_log_repository;
pub mod clock;
pub mod content_repository;
pub mod grading_config_repository;
pub mod notification_repository;
pub mod submission_repository;

pub use audit_log_repository::AuditLogRepository;
pub use clock::Clock;
pub use content_repository::ContentRepository;
pub use grading_config_repository::GradingConfigRepository;
pub use notification_repository::NotificationRepository;
pub use submission_repository::SubmissionRepository;
