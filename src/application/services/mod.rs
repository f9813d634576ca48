pub mod bulk_transition_service;
pub mod content_lifecycle_service;
pub mod grading_config_service;
pub mod grading_service;

pub use bulk_transition_service::*;
pub use content_lifecycle_service::*;
pub use grading_config_service::*;
pub use grading_service::*;
