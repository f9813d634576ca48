pub mod grading_rules;
pub mod lifecycle_transitions;
pub mod status_hierarchy;

pub use lifecycle_transitions::*;
