#![allow(unused_imports)]
pub mod content_helpers;
pub mod grading_helpers;
pub mod sinks;
pub mod test_db;

pub use content_helpers::*;
pub use grading_helpers::*;
pub use sinks::*;
pub use test_db::*;
