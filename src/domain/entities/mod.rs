pub mod audit;
pub mod content;
pub mod grading;
pub mod notification;

pub use audit::*;
pub use content::*;
pub use grading::*;
pub use notification::*;
