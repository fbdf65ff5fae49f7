pub mod field_cleaner;
pub mod field_validator;
pub mod keyword_classifier;
pub mod quality_report;

pub use field_cleaner::*;
pub use field_validator::*;
pub use keyword_classifier::*;
pub use quality_report::*;
