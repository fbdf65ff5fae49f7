pub mod keyword_config;
pub mod schema_config;

pub use keyword_config::KeywordConfig;
pub use schema_config::{slugify, SchemaConfig};
