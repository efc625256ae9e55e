pub mod columns;
pub mod health;

pub use columns::list_columns;
pub use health::{health_check, metrics_endpoint, readiness_check};
