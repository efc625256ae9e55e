pub mod columns;

pub use columns::{ColumnResponse, TaskResponse};
