use crate::models::{Column, Task};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskResponse {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColumnResponse {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,
    pub name: String,
    pub tasks: Vec<TaskResponse>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id.map(|id| id.to_hex()),
            name: task.name,
            description: task.description,
        }
    }
}

impl From<Column> for ColumnResponse {
    fn from(column: Column) -> Self {
        Self {
            id: column.id.map(|id| id.to_hex()),
            name: column.name,
            tasks: column.tasks.into_iter().map(TaskResponse::from).collect(),
        }
    }
}
