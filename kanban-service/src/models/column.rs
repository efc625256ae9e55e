use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A unit of work embedded in a [`Column`]. Never stored on its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// A kanban lane. `tasks` keeps insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Column {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Task {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Some(ObjectId::new()),
            name: name.into(),
            description: description.into(),
        }
    }
}

impl Column {
    pub fn new(name: impl Into<String>, tasks: Vec<Task>) -> Self {
        Self {
            id: Some(ObjectId::new()),
            name: name.into(),
            tasks,
        }
    }
}
