//! Kanban service: lists board columns and their embedded tasks from MongoDB.

pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
