// Student Registry - API Core
//
// This crate provides the backend API for managing student records.
// Validation, lookup and partial-update rules live in domains/students;
// persistence adapters live in kernel/; HTTP wiring lives in server/.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
