//! Port contracts for the task lifecycle engine.
//!
//! Ports define infrastructure-agnostic interfaces used by the services.

pub mod store;

pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
