//! Adapter implementations of the task store port.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileTaskStore;
pub use memory::InMemoryTaskStore;
