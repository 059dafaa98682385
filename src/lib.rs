//! Triage: deadline-aware personal task tracking engine.
//!
//! This crate provides the core functionality for tracking tasks through
//! their lifecycle, recalculating priorities against approaching deadlines,
//! and maintaining the collection across restarts.
//!
//! # Architecture
//!
//! Triage follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (JSON file, memory)
//!
//! # Modules
//!
//! - [`tasks`]: Task lifecycle, priority recalculation, and persistence

pub mod tasks;
