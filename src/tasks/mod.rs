//! Task lifecycle and priority recalculation for Triage.
//!
//! This module owns the full life of a task: creation as Active, the move
//! onto the watchlist once its subtasks are done, confirmation or rework
//! from the watchlist, deadline-driven priority escalation, and the
//! retention and timeout sweeps that run at startup. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
