//! Task assignment and lifecycle management.
//!
//! Tasks are created in bulk against a reference entity, moved through the
//! `Assigned`, `Started`, `Completed`, and `Cancelled` statuses, and handed
//! to new assignees when their reference is reassigned. The task type
//! catalog decides which kinds of work apply to each reference type. The
//! module follows hexagonal architecture:
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
