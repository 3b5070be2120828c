//! Workforce: task assignment and lifecycle tracking for field operations.
//!
//! Tasks are units of work tied to a reference entity (an order, a business
//! entity, or a shipment) and handed to an assignee. The crate creates tasks
//! in bulk, applies partial updates, reassigns every applicable task of a
//! reference to a new worker, and surfaces the tasks relevant to a date
//! window.
//!
//! # Architecture
//!
//! Workforce follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and the task type catalog
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`task`]: Task assignment, reassignment, and lifecycle tracking

pub mod task;
