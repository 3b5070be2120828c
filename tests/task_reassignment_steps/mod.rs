//! Step definitions for reference task reassignment scenarios.

mod given;
mod then;
mod when;
pub mod world;
