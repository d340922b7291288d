//! Shared domain contracts for the field sales coverage monitor.
//!
//! Everything in this crate is pure data + pure computation: aggregates,
//! their DTOs, and the coverage engine. No I/O, no UI, no storage.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod system;
