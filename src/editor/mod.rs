//! Single-task editor for categorized task lists.
//!
//! The editor creates, updates, marks done, or deletes one task against a
//! remote task service and keeps the local task store in step with what the
//! service accepted. The module follows hexagonal architecture:
//!
//! - Domain types and pure rules in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
