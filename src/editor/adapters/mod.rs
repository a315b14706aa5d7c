//! Adapter implementations for the task editor ports.

pub mod http;
pub mod memory;
