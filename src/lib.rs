//! Taskdesk: task-mutation editor for categorized task lists.
//!
//! This crate lets a host application create, edit, mark done, or delete a
//! single task belonging to one of several target lists, and keeps a
//! client-side task store consistent with the outcome of each remote
//! mutation.
//!
//! # Architecture
//!
//! Taskdesk follows hexagonal architecture principles:
//!
//! - **Domain**: Pure rules with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the store and the transport
//! - **Adapters**: Concrete implementations of ports (memory, HTTP)
//!
//! # Modules
//!
//! - [`editor`]: Editor state machine, mutation client, and store reconciler
//! - [`config`]: Task service endpoint configuration

pub mod config;
pub mod editor;
