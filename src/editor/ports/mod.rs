//! Port contracts for the task editor.
//!
//! Ports define the two collaborators the editor is injected with: the local
//! task store and the transport to the remote task service.

pub mod store;
pub mod transport;

pub use store::TaskStore;
pub use transport::{MutationMethod, MutationTransport, TransportError, TransportResult};
