//! HTTP adapters for the remote task service.

mod transport;

pub use transport::HttpTaskTransport;
