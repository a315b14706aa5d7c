//! Domain model for the task editor.
//!
//! Holds the task entity, its type and target list, the session context,
//! and the two pure rules the editor is built around: the done-destination
//! resolver and the payload builder. No network or store concerns live here.

mod error;
mod ids;
mod kind;
mod payload;
mod resolve;
mod session;
mod target;
mod task;

pub use error::{FieldError, FormField, TaskDomainError, ValidationError};
pub use ids::{EditorSessionId, TaskId};
pub use kind::TaskType;
pub use payload::{
    DeletePayload, PayloadInput, TaskPayload, build_delete_payload, build_payload,
};
pub use resolve::{TargetMove, destination, done_destination, resolve};
pub use session::SessionContext;
pub use target::TargetList;
pub use task::{Priority, Task, TaskFields};
