//! Application services for task editing.

mod client;
mod editor;
mod reconciler;

pub use client::{
    AcceptedMutation, MutationAction, MutationClient, MutationError, MutationResult,
};
pub use editor::{
    EditorContext, EditorError, EditorMode, EditorOutcome, EditorResult, EditorSubject,
    TaskEditor,
};
pub use reconciler::{Reconciled, StoreReconciler};
