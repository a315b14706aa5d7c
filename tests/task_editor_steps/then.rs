//! Then steps for task editor BDD scenarios.

use super::world::EditorWorld;
use rstest_bdd_macros::then;
use taskdesk::editor::{
    domain::{FormField, TargetList, TaskId},
    services::{EditorError, EditorMode, MutationError},
};

fn editor_mode(world: &EditorWorld) -> Result<EditorMode, eyre::Report> {
    world
        .editor
        .as_ref()
        .map(taskdesk::editor::services::TaskEditor::mode)
        .ok_or_else(|| eyre::eyre!("no editor opened in scenario world"))
}

#[then("the editor action succeeds")]
fn action_succeeds(world: &EditorWorld) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Ok(_)) => Ok(()),
        Some(Err(err)) => Err(eyre::eyre!("expected success, got {err:?}")),
        None => Err(eyre::eyre!("no editor action recorded")),
    }
}

#[then(r#"the save fails because "{field}" is required"#)]
fn save_fails_validation(world: &EditorWorld, field: String) -> Result<(), eyre::Report> {
    let expected = match field.as_str() {
        "title" => FormField::Title,
        "task" | "body" => FormField::Body,
        other => return Err(eyre::eyre!("unknown form field {other}")),
    };
    match world.last_result.as_ref() {
        Some(Err(EditorError::Validation(validation)))
            if validation.for_field(expected).is_some() =>
        {
            Ok(())
        }
        other => Err(eyre::eyre!(
            "expected a missing {field} error, got {other:?}"
        )),
    }
}

#[then("the delete is rejected by the service")]
fn delete_rejected(world: &EditorWorld) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Err(EditorError::Mutation(MutationError::Rejected(_)))) => Ok(()),
        other => Err(eyre::eyre!("expected a rejection, got {other:?}")),
    }
}

#[then(r#"the service received a "{method}" request targeting "{target}""#)]
fn service_received(
    world: &EditorWorld,
    method: String,
    target: String,
) -> Result<(), eyre::Report> {
    let requests = world.transport.requests();
    let (sent_method, body) = requests
        .last()
        .ok_or_else(|| eyre::eyre!("no request was sent"))?;
    eyre::ensure!(
        sent_method.as_str() == method,
        "expected {method}, sent {sent_method}"
    );
    eyre::ensure!(
        body.get("target").and_then(serde_json::Value::as_str) == Some(target.as_str()),
        "expected target {target}, sent {body}"
    );
    Ok(())
}

#[then("no request was sent")]
fn no_request_sent(world: &EditorWorld) -> Result<(), eyre::Report> {
    let sent = world.transport.requests().len();
    eyre::ensure!(sent == 0, "expected no requests, {sent} were sent");
    Ok(())
}

#[then(r#"task "{id}" is stored only in "{target}""#)]
fn stored_only_in(world: &EditorWorld, id: String, target: String) -> Result<(), eyre::Report> {
    let lists = world.store.lists_containing(&TaskId::new(id.as_str())?);
    let expected = vec![TargetList::new(target)?];
    eyre::ensure!(
        lists == expected,
        "task {id} found in {lists:?}, expected {expected:?}"
    );
    Ok(())
}

#[then("the store holds no tasks")]
fn store_is_empty(world: &EditorWorld) -> Result<(), eyre::Report> {
    let snapshot = world.store.snapshot();
    eyre::ensure!(snapshot.is_empty(), "store holds {snapshot:?}");
    Ok(())
}

#[then("the editor is closed")]
fn editor_closed(world: &EditorWorld) -> Result<(), eyre::Report> {
    let mode = editor_mode(world)?;
    eyre::ensure!(mode == EditorMode::Closed, "editor is {mode:?}");
    Ok(())
}

#[then("the editor is still editing")]
fn editor_still_editing(world: &EditorWorld) -> Result<(), eyre::Report> {
    let mode = editor_mode(world)?;
    eyre::ensure!(mode == EditorMode::Editing, "editor is {mode:?}");
    Ok(())
}

#[then("the editor is still open")]
fn editor_still_open(world: &EditorWorld) -> Result<(), eyre::Report> {
    let mode = editor_mode(world)?;
    eyre::ensure!(mode != EditorMode::Closed, "editor closed unexpectedly");
    Ok(())
}
