//! End-to-end editor flows against the in-memory store.

use std::sync::Arc;

use super::helpers::{
    ScriptedTransport, accepted, acknowledged, context, session, stored_task,
};
use rstest::rstest;
use serde_json::json;
use taskdesk::editor::{
    adapters::memory::InMemoryTaskStore,
    domain::{Priority, SessionContext, TargetList, TaskId, TaskType},
    ports::MutationMethod,
    services::EditorOutcome,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_appears_under_its_destination(session: SessionContext) {
    let store = Arc::new(InMemoryTaskStore::new());
    let transport = Arc::new(ScriptedTransport::with_replies([accepted("srv-42")]));
    let mut editor = context(session, &store, &transport).open_new(TargetList::TODO, TaskType::Dsa);

    {
        let fields = editor.fields_mut().expect("new task is editable");
        fields.title = "Review".to_owned();
        fields.body = "Array reversal".to_owned();
        fields.priority = Priority::new(5).expect("valid priority");
    }
    editor.set_mark_done(true).expect("TODO offers mark-done");
    editor.submit().await.expect("create should succeed");

    let requests = transport.requests();
    assert_eq!(
        requests,
        vec![(
            MutationMethod::Post,
            json!({
                "projectId": "project-9",
                "documentId": "document-4",
                "authToken": "secret-token",
                "target": "QUESTION",
                "type": "DSA",
                "title": "Review",
                "task": "Array reversal",
                "description": "",
                "priority": 5
            })
        )]
    );
    let created = store.items(&TargetList::QUESTION);
    assert_eq!(created.len(), 1);
    assert_eq!(
        created.first().map(|task| task.id().as_str()),
        Some("srv-42")
    );
    assert!(store.items(&TargetList::TODO).is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn edited_task_moves_and_keeps_its_id(session: SessionContext) {
    let task = stored_task("t-7", TaskType::Project, TargetList::TODO);
    let store = Arc::new(InMemoryTaskStore::with_tasks([task.clone()]));
    let transport = Arc::new(ScriptedTransport::with_replies([acknowledged()]));
    let mut editor = context(session, &store, &transport).open_existing(&task);

    editor.begin_edit().expect("view to edit");
    editor.fields_mut().expect("editable").description = "Ship it".to_owned();
    editor.set_mark_done(true).expect("TODO offers mark-done");
    let outcome = editor.submit().await.expect("update should succeed");

    assert!(matches!(outcome, EditorOutcome::Updated { .. }));
    let (method, body) = transport
        .requests()
        .into_iter()
        .next()
        .expect("one request sent");
    assert_eq!(method, MutationMethod::Patch);
    assert_eq!(body["id"], json!("t-7"));
    assert_eq!(body["type"], json!("PROJECT"));
    let moved = store
        .get(&TargetList::WORK, task.id())
        .expect("task moved to WORK");
    assert_eq!(moved.fields().description, "Ship it");
    assert!(store.get(&TargetList::TODO, task.id()).is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_outside_todo_is_saved_in_place(session: SessionContext) {
    let task = stored_task("t-2", TaskType::Dsa, TargetList::QUESTION);
    let store = Arc::new(InMemoryTaskStore::with_tasks([task.clone()]));
    let transport = Arc::new(ScriptedTransport::with_replies([acknowledged()]));
    let mut editor = context(session, &store, &transport).open_existing(&task);

    editor.toggle_editable().expect("view to edit");
    editor.fields_mut().expect("editable").title = "Renamed".to_owned();
    editor.submit().await.expect("update should succeed");

    let stored = store.items(&TargetList::QUESTION);
    assert_eq!(stored.len(), 1);
    assert_eq!(
        stored.first().map(|saved| saved.fields().title.as_str()),
        Some("Renamed")
    );
    assert_eq!(store.lists_containing(task.id()), vec![TargetList::QUESTION]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_task_leaves_other_tasks_alone(session: SessionContext) {
    let doomed = stored_task("t-1", TaskType::Theory, TargetList::WORK);
    let kept = stored_task("t-2", TaskType::Theory, TargetList::WORK);
    let store = Arc::new(InMemoryTaskStore::with_tasks([doomed.clone(), kept.clone()]));
    let transport = Arc::new(ScriptedTransport::with_replies([acknowledged()]));
    let mut editor = context(session, &store, &transport).open_existing(&doomed);

    editor.delete().await.expect("delete should succeed");

    let requests = transport.requests();
    assert_eq!(
        requests,
        vec![(
            MutationMethod::Delete,
            json!({
                "id": "t-1",
                "projectId": "project-9",
                "documentId": "document-4",
                "authToken": "secret-token"
            })
        )]
    );
    assert_eq!(store.items(&TargetList::WORK), vec![kept]);
    assert!(editor.is_closed());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn editors_from_one_context_share_the_store(session: SessionContext) {
    let store = Arc::new(InMemoryTaskStore::new());
    let transport = Arc::new(ScriptedTransport::with_replies([
        accepted("srv-1"),
        acknowledged(),
    ]));
    let ctx = context(session, &store, &transport);

    let mut creator = ctx.open_new(TargetList::TODO, TaskType::Others);
    {
        let fields = creator.fields_mut().expect("editable");
        fields.title = "Write notes".to_owned();
        fields.body = "Chapter 3".to_owned();
    }
    let EditorOutcome::Created(created) = creator.submit().await.expect("create") else {
        panic!("expected a created outcome");
    };

    let mut finisher = ctx.open_existing(&created);
    finisher.begin_edit().expect("view to edit");
    finisher.set_mark_done(true).expect("TODO offers mark-done");
    finisher.submit().await.expect("update");

    let id = TaskId::new("srv-1").expect("valid task id");
    assert_eq!(store.lists_containing(&id), vec![TargetList::WORK]);
    assert_eq!(transport.requests().len(), 2);
}
