use super::*;
use serde_json::json;

// =============================================================
// SubmitRequest / SubmitResponse
// =============================================================

#[test]
fn submit_request_serializes_message_and_subject() {
    let req = SubmitRequest { message: "hi".to_owned(), subject: String::new() };
    assert_eq!(serde_json::to_value(&req).unwrap(), json!({ "message": "hi", "subject": "" }));
}

#[test]
fn submit_response_success_with_binding_url() {
    let resp: SubmitResponse =
        serde_json::from_value(json!({ "success": true, "telegram_binding_url": "https://t.me/x" })).unwrap();
    assert!(resp.success);
    assert_eq!(resp.telegram_binding_url.as_deref(), Some("https://t.me/x"));
    assert_eq!(resp.message, None);
}

#[test]
fn submit_response_failure_with_error() {
    let resp: SubmitResponse = serde_json::from_value(json!({ "success": false, "error": "too long" })).unwrap();
    assert!(!resp.success);
    assert_eq!(resp.error.as_deref(), Some("too long"));
}

#[test]
fn submit_response_missing_or_null_success_is_false() {
    let resp: SubmitResponse = serde_json::from_value(json!({})).unwrap();
    assert!(!resp.success);
    let resp: SubmitResponse = serde_json::from_value(json!({ "success": null })).unwrap();
    assert!(!resp.success);
}

// =============================================================
// ThreadsResponse / Thread
// =============================================================

#[test]
fn threads_response_missing_or_null_threads_is_empty() {
    let resp: ThreadsResponse = serde_json::from_value(json!({})).unwrap();
    assert!(resp.threads.is_empty());
    let resp: ThreadsResponse = serde_json::from_value(json!({ "threads": null })).unwrap();
    assert!(resp.threads.is_empty());
}

#[test]
fn thread_with_messages_is_conversation() {
    let thread: Thread = serde_json::from_value(json!({
        "messages": [
            { "text": "hello", "created_at": "2024-01-01T10:00:00Z", "is_from_admin": false },
            { "text": "hi there", "created_at": "2024-01-01T11:00:00Z", "is_from_admin": true }
        ]
    }))
    .unwrap();
    let Thread::Conversation(messages) = thread else {
        panic!("expected conversation");
    };
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].text, "hello");
    assert!(!messages[0].is_from_admin);
    assert!(messages[1].is_from_admin);
}

#[test]
fn thread_with_replies_is_flat_and_keeps_order() {
    let thread: Thread = serde_json::from_value(json!({
        "id": 42,
        "created_at": "2024-01-01T10:00:00Z",
        "message": "question",
        "replies": [
            { "text": "second", "created_at": "2024-01-03T10:00:00Z" },
            { "text": "first", "created_at": "2024-01-02T10:00:00Z" }
        ]
    }))
    .unwrap();
    let Thread::Flat(flat) = thread else {
        panic!("expected flat thread");
    };
    assert_eq!(flat.id, "42");
    assert_eq!(flat.message, "question");
    let texts: Vec<_> = flat.replies.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(texts, ["second", "first"]);
}

#[test]
fn thread_with_empty_messages_falls_back_to_flat() {
    let thread: Thread = serde_json::from_value(json!({ "id": "a1", "message": "m", "messages": [] })).unwrap();
    assert_eq!(
        thread,
        Thread::Flat(FlatThread { id: "a1".to_owned(), message: "m".to_owned(), ..FlatThread::default() })
    );
}

#[test]
fn thread_null_fields_read_as_empty() {
    let thread: Thread = serde_json::from_value(json!({
        "id": null,
        "created_at": null,
        "message": null,
        "replies": [{ "text": null, "created_at": null }]
    }))
    .unwrap();
    let Thread::Flat(flat) = thread else {
        panic!("expected flat thread");
    };
    assert_eq!(flat.id, "");
    assert_eq!(flat.message, "");
    assert_eq!(flat.replies, vec![Reply::default()]);
}

#[test]
fn thread_rejects_structured_id() {
    let result = serde_json::from_value::<Thread>(json!({ "id": { "nested": 1 } }));
    assert!(result.is_err());
}
