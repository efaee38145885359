//! Wire DTOs for the feedback submission and thread-list endpoints.
//!
//! DESIGN
//! ======
//! The Django views are lenient about what they emit: ids may be numbers
//! or strings, text fields may be `null`, and a thread's shape is implied by
//! which arrays are populated. Deserialization absorbs that looseness here
//! so the state and rendering code only ever sees the two clean shapes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST {submit_url}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubmitRequest {
    pub message: String,
    /// Empty string when the user left the subject blank.
    pub subject: String,
}

/// Body returned by the submission endpoint, success or not.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SubmitResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    /// Confirmation text to show on success.
    #[serde(default)]
    pub message: Option<String>,
    /// Deep link for binding the account to the Telegram bot.
    #[serde(default)]
    pub telegram_binding_url: Option<String>,
    /// Failure reason when `success` is false.
    #[serde(default)]
    pub error: Option<String>,
}

/// Body returned by `GET {threads_url}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ThreadsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub threads: Vec<Thread>,
}

/// A support conversation as returned by the thread-list endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "ThreadWire")]
pub enum Thread {
    /// Original message followed by admin replies.
    Flat(FlatThread),
    /// Full back-and-forth history.
    Conversation(Vec<Message>),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlatThread {
    /// Server id rendered as text; empty when the server omitted it.
    pub id: String,
    pub created_at: String,
    pub message: String,
    pub replies: Vec<Reply>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Reply {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Message {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_from_admin: bool,
}

#[derive(Deserialize)]
struct ThreadWire {
    #[serde(default, deserialize_with = "deserialize_id")]
    id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    replies: Vec<Reply>,
    #[serde(default, deserialize_with = "null_as_default")]
    messages: Vec<Message>,
}

impl From<ThreadWire> for Thread {
    fn from(wire: ThreadWire) -> Self {
        // A populated `messages` array wins; an empty one falls back to the
        // flat shape.
        if wire.messages.is_empty() {
            Self::Flat(FlatThread {
                id: wire.id,
                created_at: wire.created_at,
                message: wire.message,
                replies: wire.replies,
            })
        } else {
            Self::Conversation(wire.messages)
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;

    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(String::new()),
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("unsupported thread id: {other}"))),
    }
}
