//! Wire types for the todo backend API

use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a todo
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
    /// Create an ID from its raw value
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw numeric value of the ID
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A todo item as persisted by the server
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    /// Server-assigned identifier
    pub id: TodoId,
    /// Short title shown in the list
    pub title: String,
    /// Longer free-form description
    #[serde(default)]
    pub description: String,
    /// Completion flag
    #[serde(default)]
    pub completed: bool,
}

/// Payload for creating a todo
///
/// The completion flag is always sent as `false`; new todos start open.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTodo {
    /// Title of the new todo
    pub title: String,
    /// Description of the new todo
    pub description: String,
    /// Completion flag, cleared at creation
    pub completed: bool,
}

impl NewTodo {
    /// Create a payload with the completion flag cleared
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            completed: false,
        }
    }
}

/// Partial update payload
///
/// Fields left as `None` are omitted from the request body and stay
/// unchanged on the server.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoPatch {
    /// New title, if changed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description, if changed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New completion flag, if changed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// Response envelope of the list endpoint
///
/// An absent `todos` key deserializes as an empty collection.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListTodosResponse {
    /// All todos in server order
    #[serde(default)]
    pub todos: Vec<Todo>,
}
