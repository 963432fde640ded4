//! State for the todo application.
//!
//! The root state owns the authoritative collection of todos in server
//! order, plus the transient UI state around it: the new-todo composer,
//! per-entry edit drafts, in-flight action markers, and the error banner.

use std::collections::{HashMap, HashSet};
use taskwire_api::{Todo, TodoId};

/// Lifecycle of the collection fetch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    /// No fetch attempted yet
    #[default]
    Idle,
    /// Initial fetch in flight
    Loading,
    /// Collection populated
    Ready,
    /// Initial fetch failed, nothing to show
    Failed,
}

/// In-flight marker keyed by action type and target entry
///
/// At most one request per slot runs at a time; a command whose slot is
/// already occupied is ignored. Distinct slots run concurrently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionSlot {
    /// Collection fetch
    Load,
    /// Creation of a new todo
    Add,
    /// Update of one entry
    Update(TodoId),
    /// Deletion of one entry
    Delete(TodoId),
    /// Completion toggle of one entry
    Toggle(TodoId),
}

/// Draft state of the new-todo composer
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComposerState {
    /// Draft title
    pub title: String,
    /// Draft description
    pub description: String,
    /// Whether the optional description field is expanded
    pub show_description: bool,
    /// Transient validation/failure indication, auto-cleared shortly
    /// after it is set
    pub flash_error: Option<String>,
}

/// Draft fields of an entry in edit mode
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorDraft {
    /// Draft title
    pub title: String,
    /// Draft description
    pub description: String,
}

impl EditorDraft {
    /// Seed a draft from the current entry values
    #[must_use]
    pub fn from_todo(todo: &Todo) -> Self {
        Self {
            title: todo.title.clone(),
            description: todo.description.clone(),
        }
    }
}

/// Root state of the todo application
#[derive(Clone, Debug, Default)]
pub struct TodoAppState {
    /// Authoritative collection in server order
    pub todos: Vec<Todo>,
    /// Lifecycle of the collection fetch
    pub phase: LoadPhase,
    /// Latest surfaced error, shown until dismissed or a new request starts
    pub banner_error: Option<String>,
    /// New-todo composer
    pub composer: ComposerState,
    /// Entries currently in edit mode, keyed by id
    pub editors: HashMap<TodoId, EditorDraft>,
    /// Actions currently in flight
    pub in_flight: HashSet<ActionSlot>,
}

impl TodoAppState {
    /// Creates a new empty state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of todos
    #[must_use]
    pub fn total(&self) -> usize {
        self.todos.len()
    }

    /// Returns the number of open todos
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.todos.iter().filter(|t| !t.completed).count()
    }

    /// Returns the number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }

    /// Returns the entry with the given id
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Returns a mutable reference to the entry with the given id
    pub(crate) fn get_mut(&mut self, id: TodoId) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|t| t.id == id)
    }

    /// Checks whether an action slot is occupied
    #[must_use]
    pub fn is_in_flight(&self, slot: ActionSlot) -> bool {
        self.in_flight.contains(&slot)
    }

    /// Checks whether an entry is in edit mode
    #[must_use]
    pub fn is_editing(&self, id: TodoId) -> bool {
        self.editors.contains_key(&id)
    }
}
