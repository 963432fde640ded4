//! Actions for the todo application.
//!
//! Commands express user intent (typed into the CLI or raised by a UI);
//! responses report how a command's network call resolved. Effects feed
//! responses back through the store, so observers can subscribe to them
//! for notifications.

use taskwire_api::{Todo, TodoId};
use taskwire_macros::Action;

/// Actions of the todo application
#[derive(Action, Clone, Debug, PartialEq)]
pub enum TodoAppAction {
    // ========== Commands ==========
    /// Command: Fetch the full collection
    #[command]
    Load,

    /// Command: Composer title draft changed
    #[command]
    ComposerTitleChanged {
        /// New draft title
        title: String,
    },

    /// Command: Composer description draft changed
    #[command]
    ComposerDescriptionChanged {
        /// New draft description
        description: String,
    },

    /// Command: Expand or collapse the composer description field
    #[command]
    ComposerDescriptionToggled,

    /// Command: Submit the composer drafts as a new todo
    #[command]
    ComposerSubmitted,

    /// Command: Enter edit mode on an entry
    #[command]
    EditStarted {
        /// Entry to edit
        id: TodoId,
    },

    /// Command: Edit-mode title draft changed
    #[command]
    EditTitleChanged {
        /// Entry being edited
        id: TodoId,
        /// New draft title
        title: String,
    },

    /// Command: Edit-mode description draft changed
    #[command]
    EditDescriptionChanged {
        /// Entry being edited
        id: TodoId,
        /// New draft description
        description: String,
    },

    /// Command: Commit the edit drafts
    #[command]
    EditSaved {
        /// Entry being edited
        id: TodoId,
    },

    /// Command: Discard the edit drafts
    #[command]
    EditCancelled {
        /// Entry being edited
        id: TodoId,
    },

    /// Command: Set the completion flag of an entry
    #[command]
    ToggleRequested {
        /// Entry to toggle
        id: TodoId,
        /// Requested completion value
        completed: bool,
    },

    /// Command: Delete an entry
    #[command]
    DeleteRequested {
        /// Entry to delete
        id: TodoId,
    },

    /// Command: Dismiss the error banner
    #[command]
    ErrorDismissed,

    // ========== Responses ==========
    /// Response: Collection fetch succeeded
    #[response]
    TodosLoaded {
        /// All todos in server order
        todos: Vec<Todo>,
    },

    /// Response: Collection fetch failed
    #[response]
    LoadFailed {
        /// Underlying error message
        error: String,
    },

    /// Response: Create succeeded
    #[response]
    TodoAdded {
        /// Server-confirmed todo
        todo: Todo,
    },

    /// Response: Create failed
    #[response]
    AddFailed {
        /// Underlying error message
        error: String,
    },

    /// Response: Update succeeded
    #[response]
    TodoUpdated {
        /// Authoritative entry returned by the server
        todo: Todo,
    },

    /// Response: Update failed
    #[response]
    UpdateFailed {
        /// Entry the update targeted
        id: TodoId,
        /// Underlying error message
        error: String,
    },

    /// Response: Delete succeeded
    #[response]
    TodoDeleted {
        /// Removed entry
        id: TodoId,
    },

    /// Response: Delete failed
    #[response]
    DeleteFailed {
        /// Entry the delete targeted
        id: TodoId,
        /// Underlying error message
        error: String,
    },

    /// Response: Toggle succeeded
    #[response]
    TodoToggled {
        /// Authoritative entry returned by the server
        todo: Todo,
    },

    /// Response: Toggle failed
    #[response]
    ToggleFailed {
        /// Entry the toggle targeted
        id: TodoId,
        /// Completion value before the optimistic flip
        previous: bool,
        /// Underlying error message
        error: String,
    },

    /// Response: Composer flash duration elapsed
    #[response]
    ComposerFlashCleared,
}
