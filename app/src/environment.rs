//! Environment for the todo application.
//!
//! The environment owns every external dependency of the reducer. Its
//! methods return effects that resolve to response actions, so the
//! reducer stays synchronous and tests can script outcomes without a
//! network.

use crate::actions::TodoAppAction;
use std::sync::Arc;
use taskwire_api::{NewTodo, TodoApiClient, TodoId, TodoPatch};
use taskwire_core::effect::Effect;

/// Dependencies of the todo reducer
pub trait TodoAppEnvironment: Send + Sync {
    /// Create effect to fetch the full collection
    ///
    /// Resolves to `TodosLoaded` or `LoadFailed`.
    fn load_todos(&self) -> Effect<TodoAppAction>;

    /// Create effect to create a todo
    ///
    /// Resolves to `TodoAdded` or `AddFailed`.
    fn create_todo(&self, todo: NewTodo) -> Effect<TodoAppAction>;

    /// Create effect to apply a partial update to an entry
    ///
    /// Resolves to `TodoUpdated` or `UpdateFailed`.
    fn update_todo(&self, id: TodoId, patch: TodoPatch) -> Effect<TodoAppAction>;

    /// Create effect to delete an entry
    ///
    /// Resolves to `TodoDeleted` or `DeleteFailed`.
    fn delete_todo(&self, id: TodoId) -> Effect<TodoAppAction>;

    /// Create effect to set an entry's completion flag
    ///
    /// `previous` is the pre-toggle value, echoed back in `ToggleFailed`
    /// so the optimistic flip can be reverted.
    fn toggle_complete(
        &self,
        id: TodoId,
        completed: bool,
        previous: bool,
    ) -> Effect<TodoAppAction>;
}

/// Production environment that calls the real todo backend
#[derive(Clone)]
pub struct ProductionTodoEnvironment {
    /// Todo backend client
    api: Arc<TodoApiClient>,
}

impl ProductionTodoEnvironment {
    /// Create an environment configured from `TASKWIRE_API_URL`
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(TodoApiClient::from_env())
    }

    /// Create an environment with an explicit client
    #[must_use]
    pub fn new(api: TodoApiClient) -> Self {
        Self { api: Arc::new(api) }
    }
}

impl TodoAppEnvironment for ProductionTodoEnvironment {
    fn load_todos(&self) -> Effect<TodoAppAction> {
        let api = self.api.clone();

        Effect::Future(Box::pin(async move {
            match api.list_todos().await {
                Ok(todos) => Some(TodoAppAction::TodosLoaded { todos }),
                Err(e) => Some(TodoAppAction::LoadFailed {
                    error: e.to_string(),
                }),
            }
        }))
    }

    fn create_todo(&self, todo: NewTodo) -> Effect<TodoAppAction> {
        let api = self.api.clone();

        Effect::Future(Box::pin(async move {
            match api.create_todo(&todo).await {
                Ok(todo) => Some(TodoAppAction::TodoAdded { todo }),
                Err(e) => Some(TodoAppAction::AddFailed {
                    error: e.to_string(),
                }),
            }
        }))
    }

    fn update_todo(&self, id: TodoId, patch: TodoPatch) -> Effect<TodoAppAction> {
        let api = self.api.clone();

        Effect::Future(Box::pin(async move {
            match api.update_todo(id, &patch).await {
                Ok(todo) => Some(TodoAppAction::TodoUpdated { todo }),
                Err(e) => Some(TodoAppAction::UpdateFailed {
                    id,
                    error: e.to_string(),
                }),
            }
        }))
    }

    fn delete_todo(&self, id: TodoId) -> Effect<TodoAppAction> {
        let api = self.api.clone();

        Effect::Future(Box::pin(async move {
            match api.delete_todo(id).await {
                Ok(()) => Some(TodoAppAction::TodoDeleted { id }),
                Err(e) => Some(TodoAppAction::DeleteFailed {
                    id,
                    error: e.to_string(),
                }),
            }
        }))
    }

    fn toggle_complete(
        &self,
        id: TodoId,
        completed: bool,
        previous: bool,
    ) -> Effect<TodoAppAction> {
        let api = self.api.clone();

        Effect::Future(Box::pin(async move {
            match api.toggle_complete(id, completed).await {
                Ok(todo) => Some(TodoAppAction::TodoToggled { todo }),
                Err(e) => Some(TodoAppAction::ToggleFailed {
                    id,
                    previous,
                    error: e.to_string(),
                }),
            }
        }))
    }
}
