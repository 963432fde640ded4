//! Reducer for the todo application.
//!
//! All list, composer, and editor logic lives here. Command actions
//! validate against current state, mark their slot in flight, and
//! return an environment effect; response actions reconcile state with
//! what the server said. The toggle path flips optimistically and
//! carries the pre-toggle value through the environment so a failure
//! can restore it.

use crate::actions::TodoAppAction;
use crate::environment::TodoAppEnvironment;
use crate::state::{ActionSlot, ComposerState, EditorDraft, LoadPhase, TodoAppState};
use std::marker::PhantomData;
use std::time::Duration;
use taskwire_api::{NewTodo, TodoPatch};
use taskwire_core::effect::Effect;
use taskwire_core::reducer::Reducer;
use taskwire_core::{SmallVec, smallvec};

/// Longest accepted title, in characters
const MAX_TITLE_LEN: usize = 500;

/// Longest accepted description, in characters
const MAX_DESCRIPTION_LEN: usize = 2000;

/// How long a composer validation flash stays visible
const FLASH_DURATION: Duration = Duration::from_millis(400);

/// Reducer for the todo application.
///
/// Generic over the environment so tests can script API outcomes
/// without a network.
#[derive(Debug, Clone)]
pub struct TodoAppReducer<E> {
    /// Phantom data to hold the environment type parameter.
    _phantom: PhantomData<E>,
}

impl<E> TodoAppReducer<E> {
    /// Create a new todo reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<E> Default for TodoAppReducer<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Reducer for TodoAppReducer<E>
where
    E: TodoAppEnvironment,
{
    type State = TodoAppState;
    type Action = TodoAppAction;
    type Environment = E;

    #[allow(clippy::too_many_lines)] // One match arm per action
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Commands ==========
            TodoAppAction::Load => {
                if state.is_in_flight(ActionSlot::Load) {
                    tracing::warn!("ignoring load while one is in flight");
                    return smallvec![Effect::None];
                }

                state.in_flight.insert(ActionSlot::Load);
                state.banner_error = None;
                // A refresh keeps showing the current collection.
                if state.phase != LoadPhase::Ready {
                    state.phase = LoadPhase::Loading;
                }

                smallvec![env.load_todos()]
            }

            TodoAppAction::ComposerTitleChanged { title } => {
                state.composer.title = title;
                smallvec![Effect::None]
            }

            TodoAppAction::ComposerDescriptionChanged { description } => {
                state.composer.description = description;
                smallvec![Effect::None]
            }

            TodoAppAction::ComposerDescriptionToggled => {
                if state.composer.show_description {
                    state.composer.show_description = false;
                    state.composer.description.clear();
                } else {
                    state.composer.show_description = true;
                }
                smallvec![Effect::None]
            }

            TodoAppAction::ComposerSubmitted => {
                if state.is_in_flight(ActionSlot::Add) {
                    tracing::warn!("ignoring submit while an add is in flight");
                    return smallvec![Effect::None];
                }

                let (title, description) = match validate_composer(&state.composer) {
                    Ok(fields) => fields,
                    Err(message) => return flash(state, message),
                };

                state.in_flight.insert(ActionSlot::Add);
                state.banner_error = None;
                state.composer.flash_error = None;

                smallvec![env.create_todo(NewTodo::new(title, description))]
            }

            TodoAppAction::EditStarted { id } => {
                let Some(todo) = state.get(id) else {
                    tracing::warn!(id = %id, "edit requested for unknown todo");
                    return smallvec![Effect::None];
                };

                let draft = EditorDraft::from_todo(todo);
                state.editors.insert(id, draft);
                smallvec![Effect::None]
            }

            TodoAppAction::EditTitleChanged { id, title } => {
                if let Some(draft) = state.editors.get_mut(&id) {
                    draft.title = title;
                }
                smallvec![Effect::None]
            }

            TodoAppAction::EditDescriptionChanged { id, description } => {
                if let Some(draft) = state.editors.get_mut(&id) {
                    draft.description = description;
                }
                smallvec![Effect::None]
            }

            TodoAppAction::EditSaved { id } => {
                let Some(draft) = state.editors.get(&id) else {
                    tracing::warn!(id = %id, "save requested with no draft open");
                    return smallvec![Effect::None];
                };

                let title = draft.title.trim().to_string();
                let description = draft.description.trim().to_string();

                // Save stays a no-op while the draft title is blank.
                if title.is_empty() {
                    return smallvec![Effect::None];
                }
                if state.is_in_flight(ActionSlot::Update(id)) {
                    tracing::warn!(id = %id, "ignoring save while an update is in flight");
                    return smallvec![Effect::None];
                }
                let Some(completed) = state.get(id).map(|t| t.completed) else {
                    tracing::warn!(id = %id, "save requested for unknown todo");
                    state.editors.remove(&id);
                    return smallvec![Effect::None];
                };

                // Edit mode exits immediately; a failed update reports
                // through the banner.
                state.editors.remove(&id);
                state.in_flight.insert(ActionSlot::Update(id));
                state.banner_error = None;

                let patch = TodoPatch {
                    title: Some(title),
                    description: Some(description),
                    completed: Some(completed),
                };
                smallvec![env.update_todo(id, patch)]
            }

            TodoAppAction::EditCancelled { id } => {
                state.editors.remove(&id);
                smallvec![Effect::None]
            }

            TodoAppAction::ToggleRequested { id, completed } => {
                if state.is_in_flight(ActionSlot::Toggle(id)) {
                    tracing::warn!(id = %id, "ignoring toggle while one is in flight");
                    return smallvec![Effect::None];
                }
                let Some(entry) = state.get_mut(id) else {
                    tracing::warn!(id = %id, "toggle requested for unknown todo");
                    return smallvec![Effect::None];
                };

                // Optimistic flip; the snapshot rides along for rollback.
                let previous = entry.completed;
                entry.completed = completed;

                state.in_flight.insert(ActionSlot::Toggle(id));
                state.banner_error = None;

                smallvec![env.toggle_complete(id, completed, previous)]
            }

            TodoAppAction::DeleteRequested { id } => {
                if state.is_in_flight(ActionSlot::Delete(id)) {
                    tracing::warn!(id = %id, "ignoring delete while one is in flight");
                    return smallvec![Effect::None];
                }
                if state.get(id).is_none() {
                    tracing::warn!(id = %id, "delete requested for unknown todo");
                    return smallvec![Effect::None];
                }

                // The entry stays visible until the server confirms; the
                // slot doubles as the removal-in-progress marker.
                state.in_flight.insert(ActionSlot::Delete(id));
                state.banner_error = None;

                smallvec![env.delete_todo(id)]
            }

            TodoAppAction::ErrorDismissed => {
                state.banner_error = None;
                smallvec![Effect::None]
            }

            // ========== Responses ==========
            TodoAppAction::TodosLoaded { todos } => {
                state.in_flight.remove(&ActionSlot::Load);
                state.phase = LoadPhase::Ready;
                state.todos = todos;
                smallvec![Effect::None]
            }

            TodoAppAction::LoadFailed { error } => {
                state.in_flight.remove(&ActionSlot::Load);
                // A failed refresh keeps the collection it already has.
                if state.phase == LoadPhase::Loading {
                    state.phase = LoadPhase::Failed;
                }
                state.banner_error = Some(format!("Failed to load todos: {error}"));
                smallvec![Effect::None]
            }

            TodoAppAction::TodoAdded { todo } => {
                state.in_flight.remove(&ActionSlot::Add);
                state.todos.push(todo);
                state.composer.title.clear();
                state.composer.description.clear();
                state.composer.show_description = false;
                smallvec![Effect::None]
            }

            TodoAppAction::AddFailed { error } => {
                state.in_flight.remove(&ActionSlot::Add);
                state.banner_error = Some(format!("Failed to add todo: {error}"));
                // Drafts are kept so the user can retry without retyping.
                flash(state, error)
            }

            TodoAppAction::TodoUpdated { todo } => {
                state.in_flight.remove(&ActionSlot::Update(todo.id));
                if let Some(entry) = state.get_mut(todo.id) {
                    *entry = todo;
                } else {
                    tracing::debug!(id = %todo.id, "dropping update result for a removed todo");
                }
                smallvec![Effect::None]
            }

            TodoAppAction::UpdateFailed { id, error } => {
                state.in_flight.remove(&ActionSlot::Update(id));
                state.banner_error = Some(format!("Failed to update todo: {error}"));
                smallvec![Effect::None]
            }

            TodoAppAction::TodoDeleted { id } => {
                state.in_flight.remove(&ActionSlot::Delete(id));
                state.todos.retain(|t| t.id != id);
                state.editors.remove(&id);
                smallvec![Effect::None]
            }

            TodoAppAction::DeleteFailed { id, error } => {
                state.in_flight.remove(&ActionSlot::Delete(id));
                state.banner_error = Some(format!("Failed to delete todo: {error}"));
                smallvec![Effect::None]
            }

            TodoAppAction::TodoToggled { todo } => {
                state.in_flight.remove(&ActionSlot::Toggle(todo.id));
                if let Some(entry) = state.get_mut(todo.id) {
                    *entry = todo;
                } else {
                    tracing::debug!(id = %todo.id, "dropping toggle result for a removed todo");
                }
                smallvec![Effect::None]
            }

            TodoAppAction::ToggleFailed {
                id,
                previous,
                error,
            } => {
                state.in_flight.remove(&ActionSlot::Toggle(id));
                if let Some(entry) = state.get_mut(id) {
                    entry.completed = previous;
                }
                state.banner_error = Some(format!("Failed to toggle todo: {error}"));
                smallvec![Effect::None]
            }

            TodoAppAction::ComposerFlashCleared => {
                state.composer.flash_error = None;
                smallvec![Effect::None]
            }
        }
    }
}

/// Check the composer drafts, returning trimmed fields or a message.
fn validate_composer(composer: &ComposerState) -> Result<(String, String), String> {
    let title = composer.title.trim();
    if title.is_empty() {
        return Err("Title is required".to_string());
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(format!("Title too long (max {MAX_TITLE_LEN} characters)"));
    }

    let description = composer.description.trim();
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(format!(
            "Description too long (max {MAX_DESCRIPTION_LEN} characters)"
        ));
    }

    Ok((title.to_string(), description.to_string()))
}

/// Surface a transient composer message and schedule its clearing.
fn flash(
    state: &mut TodoAppState,
    message: String,
) -> SmallVec<[Effect<TodoAppAction>; 4]> {
    state.composer.flash_error = Some(message);
    smallvec![Effect::Delay {
        duration: FLASH_DURATION,
        action: Box::new(TodoAppAction::ComposerFlashCleared),
    }]
}
