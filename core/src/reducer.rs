//! The core trait for business logic.

use crate::effect::Effect;
use smallvec::SmallVec;

/// The Reducer trait, the single place business logic lives.
///
/// A reducer validates the incoming action, updates state in place, and
/// returns effect descriptions for the runtime to execute. It never
/// performs I/O itself.
///
/// # Example
///
/// ```ignore
/// impl Reducer for TodoAppReducer {
///     type State = TodoAppState;
///     type Action = TodoAppAction;
///     type Environment = ProductionTodoEnvironment;
///
///     fn reduce(
///         &self,
///         state: &mut TodoAppState,
///         action: TodoAppAction,
///         env: &ProductionTodoEnvironment,
///     ) -> SmallVec<[Effect<TodoAppAction>; 4]> {
///         match action {
///             TodoAppAction::Load => {
///                 state.phase = LoadPhase::Loading;
///                 smallvec![env.load_todos()]
///             }
///             _ => smallvec![Effect::None],
///         }
///     }
/// }
/// ```
pub trait Reducer {
    /// The state type this reducer operates on
    type State;

    /// The action type this reducer processes
    type Action;

    /// The environment type with injected dependencies
    type Environment;

    /// Reduce an action into state changes and effects.
    ///
    /// Most actions produce zero or one effect; the inline capacity of
    /// the returned `SmallVec` keeps the common path allocation-free.
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]>;
}
