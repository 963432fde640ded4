//! Side effect descriptions.
//!
//! Effects are NOT executed when a reducer returns them. They are values
//! describing what should happen, and the store runtime executes them,
//! feeding any resulting actions back into the reducer.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// Describes a side effect to be executed by the store runtime.
///
/// # Type Parameters
///
/// - `Action`: the action type effects can produce (the feedback loop)
///
/// # Example
///
/// ```ignore
/// // An HTTP call wrapped as an effect, resolving to a response action.
/// Effect::Future(Box::pin(async move {
///     match client.list_todos().await {
///         Ok(todos) => Some(ListAction::Loaded(todos)),
///         Err(e) => Some(ListAction::LoadFailed(e.to_string())),
///     }
/// }))
/// ```
pub enum Effect<Action> {
    /// No-op effect
    None,

    /// Run effects in parallel
    Parallel(Vec<Effect<Action>>),

    /// Run effects sequentially
    Sequential(Vec<Effect<Action>>),

    /// Dispatch an action after a delay (timeouts, transient UI flashes)
    Delay {
        /// How long to wait
        duration: Duration,
        /// Action to dispatch after the delay
        action: Box<Action>,
    },

    /// Arbitrary async computation
    ///
    /// Resolves to `Option<Action>`; if `Some`, the action is fed back
    /// into the reducer.
    Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
}

// Manual Debug implementation since Future doesn't implement Debug
impl<Action> std::fmt::Debug for Effect<Action>
where
    Action: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::None => write!(f, "Effect::None"),
            Effect::Parallel(effects) => f.debug_tuple("Effect::Parallel").field(effects).finish(),
            Effect::Sequential(effects) => {
                f.debug_tuple("Effect::Sequential").field(effects).finish()
            },
            Effect::Delay { duration, action } => f
                .debug_struct("Effect::Delay")
                .field("duration", duration)
                .field("action", action)
                .finish(),
            Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
        }
    }
}

impl<Action> Effect<Action> {
    /// Combine effects to run in parallel
    #[must_use]
    pub const fn merge(effects: Vec<Effect<Action>>) -> Effect<Action> {
        Effect::Parallel(effects)
    }

    /// Chain effects to run sequentially
    #[must_use]
    pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
        Effect::Sequential(effects)
    }
}
