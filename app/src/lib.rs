//! Taskwire todo client.
//!
//! A composable client for the Taskwire todo backend, built on the
//! store/reducer/effect runtime. The library holds all application
//! logic; the `taskwire` binary wraps it in an interactive shell.
//!
//! - Authoritative todo collection in server order, reconciled from
//!   response actions
//! - New-todo composer with local validation and a transient flash
//! - Per-entry edit drafts committed as full-field updates
//! - Optimistic completion toggle with rollback on failure
//! - Theme preference persisted through a second, independent store
//! - Testing via `ReducerTest` with a scripted environment
//!
//! # Quick Start
//!
//! ```no_run
//! use taskwire_app::{ProductionTodoEnvironment, TodoAppAction, TodoAppReducer, TodoAppState};
//! use taskwire_runtime::Store;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create environment and store
//! let env = ProductionTodoEnvironment::from_env();
//! let store = Store::new(TodoAppState::new(), TodoAppReducer::new(), env);
//!
//! // Fetch the collection and wait for the response to land
//! let mut handle = store.send(TodoAppAction::Load).await?;
//! handle.wait().await;
//!
//! let total = store.state(|s| s.total()).await;
//! println!("{total} todos");
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod environment;
pub mod reducer;
pub mod state;
pub mod theme;

// Re-export commonly used types
pub use actions::TodoAppAction;
pub use environment::{ProductionTodoEnvironment, TodoAppEnvironment};
pub use reducer::TodoAppReducer;
pub use state::{ActionSlot, ComposerState, EditorDraft, LoadPhase, TodoAppState};
pub use theme::{
    FileThemeStorage, Theme, ThemeAction, ThemeEnvironment, ThemeReducer, ThemeState,
    ThemeStorage,
};
