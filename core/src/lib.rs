//! # Taskwire Core
//!
//! Core traits and types for the Taskwire architecture.
//!
//! This crate provides the fundamental abstractions for building the
//! task-list client as a unidirectional data flow: state lives in a store,
//! actions describe every input, reducers turn actions into state changes
//! plus effect descriptions, and injected environments supply the outside
//! world (HTTP, clock, storage).
//!
//! ## Core Concepts
//!
//! - **State**: owned domain state for a feature
//! - **Action**: all possible inputs to a reducer (commands and responses)
//! - **Reducer**: `(State, Action, Environment) → effects`
//! - **Effect**: side effect descriptions (values, not execution)
//! - **Environment**: injected dependencies via traits
//!
//! ## Example
//!
//! ```ignore
//! use taskwire_core::{Reducer, effect::Effect, smallvec, SmallVec};
//!
//! struct ListReducer;
//!
//! impl Reducer for ListReducer {
//!     type State = ListState;
//!     type Action = ListAction;
//!     type Environment = ListEnvironment;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut ListState,
//!         action: ListAction,
//!         env: &ListEnvironment,
//!     ) -> SmallVec<[Effect<ListAction>; 4]> {
//!         match action {
//!             ListAction::Refresh => smallvec![env.load_items()],
//!             ListAction::Loaded(items) => {
//!                 state.items = items;
//!                 smallvec![Effect::None]
//!             }
//!         }
//!     }
//! }
//! ```

pub mod effect;
pub mod environment;
pub mod reducer;

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use environment::{Clock, SystemClock};
pub use reducer::Reducer;
pub use smallvec::{SmallVec, smallvec};
