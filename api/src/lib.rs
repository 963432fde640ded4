//! # Taskwire API Client
//!
//! HTTP client for the todo backend. Wraps the five CRUD endpoints in
//! typed async methods and normalizes every failure into [`ApiError`].
//!
//! ## Example
//!
//! ```no_run
//! use taskwire_api::{NewTodo, TodoApiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client from TASKWIRE_API_URL environment variable
//!     let client = TodoApiClient::from_env();
//!
//!     let created = client
//!         .create_todo(&NewTodo::new("Buy milk", "Semi-skimmed"))
//!         .await?;
//!
//!     println!("Created: {created:?}");
//!
//!     let todos = client.list_todos().await?;
//!     println!("{} todos on the server", todos.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - List, create, update, delete, and toggle operations
//! - Partial updates that omit unchanged fields from the wire
//! - Server `detail` error bodies surfaced as error messages
//! - Tolerant of empty delete responses and absent list envelopes

pub mod client;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use client::TodoApiClient;
pub use error::ApiError;
pub use types::{ListTodosResponse, NewTodo, Todo, TodoId, TodoPatch};
