//! Taskpad: a single-page task list built on a composable store.
//!
//! The page state is one ordered [`TaskList`] plus an inline
//! [`EditSession`]. Every interaction dispatches an [`AppAction`] through
//! the store; the [`AppReducer`] applies it synchronously, and the only
//! effect in the system is the delayed delete behind
//! [`AppAction::ScheduleDelete`]. Unknown ids and stale edits reduce to
//! no-ops, which keeps replays and deferred deletes safe.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use taskpad::{AppAction, AppEnvironment, AppReducer, AppState};
//! use taskpad_core::environment::{SystemClock, UuidGenerator};
//! use taskpad_runtime::Store;
//!
//! # async fn example() {
//! // Create environment and store
//! let env = AppEnvironment::new(Arc::new(SystemClock), Arc::new(UuidGenerator));
//! let store = Store::new(AppState::new(), AppReducer::new(), env);
//!
//! // Add a task
//! let _ = store
//!     .send(AppAction::AddTask {
//!         text: "Buy milk".to_string(),
//!     })
//!     .await;
//!
//! // Read state
//! let (completed, total) = store
//!     .state(|s| (s.tasks.completed_count(), s.tasks.total_count()))
//!     .await;
//! println!("Completed: {completed}/{total}");
//! # }
//! ```

pub mod reducer;
pub mod types;

// Re-export commonly used types
pub use reducer::{AppEnvironment, AppReducer};
pub use types::{AppAction, AppState, EditSession, Task, TaskId, TaskList};
