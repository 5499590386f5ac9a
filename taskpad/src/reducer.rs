//! Reducer for the task list page.
//!
//! Every action reduces synchronously; the only effect in the system is
//! the delayed `DeleteTask` produced by `ScheduleDelete`. Stale or
//! malformed input degrades to a logged no-op, so reducing is total over
//! every reachable state.

use crate::types::{AppAction, AppState, Task, TaskId};
use std::sync::Arc;
use taskpad_core::{
    SmallVec,
    effect::Effect,
    environment::{Clock, IdGenerator},
    reducer::Reducer,
    smallvec,
};

/// Environment dependencies for the app reducer
#[derive(Clone)]
pub struct AppEnvironment {
    /// Clock for creation timestamps
    pub clock: Arc<dyn Clock>,
    /// Source of fresh task identifiers
    pub ids: Arc<dyn IdGenerator>,
}

impl AppEnvironment {
    /// Creates a new environment
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { clock, ids }
    }
}

/// Reducer handling every action on the page
#[derive(Clone, Debug)]
pub struct AppReducer;

impl AppReducer {
    /// Creates a new reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn add_task(state: &mut AppState, text: &str, env: &AppEnvironment) {
        let title = text.trim();
        if title.is_empty() {
            tracing::debug!("add with blank title ignored");
            return;
        }

        let id = TaskId::from_uuid(env.ids.generate());
        state
            .tasks
            .push(Task::new(id, title.to_string(), env.clock.now()));
    }

    fn toggle_complete(state: &mut AppState, id: &TaskId) {
        if !state.tasks.toggle(id) {
            tracing::debug!(%id, "toggle for unknown task ignored");
        }
    }

    fn delete_task(state: &mut AppState, id: &TaskId) {
        if state.edit.clear_if_editing(id) {
            tracing::debug!(%id, "edit session closed by delete");
        }
        if !state.tasks.remove(id) {
            tracing::debug!(%id, "delete for unknown task ignored");
        }
    }

    fn edit_task(state: &mut AppState, id: &TaskId, title: String) {
        // The replacement title is applied verbatim; emptiness is only
        // enforced on the add path.
        if !state.tasks.rename(id, title) {
            tracing::debug!(%id, "edit for unknown task ignored");
        }
    }

    fn begin_edit(state: &mut AppState, id: &TaskId) {
        match state.tasks.get(id) {
            Some(task) => {
                let title = task.title.clone();
                state.edit.begin(id.clone(), title);
            }
            None => tracing::debug!(%id, "begin edit for unknown task ignored"),
        }
    }

    fn update_draft(state: &mut AppState, text: String) {
        if !state.edit.set_draft(text) {
            tracing::debug!("draft update with no active edit ignored");
        }
    }

    fn commit_edit(state: &mut AppState) {
        match state.edit.take_pending() {
            Some((id, draft)) => {
                if !state.tasks.rename(&id, draft) {
                    tracing::debug!(%id, "commit target missing, draft dropped");
                }
            }
            None => tracing::debug!("commit with no active edit ignored"),
        }
    }
}

impl Default for AppReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for AppReducer {
    type State = AppState;
    type Action = AppAction;
    type Environment = AppEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            AppAction::AddTask { text } => {
                Self::add_task(state, &text, env);
                SmallVec::new()
            }
            AppAction::ToggleComplete { id } => {
                Self::toggle_complete(state, &id);
                SmallVec::new()
            }
            AppAction::DeleteTask { id } => {
                Self::delete_task(state, &id);
                SmallVec::new()
            }
            AppAction::EditTask { id, title } => {
                Self::edit_task(state, &id, title);
                SmallVec::new()
            }
            AppAction::ScheduleDelete { id, after } => {
                tracing::debug!(%id, ?after, "delete scheduled");
                smallvec![Effect::Delay {
                    duration: after,
                    action: Box::new(AppAction::DeleteTask { id }),
                }]
            }
            AppAction::BeginEdit { id } => {
                Self::begin_edit(state, &id);
                SmallVec::new()
            }
            AppAction::UpdateDraft { text } => {
                Self::update_draft(state, text);
                SmallVec::new()
            }
            AppAction::CommitEdit => {
                Self::commit_edit(state);
                SmallVec::new()
            }
        }
    }
}
