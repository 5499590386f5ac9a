//! Domain types for the task list page.
//!
//! A page is a single ordered list of tasks plus an inline edit session.
//! Reads are public; updates stay crate-internal so that every mutation
//! flows through the reducer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Unique identifier for a task
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new random `TaskId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `TaskId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single task on the page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, fixed for the task's lifetime
    pub id: TaskId,
    /// Display title
    pub title: String,
    /// Whether the task is completed
    pub completed: bool,
    /// When the task was created
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new incomplete task
    #[must_use]
    pub const fn new(id: TaskId, title: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            completed: false,
            created_at,
        }
    }

    /// Flips the completion flag
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Replaces the title, stored exactly as given
    pub fn rename(&mut self, title: String) {
        self.title = title;
    }
}

/// Ordered collection of tasks.
///
/// Tasks keep insertion order, oldest first, and ids are pairwise
/// distinct. Update methods are crate-internal; the reducer is the only
/// writer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Creates an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Returns the number of tasks, completed or not
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.tasks.len()
    }

    /// Returns the number of completed tasks
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// True when the list holds no tasks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns a task by id
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Checks if a task exists
    #[must_use]
    pub fn exists(&self, id: &TaskId) -> bool {
        self.tasks.iter().any(|t| &t.id == id)
    }

    /// Tasks in insertion order
    #[must_use]
    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Iterates tasks in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Appends a task. Callers supply a freshly minted id, keeping ids
    /// pairwise distinct.
    pub(crate) fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Toggles completion for `id`. Returns false when no task matches.
    pub(crate) fn toggle(&mut self, id: &TaskId) -> bool {
        if let Some(task) = self.tasks.iter_mut().find(|t| &t.id == id) {
            task.toggle();
            true
        } else {
            false
        }
    }

    /// Replaces the title for `id`. Returns false when no task matches.
    pub(crate) fn rename(&mut self, id: &TaskId, title: String) -> bool {
        if let Some(task) = self.tasks.iter_mut().find(|t| &t.id == id) {
            task.rename(title);
            true
        } else {
            false
        }
    }

    /// Removes the task with `id`, keeping the order of the rest.
    /// Returns false when no task matches.
    pub(crate) fn remove(&mut self, id: &TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| &t.id != id);
        self.tasks.len() < before
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Inline edit session for the task list.
///
/// At most one edit is active at a time. While `Editing`, the target task
/// is present in the list; deleting it returns the session to `Idle`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditSession {
    /// No edit in progress
    #[default]
    Idle,
    /// A task is being edited
    Editing {
        /// Task under edit
        task_id: TaskId,
        /// Uncommitted draft title
        draft: String,
    },
}

impl EditSession {
    /// True when any edit is in progress
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    /// True when `id` is the task under edit
    #[must_use]
    pub fn is_editing(&self, id: &TaskId) -> bool {
        matches!(self, Self::Editing { task_id, .. } if task_id == id)
    }

    /// The task under edit, if any
    #[must_use]
    pub const fn active_task(&self) -> Option<&TaskId> {
        match self {
            Self::Idle => None,
            Self::Editing { task_id, .. } => Some(task_id),
        }
    }

    /// The uncommitted draft title, if any
    #[must_use]
    pub fn draft(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Editing { draft, .. } => Some(draft),
        }
    }

    /// Starts editing `task_id`, seeding the draft with the current
    /// title. Any prior session is discarded.
    pub(crate) fn begin(&mut self, task_id: TaskId, current_title: String) {
        *self = Self::Editing {
            task_id,
            draft: current_title,
        };
    }

    /// Overwrites the draft. Returns false when no edit is in progress.
    pub(crate) fn set_draft(&mut self, text: String) -> bool {
        if let Self::Editing { draft, .. } = self {
            *draft = text;
            true
        } else {
            false
        }
    }

    /// Ends the session, returning the task id and draft when one was
    /// active.
    pub(crate) fn take_pending(&mut self) -> Option<(TaskId, String)> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Editing { task_id, draft } => Some((task_id, draft)),
        }
    }

    /// Returns to `Idle` when `id` is the task under edit. Returns true
    /// when a session was cleared.
    pub(crate) fn clear_if_editing(&mut self, id: &TaskId) -> bool {
        if self.is_editing(id) {
            *self = Self::Idle;
            true
        } else {
            false
        }
    }
}

/// Top-level state of the page: the task list plus the edit session
///
/// The store owns exactly one `AppState`. Views read it and dispatch
/// [`AppAction`]s rather than mutating it directly.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// All tasks in insertion order
    pub tasks: TaskList,
    /// Inline edit state for the list
    pub edit: EditSession,
}

impl AppState {
    /// Creates an empty state with no active edit
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: TaskList::new(),
            edit: EditSession::Idle,
        }
    }
}

/// Actions driving the task list and its edit session
///
/// Every user interaction on the page maps to one action. Reducing an
/// action is total: malformed or stale input degrades to a no-op rather
/// than an error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppAction {
    // ========== Task list ==========
    /// Adds a task titled with the trimmed `text`; ignored when the
    /// trimmed text is empty
    AddTask {
        /// Raw input text; surrounding whitespace is stripped
        text: String,
    },

    /// Flips completion for a task; ignored for unknown ids
    ToggleComplete {
        /// Task to toggle
        id: TaskId,
    },

    /// Removes a task; ignored for unknown ids
    DeleteTask {
        /// Task to delete
        id: TaskId,
    },

    /// Replaces a task's title verbatim; ignored for unknown ids
    EditTask {
        /// Task to retitle
        id: TaskId,
        /// New title, stored as given
        title: String,
    },

    /// Schedules a `DeleteTask` to fire after a delay, e.g. once a
    /// removal animation has finished
    ScheduleDelete {
        /// Task to delete when the delay elapses
        id: TaskId,
        /// How long to wait before deleting
        after: Duration,
    },

    // ========== Edit session ==========
    /// Opens an edit session for a task, seeding the draft with its
    /// current title; ignored for unknown ids
    BeginEdit {
        /// Task to edit
        id: TaskId,
    },

    /// Replaces the draft title; ignored when no edit is active
    UpdateDraft {
        /// New draft text, stored as typed
        text: String,
    },

    /// Applies the draft to the task under edit and ends the session;
    /// ignored when no edit is active
    CommitEdit,
}
