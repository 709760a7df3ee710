//! Page Models
//!
//! Identifiers, navigation commands and handler outcomes shared by the controller.

use std::fmt;

/// Task identifier as rendered in `data-task-id` and `#task-{id}`
pub type TaskId = u32;

/// Subtask identifier as rendered in `data-subtask-id` and `#subtask-{id}`
pub type SubtaskId = u32;

/// Kind of rendered row a handler operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Task,
    Subtask,
}

impl EntityKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Task => "task",
            EntityKind::Subtask => "subtask",
        }
    }

    pub fn toggle_route(&self, id: u32) -> Route {
        match self {
            EntityKind::Task => Route::Toggle(id),
            EntityKind::Subtask => Route::ToggleSubtask(id),
        }
    }

    pub fn delete_route(&self, id: u32) -> Route {
        match self {
            EntityKind::Task => Route::Delete(id),
            EntityKind::Subtask => Route::DeleteSubtask(id),
        }
    }
}

/// Server route reached by full-page navigation
///
/// The server mutates state and answers with a redirect back to the dashboard,
/// so no response body is ever read here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Toggle(TaskId),
    Delete(TaskId),
    ToggleSubtask(SubtaskId),
    DeleteSubtask(SubtaskId),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Toggle(id) => format!("/toggle/{}/", id),
            Route::Delete(id) => format!("/delete/{}/", id),
            Route::ToggleSubtask(id) => format!("/subtask/toggle/{}/", id),
            Route::DeleteSubtask(id) => format!("/subtask/delete/{}/", id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Key of a pending scheduled task
///
/// At most one task is pending per key; scheduling again supersedes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKey {
    /// Fade of the n-th alert found at load
    AlertFade(usize),
    /// Removal of the n-th alert after its fade
    AlertRemove(usize),
    /// Deferred navigation (only one can ever win)
    Navigation,
}

/// Result of a delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Confirmed; navigation fires after the animation delay
    Scheduled,
    /// User declined the confirmation
    Cancelled,
    /// Row or title element not on the page
    Missing,
}

/// What `PageController::initialize` found and bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InitReport {
    /// Alerts scheduled for dismissal
    pub alerts: usize,
    /// Completed count shown, `None` when the counter element is absent
    pub completed: Option<usize>,
    /// Forms given a submit validator
    pub forms: usize,
    /// In-page anchors given smooth scrolling
    pub anchors: usize,
}

impl fmt::Display for InitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} alerts, {} forms, {} anchors, completed={}",
            self.alerts,
            self.forms,
            self.anchors,
            self.completed.map_or_else(|| "-".to_string(), |n| n.to_string())
        )
    }
}
