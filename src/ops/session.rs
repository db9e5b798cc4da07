use chrono::NaiveDateTime;
use log::{debug, info};

use crate::model::task::{NewTask, Status, Task, TaskEdit, TaskId};
use crate::ops::board::Board;
use crate::ops::focus::FocusSelector;
use crate::ops::reminder::{Notification, NotificationSink, ReminderScheduler};
use crate::ops::selection::Selection;
use crate::ops::store::{StoreError, TaskStore};

/// Root context owning the store and everything that refers into it.
///
/// Views get read access and call the narrow operations below; none of them
/// holds the task list mutably. Every operation that drops a task also drops
/// the selection and focus pointing at it before returning.
#[derive(Debug, Default)]
pub struct Session {
    store: TaskStore,
    focus: FocusSelector,
    selection: Selection,
    reminders: ReminderScheduler,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    pub fn tasks(&self) -> &[Task] {
        self.store.list()
    }

    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.store.get(id)
    }

    pub fn board(&self) -> Board<'_> {
        Board::project(self.store.list())
    }

    pub fn reminders(&self) -> &ReminderScheduler {
        &self.reminders
    }

    pub fn focused_id(&self) -> Option<&TaskId> {
        self.focus.focused()
    }

    /// The focused task, resolved against the store
    pub fn focused_task(&self) -> Option<&Task> {
        self.focus.focused().and_then(|id| self.store.get(id))
    }

    pub fn selected_id(&self) -> Option<&TaskId> {
        self.selection.selected()
    }

    /// The task open in the detail panel, resolved against the store
    pub fn selected_task(&self) -> Option<&Task> {
        self.selection.selected().and_then(|id| self.store.get(id))
    }

    /// Whether automatic focus has anything to show
    pub fn can_focus(&self) -> bool {
        FocusSelector::candidate(&self.store).is_some()
    }

    // -----------------------------------------------------------------------
    // Task operations
    // -----------------------------------------------------------------------

    /// Add a task, arming its reminder (if any) relative to `now`
    pub fn add_task(&mut self, new: NewTask, now: NaiveDateTime) -> Result<Task, StoreError> {
        let task = self.store.add(new)?;
        info!(
            "event=task_added id={} priority={:?}",
            task.id, task.priority
        );
        if let Some(fire_at) = self.reminders.schedule(&task, now) {
            info!("event=reminder_armed id={} fire_at={}", task.id, fire_at);
        }
        Ok(task)
    }

    pub fn transition(&mut self, id: &TaskId) -> Result<Task, StoreError> {
        let result = self.store.transition_status(id);
        self.settle(id, result, "task_moved")
    }

    pub fn complete(&mut self, id: &TaskId) -> Result<Task, StoreError> {
        let result = self.store.complete(id);
        self.settle(id, result, "task_completed")
    }

    pub fn edit(&mut self, id: &TaskId, edit: TaskEdit) -> Result<Task, StoreError> {
        let result = self.store.edit(id, edit);
        self.settle(id, result, "task_edited")
    }

    /// Delete a task and every reference to it in one step.
    ///
    /// A missing id still clears any stale selection or focus holding it.
    pub fn remove(&mut self, id: &TaskId) -> Result<Task, StoreError> {
        let result = self.store.remove(id);
        self.focus.forget(id);
        self.selection.forget(id);
        match &result {
            Ok(task) => info!("event=task_removed id={}", task.id),
            Err(e) => debug!("event=task_removed status=stale error=\"{}\"", e),
        }
        result
    }

    /// Clear stale references when an operation misses the store
    fn settle(
        &mut self,
        id: &TaskId,
        result: Result<Task, StoreError>,
        event: &str,
    ) -> Result<Task, StoreError> {
        match &result {
            Ok(task) => info!("event={} id={} status={:?}", event, task.id, task.status),
            Err(StoreError::NotFound(_)) => {
                self.focus.forget(id);
                self.selection.forget(id);
                debug!("event={} status=stale id={}", event, id);
            }
            Err(e) => debug!("event={} status=rejected error=\"{}\"", event, e),
        }
        result
    }

    // -----------------------------------------------------------------------
    // Selection / detail panel
    // -----------------------------------------------------------------------

    pub fn select(&mut self, id: &TaskId) -> Result<(), StoreError> {
        self.selection.select(&self.store, id)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Detail panel "start": advance a to-do task and close the panel
    pub fn start_selected(&mut self) -> Result<Task, StoreError> {
        let id = self.selected_or_err()?;
        let Some(task) = self.store.get(&id) else {
            self.selection.clear();
            return Err(StoreError::NotFound(id));
        };
        if task.status != Status::Todo {
            return Err(StoreError::Validation(format!(
                "only to-do tasks can be started ({} is {})",
                id,
                task.status.label()
            )));
        }
        self.selection.clear();
        self.transition(&id)
    }

    /// Detail panel "mark done": complete and close the panel
    pub fn complete_selected(&mut self) -> Result<Task, StoreError> {
        let id = self.selected_or_err()?;
        self.selection.clear();
        self.complete(&id)
    }

    fn selected_or_err(&self) -> Result<TaskId, StoreError> {
        self.selection
            .selected()
            .cloned()
            .ok_or_else(|| StoreError::Validation("no task selected".into()))
    }

    // -----------------------------------------------------------------------
    // Focus mode
    // -----------------------------------------------------------------------

    /// Focus the first to-do (else first in-progress) task. None if neither exists.
    pub fn enter_focus_auto(&mut self) -> Option<TaskId> {
        let id = self.focus.enter_auto(&self.store)?;
        info!("event=focus_entered id={} mode=auto", id);
        Some(id)
    }

    pub fn enter_focus(&mut self, id: &TaskId) -> Result<(), StoreError> {
        self.focus.enter(&self.store, id)?;
        info!("event=focus_entered id={} mode=explicit", id);
        Ok(())
    }

    pub fn exit_focus(&mut self) {
        self.focus.exit();
    }

    /// Move the focused task to its next stage and leave focus mode
    pub fn advance_focused(&mut self) -> Result<Task, StoreError> {
        let id = self.focused_or_err()?;
        self.focus.exit();
        self.transition(&id)
    }

    /// Delete the focused task and leave focus mode
    pub fn remove_focused(&mut self) -> Result<Task, StoreError> {
        let id = self.focused_or_err()?;
        self.focus.exit();
        self.remove(&id)
    }

    fn focused_or_err(&self) -> Result<TaskId, StoreError> {
        self.focus
            .focused()
            .cloned()
            .ok_or_else(|| StoreError::Validation("focus mode is not active".into()))
    }

    // -----------------------------------------------------------------------
    // Reminders
    // -----------------------------------------------------------------------

    /// Deliver every reminder due at `now` to `sink` and return them
    pub fn fire_due_reminders(
        &mut self,
        now: NaiveDateTime,
        sink: &mut dyn NotificationSink,
    ) -> Vec<Notification> {
        let fired = self.reminders.due(now);
        for n in &fired {
            info!("event=reminder_fired id={}", n.task_id);
            sink.notify(&n.title, &n.body);
        }
        fired
    }
}
