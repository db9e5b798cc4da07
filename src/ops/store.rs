use crate::model::task::{NewTask, Status, Task, TaskEdit, TaskId};

/// Error type for store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

/// Owns the canonical, newest-first list of tasks.
///
/// Ids are handed out from a monotonic counter, so a removed task's id is
/// never issued again for the lifetime of the store.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_seq: u64,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Snapshot in store order (most recently added first)
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn contains(&self, id: &TaskId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    // -----------------------------------------------------------------------
    // Writes
    // -----------------------------------------------------------------------

    /// Create a task in `todo` and put it at the head of the list.
    pub fn add(&mut self, new: NewTask) -> Result<Task, StoreError> {
        let title = validate_title(&new.title)?;
        if new.estimated_minutes == Some(0) {
            return Err(StoreError::Validation(
                "estimated time must be a positive number of minutes".into(),
            ));
        }

        self.next_seq += 1;
        let task = Task {
            id: TaskId::new(format!("T-{:03}", self.next_seq)),
            title,
            priority: new.priority,
            status: Status::Todo,
            reminder: new.reminder,
            description: normalize_text(new.description),
            estimated_minutes: new.estimated_minutes,
        };
        self.tasks.insert(0, task.clone());
        Ok(task)
    }

    /// Advance along todo → progress → done → todo.
    pub fn transition_status(&mut self, id: &TaskId) -> Result<Task, StoreError> {
        let task = self.find_mut(id)?;
        task.status = task.status.next();
        Ok(task.clone())
    }

    /// Jump straight to done from any status. Idempotent.
    pub fn complete(&mut self, id: &TaskId) -> Result<Task, StoreError> {
        let task = self.find_mut(id)?;
        task.status = Status::Done;
        Ok(task.clone())
    }

    /// Update the editable fields. Priority, status and reminder stay put.
    pub fn edit(&mut self, id: &TaskId, edit: TaskEdit) -> Result<Task, StoreError> {
        // Validate everything before touching the task
        let title = edit.title.as_deref().map(validate_title).transpose()?;
        if edit.estimated_minutes == Some(Some(0)) {
            return Err(StoreError::Validation(
                "estimated time must be a positive number of minutes".into(),
            ));
        }

        let task = self.find_mut(id)?;
        if let Some(title) = title {
            task.title = title;
        }
        if let Some(description) = edit.description {
            task.description = normalize_text(description);
        }
        if let Some(estimate) = edit.estimated_minutes {
            task.estimated_minutes = estimate;
        }
        Ok(task.clone())
    }

    /// Delete a task, returning it. Other tasks keep their relative order.
    pub fn remove(&mut self, id: &TaskId) -> Result<Task, StoreError> {
        let idx = self
            .tasks
            .iter()
            .position(|t| &t.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        Ok(self.tasks.remove(idx))
    }

    fn find_mut(&mut self, id: &TaskId) -> Result<&mut Task, StoreError> {
        self.tasks
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }
}

/// Trim a title and reject it if nothing is left
fn validate_title(title: &str) -> Result<String, StoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(StoreError::Validation("title cannot be empty".into()));
    }
    Ok(trimmed.to_string())
}

/// Blank optional text collapses to None
fn normalize_text(text: Option<String>) -> Option<String> {
    text.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}
