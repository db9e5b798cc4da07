use crate::model::task::TaskId;
use crate::ops::store::{StoreError, TaskStore};

/// The task open in the detail panel, independent of focus mode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<TaskId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&TaskId> {
        self.selected.as_ref()
    }

    pub fn select(&mut self, store: &TaskStore, id: &TaskId) -> Result<(), StoreError> {
        if !store.contains(id) {
            return Err(StoreError::NotFound(id.clone()));
        }
        self.selected = Some(id.clone());
        Ok(())
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Drop the selection if it points at `id`
    pub fn forget(&mut self, id: &TaskId) {
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
    }
}
