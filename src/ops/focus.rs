use crate::model::task::{Status, TaskId};
use crate::ops::board::Board;
use crate::ops::store::{StoreError, TaskStore};

/// Which task, if any, is shown in the focus overlay
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusSelector {
    focused: Option<TaskId>,
}

impl FocusSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> Option<&TaskId> {
        self.focused.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.focused.is_some()
    }

    /// The task focus mode would pick on its own: first to-do, else first in
    /// progress. None means focus mode is unavailable.
    pub fn candidate(store: &TaskStore) -> Option<&TaskId> {
        let board = Board::project(store.list());
        board
            .column(Status::Todo)
            .first()
            .or_else(|| board.column(Status::Progress).first())
            .copied()
            .map(|t| &t.id)
    }

    /// Enter focus on the automatic candidate. No-op when there is none.
    pub fn enter_auto(&mut self, store: &TaskStore) -> Option<TaskId> {
        let id = Self::candidate(store)?.clone();
        self.focused = Some(id.clone());
        Some(id)
    }

    /// Enter focus on a specific task, whatever its status
    pub fn enter(&mut self, store: &TaskStore, id: &TaskId) -> Result<(), StoreError> {
        if !store.contains(id) {
            return Err(StoreError::NotFound(id.clone()));
        }
        self.focused = Some(id.clone());
        Ok(())
    }

    pub fn exit(&mut self) {
        self.focused = None;
    }

    /// Drop the focus if it points at `id`
    pub fn forget(&mut self, id: &TaskId) {
        if self.focused.as_ref() == Some(id) {
            self.focused = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::{NewTask, Priority};

    fn add(store: &mut TaskStore, title: &str) -> TaskId {
        store.add(NewTask::new(title, Priority::Medium)).unwrap().id
    }

    #[test]
    fn test_auto_prefers_first_todo() {
        let mut store = TaskStore::new();
        let older = add(&mut store, "older");
        let newer = add(&mut store, "newer");
        store.transition_status(&older).unwrap();

        let mut focus = FocusSelector::new();
        assert_eq!(focus.enter_auto(&store), Some(newer.clone()));
        assert_eq!(focus.focused(), Some(&newer));
    }

    #[test]
    fn test_auto_falls_back_to_progress() {
        let mut store = TaskStore::new();
        let a = add(&mut store, "a");
        let b = add(&mut store, "b");
        store.transition_status(&a).unwrap();
        store.transition_status(&b).unwrap();

        let mut focus = FocusSelector::new();
        // b is newer, so it heads the progress column
        assert_eq!(focus.enter_auto(&store), Some(b));
    }

    #[test]
    fn test_auto_noop_when_only_done_tasks() {
        let mut store = TaskStore::new();
        let a = add(&mut store, "a");
        store.complete(&a).unwrap();

        let mut focus = FocusSelector::new();
        assert_eq!(FocusSelector::candidate(&store), None);
        assert_eq!(focus.enter_auto(&store), None);
        assert!(!focus.is_active());
    }

    #[test]
    fn test_auto_noop_keeps_existing_focus() {
        let mut store = TaskStore::new();
        let a = add(&mut store, "a");
        store.complete(&a).unwrap();

        let mut focus = FocusSelector::new();
        focus.enter(&store, &a).unwrap();
        assert_eq!(focus.enter_auto(&store), None);
        assert_eq!(focus.focused(), Some(&a));
    }

    #[test]
    fn test_explicit_focus_ignores_status() {
        let mut store = TaskStore::new();
        let a = add(&mut store, "a");
        store.complete(&a).unwrap();

        let mut focus = FocusSelector::new();
        focus.enter(&store, &a).unwrap();
        assert_eq!(focus.focused(), Some(&a));
    }

    #[test]
    fn test_explicit_focus_unknown_id() {
        let store = TaskStore::new();
        let mut focus = FocusSelector::new();
        let missing = TaskId::new("T-404");
        assert_eq!(
            focus.enter(&store, &missing),
            Err(StoreError::NotFound(missing))
        );
        assert!(!focus.is_active());
    }

    #[test]
    fn test_exit_and_forget() {
        let mut store = TaskStore::new();
        let a = add(&mut store, "a");
        let b = add(&mut store, "b");
        let mut focus = FocusSelector::new();

        focus.enter(&store, &a).unwrap();
        focus.forget(&b);
        assert_eq!(focus.focused(), Some(&a));
        focus.forget(&a);
        assert!(!focus.is_active());

        focus.exit();
        assert!(!focus.is_active());
    }
}
