use crate::model::task::{Status, Task};

/// Three status columns derived from a task list.
///
/// Holds borrows only; build a fresh one after every store change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<'a> {
    pub todo: Vec<&'a Task>,
    pub progress: Vec<&'a Task>,
    pub done: Vec<&'a Task>,
}

impl<'a> Board<'a> {
    /// Partition by status, keeping the input order inside each column
    pub fn project(tasks: &'a [Task]) -> Self {
        let mut board = Board {
            todo: Vec::new(),
            progress: Vec::new(),
            done: Vec::new(),
        };
        for task in tasks {
            match task.status {
                Status::Todo => board.todo.push(task),
                Status::Progress => board.progress.push(task),
                Status::Done => board.done.push(task),
            }
        }
        board
    }

    pub fn column(&self, status: Status) -> &[&'a Task] {
        match status {
            Status::Todo => &self.todo,
            Status::Progress => &self.progress,
            Status::Done => &self.done,
        }
    }

    /// Task counts in column order
    pub fn counts(&self) -> [usize; 3] {
        [self.todo.len(), self.progress.len(), self.done.len()]
    }

    pub fn total(&self) -> usize {
        self.todo.len() + self.progress.len() + self.done.len()
    }
}
