pub mod board;
pub mod categories;
pub mod focus;
pub mod pomodoro;
pub mod reminder;
pub mod selection;
pub mod session;
pub mod store;
