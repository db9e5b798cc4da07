use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Opaque task identifier, unique for the lifetime of a store
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        TaskId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        TaskId(s.to_string())
    }
}

/// Task priority, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Badge shown on cards
    pub fn badge(self) -> &'static str {
        match self {
            Priority::High => "!!!",
            Priority::Medium => "!!",
            Priority::Low => "!",
        }
    }

    /// Next value in the add form selector (wraps)
    pub fn cycle_next(self) -> Priority {
        match self {
            Priority::High => Priority::Medium,
            Priority::Medium => Priority::Low,
            Priority::Low => Priority::High,
        }
    }

    pub fn cycle_prev(self) -> Priority {
        match self {
            Priority::High => Priority::Low,
            Priority::Medium => Priority::High,
            Priority::Low => Priority::Medium,
        }
    }
}

/// Board column a task lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Todo,
    Progress,
    Done,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Todo, Status::Progress, Status::Done];

    /// Successor on the status cycle: todo → progress → done → todo
    pub fn next(self) -> Status {
        match self {
            Status::Todo => Status::Progress,
            Status::Progress => Status::Done,
            Status::Done => Status::Todo,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Todo => "To Do",
            Status::Progress => "In Progress",
            Status::Done => "Done",
        }
    }

    /// Column index on the board (0..3)
    pub fn index(self) -> usize {
        match self {
            Status::Todo => 0,
            Status::Progress => 1,
            Status::Done => 2,
        }
    }
}

/// A wall-clock time of day, written `HH:MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReminderTime(NaiveTime);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid reminder time {0:?}: expected HH:MM")]
pub struct ReminderParseError(pub String);

impl ReminderTime {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(ReminderTime)
    }

    pub fn time(self) -> NaiveTime {
        self.0
    }
}

impl FromStr for ReminderTime {
    type Err = ReminderParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let err = || ReminderParseError(s.to_string());
        let (h, m) = trimmed.split_once(':').ok_or_else(err)?;
        if h.is_empty() || h.len() > 2 || m.len() != 2 {
            return Err(err());
        }
        let hour: u32 = h.parse().map_err(|_| err())?;
        let minute: u32 = m.parse().map_err(|_| err())?;
        ReminderTime::new(hour, minute).ok_or_else(err)
    }
}

impl fmt::Display for ReminderTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0.hour(), self.0.minute())
    }
}

impl Serialize for ReminderTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ReminderTime {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A task on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub priority: Priority,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder: Option<ReminderTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Estimated effort in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_minutes: Option<u32>,
}

/// Input to `TaskStore::add`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub priority: Priority,
    pub reminder: Option<ReminderTime>,
    pub description: Option<String>,
    pub estimated_minutes: Option<u32>,
}

impl NewTask {
    pub fn new(title: impl Into<String>, priority: Priority) -> Self {
        NewTask {
            title: title.into(),
            priority,
            ..Default::default()
        }
    }

    pub fn with_reminder(mut self, reminder: ReminderTime) -> Self {
        self.reminder = Some(reminder);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_estimate(mut self, minutes: u32) -> Self {
        self.estimated_minutes = Some(minutes);
        self
    }
}

/// Editable fields. `None` leaves a field unchanged; `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskEdit {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub estimated_minutes: Option<Option<u32>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_cycle_has_period_three() {
        for start in Status::ALL {
            assert_eq!(start.next().next().next(), start);
            assert_ne!(start.next(), start);
        }
        assert_eq!(Status::Todo.next(), Status::Progress);
        assert_eq!(Status::Progress.next(), Status::Done);
        assert_eq!(Status::Done.next(), Status::Todo);
    }

    #[test]
    fn test_parse_reminder_time() {
        assert_eq!("09:00".parse::<ReminderTime>(), Ok(ReminderTime::new(9, 0).unwrap()));
        assert_eq!("9:05".parse::<ReminderTime>(), Ok(ReminderTime::new(9, 5).unwrap()));
        assert_eq!(" 23:59 ".parse::<ReminderTime>(), Ok(ReminderTime::new(23, 59).unwrap()));
        assert!("24:00".parse::<ReminderTime>().is_err());
        assert!("12:60".parse::<ReminderTime>().is_err());
        assert!("12".parse::<ReminderTime>().is_err());
        assert!("12:5".parse::<ReminderTime>().is_err());
        assert!("ab:cd".parse::<ReminderTime>().is_err());
        assert!("".parse::<ReminderTime>().is_err());
    }

    #[test]
    fn test_reminder_display_is_zero_padded() {
        assert_eq!(ReminderTime::new(7, 5).unwrap().to_string(), "07:05");
    }

    #[test]
    fn test_task_serializes_with_lowercase_enums() {
        let task = Task {
            id: TaskId::new("t1"),
            title: "Buy milk".into(),
            priority: Priority::Low,
            status: Status::Progress,
            reminder: ReminderTime::new(9, 0),
            description: None,
            estimated_minutes: Some(15),
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["priority"], "low");
        assert_eq!(json["status"], "progress");
        assert_eq!(json["reminder"], "09:00");
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_priority_selector_wraps() {
        assert_eq!(Priority::Low.cycle_next(), Priority::High);
        assert_eq!(Priority::High.cycle_prev(), Priority::Low);
        assert_eq!(Priority::default(), Priority::Medium);
    }
}
