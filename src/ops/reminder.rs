use chrono::{Days, NaiveDateTime};

use crate::model::task::{ReminderTime, Task, TaskId};

/// Title used for every reminder notification
pub const REMINDER_TITLE: &str = "Task reminder";

/// Next instant matching `reminder`: today if still ahead of `now`,
/// otherwise the same time tomorrow. An exact match counts as passed.
pub fn next_fire(reminder: ReminderTime, now: NaiveDateTime) -> NaiveDateTime {
    let today = now.date().and_time(reminder.time());
    if today <= now {
        today.checked_add_days(Days::new(1)).unwrap_or(today)
    } else {
        today
    }
}

/// Receives fired notifications. A sink that cannot deliver (no permission,
/// disabled in config) drops them silently.
pub trait NotificationSink {
    fn notify(&mut self, title: &str, body: &str);
}

/// Collects notifications in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub delivered: Vec<(String, String)>,
}

impl NotificationSink for RecordingSink {
    fn notify(&mut self, title: &str, body: &str) {
        self.delivered.push((title.to_string(), body.to_string()));
    }
}

/// A one-shot reminder waiting for its instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArmedReminder {
    pub task_id: TaskId,
    pub title: String,
    pub fire_at: NaiveDateTime,
}

/// A reminder that came due
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub task_id: TaskId,
    pub title: String,
    pub body: String,
}

/// Pending one-shot reminders, polled from the event loop.
///
/// Entries are independent of the task store: once armed, a reminder fires
/// even if its task is later edited or deleted, and there is no way to
/// disarm it.
#[derive(Debug, Default)]
pub struct ReminderScheduler {
    pending: Vec<ArmedReminder>,
}

impl ReminderScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm one reminder for `task`. Returns the fire instant, or None if the
    /// task has no reminder time.
    pub fn schedule(&mut self, task: &Task, now: NaiveDateTime) -> Option<NaiveDateTime> {
        let reminder = task.reminder?;
        let fire_at = next_fire(reminder, now);
        self.pending.push(ArmedReminder {
            task_id: task.id.clone(),
            title: task.title.clone(),
            fire_at,
        });
        Some(fire_at)
    }

    pub fn pending(&self) -> &[ArmedReminder] {
        &self.pending
    }

    /// Remove and return every reminder due at `now`, earliest first
    pub fn due(&mut self, now: NaiveDateTime) -> Vec<Notification> {
        let (mut fired, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|r| r.fire_at <= now);
        self.pending = waiting;
        fired.sort_by_key(|r| r.fire_at);
        fired
            .into_iter()
            .map(|r| Notification {
                task_id: r.task_id,
                title: REMINDER_TITLE.to_string(),
                body: r.title,
            })
            .collect()
    }

    /// The earliest pending instant, if any
    pub fn next_due(&self) -> Option<NaiveDateTime> {
        self.pending.iter().map(|r| r.fire_at).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::{Priority, Status};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    fn task(id: &str, title: &str, reminder: Option<&str>) -> Task {
        Task {
            id: TaskId::new(id),
            title: title.into(),
            priority: Priority::Medium,
            status: Status::Todo,
            reminder: reminder.map(|r| r.parse().unwrap()),
            description: None,
            estimated_minutes: None,
        }
    }

    #[test]
    fn test_next_fire_rolls_to_tomorrow_when_passed() {
        let nine = "09:00".parse().unwrap();
        assert_eq!(next_fire(nine, at(2024, 1, 1, 10, 0)), at(2024, 1, 2, 9, 0));
    }

    #[test]
    fn test_next_fire_today_when_ahead() {
        let nine = "09:00".parse().unwrap();
        assert_eq!(next_fire(nine, at(2024, 1, 1, 8, 0)), at(2024, 1, 1, 9, 0));
    }

    #[test]
    fn test_next_fire_exact_match_is_tomorrow() {
        let nine = "09:00".parse().unwrap();
        assert_eq!(next_fire(nine, at(2024, 1, 1, 9, 0)), at(2024, 1, 2, 9, 0));
    }

    #[test]
    fn test_next_fire_crosses_month_and_year() {
        let early = "00:15".parse().unwrap();
        assert_eq!(
            next_fire(early, at(2024, 12, 31, 23, 0)),
            at(2025, 1, 1, 0, 15)
        );
        assert_eq!(next_fire(early, at(2024, 2, 28, 1, 0)), at(2024, 2, 29, 0, 15));
    }

    #[test]
    fn test_schedule_without_reminder_arms_nothing() {
        let mut sched = ReminderScheduler::new();
        assert_eq!(sched.schedule(&task("T-1", "x", None), at(2024, 1, 1, 8, 0)), None);
        assert!(sched.pending().is_empty());
    }

    #[test]
    fn test_each_schedule_call_arms_one_timer() {
        let mut sched = ReminderScheduler::new();
        let t = task("T-1", "Stretch", Some("09:00"));
        sched.schedule(&t, at(2024, 1, 1, 8, 0));
        sched.schedule(&t, at(2024, 1, 1, 8, 0));
        assert_eq!(sched.pending().len(), 2);
    }

    #[test]
    fn test_due_fires_once_in_order() {
        let mut sched = ReminderScheduler::new();
        let now = at(2024, 1, 1, 8, 0);
        sched.schedule(&task("T-2", "Later", Some("09:30")), now);
        sched.schedule(&task("T-1", "Sooner", Some("09:00")), now);
        sched.schedule(&task("T-3", "Tomorrow", Some("07:00")), now);
        assert_eq!(sched.next_due(), Some(at(2024, 1, 1, 9, 0)));

        assert!(sched.due(at(2024, 1, 1, 8, 59)).is_empty());

        let fired = sched.due(at(2024, 1, 1, 9, 45));
        let bodies: Vec<&str> = fired.iter().map(|n| n.body.as_str()).collect();
        assert_eq!(bodies, vec!["Sooner", "Later"]);
        assert!(fired.iter().all(|n| n.title == REMINDER_TITLE));

        // not repeated
        assert!(sched.due(at(2024, 1, 1, 9, 45)).is_empty());
        assert_eq!(sched.pending().len(), 1);
        assert_eq!(sched.pending()[0].fire_at, at(2024, 1, 2, 7, 0));
    }

    #[test]
    fn test_recording_sink() {
        let mut sink = RecordingSink::default();
        sink.notify("a", "b");
        assert_eq!(sink.delivered, vec![("a".to_string(), "b".to_string())]);
    }
}
