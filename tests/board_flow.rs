use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;

use focusboard::model::task::{NewTask, Priority, ReminderTime, Status, TaskEdit};
use focusboard::ops::reminder::{REMINDER_TITLE, RecordingSink};
use focusboard::ops::session::Session;
use focusboard::ops::store::StoreError;

fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, day)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

fn titles(session: &Session, status: Status) -> Vec<String> {
    session
        .board()
        .column(status)
        .iter()
        .map(|t| t.title.clone())
        .collect()
}

#[test]
fn test_buy_milk_lifecycle() {
    let mut session = Session::new();
    session
        .add_task(NewTask::new("Walk dog", Priority::Medium), at(1, 8, 0))
        .unwrap();
    let milk = session
        .add_task(NewTask::new("Buy milk", Priority::Low), at(1, 8, 0))
        .unwrap();

    assert_eq!(milk.status, Status::Todo);
    assert_eq!(titles(&session, Status::Todo), vec!["Buy milk", "Walk dog"]);

    session.transition(&milk.id).unwrap();
    assert_eq!(titles(&session, Status::Todo), vec!["Walk dog"]);
    assert_eq!(titles(&session, Status::Progress), vec!["Buy milk"]);

    session.transition(&milk.id).unwrap();
    assert!(titles(&session, Status::Progress).is_empty());
    assert_eq!(titles(&session, Status::Done), vec!["Buy milk"]);

    session.remove(&milk.id).unwrap();
    assert!(titles(&session, Status::Done).is_empty());
    assert!(session.task(&milk.id).is_none());
    assert_eq!(session.tasks().len(), 1);
}

#[test]
fn test_transition_cycles_but_complete_sticks() {
    let mut session = Session::new();
    let a = session
        .add_task(NewTask::new("cycle", Priority::High), at(1, 8, 0))
        .unwrap();
    let b = session
        .add_task(NewTask::new("jump", Priority::High), at(1, 8, 0))
        .unwrap();

    let statuses: Vec<Status> = (0..3)
        .map(|_| session.transition(&a.id).unwrap().status)
        .collect();
    assert_eq!(statuses, vec![Status::Progress, Status::Done, Status::Todo]);

    assert_eq!(session.complete(&b.id).unwrap().status, Status::Done);
    assert_eq!(session.complete(&b.id).unwrap().status, Status::Done);
}

#[test]
fn test_partitions_cover_every_task_once() {
    let mut session = Session::new();
    let ids: Vec<_> = ["a", "b", "c", "d", "e"]
        .iter()
        .map(|t| {
            session
                .add_task(NewTask::new(*t, Priority::Medium), at(1, 8, 0))
                .unwrap()
                .id
        })
        .collect();
    session.transition(&ids[1]).unwrap();
    session.complete(&ids[2]).unwrap();
    session.transition(&ids[3]).unwrap();

    let board = session.board();
    assert_eq!(board.counts(), [2, 2, 1]);
    assert_eq!(board.total(), session.tasks().len());
    for status in Status::ALL {
        assert!(board.column(status).iter().all(|t| t.status == status));
    }
}

#[test]
fn test_blank_title_leaves_board_untouched() {
    let mut session = Session::new();
    let err = session
        .add_task(NewTask::new("  \t", Priority::High), at(1, 8, 0))
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert!(session.tasks().is_empty());
    assert!(session.reminders().pending().is_empty());
}

#[test]
fn test_focus_follows_board_order() {
    let mut session = Session::new();
    assert_eq!(session.enter_focus_auto(), None);

    let older = session
        .add_task(NewTask::new("older", Priority::Low), at(1, 8, 0))
        .unwrap();
    let newer = session
        .add_task(NewTask::new("newer", Priority::Low), at(1, 8, 0))
        .unwrap();
    assert_eq!(session.enter_focus_auto(), Some(newer.id.clone()));

    // Finishing the focused task closes the overlay
    session.advance_focused().unwrap();
    assert!(session.focused_id().is_none());

    // Only in-progress left in the candidate pool once the to-do is started
    session.transition(&older.id).unwrap();
    assert_eq!(session.enter_focus_auto(), Some(newer.id.clone()));

    session.select(&newer.id).unwrap();
    session.remove(&newer.id).unwrap();
    assert!(session.focused_id().is_none());
    assert!(session.selected_id().is_none());
}

#[test]
fn test_edit_then_detail_panel_completion() {
    let mut session = Session::new();
    let t = session
        .add_task(NewTask::new("draft", Priority::Medium), at(1, 8, 0))
        .unwrap();
    session
        .edit(
            &t.id,
            TaskEdit {
                title: Some("Draft the report".into()),
                description: Some(Some("two pages".into())),
                estimated_minutes: Some(Some(45)),
            },
        )
        .unwrap();

    session.select(&t.id).unwrap();
    assert_eq!(session.selected_task().unwrap().title, "Draft the report");
    session.start_selected().unwrap();
    assert!(session.selected_id().is_none());

    session.select(&t.id).unwrap();
    let done = session.complete_selected().unwrap();
    assert_eq!(done.status, Status::Done);
    assert_eq!(done.estimated_minutes, Some(45));
}

#[test]
fn test_reminder_fires_once_on_next_occurrence() {
    let mut session = Session::new();
    session
        .add_task(
            NewTask::new("Take meds", Priority::High)
                .with_reminder(ReminderTime::new(9, 0).unwrap()),
            at(1, 10, 0),
        )
        .unwrap();
    assert_eq!(session.reminders().next_due(), Some(at(2, 9, 0)));

    let mut sink = RecordingSink::default();
    assert!(session.fire_due_reminders(at(2, 8, 59), &mut sink).is_empty());
    let fired = session.fire_due_reminders(at(2, 9, 0), &mut sink);
    assert_eq!(fired.len(), 1);
    assert_eq!(
        sink.delivered,
        vec![(REMINDER_TITLE.to_string(), "Take meds".to_string())]
    );

    // One-shot
    assert!(session.fire_due_reminders(at(3, 9, 0), &mut sink).is_empty());
}
