use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::task::{NewTask, ReminderParseError, ReminderTime};
use crate::tui::app::{AddForm, App, FormField, Mode};
use crate::util::unicode;

// ---------------------------------------------------------------------------
// Single-line text editing
// ---------------------------------------------------------------------------

/// Apply an editing key to `buf` at byte `cursor`. Returns false if the key
/// is not an editing key.
pub(super) fn edit_text(buf: &mut String, cursor: &mut usize, key: KeyEvent) -> bool {
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            buf.insert(*cursor, c);
            *cursor += c.len_utf8();
        }
        KeyCode::Backspace if alt => {
            let start = unicode::word_boundary_left(buf, *cursor);
            buf.replace_range(start..*cursor, "");
            *cursor = start;
        }
        KeyCode::Backspace => {
            if let Some(prev) = unicode::prev_grapheme_boundary(buf, *cursor) {
                buf.replace_range(prev..*cursor, "");
                *cursor = prev;
            }
        }
        KeyCode::Delete => {
            if let Some(next) = unicode::next_grapheme_boundary(buf, *cursor) {
                buf.replace_range(*cursor..next, "");
            }
        }
        KeyCode::Left => {
            if let Some(prev) = unicode::prev_grapheme_boundary(buf, *cursor) {
                *cursor = prev;
            }
        }
        KeyCode::Right => {
            if let Some(next) = unicode::next_grapheme_boundary(buf, *cursor) {
                *cursor = next;
            }
        }
        KeyCode::Home => *cursor = 0,
        KeyCode::End => *cursor = buf.len(),
        _ => return false,
    }
    true
}

// ---------------------------------------------------------------------------
// Add-task form
// ---------------------------------------------------------------------------

pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    let Some(form) = app.form.as_mut() else {
        app.mode = Mode::Navigate;
        return;
    };

    match key.code {
        KeyCode::Esc => {
            app.form = None;
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => submit_form(app),
        KeyCode::Tab | KeyCode::Down => form.focus(form.field.next()),
        KeyCode::BackTab | KeyCode::Up => form.focus(form.field.prev()),
        _ if form.field == FormField::Priority => match key.code {
            KeyCode::Left | KeyCode::Char('h') => form.priority = form.priority.cycle_prev(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
                form.priority = form.priority.cycle_next()
            }
            _ => {}
        },
        _ => {
            let mut cursor = form.cursor;
            if let Some(buf) = form.buffer_mut()
                && edit_text(buf, &mut cursor, key)
            {
                form.cursor = cursor;
                form.error = None;
            }
        }
    }
}

/// Validate the form and add the task. Problems stay in the form as an
/// inline error and nothing is added.
fn submit_form(app: &mut App) {
    let Some(form) = app.form.as_mut() else {
        return;
    };
    let new = match build_task(form) {
        Ok(new) => new,
        Err((field, msg)) => {
            form.focus(field);
            form.error = Some(msg);
            return;
        }
    };

    let now = chrono::Local::now().naive_local();
    match app.session.add_task(new, now) {
        Ok(task) => {
            app.form = None;
            app.mode = Mode::Navigate;
            app.column = 0;
            app.cursors[0] = 0;
            app.toast(format!("Added \"{}\"", task.title));
        }
        Err(e) => {
            if let Some(form) = app.form.as_mut() {
                form.error = Some(e.to_string());
            }
        }
    }
}

fn build_task(form: &AddForm) -> Result<NewTask, (FormField, String)> {
    if form.title.trim().is_empty() {
        return Err((FormField::Title, "Title is required".into()));
    }
    let mut new = NewTask::new(form.title.clone(), form.priority);

    let reminder = form.reminder.trim();
    if !reminder.is_empty() {
        let time: ReminderTime = reminder
            .parse()
            .map_err(|e: ReminderParseError| (FormField::Reminder, e.to_string()))?;
        new = new.with_reminder(time);
    }

    let description = form.description.trim();
    if !description.is_empty() {
        new = new.with_description(description);
    }

    let estimate = form.estimate.trim();
    if !estimate.is_empty() {
        let minutes: u32 = estimate.parse().map_err(|_| {
            (
                FormField::Estimate,
                format!("Estimate must be a whole number of minutes, got \"{}\"", estimate),
            )
        })?;
        new = new.with_estimate(minutes);
    }
    Ok(new)
}

// ---------------------------------------------------------------------------
// Category name input
// ---------------------------------------------------------------------------

pub(super) fn handle_category_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.category_input.clear();
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => {
            let name = std::mem::take(&mut app.category_input);
            app.mode = Mode::Navigate;
            match app.categories.add(&name) {
                Ok(added) => {
                    let msg = format!("Added category \"{}\"", added);
                    app.category_cursor = app.categories.len() - 1;
                    app.toast(msg);
                }
                Err(e) => app.report(e),
            }
        }
        _ => {
            let mut cursor = app.category_input.len();
            edit_text(&mut app.category_input, &mut cursor, key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::handle_key;
    use super::super::tests::{key, type_str};
    use super::*;
    use crate::model::AppConfig;
    use crate::model::task::Priority;

    fn open_form() -> App {
        let mut app = App::new(AppConfig::default());
        handle_key(&mut app, key(KeyCode::Char('a')));
        assert_eq!(app.mode, Mode::AddForm);
        app
    }

    #[test]
    fn test_edit_text_graphemes() {
        let mut buf = String::from("cafe\u{301}");
        let mut cursor = buf.len();
        edit_text(&mut buf, &mut cursor, key(KeyCode::Backspace));
        assert_eq!(buf, "caf");
        edit_text(&mut buf, &mut cursor, key(KeyCode::Home));
        edit_text(&mut buf, &mut cursor, key(KeyCode::Char('x')));
        assert_eq!(buf, "xcaf");
        assert_eq!(cursor, 1);
        edit_text(&mut buf, &mut cursor, key(KeyCode::Delete));
        assert_eq!(buf, "xaf");
    }

    #[test]
    fn test_edit_text_word_delete() {
        let mut buf = String::from("buy oat milk");
        let mut cursor = buf.len();
        edit_text(
            &mut buf,
            &mut cursor,
            KeyEvent::new(KeyCode::Backspace, KeyModifiers::ALT),
        );
        assert_eq!(buf, "buy oat ");
        assert_eq!(cursor, 8);
    }

    #[test]
    fn test_add_task_through_form() {
        let mut app = open_form();
        type_str(&mut app, "Buy milk");
        handle_key(&mut app, key(KeyCode::Tab));
        handle_key(&mut app, key(KeyCode::Left));
        handle_key(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "17:30");
        handle_key(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "2% please");
        handle_key(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "15");
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.form.is_none());
        let task = &app.session.tasks()[0];
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.reminder, ReminderTime::new(17, 30));
        assert_eq!(task.description.as_deref(), Some("2% please"));
        assert_eq!(task.estimated_minutes, Some(15));
        assert_eq!(app.session.reminders().pending().len(), 1);
    }

    #[test]
    fn test_blank_title_stays_in_form() {
        let mut app = open_form();
        type_str(&mut app, "   ");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::AddForm);
        let form = app.form.as_ref().unwrap();
        assert_eq!(form.error.as_deref(), Some("Title is required"));
        assert!(app.session.tasks().is_empty());

        // Typing clears the error
        handle_key(&mut app, key(KeyCode::Char('x')));
        assert!(app.form.as_ref().unwrap().error.is_none());
    }

    #[test]
    fn test_bad_reminder_focuses_field() {
        let mut app = open_form();
        type_str(&mut app, "Call mom");
        handle_key(&mut app, key(KeyCode::Tab));
        handle_key(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "25:00");
        handle_key(&mut app, key(KeyCode::Up));
        handle_key(&mut app, key(KeyCode::Enter));
        let form = app.form.as_ref().unwrap();
        assert_eq!(form.field, FormField::Reminder);
        assert!(form.error.is_some());
        assert!(app.session.tasks().is_empty());
    }

    #[test]
    fn test_zero_estimate_rejected_by_store() {
        let mut app = open_form();
        type_str(&mut app, "Nap");
        handle_key(&mut app, key(KeyCode::BackTab));
        type_str(&mut app, "0");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::AddForm);
        assert!(app.form.as_ref().unwrap().error.is_some());
        assert!(app.session.tasks().is_empty());
    }

    #[test]
    fn test_escape_discards_form() {
        let mut app = open_form();
        type_str(&mut app, "never mind");
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.form.is_none());
        assert!(app.session.tasks().is_empty());
    }
}
