use crossterm::event::{KeyCode, KeyEvent};

use crate::model::task::Status;
use crate::tui::app::{AddForm, App, Mode};

use super::step;

// ---------------------------------------------------------------------------
// Board navigation
// ---------------------------------------------------------------------------

pub(super) fn handle_board(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => {
            app.column = app.column.saturating_sub(1);
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.column = (app.column + 1).min(2);
        }
        KeyCode::Char('j') | KeyCode::Down => move_cursor(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(app, -1),
        KeyCode::Enter => {
            if let Some(id) = app.cursor_task_id()
                && let Err(e) = app.session.select(&id)
            {
                app.report(e);
            }
        }
        KeyCode::Char('m') | KeyCode::Char(' ') => {
            if let Some(id) = app.cursor_task_id() {
                match app.session.transition(&id) {
                    Ok(task) => {
                        app.clamp_cursors();
                        app.toast(format!("Moved to {}", task.status.label()));
                    }
                    Err(e) => app.report(e),
                }
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.cursor_task_id() {
                app.mode = Mode::ConfirmDelete(id);
            }
        }
        KeyCode::Char('a') => {
            app.form = Some(AddForm::default());
            app.mode = Mode::AddForm;
        }
        KeyCode::Char('f') => {
            if app.session.enter_focus_auto().is_none() {
                app.toast("Nothing to focus on");
            }
        }
        KeyCode::Char('F') => {
            if let Some(id) = app.cursor_task_id()
                && let Err(e) = app.session.enter_focus(&id)
            {
                app.report(e);
            }
        }
        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    let len = app.session.board().column(app.current_status()).len();
    let col = app.column;
    app.cursors[col] = step(app.cursors[col], delta, len);
}

// ---------------------------------------------------------------------------
// Delete confirmation
// ---------------------------------------------------------------------------

pub(super) fn handle_confirm_delete(app: &mut App, key: KeyEvent) {
    let Mode::ConfirmDelete(id) = std::mem::replace(&mut app.mode, Mode::Navigate) else {
        return;
    };
    if matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y')) {
        match app.session.remove(&id) {
            Ok(task) => app.toast(format!("Deleted \"{}\"", task.title)),
            Err(e) => app.report(e),
        }
        app.clamp_cursors();
    }
}

// ---------------------------------------------------------------------------
// Detail panel
// ---------------------------------------------------------------------------

pub(super) fn handle_detail_panel(app: &mut App, key: KeyEvent) {
    let status = app.session.selected_task().map(|t| t.status);
    match (key.code, status) {
        (KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q'), _) => app.session.clear_selection(),
        (KeyCode::Char('s'), Some(Status::Todo)) => {
            match app.session.start_selected() {
                Ok(_) => app.toast("Started"),
                Err(e) => app.report(e),
            }
            app.clamp_cursors();
        }
        (KeyCode::Char('c'), Some(Status::Progress)) => {
            match app.session.complete_selected() {
                Ok(_) => app.toast("Marked done"),
                Err(e) => app.report(e),
            }
            app.clamp_cursors();
        }
        // The selected task vanished underneath the panel
        (_, None) => app.session.clear_selection(),
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Focus overlay
// ---------------------------------------------------------------------------

pub(super) fn handle_focus_overlay(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.session.exit_focus(),
        KeyCode::Char('m') | KeyCode::Char(' ') | KeyCode::Enter => {
            match app.session.advance_focused() {
                Ok(task) => app.toast(format!("Moved to {}", task.status.label())),
                Err(e) => app.report(e),
            }
            app.clamp_cursors();
        }
        KeyCode::Char('d') => {
            match app.session.remove_focused() {
                Ok(task) => app.toast(format!("Deleted \"{}\"", task.title)),
                Err(e) => app.report(e),
            }
            app.clamp_cursors();
        }
        _ => {}
    }
}
