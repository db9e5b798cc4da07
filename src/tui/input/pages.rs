use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode, Setting};

use super::step;

// ---------------------------------------------------------------------------
// Timer
// ---------------------------------------------------------------------------

pub(super) fn handle_timer(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => app.pomodoro.toggle(),
        KeyCode::Char('r') => {
            app.pomodoro.reset();
            app.toast("Timer reset");
        }
        KeyCode::Char('n') => {
            let done = app.pomodoro.skip();
            app.toast(format!("Skipped to {}", done.to.label()));
        }
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

pub(super) fn handle_categories(app: &mut App, key: KeyEvent) {
    let len = app.categories.len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.category_cursor = step(app.category_cursor, 1, len);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.category_cursor = step(app.category_cursor, -1, len);
        }
        KeyCode::Char('a') => {
            app.category_input.clear();
            app.mode = Mode::CategoryInput;
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(name) = app.categories.remove(app.category_cursor) {
                app.category_cursor = step(app.category_cursor, 0, app.categories.len());
                app.toast(format!("Removed category \"{}\"", name));
            }
        }
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

pub(super) fn handle_settings(app: &mut App, key: KeyEvent) {
    let len = Setting::ALL.len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.settings_cursor = step(app.settings_cursor, 1, len);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.settings_cursor = step(app.settings_cursor, -1, len);
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            let setting = Setting::ALL[app.settings_cursor.min(len - 1)];
            app.toggle_setting(setting);
        }
        _ => {}
    }
}
