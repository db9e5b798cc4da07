mod board;
mod form;
mod pages;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode, View};

use board::*;
use form::*;
use pages::*;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Help overlay intercepts all input
    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    match &app.mode {
        Mode::AddForm => handle_form(app, key),
        Mode::CategoryInput => handle_category_input(app, key),
        Mode::ConfirmDelete(_) => handle_confirm_delete(app, key),
        Mode::Navigate => {
            // Overlays own the keyboard while open
            if app.session.focused_id().is_some() {
                handle_focus_overlay(app, key);
            } else if app.session.selected_id().is_some() {
                handle_detail_panel(app, key);
            } else if !handle_global(app, key) {
                match app.view {
                    View::Board => handle_board(app, key),
                    View::Timer => handle_timer(app, key),
                    View::Categories => handle_categories(app, key),
                    View::Settings => handle_settings(app, key),
                }
            }
        }
    }
}

/// Keys available on every page. Returns true if the key was consumed.
fn handle_global(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('1') => app.view = View::Board,
        KeyCode::Char('2') => app.view = View::Timer,
        KeyCode::Char('3') => app.view = View::Categories,
        KeyCode::Char('4') => app.view = View::Settings,
        KeyCode::Tab => app.view = app.view.next(),
        KeyCode::BackTab => app.view = app.view.prev(),
        _ => return false,
    }
    true
}

/// Move a list cursor by `delta`, clamped to `len`
fn step(cursor: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    cursor.saturating_add_signed(delta).min(len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AppConfig;

    pub(super) fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    pub(super) fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            handle_key(app, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_view_switching() {
        let mut app = App::new(AppConfig::default());
        handle_key(&mut app, key(KeyCode::Char('3')));
        assert_eq!(app.view, View::Categories);
        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.view, View::Settings);
        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.view, View::Board);
        handle_key(&mut app, key(KeyCode::BackTab));
        assert_eq!(app.view, View::Settings);
    }

    #[test]
    fn test_help_swallows_keys() {
        let mut app = App::new(AppConfig::default());
        handle_key(&mut app, key(KeyCode::Char('?')));
        assert!(app.show_help);
        handle_key(&mut app, key(KeyCode::Char('2')));
        assert_eq!(app.view, View::Board);
        handle_key(&mut app, key(KeyCode::Esc));
        assert!(!app.show_help);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(AppConfig::default());
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = App::new(AppConfig::default());
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_step_clamps() {
        assert_eq!(step(0, -1, 3), 0);
        assert_eq!(step(2, 1, 3), 2);
        assert_eq!(step(1, 1, 3), 2);
        assert_eq!(step(5, 0, 0), 0);
    }
}
