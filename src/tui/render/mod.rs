pub mod add_form;
pub mod board_view;
pub mod categories_view;
pub mod detail_view;
pub mod focus_overlay;
mod helpers;
pub mod help_overlay;
pub mod settings_view;
pub mod status_row;
pub mod tab_bar;
pub mod timer_view;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, Mode, View};

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: tab bar (2 rows) | content | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // tab bar + separator
            Constraint::Min(1),    // content area
            Constraint::Length(1), // status row
        ])
        .split(area);

    tab_bar::render_tab_bar(frame, app, chunks[0]);

    match app.view {
        View::Board => board_view::render_board_view(frame, app, chunks[1]),
        View::Timer => timer_view::render_timer_view(frame, app, chunks[1]),
        View::Categories => categories_view::render_categories_view(frame, app, chunks[1]),
        View::Settings => settings_view::render_settings_view(frame, app, chunks[1]),
    }

    // Overlays, innermost first
    if app.session.selected_id().is_some() {
        detail_view::render_detail_view(frame, app, chunks[1]);
    }
    if app.session.focused_id().is_some() {
        focus_overlay::render_focus_overlay(frame, app, area);
    }
    if app.mode == Mode::AddForm {
        add_form::render_add_form(frame, app, area);
    }
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }

    status_row::render_status_row(frame, app, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::test_helpers::*;

    #[test]
    fn test_full_screen_has_tabs_board_and_hints() {
        let mut app = app_with_board();
        let out = render_app(&mut app);
        assert!(out.contains("Board"));
        assert!(out.contains("Settings"));
        assert!(out.contains("To Do (1)"));
        assert!(out.contains("In Progress (1)"));
        assert!(out.contains("Done (1)"));
        assert!(out.contains("? help"));
    }

    #[test]
    fn test_help_overlay_on_top() {
        let mut app = empty_app();
        app.show_help = true;
        let out = render_app(&mut app);
        assert!(out.contains("Key Bindings"));
    }
}
