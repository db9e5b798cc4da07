use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode, View};
use crate::util::unicode;

use super::helpers::{key_hint, spans_width};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = if let Mode::ConfirmDelete(id) = &app.mode {
        let title = app
            .session
            .task(id)
            .map(|t| t.title.as_str())
            .unwrap_or("task");
        Line::from(vec![
            Span::styled(
                unicode::truncate_to_width(&format!("Delete \"{}\"? ", title), width.saturating_sub(10)),
                Style::default()
                    .fg(app.theme.red)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("y/n", Style::default().fg(app.theme.text_bright)),
        ])
    } else if let Some(toast) = &app.toast {
        let color = if toast.is_error {
            app.theme.red
        } else {
            app.theme.green
        };
        Line::from(Span::styled(
            unicode::truncate_to_width(&toast.message, width),
            Style::default().fg(color),
        ))
    } else {
        // Hints for the current page, right aligned
        let hints = page_hints(app);
        let used = spans_width(&hints);
        let mut spans = Vec::new();
        if used < width {
            spans.push(Span::raw(" ".repeat(width - used)));
        }
        spans.extend(hints);
        Line::from(spans)
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn page_hints(app: &App) -> Vec<Span<'static>> {
    let theme = &app.theme;
    let mut spans = Vec::new();
    if app.mode == Mode::CategoryInput {
        spans.extend(key_hint("Enter", "save", theme));
        spans.extend(key_hint("Esc", "cancel", theme));
        return spans;
    }
    match app.view {
        View::Board => {
            spans.extend(key_hint("a", "add", theme));
            spans.extend(key_hint("f", "focus", theme));
        }
        View::Timer => spans.extend(key_hint("Space", "start/pause", theme)),
        View::Categories => spans.extend(key_hint("a", "add", theme)),
        View::Settings => spans.extend(key_hint("Space", "toggle", theme)),
    }
    spans.extend(key_hint("?", "help", theme));
    spans
}
