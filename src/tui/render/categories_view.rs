use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Render the category list, with the input row while adding
pub fn render_categories_view(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let width = area.width as usize;
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            " Categories",
            Style::default()
                .fg(theme.text_bright)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if app.categories.is_empty() && app.mode != Mode::CategoryInput {
        lines.push(Line::from(Span::styled(
            "  No categories yet. Press a to add one",
            Style::default().fg(theme.dim).add_modifier(Modifier::ITALIC),
        )));
    }

    for (i, name) in app.categories.names().iter().enumerate() {
        let selected = i == app.category_cursor && app.mode != Mode::CategoryInput;
        let bg = if selected { theme.selection_bg } else { theme.background };
        let marker = if selected { "\u{258C}" } else { " " };
        let text = format!(" \u{2022} {}", unicode::truncate_to_width(name, width.saturating_sub(4)));
        let pad = width.saturating_sub(unicode::display_width(&text) + 1);
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(theme.highlight).bg(bg)),
            Span::styled(text, Style::default().fg(theme.text).bg(bg)),
            Span::styled(" ".repeat(if selected { pad } else { 0 }), Style::default().bg(bg)),
        ]));
    }

    if app.mode == Mode::CategoryInput {
        lines.push(Line::from(vec![
            Span::styled("  + ", Style::default().fg(theme.highlight)),
            Span::styled(app.category_input.clone(), Style::default().fg(theme.text_bright)),
            Span::styled("\u{258C}", Style::default().fg(theme.highlight)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn test_lists_categories() {
        let mut app = empty_app();
        app.categories.add("Work").unwrap();
        app.categories.add("Health").unwrap();
        let out = render_to_string(TERM_W, 10, |frame, area| {
            render_categories_view(frame, &app, area);
        });
        assert!(out.contains("\u{2022} Work"));
        assert!(out.contains("\u{2022} Health"));
    }

    #[test]
    fn test_empty_hint_and_input_row() {
        let mut app = empty_app();
        let out = render_to_string(TERM_W, 10, |frame, area| {
            render_categories_view(frame, &app, area);
        });
        assert!(out.contains("No categories yet"));

        app.mode = Mode::CategoryInput;
        app.category_input = "Errands".into();
        let out = render_to_string(TERM_W, 10, |frame, area| {
            render_categories_view(frame, &app, area);
        });
        assert!(!out.contains("No categories yet"));
        assert!(out.contains("+ Errands"));
    }
}
