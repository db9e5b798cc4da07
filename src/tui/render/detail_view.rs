use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Wrap};

use crate::model::task::Status;
use crate::tui::app::App;

use super::helpers::{centered_fixed, field_line, key_hint, popup_block};

/// Render the detail panel for the selected task
pub fn render_detail_view(frame: &mut Frame, app: &App, area: Rect) {
    let Some(task) = app.session.selected_task() else {
        return;
    };
    let theme = &app.theme;

    let popup = centered_fixed(70, 16, area);
    frame.render_widget(Clear, popup);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            task.title.clone(),
            Style::default()
                .fg(theme.text_bright)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field_line("Status", task.status.label().to_string(), theme),
        Line::from(vec![
            Span::styled(format!("{:<12}", "Priority"), Style::default().fg(theme.dim)),
            Span::styled(
                format!("{} {}", task.priority.badge(), task.priority.label()),
                Style::default().fg(theme.priority_color(task.priority)),
            ),
        ]),
    ];
    if let Some(reminder) = task.reminder {
        lines.push(field_line("Reminder", reminder.to_string(), theme));
    }
    if let Some(minutes) = task.estimated_minutes {
        lines.push(field_line("Estimate", format!("{} min", minutes), theme));
    }
    lines.push(field_line("Id", task.id.to_string(), theme));
    lines.push(Line::from(""));
    lines.push(match &task.description {
        Some(desc) => Line::from(Span::styled(desc.clone(), Style::default().fg(theme.text))),
        None => Line::from(Span::styled(
            "No description",
            Style::default().fg(theme.dim).add_modifier(Modifier::ITALIC),
        )),
    });

    lines.push(Line::from(""));
    let mut hints = Vec::new();
    match task.status {
        Status::Todo => hints.extend(key_hint("s", "start", theme)),
        Status::Progress => hints.extend(key_hint("c", "mark done", theme)),
        Status::Done => lines.push(Line::from(Span::styled(
            "\u{2713} Completed. Nice work.",
            Style::default().fg(theme.green),
        ))),
    }
    hints.extend(key_hint("Esc", "close", theme));
    lines.push(Line::from(hints));

    let paragraph = Paragraph::new(lines)
        .block(popup_block("Task", theme))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, popup);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    fn select(app: &mut App, title: &str) {
        let id = app
            .session
            .tasks()
            .iter()
            .find(|t| t.title == title)
            .map(|t| t.id.clone())
            .unwrap();
        app.session.select(&id).unwrap();
    }

    #[test]
    fn test_todo_offers_start() {
        let mut app = app_with_board();
        select(&mut app, "Write report");
        let out = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_detail_view(frame, &app, area);
        });
        assert!(out.contains("Write report"));
        assert!(out.contains("To Do"));
        assert!(out.contains("Quarterly numbers"));
        assert!(out.contains("s start"));
        assert!(!out.contains("mark done"));
    }

    #[test]
    fn test_in_progress_offers_complete() {
        let mut app = app_with_board();
        select(&mut app, "Buy milk");
        let out = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_detail_view(frame, &app, area);
        });
        assert!(out.contains("17:30"));
        assert!(out.contains("15 min"));
        assert!(out.contains("c mark done"));
        assert!(!out.contains("s start"));
    }

    #[test]
    fn test_done_offers_only_close() {
        let mut app = app_with_board();
        select(&mut app, "Call mom");
        let out = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_detail_view(frame, &app, area);
        });
        assert!(out.contains("Esc close"));
        assert!(out.contains("Completed"));
        assert!(out.contains("No description"));
        assert!(!out.contains("s start"));
        assert!(!out.contains("mark done"));
    }

    #[test]
    fn test_nothing_selected_renders_nothing() {
        let app = app_with_board();
        let out = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_detail_view(frame, &app, area);
        });
        assert_eq!(out, "");
    }
}
