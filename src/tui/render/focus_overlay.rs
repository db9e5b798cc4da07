use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

use crate::tui::app::App;

use super::helpers::key_hint;

/// Full-screen single-task view. Everything else is hidden.
pub fn render_focus_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let Some(task) = app.session.focused_task() else {
        return;
    };
    let theme = &app.theme;

    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "FOCUS",
            Style::default()
                .fg(theme.purple)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            task.title.clone(),
            Style::default()
                .fg(theme.text_bright)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                task.priority.badge(),
                Style::default().fg(theme.priority_color(task.priority)),
            ),
            Span::styled(
                format!(" {} priority  \u{00B7}  {}", task.priority.label(), task.status.label()),
                Style::default().fg(theme.dim),
            ),
        ]),
    ];
    let mut extras: Vec<String> = Vec::new();
    if let Some(reminder) = task.reminder {
        extras.push(format!("reminder at {}", reminder));
    }
    if let Some(minutes) = task.estimated_minutes {
        extras.push(format!("about {} minutes", minutes));
    }
    if !extras.is_empty() {
        lines.push(Line::from(Span::styled(
            extras.join("  \u{00B7}  "),
            Style::default().fg(theme.dim),
        )));
    }
    if let Some(desc) = &task.description {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            desc.clone(),
            Style::default().fg(theme.text),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(""));

    let mut hints = key_hint("m", "move to next stage", theme);
    hints.extend(key_hint("d", "delete", theme));
    hints.extend(key_hint("Esc", "back to board", theme));
    lines.push(Line::from(hints));

    // Vertically center the block of text
    let top = area.height.saturating_sub(lines.len() as u16) / 2;
    let inner = Rect {
        y: area.y + top,
        height: area.height - top,
        ..area
    };

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}
