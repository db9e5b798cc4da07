use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};

use crate::tui::app::{App, View};

use super::helpers::{centered_rect, popup_block};

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(60, 80, area);
    frame.render_widget(Clear, overlay_area);

    let key_style = Style::default()
        .fg(app.theme.highlight)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    let mut section = |title: &'static str, bindings: &[(&'static str, &'static str)]| {
        lines.push(Line::from(Span::styled(format!(" {}", title), header_style)));
        for (key, desc) in bindings {
            lines.push(Line::from(vec![
                Span::styled(format!(" {:<14}", key), key_style),
                Span::styled(*desc, desc_style),
            ]));
        }
        lines.push(Line::from(""));
    };

    // Context-sensitive help
    match app.view {
        View::Board => {
            section(
                "Board",
                &[
                    ("h/l  j/k", "Move between columns / cards"),
                    ("Enter", "Open task details"),
                    ("m  Space", "Move card to next stage"),
                    ("a", "Add a task"),
                    ("d", "Delete card"),
                    ("f", "Focus on the next task"),
                    ("F", "Focus on this card"),
                ],
            );
        }
        View::Timer => {
            section(
                "Timer",
                &[
                    ("Space", "Start / pause"),
                    ("r", "Reset to a fresh focus session"),
                    ("n", "Skip to the next phase"),
                ],
            );
        }
        View::Categories => {
            section(
                "Categories",
                &[("j/k", "Move"), ("a", "Add category"), ("d", "Remove category")],
            );
        }
        View::Settings => {
            section("Settings", &[("j/k", "Move"), ("Space  Enter", "Toggle")]);
        }
    }
    section(
        "Anywhere",
        &[
            ("1-4  Tab", "Switch page"),
            ("?", "Toggle this help"),
            ("q", "Quit"),
        ],
    );

    let paragraph = Paragraph::new(lines).block(popup_block("Key Bindings", &app.theme));
    frame.render_widget(paragraph, overlay_area);
}
