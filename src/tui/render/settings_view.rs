use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Setting};

/// Render the accessibility and notification toggles
pub fn render_settings_view(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            " Settings",
            Style::default()
                .fg(theme.text_bright)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " Changes last until you quit. Put them in config.toml to keep them.",
            Style::default().fg(theme.dim),
        )),
        Line::from(""),
    ];

    for (i, setting) in Setting::ALL.iter().enumerate() {
        let selected = i == app.settings_cursor;
        let bg = if selected { theme.selection_bg } else { theme.background };
        let on = app.setting_enabled(*setting);
        let (check, check_color) = if on {
            ("[x]", theme.green)
        } else {
            ("[ ]", theme.dim)
        };
        lines.push(Line::from(vec![
            Span::styled(
                if selected { "\u{258C}" } else { " " },
                Style::default().fg(theme.highlight).bg(bg),
            ),
            Span::styled(format!("{} ", check), Style::default().fg(check_color).bg(bg)),
            Span::styled(
                format!("{:<24}", setting.label()),
                Style::default().fg(theme.text_bright).bg(bg),
            ),
            Span::styled(setting.hint(), Style::default().fg(theme.dim).bg(bg)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
