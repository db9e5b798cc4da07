use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph};

use crate::ops::pomodoro::{Phase, format_remaining};
use crate::tui::app::App;

use super::helpers::{centered_rect, key_hint};

const SPINNER: [&str; 4] = ["\u{25D0}", "\u{25D3}", "\u{25D1}", "\u{25D2}"];

/// Render the pomodoro page
pub fn render_timer_view(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let timer = &app.pomodoro;
    let area = centered_rect(60, 100, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // top padding
            Constraint::Length(3), // phase + clock
            Constraint::Length(1), // gauge
            Constraint::Length(1),
            Constraint::Length(2), // stats + hints
            Constraint::Min(0),
        ])
        .split(area);

    let phase_color = match timer.phase() {
        Phase::Work => theme.highlight,
        Phase::ShortBreak => theme.green,
        Phase::LongBreak => theme.cyan,
    };

    let state = if timer.is_running() {
        if app.config.ui.reduce_motion {
            "running".to_string()
        } else {
            let frame_idx = (app.frame_count as usize) % SPINNER.len();
            format!("{} running", SPINNER[frame_idx])
        }
    } else {
        "paused".to_string()
    };

    let header = vec![
        Line::from(Span::styled(
            timer.phase().label(),
            Style::default()
                .fg(phase_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format_remaining(timer.remaining()),
            Style::default()
                .fg(theme.text_bright)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(state, Style::default().fg(theme.dim))),
    ];
    frame.render_widget(
        Paragraph::new(header).alignment(Alignment::Center),
        chunks[1],
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(phase_color).bg(theme.selection_bg))
        .ratio(timer.progress())
        .label("");
    frame.render_widget(gauge, chunks[2]);

    let mut hints = key_hint("Space", "start/pause", theme);
    hints.extend(key_hint("r", "reset", theme));
    hints.extend(key_hint("n", "skip", theme));
    let footer = vec![
        Line::from(Span::styled(
            format!("Sessions completed: {}", timer.completed_sessions()),
            Style::default().fg(theme.text),
        )),
        Line::from(hints),
    ];
    frame.render_widget(
        Paragraph::new(footer).alignment(Alignment::Center),
        chunks[4],
    );
}
