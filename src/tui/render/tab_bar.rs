use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, View};

/// Render the tab bar: one tab per page, with separator line below
pub fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tabs
            Constraint::Length(1), // separator
        ])
        .split(area);

    let bg = app.theme.background;
    let bg_style = Style::default().bg(bg);
    let sep = Span::styled("\u{2502}", Style::default().fg(app.theme.dim).bg(bg));

    let mut spans: Vec<Span> = vec![
        Span::styled(" ", bg_style),
        Span::styled(
            "\u{25B6}",
            Style::default().fg(app.theme.purple).bg(bg),
        ),
        Span::styled(" ", bg_style),
    ];

    for (i, view) in View::ALL.iter().enumerate() {
        let style = tab_style(app, *view == app.view);
        spans.push(Span::styled(format!(" {} {} ", i + 1, view.label()), style));
        if *view == View::Board {
            let open = app.session.board().counts()[..2].iter().sum::<usize>();
            if open > 0 {
                spans.push(Span::styled(
                    format!("{} ", open),
                    Style::default()
                        .fg(app.theme.purple)
                        .bg(if *view == app.view {
                            app.theme.selection_bg
                        } else {
                            bg
                        }),
                ));
            }
        }
        spans.push(sep.clone());
    }

    // Running timer shows in the tab bar so it stays visible on every page
    if app.pomodoro.is_running() {
        spans.push(Span::styled(
            format!(
                "  {} {}",
                app.pomodoro.phase().label(),
                crate::ops::pomodoro::format_remaining(app.pomodoro.remaining())
            ),
            Style::default().fg(app.theme.yellow).bg(bg),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(bg_style), chunks[0]);

    let separator = "\u{2500}".repeat(area.width as usize);
    frame.render_widget(
        Paragraph::new(Span::styled(
            separator,
            Style::default().fg(app.theme.border).bg(bg),
        )),
        chunks[1],
    );
}

fn tab_style(app: &App, is_current: bool) -> Style {
    if is_current {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.selection_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim).bg(app.theme.background)
    }
}
