use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::model::task::{Status, Task};
use crate::tui::app::App;
use crate::util::unicode;

/// Render the three kanban columns side by side
pub fn render_board_view(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let board = app.session.board();
    for (i, status) in Status::ALL.iter().enumerate() {
        let tasks = board.column(*status);
        let cursor = (app.column == i).then_some(app.cursors[i]);
        render_column(frame, app, columns[i], *status, tasks, cursor);
    }
}

fn render_column(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    status: Status,
    tasks: &[&Task],
    cursor: Option<usize>,
) {
    let theme = &app.theme;
    let bg = theme.background;
    let active = cursor.is_some();

    let title = Span::styled(
        format!(" {} ({}) ", status.label(), tasks.len()),
        Style::default()
            .fg(theme.status_color(status))
            .add_modifier(Modifier::BOLD),
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(if active {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(Style::default().fg(if active { theme.highlight } else { theme.border }))
        .style(Style::default().bg(bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let mut lines: Vec<Line> = Vec::new();

    if tasks.is_empty() {
        let hint = match status {
            Status::Todo => "Nothing here. Press a to add",
            Status::Progress => "Nothing in progress",
            Status::Done => "Nothing done yet",
        };
        lines.push(Line::from(Span::styled(
            unicode::truncate_to_width(hint, width),
            Style::default().fg(theme.dim).add_modifier(Modifier::ITALIC),
        )));
    }

    // Keep the cursor card on screen
    let card_height = if app.config.ui.large_text { 3 } else { 2 };
    let visible = (inner.height as usize / card_height).max(1);
    let skip = cursor.map_or(0, |c| (c + 1).saturating_sub(visible));

    for (i, task) in tasks.iter().enumerate().skip(skip) {
        let selected = cursor == Some(i);
        lines.extend(card_lines(app, task, selected, width));
        if app.config.ui.large_text {
            lines.push(Line::from(""));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Title row plus a dim metadata row
fn card_lines<'a>(app: &App, task: &Task, selected: bool, width: usize) -> Vec<Line<'a>> {
    let theme = &app.theme;
    let row_bg = if selected { theme.selection_bg } else { theme.background };
    let marker = if selected { "\u{258C}" } else { " " };

    let badge = task.priority.badge();
    let title_budget = width.saturating_sub(unicode::display_width(badge) + 2);
    let mut title_style = Style::default().fg(theme.text_bright).bg(row_bg);
    if task.status == Status::Done {
        title_style = title_style.fg(theme.dim).add_modifier(Modifier::CROSSED_OUT);
    }
    if app.config.ui.large_text {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(theme.highlight).bg(row_bg)),
        Span::styled(
            badge,
            Style::default()
                .fg(theme.priority_color(task.priority))
                .bg(row_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ", Style::default().bg(row_bg)),
        Span::styled(unicode::truncate_to_width(&task.title, title_budget), title_style),
    ];
    let used: usize = spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum();
    if selected && used < width {
        spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(row_bg)));
    }

    let mut meta: Vec<String> = Vec::new();
    if let Some(reminder) = task.reminder {
        meta.push(format!("\u{23F0} {}", reminder));
    }
    if let Some(minutes) = task.estimated_minutes {
        meta.push(format!("~{}m", minutes));
    }
    if task.description.is_some() {
        meta.push("\u{2261}".into());
    }
    let meta_line = Line::from(Span::styled(
        unicode::truncate_to_width(&format!("  {}", meta.join("  ")), width),
        Style::default().fg(theme.dim),
    ));

    vec![Line::from(spans), meta_line]
}
