use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders};

use crate::tui::theme::Theme;
use crate::util::unicode;

/// Create a centered rectangle of the given percentage of the parent
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Centered rectangle with a fixed height, clamped to the parent
pub(super) fn centered_fixed(percent_x: u16, height: u16, area: Rect) -> Rect {
    let height = height.min(area.height);
    let horizontal = centered_rect(percent_x, 100, area);
    Rect {
        x: horizontal.x,
        y: area.y + (area.height - height) / 2,
        width: horizontal.width,
        height,
    }
}

/// Bordered popup frame with a bold title
pub(super) fn popup_block<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(theme.text_bright)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.highlight))
        .style(Style::default().bg(theme.background))
}

/// `key  description` row used by hints and the help overlay
pub(super) fn key_hint<'a>(key: &'a str, desc: &'a str, theme: &Theme) -> Vec<Span<'a>> {
    vec![
        Span::styled(
            key,
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {}  ", desc), Style::default().fg(theme.dim)),
    ]
}

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// Label/value row for detail-style panels
pub(super) fn field_line<'a>(label: &'a str, value: String, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<12}", label), Style::default().fg(theme.dim)),
        Span::styled(value, Style::default().fg(theme.text)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fixed_clamps_height() {
        let area = Rect::new(0, 0, 80, 10);
        let r = centered_fixed(50, 20, area);
        assert_eq!(r.height, 10);
        assert_eq!(r.y, 0);

        let r = centered_fixed(50, 4, area);
        assert_eq!(r.height, 4);
        assert_eq!(r.y, 3);
    }

    #[test]
    fn test_spans_width_counts_cells() {
        let spans = vec![Span::raw("ab"), Span::raw("日本")];
        assert_eq!(spans_width(&spans), 6);
    }
}
