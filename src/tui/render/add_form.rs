use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};

use crate::model::task::Priority;
use crate::tui::app::{AddForm, App, FormField};
use crate::util::unicode;

use super::helpers::{centered_fixed, key_hint, popup_block};

const LABEL_W: usize = 18;

/// Render the add-task form as a centered popup
pub fn render_add_form(frame: &mut Frame, app: &App, area: Rect) {
    let Some(form) = app.form.as_ref() else {
        return;
    };
    let theme = &app.theme;

    let popup = centered_fixed(70, 13, area);
    frame.render_widget(Clear, popup);
    let block = popup_block("New task", theme);
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let value_w = (inner.width as usize).saturating_sub(LABEL_W + 1);
    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_pos: Option<Position> = None;

    for field in FormField::ALL {
        let focused = form.field == field;
        let label_style = if focused {
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.dim)
        };
        let mut spans = vec![Span::styled(
            format!("{:<width$}", field.label(), width = LABEL_W),
            label_style,
        )];

        if field == FormField::Priority {
            spans.extend(priority_selector(form, focused, app));
        } else {
            let value = field_value(form, field);
            let shown = unicode::truncate_to_width(value, value_w);
            spans.push(Span::styled(shown, Style::default().fg(theme.text_bright)));
            if focused {
                let col = unicode::byte_offset_to_display_col(value, form.cursor).min(value_w);
                cursor_pos = Some(Position::new(
                    inner.x + (LABEL_W + col) as u16,
                    inner.y + lines.len() as u16,
                ));
            }
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if let Some(err) = &form.error {
        lines.push(Line::from(Span::styled(
            unicode::truncate_to_width(err, inner.width as usize),
            Style::default().fg(theme.red),
        )));
    } else {
        let mut hints = key_hint("Tab", "next field", theme);
        hints.extend(key_hint("Enter", "add", theme));
        hints.extend(key_hint("Esc", "cancel", theme));
        lines.push(Line::from(hints));
    }

    frame.render_widget(Paragraph::new(lines), inner);

    if let Some(pos) = cursor_pos
        && !app.config.ui.reduce_motion
    {
        frame.set_cursor_position(pos);
    }
}

fn field_value(form: &AddForm, field: FormField) -> &str {
    match field {
        FormField::Title => &form.title,
        FormField::Priority => "",
        FormField::Reminder => &form.reminder,
        FormField::Description => &form.description,
        FormField::Estimate => &form.estimate,
    }
}

fn priority_selector<'a>(form: &AddForm, focused: bool, app: &App) -> Vec<Span<'a>> {
    let theme = &app.theme;
    let mut spans = Vec::new();
    for p in Priority::ALL {
        let chosen = form.priority == p;
        let mut style = Style::default().fg(if chosen {
            theme.priority_color(p)
        } else {
            theme.dim
        });
        if chosen {
            style = style.add_modifier(Modifier::BOLD);
            if focused {
                style = style.bg(theme.selection_bg);
            }
        }
        let text = if chosen {
            format!("[{}]", p.label())
        } else {
            format!(" {} ", p.label())
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
    }
    spans
}
