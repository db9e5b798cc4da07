use chrono::{NaiveDate, NaiveDateTime};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::AppConfig;
use crate::model::task::{NewTask, Priority, ReminderTime};
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Render the whole screen
pub fn render_app(app: &mut App) -> String {
    render_to_string(TERM_W, TERM_H, |frame, _area| {
        super::render(frame, app);
    })
}

pub fn morning() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

/// An App with default config and no tasks.
pub fn empty_app() -> App {
    App::new(AppConfig::default())
}

/// An App with one card in each column:
/// "Write report" (to do), "Buy milk" (in progress), "Call mom" (done).
pub fn app_with_board() -> App {
    let mut app = empty_app();
    let s = &mut app.session;
    let call = s
        .add_task(NewTask::new("Call mom", Priority::Low), morning())
        .unwrap();
    s.complete(&call.id).unwrap();
    let milk = s
        .add_task(
            NewTask::new("Buy milk", Priority::High)
                .with_reminder(ReminderTime::new(17, 30).unwrap())
                .with_estimate(15),
            morning(),
        )
        .unwrap();
    s.transition(&milk.id).unwrap();
    s.add_task(
        NewTask::new("Write report", Priority::Medium).with_description("Quarterly numbers"),
        morning(),
    )
    .unwrap();
    app
}
