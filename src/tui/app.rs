use std::io::{self, Write};
use std::time::{Duration, Instant};

use chrono::{Local, NaiveDateTime};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
};
use log::{info, warn};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::task::{Priority, Status, Task, TaskId};
use crate::model::AppConfig;
use crate::ops::categories::Categories;
use crate::ops::pomodoro::Pomodoro;
use crate::ops::reminder::NotificationSink;
use crate::ops::session::Session;
use crate::ops::store::StoreError;

use super::input;
use super::render;
use super::theme::Theme;

/// How long a toast stays on the status row
pub const TOAST_TTL: Duration = Duration::from_secs(4);

/// Event loop poll interval; also the worst-case reminder latency
const TICK: Duration = Duration::from_millis(250);

/// Which page is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Board,
    Timer,
    Categories,
    Settings,
}

impl View {
    pub const ALL: [View; 4] = [View::Board, View::Timer, View::Categories, View::Settings];

    pub fn label(self) -> &'static str {
        match self {
            View::Board => "Board",
            View::Timer => "Timer",
            View::Categories => "Categories",
            View::Settings => "Settings",
        }
    }

    pub fn index(self) -> usize {
        View::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }

    pub fn next(self) -> View {
        View::ALL[(self.index() + 1) % View::ALL.len()]
    }

    pub fn prev(self) -> View {
        View::ALL[(self.index() + View::ALL.len() - 1) % View::ALL.len()]
    }
}

/// Current interaction mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Add-task form is open
    AddForm,
    /// Typing a new category name
    CategoryInput,
    /// Waiting for `y` to delete this task
    ConfirmDelete(TaskId),
}

/// Fields of the add-task form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Priority,
    Reminder,
    Description,
    Estimate,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Title,
        FormField::Priority,
        FormField::Reminder,
        FormField::Description,
        FormField::Estimate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Priority => "Priority",
            FormField::Reminder => "Reminder (HH:MM)",
            FormField::Description => "Description",
            FormField::Estimate => "Estimate (min)",
        }
    }

    pub fn next(self) -> FormField {
        let i = FormField::ALL.iter().position(|f| *f == self).unwrap_or(0);
        FormField::ALL[(i + 1) % FormField::ALL.len()]
    }

    pub fn prev(self) -> FormField {
        let i = FormField::ALL.iter().position(|f| *f == self).unwrap_or(0);
        FormField::ALL[(i + FormField::ALL.len() - 1) % FormField::ALL.len()]
    }
}

/// Add-task form buffers. Text fields keep a byte cursor into their buffer.
#[derive(Debug, Clone)]
pub struct AddForm {
    pub field: FormField,
    pub title: String,
    pub priority: Priority,
    pub reminder: String,
    pub description: String,
    pub estimate: String,
    pub cursor: usize,
    pub error: Option<String>,
}

impl Default for AddForm {
    fn default() -> Self {
        AddForm {
            field: FormField::Title,
            title: String::new(),
            priority: Priority::Medium,
            reminder: String::new(),
            description: String::new(),
            estimate: String::new(),
            cursor: 0,
            error: None,
        }
    }
}

impl AddForm {
    /// Buffer for the focused field; None for the priority selector
    pub fn buffer(&self) -> Option<&String> {
        match self.field {
            FormField::Title => Some(&self.title),
            FormField::Priority => None,
            FormField::Reminder => Some(&self.reminder),
            FormField::Description => Some(&self.description),
            FormField::Estimate => Some(&self.estimate),
        }
    }

    pub fn buffer_mut(&mut self) -> Option<&mut String> {
        match self.field {
            FormField::Title => Some(&mut self.title),
            FormField::Priority => None,
            FormField::Reminder => Some(&mut self.reminder),
            FormField::Description => Some(&mut self.description),
            FormField::Estimate => Some(&mut self.estimate),
        }
    }

    /// Move to another field with the cursor at its end
    pub fn focus(&mut self, field: FormField) {
        self.field = field;
        self.cursor = self.buffer().map_or(0, String::len);
    }
}

/// Settings page rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    LargeText,
    HighContrast,
    ReduceMotion,
    FocusTheme,
    SystemNotifications,
}

impl Setting {
    pub const ALL: [Setting; 5] = [
        Setting::LargeText,
        Setting::HighContrast,
        Setting::ReduceMotion,
        Setting::FocusTheme,
        Setting::SystemNotifications,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Setting::LargeText => "Larger, roomier cards",
            Setting::HighContrast => "High contrast",
            Setting::ReduceMotion => "Reduce motion",
            Setting::FocusTheme => "Focus theme",
            Setting::SystemNotifications => "System notifications",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Setting::LargeText => "Adds breathing room between cards",
            Setting::HighContrast => "Stronger colors for easier reading",
            Setting::ReduceMotion => "No spinner or blinking cursor",
            Setting::FocusTheme => "Muted colors, fewer distractions",
            Setting::SystemNotifications => "Bell and window title on reminders",
        }
    }
}

/// A transient message on the status row
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub is_error: bool,
    pub shown_at: Instant,
}

/// Notification sink that rings the terminal bell and sets the window title.
/// When disabled it drops everything silently.
#[derive(Debug, Default)]
pub struct TerminalSink {
    pub enabled: bool,
    pending: Vec<(String, String)>,
}

impl TerminalSink {
    pub fn new(enabled: bool) -> Self {
        TerminalSink {
            enabled,
            pending: Vec::new(),
        }
    }

    pub fn pending(&self) -> &[(String, String)] {
        &self.pending
    }

    /// Write queued notifications to the terminal
    pub fn flush(&mut self, out: &mut impl Write) -> io::Result<()> {
        for (title, body) in self.pending.drain(..) {
            execute!(out, SetTitle(format!("{}: {}", title, body)))?;
            out.write_all(b"\x07")?;
        }
        out.flush()
    }
}

impl NotificationSink for TerminalSink {
    fn notify(&mut self, title: &str, body: &str) {
        if self.enabled {
            self.pending.push((title.to_string(), body.to_string()));
        }
    }
}

/// Main application state
pub struct App {
    pub session: Session,
    pub categories: Categories,
    pub pomodoro: Pomodoro,
    pub config: AppConfig,
    pub theme: Theme,
    pub sink: TerminalSink,
    pub view: View,
    pub mode: Mode,
    pub should_quit: bool,
    /// Help overlay visible
    pub show_help: bool,
    /// Selected board column (0..3)
    pub column: usize,
    /// Cursor row per column
    pub cursors: [usize; 3],
    pub form: Option<AddForm>,
    pub category_cursor: usize,
    pub category_input: String,
    pub settings_cursor: usize,
    pub toast: Option<Toast>,
    /// Spinner frame for the running timer
    pub frame_count: u64,
    last_tick: Instant,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let theme = Theme::from_config(&config.ui);
        App {
            session: Session::new(),
            categories: Categories::from_defaults(&config.categories.defaults),
            pomodoro: Pomodoro::new(config.timer.clone()),
            sink: TerminalSink::new(config.notifications.system),
            theme,
            config,
            view: View::Board,
            mode: Mode::Navigate,
            should_quit: false,
            show_help: false,
            column: 0,
            cursors: [0; 3],
            form: None,
            category_cursor: 0,
            category_input: String::new(),
            settings_cursor: 0,
            toast: None,
            frame_count: 0,
            last_tick: Instant::now(),
        }
    }

    // -----------------------------------------------------------------------
    // Board cursor
    // -----------------------------------------------------------------------

    pub fn current_status(&self) -> Status {
        Status::ALL[self.column.min(2)]
    }

    /// The card under the cursor
    pub fn cursor_task(&self) -> Option<&Task> {
        let board = self.session.board();
        let col = board.column(self.current_status());
        col.get(self.cursors[self.column]).copied()
    }

    pub fn cursor_task_id(&self) -> Option<TaskId> {
        self.cursor_task().map(|t| t.id.clone())
    }

    /// Keep every column cursor inside its column after the board changed
    pub fn clamp_cursors(&mut self) {
        let counts = self.session.board().counts();
        for (cursor, count) in self.cursors.iter_mut().zip(counts) {
            *cursor = (*cursor).min(count.saturating_sub(1));
        }
    }

    // -----------------------------------------------------------------------
    // Toasts
    // -----------------------------------------------------------------------

    pub fn toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            is_error: false,
            shown_at: Instant::now(),
        });
    }

    pub fn toast_error(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            is_error: true,
            shown_at: Instant::now(),
        });
    }

    /// Turn a failed operation into a toast. Stale ids only close the view
    /// that referenced them.
    pub fn report(&mut self, err: StoreError) {
        match err {
            StoreError::NotFound(id) => {
                warn!("event=stale_reference id={}", id);
            }
            StoreError::Validation(msg) => self.toast_error(msg),
        }
    }

    // -----------------------------------------------------------------------
    // Settings
    // -----------------------------------------------------------------------

    pub fn setting_enabled(&self, setting: Setting) -> bool {
        match setting {
            Setting::LargeText => self.config.ui.large_text,
            Setting::HighContrast => self.config.ui.high_contrast,
            Setting::ReduceMotion => self.config.ui.reduce_motion,
            Setting::FocusTheme => self.config.ui.focus_theme,
            Setting::SystemNotifications => self.config.notifications.system,
        }
    }

    /// Flip a setting for this session and acknowledge it
    pub fn toggle_setting(&mut self, setting: Setting) {
        let value = !self.setting_enabled(setting);
        match setting {
            Setting::LargeText => self.config.ui.large_text = value,
            Setting::HighContrast => {
                self.config.ui.high_contrast = value;
                self.theme = Theme::from_config(&self.config.ui);
            }
            Setting::ReduceMotion => self.config.ui.reduce_motion = value,
            Setting::FocusTheme => {
                self.config.ui.focus_theme = value;
                self.theme = Theme::from_config(&self.config.ui);
            }
            Setting::SystemNotifications => {
                self.config.notifications.system = value;
                self.sink.enabled = value;
            }
        }
        info!("event=setting_toggled setting={:?} value={}", setting, value);
        let state = if value { "enabled" } else { "disabled" };
        self.toast(format!("{} {}", setting.label(), state));
    }

    // -----------------------------------------------------------------------
    // Clock
    // -----------------------------------------------------------------------

    /// Advance timers: fire due reminders, run the pomodoro, expire toasts
    pub fn tick(&mut self, now: Instant, wall: NaiveDateTime) {
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        self.frame_count = self.frame_count.wrapping_add(1);

        if let Some(toast) = &self.toast
            && now.saturating_duration_since(toast.shown_at) >= TOAST_TTL
        {
            self.toast = None;
        }

        // The in-app acknowledgment appears whether or not the sink delivered
        let fired = self.session.fire_due_reminders(wall, &mut self.sink);
        match fired.as_slice() {
            [] => {}
            [one] => self.toast(format!("Reminder: {}", one.body)),
            many => {
                let bodies: Vec<&str> = many.iter().map(|r| r.body.as_str()).collect();
                self.toast(format!("Reminders: {}", bodies.join(", ")));
            }
        }

        if let Some(done) = self.pomodoro.tick(elapsed) {
            let msg = format!("{} finished, time for: {}", done.from.label(), done.to.label());
            self.sink.notify("Timer", &msg);
            self.toast(msg);
        }
    }
}

/// Run the TUI application
pub fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("focusboard"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    info!("event=tui_start");
    let result = run_event_loop(&mut terminal, &mut app);
    info!("event=tui_exit tasks={}", app.session.tasks().len());

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        app.tick(Instant::now(), Local::now().naive_local());
        app.sink.flush(&mut io::stdout())?;

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
