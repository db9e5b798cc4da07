use std::time::Duration;

use crate::model::config::TimerConfig;

/// Pomodoro phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Work,
    ShortBreak,
    LongBreak,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Work => "Focus",
            Phase::ShortBreak => "Short break",
            Phase::LongBreak => "Long break",
        }
    }
}

/// Raised by `tick` or `skip` when a phase ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseFinished {
    pub from: Phase,
    pub to: Phase,
}

/// Work/break timer. Time only advances through `tick`, so the caller owns
/// the clock.
#[derive(Debug, Clone)]
pub struct Pomodoro {
    config: TimerConfig,
    phase: Phase,
    remaining: Duration,
    running: bool,
    /// Work phases finished since the last long break
    completed_work: u32,
    /// Work phases finished since the timer was created
    total_completed: u32,
}

impl Pomodoro {
    pub fn new(config: TimerConfig) -> Self {
        let remaining = phase_length(&config, Phase::Work);
        Pomodoro {
            config,
            phase: Phase::Work,
            remaining,
            running: false,
            completed_work: 0,
            total_completed: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn completed_sessions(&self) -> u32 {
        self.total_completed
    }

    /// Length of the current phase
    pub fn phase_length(&self) -> Duration {
        phase_length(&self.config, self.phase)
    }

    /// Fraction of the current phase already elapsed, 0.0..=1.0
    pub fn progress(&self) -> f64 {
        let total = self.phase_length().as_secs_f64();
        if total <= 0.0 {
            return 1.0;
        }
        (1.0 - self.remaining.as_secs_f64() / total).clamp(0.0, 1.0)
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Back to a stopped, full-length work phase
    pub fn reset(&mut self) {
        self.phase = Phase::Work;
        self.remaining = self.phase_length();
        self.running = false;
        self.completed_work = 0;
    }

    /// End the current phase now. Skipped work does not count as completed.
    pub fn skip(&mut self) -> PhaseFinished {
        self.advance(false)
    }

    /// Advance the clock. Returns the finished phase when the countdown hits
    /// zero; leftover time does not carry into the next phase.
    pub fn tick(&mut self, elapsed: Duration) -> Option<PhaseFinished> {
        if !self.running {
            return None;
        }
        self.remaining = self.remaining.saturating_sub(elapsed);
        if self.remaining.is_zero() {
            Some(self.advance(true))
        } else {
            None
        }
    }

    fn advance(&mut self, counted: bool) -> PhaseFinished {
        let from = self.phase;
        let to = match from {
            Phase::Work => {
                if counted {
                    self.completed_work += 1;
                    self.total_completed += 1;
                }
                let every = self.config.sessions_before_long_break.max(1);
                if counted && self.completed_work >= every {
                    self.completed_work = 0;
                    Phase::LongBreak
                } else {
                    Phase::ShortBreak
                }
            }
            Phase::ShortBreak | Phase::LongBreak => Phase::Work,
        };
        self.phase = to;
        self.remaining = self.phase_length();
        PhaseFinished { from, to }
    }
}

fn phase_length(config: &TimerConfig, phase: Phase) -> Duration {
    let minutes = match phase {
        Phase::Work => config.work_minutes,
        Phase::ShortBreak => config.short_break_minutes,
        Phase::LongBreak => config.long_break_minutes,
    };
    Duration::from_secs(u64::from(minutes) * 60)
}

/// `MM:SS`, or `H:MM:SS` past an hour
pub fn format_remaining(d: Duration) -> String {
    let secs = d.as_secs();
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{:02}:{:02}", m, s)
    }
}
