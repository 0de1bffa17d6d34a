//! Countdown timer for a single step
//!
//! `StepTimer` is a pure state machine: it knows nothing about wall-clock
//! time. Ticks are delivered by the owner, one per elapsed interval, while
//! the timer is running.

/// Text shown in place of `00:00` once the countdown is over
pub const TIMES_UP: &str = "Time's up!";

/// Observable phase of a step timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    /// Not started, full duration remaining
    Idle,
    /// Counting down
    Running,
    /// Stopped part-way through
    Paused,
    /// Reached zero
    Complete,
}

impl TimerPhase {
    /// Check if counting down
    pub fn is_running(&self) -> bool {
        matches!(self, TimerPhase::Running)
    }

    /// Check if the countdown is over
    pub fn is_complete(&self) -> bool {
        matches!(self, TimerPhase::Complete)
    }
}

impl std::fmt::Display for TimerPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimerPhase::Idle => write!(f, "Idle"),
            TimerPhase::Running => write!(f, "Running"),
            TimerPhase::Paused => write!(f, "Paused"),
            TimerPhase::Complete => write!(f, "Complete"),
        }
    }
}

/// What a single tick did to the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The timer was not running; nothing changed
    Ignored,
    /// One second was counted off, time remains
    Counted,
    /// The last second was counted off; the timer is now complete
    Completed,
}

/// Countdown state for one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTimer {
    duration: u32,
    remaining: u32,
    running: bool,
    complete: bool,
}

impl StepTimer {
    /// Create an idle timer with the full duration remaining
    ///
    /// A zero duration is bumped to one second so the timer can still run.
    pub fn new(duration: u32) -> Self {
        let duration = duration.max(1);
        Self {
            duration,
            remaining: duration,
            running: false,
            complete: false,
        }
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Current phase derived from the raw fields
    pub fn phase(&self) -> TimerPhase {
        if self.complete {
            TimerPhase::Complete
        } else if self.running {
            TimerPhase::Running
        } else if self.remaining == self.duration {
            TimerPhase::Idle
        } else {
            TimerPhase::Paused
        }
    }

    /// Start counting down. No-op when complete or already running.
    pub fn start(&mut self) -> bool {
        if self.complete || self.running || self.remaining == 0 {
            return false;
        }
        self.running = true;
        true
    }

    /// Stop counting down. No-op when not running.
    pub fn pause(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        true
    }

    /// Back to the full duration, stopped
    pub fn reset(&mut self) {
        self.remaining = self.duration;
        self.running = false;
        self.complete = false;
    }

    /// The single primary control: reset when complete, else start/pause
    pub fn toggle(&mut self) {
        if self.complete {
            self.reset();
        } else if self.running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Count off one second
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Ignored;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            self.complete = true;
            TickOutcome::Completed
        } else {
            TickOutcome::Counted
        }
    }

    /// `MM:SS`, or [`TIMES_UP`] once complete
    pub fn display(&self) -> String {
        if self.complete {
            TIMES_UP.to_string()
        } else {
            format_clock(self.remaining)
        }
    }

    /// Elapsed share of the duration, in `[0, 1]`
    pub fn progress(&self) -> f32 {
        (self.duration - self.remaining) as f32 / self.duration as f32
    }

    /// Label for the primary control
    pub fn primary_label(&self) -> &'static str {
        match self.phase() {
            TimerPhase::Complete => "Reset",
            TimerPhase::Running => "Pause",
            TimerPhase::Idle | TimerPhase::Paused => "Start",
        }
    }

    /// Whether the secondary reset control should be offered
    pub fn shows_secondary_reset(&self) -> bool {
        !self.complete && self.remaining != self.duration
    }
}

/// Format whole seconds as zero-padded `MM:SS`
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(timer: &mut StepTimer) -> usize {
        let mut completions = 0;
        for _ in 0..timer.duration() {
            if timer.tick() == TickOutcome::Completed {
                completions += 1;
            }
        }
        completions
    }

    #[test]
    fn test_new_timer_is_idle() {
        let timer = StepTimer::new(300);
        assert_eq!(timer.phase(), TimerPhase::Idle);
        assert_eq!(timer.remaining(), 300);
        assert_eq!(timer.display(), "05:00");
        assert_eq!(timer.progress(), 0.0);
        assert!(!timer.shows_secondary_reset());
    }

    #[test]
    fn test_ticks_ignored_while_idle() {
        let mut timer = StepTimer::new(10);
        assert_eq!(timer.tick(), TickOutcome::Ignored);
        assert_eq!(timer.remaining(), 10);
    }

    #[test]
    fn test_start_pause_resume() {
        let mut timer = StepTimer::new(10);
        assert!(timer.start());
        assert!(!timer.start(), "second start is a no-op");
        timer.tick();
        timer.tick();
        assert!(timer.pause());
        assert!(!timer.pause(), "second pause is a no-op");
        assert_eq!(timer.phase(), TimerPhase::Paused);

        assert_eq!(timer.tick(), TickOutcome::Ignored);
        assert_eq!(timer.remaining(), 8);

        timer.start();
        assert_eq!(timer.phase(), TimerPhase::Running);
        timer.tick();
        assert_eq!(timer.remaining(), 7);
    }

    #[test]
    fn test_completes_exactly_once() {
        for duration in [1, 2, 59, 60, 61, 480] {
            let mut timer = StepTimer::new(duration);
            timer.start();
            assert_eq!(run_to_completion(&mut timer), 1);
            assert!(timer.is_complete());
            assert!(!timer.is_running());
            assert_eq!(timer.remaining(), 0);

            for _ in 0..5 {
                assert_eq!(timer.tick(), TickOutcome::Ignored);
            }
            assert_eq!(timer.remaining(), 0);
        }
    }

    #[test]
    fn test_cannot_start_when_complete() {
        let mut timer = StepTimer::new(1);
        timer.start();
        timer.tick();
        assert!(!timer.start());
        assert_eq!(timer.phase(), TimerPhase::Complete);
    }

    #[test]
    fn test_reset_is_idempotent_from_any_phase() {
        let mut idle = StepTimer::new(30);
        let mut running = StepTimer::new(30);
        running.start();
        running.tick();
        let mut paused = running.clone();
        paused.pause();
        let mut complete = StepTimer::new(30);
        complete.start();
        run_to_completion(&mut complete);

        for timer in [&mut idle, &mut running, &mut paused, &mut complete] {
            timer.reset();
            timer.reset();
            assert_eq!(*timer, StepTimer::new(30));
            assert_eq!(timer.phase(), TimerPhase::Idle);
        }
    }

    #[test]
    fn test_toggle_maps_to_reset_when_complete() {
        let mut timer = StepTimer::new(2);
        timer.toggle();
        assert!(timer.is_running());
        timer.toggle();
        assert_eq!(timer.phase(), TimerPhase::Paused);
        timer.toggle();
        timer.tick();
        timer.tick();
        assert_eq!(timer.primary_label(), "Reset");

        timer.toggle();
        assert_eq!(timer.phase(), TimerPhase::Idle);
        assert_eq!(timer.remaining(), 2);
    }

    #[test]
    fn test_primary_label_follows_phase() {
        let mut timer = StepTimer::new(5);
        assert_eq!(timer.primary_label(), "Start");
        timer.start();
        assert_eq!(timer.primary_label(), "Pause");
        timer.tick();
        timer.pause();
        assert_eq!(timer.primary_label(), "Start");
    }

    #[test]
    fn test_eight_minute_countdown_display() {
        let mut timer = StepTimer::new(480);
        timer.start();

        timer.tick();
        assert_eq!(timer.display(), "07:59");
        for _ in 0..478 {
            timer.tick();
        }
        assert_eq!(timer.display(), "00:01");
        assert!(!timer.is_complete());

        assert_eq!(timer.tick(), TickOutcome::Completed);
        assert_eq!(timer.display(), TIMES_UP);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_progress_is_monotonic_while_running() {
        let mut timer = StepTimer::new(7);
        timer.start();
        let mut last = timer.progress();
        while timer.is_running() {
            timer.tick();
            let now = timer.progress();
            assert!(now >= last);
            assert!((0.0..=1.0).contains(&now));
            last = now;
        }
        assert_eq!(last, 1.0);
        timer.reset();
        assert_eq!(timer.progress(), 0.0);
    }

    #[test]
    fn test_secondary_reset_visibility() {
        let mut timer = StepTimer::new(3);
        timer.start();
        assert!(!timer.shows_secondary_reset(), "nothing elapsed yet");
        timer.tick();
        assert!(timer.shows_secondary_reset());
        timer.pause();
        assert!(timer.shows_secondary_reset());
        timer.start();
        timer.tick();
        timer.tick();
        assert!(timer.is_complete());
        assert!(!timer.shows_secondary_reset());
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(60), "01:00");
        assert_eq!(format_clock(540), "09:00");
        assert_eq!(format_clock(6000), "100:00");
    }
}
