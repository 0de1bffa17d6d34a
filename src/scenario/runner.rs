//! Scenario runner
//!
//! Executes scenario actions against a walkthrough, checking assertions as
//! it goes. Time only moves on `advance` actions.

use super::{ActionType, Assertion, Scenario};
use crate::audio::CountingCue;
use crate::recipe::Recipe;
use crate::walkthrough::Walkthrough;
use crate::Result;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Result of an assertion check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionResult {
    /// Assertion passed
    Passed,
    /// Assertion failed with reason
    Failed(String),
}

/// Outcome of a whole scenario
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub name: String,
    pub actions_run: usize,
    pub failures: Vec<String>,
    /// Virtual time that elapsed during the run
    pub elapsed: Duration,
}

impl ScenarioReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// One-line summary for logs
    pub fn summary(&self) -> String {
        let status = if self.passed() { "PASSED" } else { "FAILED" };
        format!(
            "[SCENARIO] '{}' {}: {} actions, {} failure(s), {:?} virtual time",
            self.name,
            status,
            self.actions_run,
            self.failures.len(),
            self.elapsed
        )
    }
}

/// Runs a scenario against its own walkthrough
pub struct ScenarioRunner {
    walkthrough: Walkthrough,
    cue: CountingCue,
    start: Instant,
    offset: Duration,
}

impl ScenarioRunner {
    /// Create a runner over `recipe` with the given tick length
    ///
    /// Fails when the recipe does not validate.
    pub fn new(recipe: Recipe, tick_interval: Duration) -> Result<Self> {
        let cue = CountingCue::new();
        let walkthrough = Walkthrough::new(recipe, Box::new(cue.clone()), tick_interval)?;
        Ok(Self {
            walkthrough,
            cue,
            start: Instant::now(),
            offset: Duration::ZERO,
        })
    }

    /// Current virtual instant
    fn now(&self) -> Instant {
        self.start + self.offset
    }

    /// Run every action in order and collect failures
    pub fn run(&mut self, scenario: &Scenario) -> ScenarioReport {
        info!("[SCENARIO] Running: {}", scenario.scenario.name);
        if !scenario.scenario.description.is_empty() {
            info!("[SCENARIO] Description: {}", scenario.scenario.description);
        }

        let mut failures = Vec::new();
        for (index, step) in scenario.actions.iter().enumerate() {
            debug!("[SCENARIO] Action {}: {:?}", index + 1, step.action);
            self.apply(&step.action);

            if let Some(assertion) = &step.assert {
                if let AssertionResult::Failed(reason) = self.check(assertion) {
                    error!("[SCENARIO] FAIL: action {} {:?} - {}", index + 1, assertion, reason);
                    failures.push(format!("action {}: {}", index + 1, reason));
                } else {
                    debug!("[SCENARIO] PASS: {:?}", assertion);
                }
            }
        }

        let report = ScenarioReport {
            name: scenario.scenario.name.clone(),
            actions_run: scenario.actions.len(),
            failures,
            elapsed: self.offset,
        };
        info!("{}", report.summary());
        report
    }

    /// Perform one action
    pub fn apply(&mut self, action: &ActionType) {
        match action {
            ActionType::Next => {
                self.walkthrough.next();
            }
            ActionType::Previous => {
                self.walkthrough.previous();
            }
            ActionType::ToggleIngredient { id } => {
                self.walkthrough.toggle_ingredient(id);
            }
            ActionType::ToggleTimer => {
                let now = self.now();
                self.walkthrough.toggle_timer(now);
            }
            ActionType::ResetTimer => self.walkthrough.reset_timer(),
            ActionType::Advance { seconds, millis } => {
                self.offset += Duration::from_secs(*seconds) + Duration::from_millis(*millis);
                let now = self.now();
                self.walkthrough.pump(now);
            }
            ActionType::Log { message } => info!("[SCENARIO] Log: {}", message),
            ActionType::Check => {}
        }
    }

    /// Check an assertion against the current state
    pub fn check(&self, assertion: &Assertion) -> AssertionResult {
        let walkthrough = &self.walkthrough;
        let timer = walkthrough.timer();

        let expect = |ok: bool, reason: String| {
            if ok {
                AssertionResult::Passed
            } else {
                AssertionResult::Failed(reason)
            }
        };

        match assertion {
            Assertion::StepNumber { number } => expect(
                walkthrough.step_number() == *number,
                format!("expected step {}, at step {}", number, walkthrough.step_number()),
            ),
            Assertion::ProgressPercent { percent } => expect(
                walkthrough.progress_percent() == *percent,
                format!(
                    "expected {}% progress, got {}%",
                    percent,
                    walkthrough.progress_percent()
                ),
            ),
            Assertion::TimerRemaining { seconds } => match timer {
                Some(t) => expect(
                    t.remaining() == *seconds,
                    format!("expected {}s remaining, got {}s", seconds, t.remaining()),
                ),
                None => AssertionResult::Failed("current step has no timer".to_string()),
            },
            Assertion::TimerDisplay { text } => match timer {
                Some(t) => expect(
                    t.display() == *text,
                    format!("expected display '{}', got '{}'", text, t.display()),
                ),
                None => AssertionResult::Failed("current step has no timer".to_string()),
            },
            Assertion::TimerPhase { phase } => match timer {
                Some(t) => {
                    let actual = t.phase().to_string().to_lowercase();
                    expect(
                        actual == *phase,
                        format!("expected timer {}, got {}", phase, actual),
                    )
                }
                None => AssertionResult::Failed("current step has no timer".to_string()),
            },
            Assertion::NoTimer => expect(
                timer.is_none(),
                "expected a step without a timer".to_string(),
            ),
            Assertion::CheckedCount { count } => {
                let (checked, _) = walkthrough.checklist().count();
                expect(
                    checked == *count,
                    format!("expected {} checked ingredients, got {}", count, checked),
                )
            }
            Assertion::Finished => expect(
                walkthrough.is_finished(),
                format!("expected last step, at step {}", walkthrough.step_number()),
            ),
            Assertion::CueCount { count } => expect(
                self.cue.count() == *count,
                format!("expected {} cue(s), got {}", count, self.cue.count()),
            ),
        }
    }
}
