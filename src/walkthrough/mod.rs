//! Walkthrough session
//!
//! Composes the step navigator, the ingredient checklist and the timer of
//! the current step. All mutation goes through the methods here; the UI and
//! the scenario runner only observe state between calls.
//!
//! The timer slot belongs to the step on screen. Moving to another step
//! drops the slot, and with it the ticker, so a countdown never survives
//! its step.

pub mod checklist;
pub mod navigator;
pub mod ticker;
pub mod timer;

pub use checklist::IngredientChecklist;
pub use navigator::StepNavigator;
pub use ticker::Ticker;
pub use timer::{format_clock, StepTimer, TickOutcome, TimerPhase, TIMES_UP};

use crate::audio::{CompletionCue, SilentCue};
use crate::recipe::{Recipe, Step};
use crate::Result;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Timer of the step on screen, with its tick source while running
#[derive(Debug)]
struct ActiveTimer {
    label: String,
    timer: StepTimer,
    ticker: Option<Ticker>,
}

impl ActiveTimer {
    fn for_step(step: &Step) -> Option<Self> {
        step.timer.as_ref().map(|spec| Self {
            label: spec.label.clone(),
            timer: StepTimer::new(spec.duration),
            ticker: None,
        })
    }

    /// Hold a ticker exactly while the timer runs
    fn sync_ticker(&mut self, interval: Duration, now: Instant) {
        match (self.timer.is_running(), self.ticker.is_some()) {
            (true, false) => self.ticker = Some(Ticker::arm(interval, now)),
            (false, true) => self.ticker = None,
            _ => {}
        }
    }
}

/// One cooking session over a single recipe
pub struct Walkthrough {
    recipe: Recipe,
    navigator: StepNavigator,
    checklist: IngredientChecklist,
    active: Option<ActiveTimer>,
    cue: Box<dyn CompletionCue>,
    tick_interval: Duration,
}

impl Walkthrough {
    /// Start a session at the first step
    ///
    /// Fails with [`InvalidRecipe`](crate::MiseError::InvalidRecipe) when the recipe does not
    /// validate, so a session always has a step to show.
    pub fn new(
        recipe: Recipe,
        cue: Box<dyn CompletionCue>,
        tick_interval: Duration,
    ) -> Result<Self> {
        recipe.validate()?;

        let navigator = StepNavigator::new(recipe.step_count());
        let checklist = IngredientChecklist::new(&recipe.ingredients);
        let active = recipe.steps.first().and_then(ActiveTimer::for_step);

        info!(
            "Starting walkthrough of '{}' ({} steps)",
            recipe.name,
            recipe.step_count()
        );

        Ok(Self {
            recipe,
            navigator,
            checklist,
            active,
            cue,
            tick_interval,
        })
    }

    /// Silent session with one-second ticks
    pub fn silent(recipe: Recipe) -> Result<Self> {
        Self::new(recipe, Box::new(SilentCue), Duration::from_secs(1))
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    pub fn navigator(&self) -> &StepNavigator {
        &self.navigator
    }

    pub fn checklist(&self) -> &IngredientChecklist {
        &self.checklist
    }

    /// The step on screen
    pub fn current_step(&self) -> &Step {
        &self.recipe.steps[self.navigator.index()]
    }

    /// One-based number of the step on screen
    pub fn step_number(&self) -> usize {
        self.navigator.step_number()
    }

    pub fn progress_percent(&self) -> u8 {
        self.navigator.progress_percent()
    }

    /// True once the last step is reached
    pub fn is_finished(&self) -> bool {
        self.navigator.is_last()
    }

    /// Timer of the step on screen, if it has one
    pub fn timer(&self) -> Option<&StepTimer> {
        self.active.as_ref().map(|a| &a.timer)
    }

    /// Label of the current step's timer
    pub fn timer_label(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.label.as_str())
    }

    /// Whether a tick source is currently held
    pub fn is_ticking(&self) -> bool {
        self.active.as_ref().is_some_and(|a| a.ticker.is_some())
    }

    // === Navigation ===

    /// Go to the next step; no-op at the last step
    pub fn next(&mut self) -> bool {
        if !self.navigator.next() {
            return false;
        }
        self.enter_current_step();
        true
    }

    /// Go to the previous step; no-op at the first step
    pub fn previous(&mut self) -> bool {
        if !self.navigator.previous() {
            return false;
        }
        self.enter_current_step();
        true
    }

    fn enter_current_step(&mut self) {
        if let Some(old) = self.active.take() {
            if old.ticker.is_some() {
                debug!("Discarding running timer '{}' at {}", old.label, old.timer.display());
            }
        }
        self.active = ActiveTimer::for_step(self.current_step());

        info!(
            "Step {}/{}: {}",
            self.navigator.step_number(),
            self.navigator.total(),
            self.current_step().title
        );
        if self.is_finished() {
            info!("Reached the last step of '{}'", self.recipe.name);
        }
    }

    // === Ingredients ===

    /// Flip an ingredient's check mark; returns whether it is now checked
    pub fn toggle_ingredient(&mut self, id: &str) -> bool {
        let checked = self.checklist.toggle(id);
        if let Some(ingredient) = self.recipe.ingredient(id) {
            let (done, total) = self.checklist.count();
            debug!(
                "Ingredient '{}' checked={} ({}/{})",
                ingredient.name, checked, done, total
            );
        }
        checked
    }

    // === Timer ===

    /// Primary timer control: start, pause, or reset once complete
    pub fn toggle_timer(&mut self, now: Instant) {
        let interval = self.tick_interval;
        if let Some(active) = self.active.as_mut() {
            active.timer.toggle();
            active.sync_ticker(interval, now);
            debug!("Timer '{}' -> {}", active.label, active.timer.phase());
        }
    }

    /// Start the current timer if possible
    pub fn start_timer(&mut self, now: Instant) {
        let interval = self.tick_interval;
        if let Some(active) = self.active.as_mut() {
            active.timer.start();
            active.sync_ticker(interval, now);
        }
    }

    /// Pause the current timer
    pub fn pause_timer(&mut self) {
        if let Some(active) = self.active.as_mut() {
            active.timer.pause();
            active.ticker = None;
        }
    }

    /// Put the current timer back to its full duration
    pub fn reset_timer(&mut self) {
        if let Some(active) = self.active.as_mut() {
            active.timer.reset();
            active.ticker = None;
            debug!("Timer '{}' reset", active.label);
        }
    }

    /// Apply every tick that has come due by `now`
    ///
    /// Returns the number of ticks applied. Fires the completion cue on the
    /// tick that takes the timer to zero.
    pub fn pump(&mut self, now: Instant) -> u32 {
        let Some(active) = self.active.as_mut() else {
            return 0;
        };
        let Some(ticker) = active.ticker.as_mut() else {
            return 0;
        };

        let due = ticker.drain(now);
        let mut applied = 0;
        for _ in 0..due {
            match active.timer.tick() {
                TickOutcome::Ignored => break,
                TickOutcome::Counted => applied += 1,
                TickOutcome::Completed => {
                    applied += 1;
                    info!("Timer '{}' finished", active.label);
                    self.cue.play(&active.label);
                    break;
                }
            }
        }

        if applied > 0 {
            debug!("Timer '{}' at {} after {} tick(s)", active.label, active.timer.display(), applied);
        }
        active.sync_ticker(self.tick_interval, now);
        applied
    }

    /// Time until the next tick is due, while a timer is running
    pub fn until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.active
            .as_ref()
            .and_then(|a| a.ticker.as_ref())
            .map(|t| t.until_next(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::CountingCue;

    fn session() -> (Walkthrough, CountingCue) {
        let cue = CountingCue::new();
        let walkthrough = Walkthrough::new(
            Recipe::carbonara(),
            Box::new(cue.clone()),
            Duration::from_secs(1),
        )
        .unwrap();
        (walkthrough, cue)
    }

    #[test]
    fn test_first_step_timer_is_idle() {
        let (walkthrough, _) = session();
        assert_eq!(walkthrough.step_number(), 1);
        assert_eq!(walkthrough.timer_label(), Some("Water Boiling Time"));
        let timer = walkthrough.timer().unwrap();
        assert_eq!(timer.remaining(), 480);
        assert_eq!(timer.phase(), TimerPhase::Idle);
        assert!(!walkthrough.is_ticking());
    }

    #[test]
    fn test_ticker_held_only_while_running() {
        let (mut walkthrough, _) = session();
        let t0 = Instant::now();
        walkthrough.toggle_timer(t0);
        assert!(walkthrough.is_ticking());
        walkthrough.toggle_timer(t0);
        assert!(!walkthrough.is_ticking());
        walkthrough.start_timer(t0);
        assert!(walkthrough.is_ticking());
        walkthrough.reset_timer();
        assert!(!walkthrough.is_ticking());
    }

    #[test]
    fn test_pump_applies_elapsed_ticks() {
        let (mut walkthrough, _) = session();
        let t0 = Instant::now();
        walkthrough.toggle_timer(t0);
        assert_eq!(walkthrough.pump(t0 + Duration::from_millis(500)), 0);
        assert_eq!(walkthrough.pump(t0 + Duration::from_secs(3)), 3);
        assert_eq!(walkthrough.timer().unwrap().display(), "07:57");
        assert_eq!(
            walkthrough.until_next_tick(t0 + Duration::from_millis(3250)),
            Some(Duration::from_millis(750))
        );
    }

    #[test]
    fn test_pump_stops_at_completion_and_fires_cue_once() {
        let (mut walkthrough, cue) = session();
        let t0 = Instant::now();
        walkthrough.toggle_timer(t0);

        assert_eq!(walkthrough.pump(t0 + Duration::from_secs(10_000)), 480);
        let timer = walkthrough.timer().unwrap();
        assert!(timer.is_complete());
        assert_eq!(timer.display(), TIMES_UP);
        assert!(!walkthrough.is_ticking());
        assert_eq!(cue.labels(), vec!["Water Boiling Time"]);

        assert_eq!(walkthrough.pump(t0 + Duration::from_secs(20_000)), 0);
        assert_eq!(cue.count(), 1);
    }

    #[test]
    fn test_navigation_discards_running_timer() {
        let (mut walkthrough, cue) = session();
        let t0 = Instant::now();
        walkthrough.toggle_timer(t0);
        walkthrough.pump(t0 + Duration::from_secs(30));

        assert!(walkthrough.next());
        let timer = walkthrough.timer().unwrap();
        assert_eq!(timer.remaining(), 300);
        assert!(!timer.is_running());
        assert!(!walkthrough.is_ticking());

        assert_eq!(walkthrough.pump(t0 + Duration::from_secs(10_000)), 0);
        assert_eq!(walkthrough.timer().unwrap().remaining(), 300);
        assert_eq!(cue.count(), 0);
    }

    #[test]
    fn test_returning_to_step_restarts_its_timer() {
        let (mut walkthrough, _) = session();
        let t0 = Instant::now();
        walkthrough.toggle_timer(t0);
        walkthrough.pump(t0 + Duration::from_secs(60));
        walkthrough.pause_timer();

        walkthrough.next();
        walkthrough.previous();
        let timer = walkthrough.timer().unwrap();
        assert_eq!(timer.remaining(), 480);
        assert_eq!(timer.phase(), TimerPhase::Idle);
    }

    #[test]
    fn test_step_without_timer() {
        let (mut walkthrough, _) = session();
        walkthrough.next();
        walkthrough.next();
        assert_eq!(walkthrough.current_step().title, "Prepare the Egg Mixture");
        assert!(walkthrough.timer().is_none());

        let t0 = Instant::now();
        walkthrough.toggle_timer(t0);
        walkthrough.reset_timer();
        assert_eq!(walkthrough.pump(t0 + Duration::from_secs(5)), 0);
        assert_eq!(walkthrough.until_next_tick(t0), None);
    }

    #[test]
    fn test_finished_only_on_last_step() {
        let (mut walkthrough, _) = session();
        for _ in 0..4 {
            walkthrough.next();
            assert!(!walkthrough.is_finished());
        }
        walkthrough.next();
        assert!(walkthrough.is_finished());
        assert_eq!(walkthrough.progress_percent(), 100);
        assert!(!walkthrough.next());
        assert_eq!(walkthrough.step_number(), 6);
    }

    #[test]
    fn test_ingredients_independent_of_navigation() {
        let (mut walkthrough, _) = session();
        assert!(walkthrough.toggle_ingredient("2"));
        walkthrough.next();
        walkthrough.toggle_timer(Instant::now());
        assert!(walkthrough.checklist().is_checked("2"));
        assert_eq!(walkthrough.checklist().count(), (1, 7));
    }

    #[test]
    fn test_recipe_without_steps_is_rejected() {
        let mut recipe = Recipe::carbonara();
        recipe.steps.clear();
        let result = Walkthrough::silent(recipe);
        assert!(matches!(result, Err(crate::MiseError::InvalidRecipe(_))));
    }

    #[test]
    fn test_duplicate_ingredient_ids_are_rejected() {
        let mut recipe = Recipe::carbonara();
        recipe.ingredients[6].id = recipe.ingredients[0].id.clone();
        let result = Walkthrough::new(
            recipe,
            Box::new(CountingCue::new()),
            Duration::from_secs(1),
        );
        assert!(matches!(result, Err(crate::MiseError::InvalidRecipe(_))));
    }
}
