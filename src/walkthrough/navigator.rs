//! Step navigation and overall progress

/// Tracks the current step of a recipe
///
/// The index is always within `[0, total - 1]` and only moves by one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepNavigator {
    index: usize,
    total: usize,
}

impl StepNavigator {
    /// Start at the first of `total` steps (at least one)
    pub fn new(total: usize) -> Self {
        Self {
            index: 0,
            total: total.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// One-based step number for display
    pub fn step_number(&self) -> usize {
        self.index + 1
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.total
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    /// Whether the current step is the last one
    pub fn is_last(&self) -> bool {
        self.index == self.total - 1
    }

    /// Advance one step; returns false at the last step
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Go back one step; returns false at the first step
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Share of the recipe reached, in `(0, 1]`
    pub fn progress(&self) -> f32 {
        (self.index + 1) as f32 / self.total as f32
    }

    /// Progress as a whole percentage, rounded to nearest
    pub fn progress_percent(&self) -> u8 {
        (self.progress() * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_at_both_ends() {
        let mut nav = StepNavigator::new(3);
        assert!(!nav.previous());
        assert_eq!(nav.index(), 0);

        assert!(nav.next());
        assert!(nav.next());
        assert!(nav.is_last());
        assert!(!nav.next());
        assert_eq!(nav.index(), 2);

        assert!(nav.previous());
        assert_eq!(nav.step_number(), 2);
    }

    #[test]
    fn test_progress_percent_six_steps() {
        let mut nav = StepNavigator::new(6);
        assert_eq!(nav.progress_percent(), 17);
        let expected = [33, 50, 67, 83, 100];
        for percent in expected {
            nav.next();
            assert_eq!(nav.progress_percent(), percent);
        }
        assert!(nav.is_last());
    }

    #[test]
    fn test_single_step_is_immediately_last() {
        let nav = StepNavigator::new(1);
        assert!(nav.is_last());
        assert!(!nav.has_next());
        assert!(!nav.has_previous());
        assert_eq!(nav.progress_percent(), 100);
    }
}
