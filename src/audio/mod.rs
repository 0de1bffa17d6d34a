//! Completion cue
//!
//! The cue is best-effort: implementations must return immediately and
//! swallow their own failures.

pub mod chime;
#[cfg(feature = "audio-io")]
pub mod output;

pub use chime::Chime;
#[cfg(feature = "audio-io")]
pub use output::ChimePlayer;

use crate::config::CueConfig;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{info, warn};

/// Fire-and-forget notification played when a timer runs out
pub trait CompletionCue {
    /// Announce that the timer named `label` finished
    fn play(&self, label: &str);
}

/// Cue that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentCue;

impl CompletionCue for SilentCue {
    fn play(&self, label: &str) {
        info!("[CUE] '{}' finished (silent)", label);
    }
}

/// Cue that records every label it is asked to play
///
/// Clones share the same log, so a caller can keep one handle and give
/// the other to a walkthrough.
#[derive(Debug, Clone, Default)]
pub struct CountingCue {
    played: Arc<Mutex<Vec<String>>>,
}

impl CountingCue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cues played so far
    pub fn count(&self) -> usize {
        self.played.lock().len()
    }

    /// Labels in the order they were played
    pub fn labels(&self) -> Vec<String> {
        self.played.lock().clone()
    }
}

impl CompletionCue for CountingCue {
    fn play(&self, label: &str) {
        self.played.lock().push(label.to_string());
    }
}

/// Build the cue described by the configuration
///
/// Falls back to [`SilentCue`] when the cue is disabled or no output
/// device can be opened.
pub fn cue_from_config(config: &CueConfig) -> Box<dyn CompletionCue> {
    if !config.enabled {
        info!("[CUE] Completion chime disabled");
        return Box::new(SilentCue);
    }

    #[cfg(feature = "audio-io")]
    {
        match ChimePlayer::spawn(Chime::from_config(config)) {
            Ok(player) => return Box::new(player),
            Err(e) if e.is_recoverable() => warn!("[CUE] {}", e.user_message()),
            Err(e) => tracing::error!("[CUE] Chime setup failed: {}", e),
        }
    }

    #[cfg(not(feature = "audio-io"))]
    warn!("[CUE] Built without audio output, chime unavailable");

    Box::new(SilentCue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counting_cue_shares_log_between_clones() {
        let cue = CountingCue::new();
        let handle = cue.clone();
        cue.play("Pasta Cooking Time");
        cue.play("Final Tossing Time");
        assert_eq!(handle.count(), 2);
        assert_eq!(handle.labels(), vec!["Pasta Cooking Time", "Final Tossing Time"]);
    }

    #[test]
    fn test_disabled_config_gives_silent_cue() {
        let config = CueConfig {
            enabled: false,
            ..CueConfig::default()
        };
        // Must not touch the audio device
        cue_from_config(&config).play("Water Boiling Time");
    }
}
