//! Chime synthesis
//!
//! A short sine tone whose gain decays exponentially from a peak to a
//! floor over the tone's length.

use crate::config::CueConfig;
use std::time::Duration;

/// Parameters of the completion tone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chime {
    pub frequency_hz: f32,
    pub peak_gain: f32,
    pub floor_gain: f32,
    pub duration: Duration,
}

impl Default for Chime {
    fn default() -> Self {
        Self {
            frequency_hz: 800.0,
            peak_gain: 0.3,
            floor_gain: 0.01,
            duration: Duration::from_millis(500),
        }
    }
}

impl Chime {
    pub fn from_config(config: &CueConfig) -> Self {
        Self {
            frequency_hz: config.frequency_hz,
            peak_gain: config.peak_gain,
            floor_gain: config.floor_gain,
            duration: Duration::from_millis(config.duration_ms),
        }
    }

    /// Number of frames the tone lasts at `sample_rate`
    pub fn frame_count(&self, sample_rate: u32) -> usize {
        (self.duration.as_secs_f64() * sample_rate as f64).round() as usize
    }

    /// Gain at time `t` seconds into the tone
    pub fn envelope(&self, t: f32) -> f32 {
        let length = self.duration.as_secs_f32();
        if length <= 0.0 {
            return 0.0;
        }
        let progress = (t / length).clamp(0.0, 1.0);
        self.peak_gain * (self.floor_gain / self.peak_gain).powf(progress)
    }

    /// Mono samples of the whole tone
    pub fn synthesize(&self, sample_rate: u32) -> Vec<f32> {
        let rate = sample_rate.max(1) as f32;
        (0..self.frame_count(sample_rate))
            .map(|n| {
                let t = n as f32 / rate;
                (t * self.frequency_hz * std::f32::consts::TAU).sin() * self.envelope(t)
            })
            .collect()
    }
}
