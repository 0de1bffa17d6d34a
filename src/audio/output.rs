//! Chime playback on the default output device
//!
//! Playback happens on a dedicated worker thread. `play` only enqueues a
//! request with `try_send`, so the UI thread never waits on the audio
//! device and a burst of cues collapses into one.

use super::{Chime, CompletionCue};
use crate::{MiseError, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Extra time the stream stays open after the last sample
const TAIL_MARGIN: Duration = Duration::from_millis(100);

/// Plays the completion chime in the background
pub struct ChimePlayer {
    requests: Sender<String>,
}

impl ChimePlayer {
    /// Check that an output device exists and start the playback worker
    pub fn spawn(chime: Chime) -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| MiseError::AudioDeviceError("No output device available".into()))?;

        info!(
            "[CUE] Using output device: {}",
            device.name().unwrap_or_else(|_| "Unknown".to_string())
        );

        let (requests, rx) = bounded(1);
        std::thread::Builder::new()
            .name("mise-chime".to_string())
            .spawn(move || run_worker(chime, rx))
            .map_err(|e| MiseError::AudioDeviceError(format!("Failed to start chime worker: {}", e)))?;

        Ok(Self { requests })
    }
}

impl CompletionCue for ChimePlayer {
    fn play(&self, label: &str) {
        match self.requests.try_send(label.to_string()) {
            Ok(()) => debug!("[CUE] Queued chime for '{}'", label),
            Err(TrySendError::Full(_)) => debug!("[CUE] Chime already pending, dropping '{}'", label),
            Err(TrySendError::Disconnected(_)) => warn!("[CUE] Chime worker is gone"),
        }
    }
}

fn run_worker(chime: Chime, requests: Receiver<String>) {
    while let Ok(label) = requests.recv() {
        match play_once(&chime) {
            Ok(()) => info!("[CUE] Played chime for '{}'", label),
            Err(e) => warn!("[CUE] Could not play chime for '{}': {}", label, e),
        }
    }
    debug!("[CUE] Chime worker stopped");
}

/// Open the default device, play the tone to the end, close the stream
fn play_once(chime: &Chime) -> Result<()> {
    let device = cpal::default_host()
        .default_output_device()
        .ok_or_else(|| MiseError::AudioDeviceError("No output device available".into()))?;

    let config: cpal::StreamConfig = device
        .default_output_config()
        .map_err(|e| MiseError::AudioDeviceError(format!("Failed to get output config: {}", e)))?
        .into();

    let channels = config.channels as usize;
    let samples = chime.synthesize(config.sample_rate.0);
    let mut position = 0usize;

    let err_fn = |err| {
        error!("[CUE] Output stream error: {}", err);
    };

    let stream = device
        .build_output_stream(
            &config,
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                for frame in data.chunks_mut(channels) {
                    let sample = samples.get(position).copied().unwrap_or(0.0);
                    frame.fill(sample);
                    position += 1;
                }
            },
            err_fn,
            None,
        )
        .map_err(|e| MiseError::AudioDeviceError(format!("Failed to build output stream: {}", e)))?;

    stream
        .play()
        .map_err(|e| MiseError::AudioDeviceError(format!("Failed to start output stream: {}", e)))?;

    std::thread::sleep(chime.duration + TAIL_MARGIN);
    drop(stream);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_never_blocks() {
        // This test might not reach a device in CI environments
        if let Ok(player) = ChimePlayer::spawn(Chime::default()) {
            for _ in 0..10 {
                player.play("Water Boiling Time");
            }
        }
    }
}
