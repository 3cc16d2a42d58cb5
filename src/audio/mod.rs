pub mod cadence;
pub mod ringtone;

pub use cadence::RingCadence;
pub use ringtone::{CpalRinger, RingtonePlayback};

use std::time::Duration;

use crate::error::AudioError;

/// Ringtone configuration for the simulator
#[derive(Debug, Clone, PartialEq)]
pub struct RingtoneConfig {
    /// Play the ringtone at all (can be disabled for quiet rooms)
    pub enabled: bool,
    /// Output volume (0.0 to 1.0)
    pub volume: f32,
    /// The two tones mixed into the ring, in Hz
    pub tones: [f32; 2],
    /// How long each ring burst lasts
    pub ring_on: Duration,
    /// Silence between bursts
    pub ring_off: Duration,
}

impl Default for RingtoneConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: 0.5,
            tones: [440.0, 480.0], // North American ringback pair
            ring_on: Duration::from_secs(2),
            ring_off: Duration::from_secs(4),
        }
    }
}

impl RingtoneConfig {
    /// Enable/disable the ringtone
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set output volume
    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = volume.clamp(0.0, 1.0);
        self
    }

    /// Set the two ring frequencies
    #[cfg(test)]
    pub fn with_tones(mut self, tones: [f32; 2]) -> Self {
        self.tones = tones;
        self
    }

    /// Set the on/off cadence
    #[cfg(test)]
    pub fn with_cadence(mut self, ring_on: Duration, ring_off: Duration) -> Self {
        self.ring_on = ring_on;
        self.ring_off = ring_off;
        self
    }
}

/// Something that can ring while a call is incoming.
///
/// Dropping the returned guard silences it; the next `start` plays from the beginning.
/// `start` may block while a device opens, so it is run on the blocking pool.
pub trait Ringer: Clone + Send + 'static {
    type Guard: Send + 'static;

    fn start(&self) -> Result<Self::Guard, AudioError>;
}
