use std::time::Duration;

use log::warn;

use crate::audio::RingtoneConfig;

pub const RINGTONE_VAR: &str = "FAKE_CALL_RINGTONE";
pub const RING_VOLUME_VAR: &str = "FAKE_CALL_RING_VOLUME";
pub const CARRIER_VAR: &str = "FAKE_CALL_CARRIER";

/// Application-wide settings for the call simulator
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatorConfig {
    /// Desktop window title
    pub window_title: String,
    /// Carrier label in the fake status bar
    pub carrier: String,
    /// Number shown under the caller's name while ringing
    pub placeholder_number: String,
    /// Period of the call duration timer
    pub tick_interval: Duration,
    pub ringtone: RingtoneConfig,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            window_title: "FakeiPhoneCalls".to_string(),
            carrier: "Verizon".to_string(),
            placeholder_number: "+1 (555) 123-4567".to_string(),
            tick_interval: Duration::from_secs(1),
            ringtone: RingtoneConfig::default(),
        }
    }
}

impl SimulatorConfig {
    /// Defaults with overrides read from the process environment
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a variable lookup. Unparseable values are logged and skipped.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(RINGTONE_VAR) {
            match value.trim().to_ascii_lowercase().as_str() {
                "off" | "0" | "false" | "no" => self.ringtone = self.ringtone.with_enabled(false),
                "on" | "1" | "true" | "yes" => self.ringtone = self.ringtone.with_enabled(true),
                other => warn!("Ignoring {}={:?}: expected on/off", RINGTONE_VAR, other),
            }
        }

        if let Some(value) = lookup(RING_VOLUME_VAR) {
            match value.trim().parse::<f32>() {
                Ok(volume) => self.ringtone = self.ringtone.with_volume(volume),
                Err(e) => warn!("Ignoring {}={:?}: {}", RING_VOLUME_VAR, value, e),
            }
        }

        if let Some(value) = lookup(CARRIER_VAR) {
            if !value.trim().is_empty() {
                self = self.with_carrier(value.trim());
            }
        }

        self
    }

    pub fn with_carrier(mut self, carrier: impl Into<String>) -> Self {
        self.carrier = carrier.into();
        self
    }
}
