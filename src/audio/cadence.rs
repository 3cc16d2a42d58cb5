use std::f64::consts::TAU;

use crate::audio::RingtoneConfig;

/// Sample generator for a looping two-tone ring.
///
/// Emits `ring_on` worth of the mixed tones followed by `ring_off` of silence,
/// then wraps back to position 0.
#[derive(Debug, Clone)]
pub struct RingCadence {
    sample_rate: f64,
    tones: [f64; 2],
    volume: f32,
    on_samples: u64,
    period_samples: u64,
    position: u64,
}

impl RingCadence {
    pub fn new(config: &RingtoneConfig, sample_rate: u32) -> Self {
        let sample_rate = f64::from(sample_rate.max(1));
        let on_samples = (config.ring_on.as_secs_f64() * sample_rate) as u64;
        let off_samples = (config.ring_off.as_secs_f64() * sample_rate) as u64;

        Self {
            sample_rate,
            tones: config.tones.map(f64::from),
            volume: config.volume.clamp(0.0, 1.0),
            on_samples,
            period_samples: (on_samples + off_samples).max(1),
            position: 0,
        }
    }

    #[cfg(test)]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Samples in one ring + silence cycle
    #[cfg(test)]
    pub fn period_samples(&self) -> u64 {
        self.period_samples
    }

    pub fn next_sample(&mut self) -> f32 {
        let position = self.position;
        self.position = (self.position + 1) % self.period_samples;

        if position >= self.on_samples {
            return 0.0;
        }

        let t = position as f64 / self.sample_rate;
        let mix: f64 = self.tones.iter().map(|freq| (TAU * freq * t).sin()).sum::<f64>() / 2.0;
        mix as f32 * self.volume
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const RATE: u32 = 8_000;

    fn short_ring() -> RingtoneConfig {
        RingtoneConfig::default()
            .with_volume(0.8)
            .with_cadence(Duration::from_millis(100), Duration::from_millis(300))
    }

    #[test]
    fn period_covers_ring_and_silence() {
        let cadence = RingCadence::new(&short_ring(), RATE);
        assert_eq!(cadence.period_samples(), 3_200);
    }

    #[test]
    fn ring_stays_within_volume() {
        let mut cadence = RingCadence::new(&short_ring(), RATE);
        let first = cadence.next_sample();
        assert_eq!(first, 0.0);

        let peak = (0..800)
            .map(|_| cadence.next_sample().abs())
            .fold(0.0_f32, f32::max);
        assert!(peak > 0.1, "ring burst should be audible, peak was {peak}");
        assert!(peak <= 0.8 + f32::EPSILON);
    }

    #[test]
    fn off_window_is_silent() {
        let mut cadence = RingCadence::new(&short_ring(), RATE);
        for _ in 0..800 {
            cadence.next_sample();
        }
        assert!((0..2_400).all(|_| cadence.next_sample() == 0.0));
    }

    #[test]
    fn loops_back_to_start() {
        let mut cadence = RingCadence::new(&short_ring(), RATE);
        let opening: Vec<f32> = (0..50).map(|_| cadence.next_sample()).collect();
        for _ in 50..cadence.period_samples() {
            cadence.next_sample();
        }
        assert_eq!(cadence.position(), 0);
        let again: Vec<f32> = (0..50).map(|_| cadence.next_sample()).collect();
        assert_eq!(opening, again);
    }

    #[test]
    fn zero_volume_is_silent() {
        let mut cadence = RingCadence::new(&short_ring().with_volume(0.0), RATE);
        assert!((0..800).all(|_| cadence.next_sample() == 0.0));
    }

    #[test]
    fn zero_hertz_tones_are_silent() {
        let mut cadence = RingCadence::new(&short_ring().with_tones([0.0, 0.0]), RATE);
        assert!((0..800).all(|_| cadence.next_sample() == 0.0));
    }
}
