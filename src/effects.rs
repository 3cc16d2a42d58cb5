use std::future;
use std::time::Duration;

use log::{debug, error};
use tokio::sync::oneshot;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};

use crate::audio::Ringer;
use crate::error::AudioError;
use crate::simulator::CallPhase;

/// Owns the ringtone and the call timer, keyed off the call phase.
///
/// The ringtone exists only while `Incoming`, the interval only while
/// `Active`. Both are plain fields, so dropping this releases everything.
pub struct CallEffects<R: Ringer> {
    ringer: R,
    /// The guard arrives here once the device is open. Dropping the receiver
    /// silences the ring whether or not it has arrived yet.
    ringing: Option<oneshot::Receiver<R::Guard>>,
    timer: Option<Interval>,
    tick_interval: Duration,
    phase: CallPhase,
}

impl<R: Ringer> CallEffects<R> {
    pub fn new(ringer: R, tick_interval: Duration) -> Self {
        Self {
            ringer,
            ringing: None,
            timer: None,
            tick_interval: tick_interval.max(Duration::from_millis(1)),
            phase: CallPhase::Setup,
        }
    }

    /// Last phase passed to [`CallEffects::sync`]
    #[cfg(test)]
    pub fn phase(&self) -> CallPhase {
        self.phase
    }

    #[cfg(test)]
    pub fn is_ringing(&self) -> bool {
        self.ringing.is_some()
    }

    #[cfg(test)]
    pub fn timer_armed(&self) -> bool {
        self.timer.is_some()
    }

    /// Release whatever the old phase held, then acquire what the new one needs.
    /// Repeating the current phase does nothing. Never waits on the audio device.
    pub fn sync(&mut self, phase: CallPhase) {
        if phase == self.phase {
            return;
        }

        let previous = std::mem::replace(&mut self.phase, phase);
        match previous {
            CallPhase::Incoming => self.stop_ringing(),
            CallPhase::Active => self.disarm_timer(),
            CallPhase::Setup => {}
        }

        match phase {
            CallPhase::Incoming => self.start_ringing(),
            CallPhase::Active => self.arm_timer(),
            CallPhase::Setup => {}
        }
    }

    /// Resolves on the next timer tick. Never resolves while no timer is armed.
    pub async fn next_tick(&mut self) {
        match self.timer.as_mut() {
            Some(timer) => {
                timer.tick().await;
            }
            None => future::pending::<()>().await,
        }
    }

    fn start_ringing(&mut self) {
        let ringer = self.ringer.clone();
        let (guard_tx, guard_rx) = oneshot::channel();

        tokio::task::spawn_blocking(move || match ringer.start() {
            Ok(guard) => {
                // Ringing already stopped: the guard comes back and drops here
                if guard_tx.send(guard).is_err() {
                    debug!("Ringtone opened after the call moved on, closing it");
                }
            }
            Err(AudioError::Disabled) => debug!("Ringtone disabled, ringing silently"),
            // The call carries on without sound
            Err(e) => error!("Error playing ringtone: {}", e),
        });

        self.ringing = Some(guard_rx);
    }

    fn stop_ringing(&mut self) {
        if self.ringing.take().is_some() {
            debug!("Ringtone stopped");
        }
    }

    fn arm_timer(&mut self) {
        // First tick one full period after answering, not immediately
        let mut timer = time::interval_at(Instant::now() + self.tick_interval, self.tick_interval);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.timer = Some(timer);
    }

    fn disarm_timer(&mut self) {
        self.timer = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulator::CallState;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio_test::assert_pending;

    #[derive(Default)]
    struct Counters {
        starts: AtomicUsize,
        stops: AtomicUsize,
    }

    #[derive(Clone)]
    struct FakeRinger {
        counters: Arc<Counters>,
        fail: bool,
        open_delay: Duration,
    }

    struct FakeGuard(Arc<Counters>);

    impl Drop for FakeGuard {
        fn drop(&mut self) {
            self.0.stops.fetch_add(1, Ordering::SeqCst);
        }
    }

    impl Ringer for FakeRinger {
        type Guard = FakeGuard;

        fn start(&self) -> Result<FakeGuard, AudioError> {
            self.counters.starts.fetch_add(1, Ordering::SeqCst);
            std::thread::sleep(self.open_delay);
            if self.fail {
                return Err(AudioError::NoOutputDevice);
            }
            Ok(FakeGuard(self.counters.clone()))
        }
    }

    fn effects_with(fail: bool, open_delay: Duration) -> (CallEffects<FakeRinger>, Arc<Counters>) {
        let counters = Arc::new(Counters::default());
        let ringer = FakeRinger {
            counters: counters.clone(),
            fail,
            open_delay,
        };
        (CallEffects::new(ringer, Duration::from_secs(1)), counters)
    }

    fn effects(fail: bool) -> (CallEffects<FakeRinger>, Arc<Counters>) {
        effects_with(fail, Duration::ZERO)
    }

    fn ring(state: &mut CallState, effects: &mut CallEffects<FakeRinger>) {
        state
            .start_call("Mom", &mut StdRng::seed_from_u64(1))
            .unwrap();
        effects.sync(state.phase());
    }

    /// The ringer runs on the blocking pool, so counts land a little later
    fn wait_for(counter: &AtomicUsize, expected: usize) {
        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        while counter.load(Ordering::SeqCst) < expected {
            assert!(
                std::time::Instant::now() < deadline,
                "counter stuck at {}, wanted {}",
                counter.load(Ordering::SeqCst),
                expected
            );
            std::thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(counter.load(Ordering::SeqCst), expected);
    }

    #[tokio::test]
    async fn ringtone_follows_incoming_phase() {
        let (mut effects, counters) = effects(false);
        let mut state = CallState::Setup;

        ring(&mut state, &mut effects);
        assert!(effects.is_ringing());
        wait_for(&counters.starts, 1);
        effects.sync(CallPhase::Incoming);
        assert_eq!(counters.starts.load(Ordering::SeqCst), 1);

        state.end_call();
        effects.sync(state.phase());
        assert!(!effects.is_ringing());
        wait_for(&counters.stops, 1);

        // A second call rings afresh
        ring(&mut state, &mut effects);
        wait_for(&counters.starts, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn answering_stops_ringtone_and_arms_timer() {
        let (mut effects, counters) = effects(false);
        let mut state = CallState::Setup;
        ring(&mut state, &mut effects);
        wait_for(&counters.starts, 1);

        state.answer_call().unwrap();
        effects.sync(state.phase());
        assert!(!effects.is_ringing());
        wait_for(&counters.stops, 1);
        assert!(effects.timer_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn failed_ringtone_does_not_block_the_call() {
        let (mut effects, counters) = effects(true);
        let mut state = CallState::Setup;
        ring(&mut state, &mut effects);

        wait_for(&counters.starts, 1);
        assert_eq!(effects.phase(), CallPhase::Incoming);

        state.answer_call().unwrap();
        effects.sync(state.phase());
        assert!(effects.timer_armed());
        assert_eq!(counters.stops.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn slow_device_open_does_not_hold_up_transitions() {
        let (mut effects, counters) = effects_with(false, Duration::from_millis(1_500));
        let mut state = CallState::Setup;

        let started = std::time::Instant::now();
        ring(&mut state, &mut effects);
        assert!(started.elapsed() < Duration::from_millis(500));
        assert!(effects.is_ringing());

        // Declined while the device is still opening
        state.end_call();
        effects.sync(state.phase());
        assert!(started.elapsed() < Duration::from_millis(500));
        assert!(!effects.is_ringing());

        // The late guard is still released
        wait_for(&counters.starts, 1);
        wait_for(&counters.stops, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn timer_ticks_once_per_second() {
        let (mut effects, counters) = effects(false);
        let mut state = CallState::Setup;
        ring(&mut state, &mut effects);
        wait_for(&counters.starts, 1);
        state.answer_call().unwrap();
        effects.sync(state.phase());

        let answered = Instant::now();
        for expected in 1..=3 {
            effects.next_tick().await;
            assert!(state.tick());
            assert_eq!(state.elapsed().as_secs(), expected);
        }
        assert_eq!(answered.elapsed(), Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn no_ticks_after_leaving_active() {
        let (mut effects, counters) = effects(false);
        let mut state = CallState::Setup;
        ring(&mut state, &mut effects);
        wait_for(&counters.starts, 1);
        state.answer_call().unwrap();
        effects.sync(state.phase());
        effects.next_tick().await;

        state.end_call();
        effects.sync(state.phase());
        assert!(!effects.timer_armed());

        let mut tick = tokio_test::task::spawn(effects.next_tick());
        assert_pending!(tick.poll());
        time::advance(Duration::from_secs(30)).await;
        assert_pending!(tick.poll());
    }

    #[tokio::test]
    async fn teardown_releases_ringtone() {
        let (mut effects, counters) = effects(false);
        let mut state = CallState::Setup;
        ring(&mut state, &mut effects);
        wait_for(&counters.starts, 1);

        drop(effects);
        wait_for(&counters.stops, 1);
    }
}
