use std::fmt;

use rand::Rng;
use uuid::Uuid;

use crate::error::{CallError, CallEvent};

/// Longest contact name accepted by the setup form
pub const MAX_CONTACT_NAME_LEN: usize = 30;

/// Avatars assigned at random when a call starts
pub const CONTACT_AVATARS: [&str; 6] = [
    "https://images.unsplash.com/photo-1494790108755-2616b612b5bb?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&h=200",
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&h=200",
    "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&h=200",
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&h=200",
    "https://images.unsplash.com/photo-1544725176-7c40e5a71c5e?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&h=200",
    "https://images.unsplash.com/photo-1560250097-0b93528c311a?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&h=200",
];

/// One-tap contact offered on the setup screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetContact {
    pub name: &'static str,
    pub emoji: &'static str,
}

pub const PRESET_CONTACTS: [PresetContact; 4] = [
    PresetContact { name: "Mom", emoji: "👩‍🦳" },
    PresetContact { name: "Boss", emoji: "👔" },
    PresetContact { name: "Doctor", emoji: "🩺" },
    PresetContact { name: "Emergency", emoji: "🚨" },
];

/// Which of the three screens is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallPhase {
    Setup,
    Incoming,
    Active,
}

impl fmt::Display for CallPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallPhase::Setup => write!(f, "setup"),
            CallPhase::Incoming => write!(f, "incoming"),
            CallPhase::Active => write!(f, "active"),
        }
    }
}

/// The fake caller for one simulated call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub call_id: Uuid,
    pub name: String,
    pub avatar: &'static str,
}

impl Contact {
    /// Build a contact from raw form input.
    ///
    /// The name is trimmed and cut to [`MAX_CONTACT_NAME_LEN`] characters.
    pub fn new(name: &str, avatar: &'static str) -> Result<Self, CallError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(CallError::EmptyContactName);
        }

        Ok(Self {
            call_id: Uuid::new_v4(),
            name: trimmed.chars().take(MAX_CONTACT_NAME_LEN).collect(),
            avatar,
        })
    }
}

/// Whole seconds elapsed since the call was answered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct CallDuration(u32);

impl CallDuration {
    pub const ZERO: CallDuration = CallDuration(0);

    #[cfg(test)]
    pub fn from_secs(secs: u32) -> Self {
        Self(secs)
    }

    #[cfg(test)]
    pub fn as_secs(&self) -> u32 {
        self.0
    }

    fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }
}

/// Formats as `MM:SS`. There is no hour field, past 99:59 the minutes just widen.
impl fmt::Display for CallDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// Call lifecycle. The contact and elapsed time only exist while a call is up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CallState {
    #[default]
    Setup,
    Incoming(Contact),
    Active {
        contact: Contact,
        elapsed: CallDuration,
    },
}

impl CallState {
    pub fn phase(&self) -> CallPhase {
        match self {
            CallState::Setup => CallPhase::Setup,
            CallState::Incoming(_) => CallPhase::Incoming,
            CallState::Active { .. } => CallPhase::Active,
        }
    }

    pub fn is_in_call(&self) -> bool {
        !matches!(self, CallState::Setup)
    }

    pub fn contact(&self) -> Option<&Contact> {
        match self {
            CallState::Setup => None,
            CallState::Incoming(contact) | CallState::Active { contact, .. } => Some(contact),
        }
    }

    /// Elapsed time of the active call, zero in any other phase
    pub fn elapsed(&self) -> CallDuration {
        match self {
            CallState::Active { elapsed, .. } => *elapsed,
            _ => CallDuration::ZERO,
        }
    }

    /// Ring the phone for `name`, picking a random avatar.
    ///
    /// Leaves the state untouched when the name is blank or a call is already up.
    pub fn start_call<R: Rng + ?Sized>(&mut self, name: &str, rng: &mut R) -> Result<(), CallError> {
        if self.is_in_call() {
            return Err(CallError::InvalidTransition {
                event: CallEvent::Start,
                phase: self.phase(),
            });
        }

        let avatar = CONTACT_AVATARS[rng.gen_range(0..CONTACT_AVATARS.len())];
        let contact = Contact::new(name, avatar)?;
        *self = CallState::Incoming(contact);
        Ok(())
    }

    /// Pick up a ringing call. The timer always starts from zero.
    pub fn answer_call(&mut self) -> Result<(), CallError> {
        match std::mem::take(self) {
            CallState::Incoming(contact) => {
                *self = CallState::Active {
                    contact,
                    elapsed: CallDuration::ZERO,
                };
                Ok(())
            }
            other => {
                let phase = other.phase();
                *self = other;
                Err(CallError::InvalidTransition {
                    event: CallEvent::Answer,
                    phase,
                })
            }
        }
    }

    /// Return to setup from any phase, handing back the contact that was dropped
    pub fn end_call(&mut self) -> Option<Contact> {
        match std::mem::take(self) {
            CallState::Setup => None,
            CallState::Incoming(contact) | CallState::Active { contact, .. } => Some(contact),
        }
    }

    /// Advance the call timer by one second. Returns false outside an active call.
    pub fn tick(&mut self) -> bool {
        match self {
            CallState::Active { elapsed, .. } => {
                elapsed.increment();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn ringing(name: &str) -> CallState {
        let mut state = CallState::default();
        state.start_call(name, &mut rng()).unwrap();
        state
    }

    #[test]
    fn start_call_rings_with_known_avatar() {
        let mut rng = rng();
        for name in ["Mom", "  Boss  ", "x", "Dr. Who"] {
            let mut state = CallState::Setup;
            state.start_call(name, &mut rng).unwrap();

            assert_eq!(state.phase(), CallPhase::Incoming);
            let contact = state.contact().unwrap();
            assert_eq!(contact.name, name.trim());
            assert!(CONTACT_AVATARS.contains(&contact.avatar));
        }
    }

    #[test]
    fn blank_name_stays_in_setup() {
        for name in ["", "   ", "\t\n"] {
            let mut state = CallState::Setup;
            let result = state.start_call(name, &mut rng());
            assert_eq!(result, Err(CallError::EmptyContactName));
            assert_eq!(state, CallState::Setup);
        }
    }

    #[test]
    fn long_names_are_truncated() {
        let state = ringing(&"a".repeat(45));
        assert_eq!(state.contact().unwrap().name.chars().count(), MAX_CONTACT_NAME_LEN);
    }

    #[test]
    fn cannot_start_while_ringing() {
        let mut state = ringing("Mom");
        let before = state.clone();
        let result = state.start_call("Boss", &mut rng());
        assert_eq!(
            result,
            Err(CallError::InvalidTransition {
                event: CallEvent::Start,
                phase: CallPhase::Incoming
            })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn answer_resets_duration() {
        let mut state = ringing("Mom");
        state.answer_call().unwrap();
        assert_eq!(state.phase(), CallPhase::Active);
        assert_eq!(state.elapsed(), CallDuration::ZERO);
        assert_eq!(state.contact().unwrap().name, "Mom");
    }

    #[test]
    fn answer_outside_incoming_is_rejected() {
        let mut state = CallState::Setup;
        assert!(state.answer_call().is_err());
        assert_eq!(state, CallState::Setup);

        let mut state = ringing("Mom");
        state.answer_call().unwrap();
        state.tick();
        let before = state.clone();
        assert_eq!(
            state.answer_call(),
            Err(CallError::InvalidTransition {
                event: CallEvent::Answer,
                phase: CallPhase::Active
            })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn tick_counts_only_while_active() {
        let mut state = CallState::Setup;
        assert!(!state.tick());

        let mut state = ringing("Boss");
        assert!(!state.tick());
        assert_eq!(state.elapsed(), CallDuration::ZERO);

        state.answer_call().unwrap();
        for expected in 1..=5 {
            assert!(state.tick());
            assert_eq!(state.elapsed().as_secs(), expected);
        }
    }

    #[test]
    fn end_call_returns_to_setup_from_any_phase() {
        let mut state = CallState::Setup;
        assert_eq!(state.end_call(), None);
        assert_eq!(state, CallState::Setup);

        let mut state = ringing("Doctor");
        let dropped = state.end_call().unwrap();
        assert_eq!(dropped.name, "Doctor");
        assert_eq!(state, CallState::Setup);
        assert!(state.contact().is_none());

        let mut state = ringing("Emergency");
        state.answer_call().unwrap();
        state.tick();
        state.tick();
        assert!(state.end_call().is_some());
        assert_eq!(state.elapsed(), CallDuration::ZERO);
        assert_eq!(state.phase(), CallPhase::Setup);
    }

    #[test]
    fn each_call_gets_its_own_id() {
        let first = ringing("Mom").contact().unwrap().call_id;
        let second = ringing("Mom").contact().unwrap().call_id;
        assert_ne!(first, second);
    }

    #[test]
    fn duration_formats_as_minutes_and_seconds() {
        assert_eq!(CallDuration::from_secs(0).to_string(), "00:00");
        assert_eq!(CallDuration::from_secs(65).to_string(), "01:05");
        assert_eq!(CallDuration::from_secs(599).to_string(), "09:59");
        assert_eq!(CallDuration::from_secs(5999).to_string(), "99:59");
        assert_eq!(CallDuration::from_secs(6000).to_string(), "100:00");
    }
}
