use thiserror::Error;

use crate::simulator::CallPhase;

/// Which transition was requested when a command is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallEvent {
    Start,
    Answer,
}

impl std::fmt::Display for CallEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CallEvent::Start => write!(f, "start"),
            CallEvent::Answer => write!(f, "answer"),
        }
    }
}

/// Errors from the call state machine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    /// Contact name was empty or whitespace-only
    #[error("contact name is empty")]
    EmptyContactName,

    /// The event is not valid from the current phase
    #[error("cannot {event} while {phase}")]
    InvalidTransition { event: CallEvent, phase: CallPhase },
}

/// Errors that can occur while starting the ringtone
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AudioError {
    /// Ringtone turned off in configuration
    #[error("ringtone disabled")]
    Disabled,

    #[error("no default output device")]
    NoOutputDevice,

    /// Output device configuration could not be queried
    #[error("output config error: {0}")]
    Config(String),

    #[error("unsupported sample format: {0}")]
    UnsupportedSampleFormat(String),

    /// Building or starting the output stream failed
    #[error("stream error: {0}")]
    Stream(String),

    /// Playback thread went away before reporting startup
    #[error("ringtone thread exited before starting")]
    ThreadExited,
}
