use log::{debug, info};
use rand::Rng;

use crate::simulator::CallState;

/// Why a call is being torn down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Red button on the incoming screen
    Declined,

    /// End button on the active screen
    HungUp,

    /// Global Escape shortcut
    EscapeKey,
}

/// Commands sent from UI to the call coroutine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallCommand {
    /// Ring the phone for the given contact name
    Start {
        name: String,
    },

    /// Answer the ringing call
    Answer,

    /// Decline or hang up, whichever applies
    End {
        reason: EndReason,
    },
}

/// What applying a command did, for the coroutine to act on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommandOutcome {
    /// The call state moved to a different phase
    pub changed: bool,

    /// The setup form's contact name should be emptied
    pub clear_contact_name: bool,
}

impl CallCommand {
    /// Run this command against the call state.
    ///
    /// Rejected commands leave the state alone and are logged at debug level.
    /// Escape with no call in progress is ignored outright; every other end
    /// request empties the contact name, even a stale one.
    pub fn apply<R: Rng + ?Sized>(self, state: &mut CallState, rng: &mut R) -> CommandOutcome {
        match self {
            CallCommand::Start { name } => match state.start_call(&name, rng) {
                Ok(()) => {
                    if let Some(contact) = state.contact() {
                        info!("📞 Incoming call {} from {}", contact.call_id, contact.name);
                    }
                    CommandOutcome {
                        changed: true,
                        clear_contact_name: false,
                    }
                }
                Err(e) => {
                    debug!("Not starting call: {}", e);
                    CommandOutcome::default()
                }
            },

            CallCommand::Answer => match state.answer_call() {
                Ok(()) => {
                    if let Some(contact) = state.contact() {
                        info!("Call {} answered", contact.call_id);
                    }
                    CommandOutcome {
                        changed: true,
                        clear_contact_name: false,
                    }
                }
                Err(e) => {
                    debug!("Not answering: {}", e);
                    CommandOutcome::default()
                }
            },

            CallCommand::End {
                reason: EndReason::EscapeKey,
            } if !state.is_in_call() => {
                debug!("Escape with no call in progress");
                CommandOutcome::default()
            }

            CallCommand::End { reason } => {
                let elapsed = state.elapsed();
                let changed = match state.end_call() {
                    Some(contact) => {
                        info!(
                            "Call {} with {} ended after {} ({:?})",
                            contact.call_id, contact.name, elapsed, reason
                        );
                        true
                    }
                    None => {
                        debug!("No call to end ({:?})", reason);
                        false
                    }
                };
                CommandOutcome {
                    changed,
                    clear_contact_name: true,
                }
            }
        }
    }
}
