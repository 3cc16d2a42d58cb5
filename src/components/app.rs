use dioxus::prelude::*;
use futures_util::StreamExt;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use crate::audio::CpalRinger;
use crate::commands::{CallCommand, EndReason};
use crate::config::SimulatorConfig;
use crate::effects::CallEffects;
use crate::keyboard::use_key_bindings;
use crate::simulator::CallState;
use super::{ActiveCallScreen, IncomingCallScreen, SetupScreen};

pub fn App() -> Element {
    let config = use_context::<SimulatorConfig>();

    // Published call state and the setup form field
    let call = use_signal(CallState::default);
    let contact_name = use_signal(String::new);

    // The coroutine owns the state machine and every side effect.
    // Dropping it (component teardown) silences the ringtone and cancels the timer.
    let call_coroutine = use_coroutine({
        let config = config.clone();
        let mut call = call.clone();
        let mut contact_name = contact_name.clone();

        move |mut rx: UnboundedReceiver<CallCommand>| {
            let config = config.clone();

            async move {
                let mut state = CallState::default();
                let mut effects = CallEffects::new(
                    CpalRinger::new(config.ringtone.clone()),
                    config.tick_interval,
                );
                let mut rng = StdRng::from_entropy();

                loop {
                    tokio::select! {
                        // Process commands from UI
                        command = rx.next() => {
                            let Some(command) = command else {
                                break;
                            };
                            debug!("Call coroutine: processing command {:?}", command);

                            let outcome = command.apply(&mut state, &mut rng);
                            if outcome.changed {
                                // Publish first so the screen never waits on the audio device
                                call.set(state.clone());
                                effects.sync(state.phase());
                            }
                            if outcome.clear_contact_name {
                                contact_name.set(String::new());
                            }
                        }

                        // Call timer, only armed while active
                        _ = effects.next_tick() => {
                            if state.tick() {
                                call.set(state.clone());
                            }
                        }
                    }
                }

                info!("Call coroutine stopped");
            }
        }
    });

    use_key_bindings(call_coroutine);

    let on_start = move |_| {
        let name = contact_name.read().clone();
        call_coroutine.send(CallCommand::Start { name });
    };

    let on_answer = move |_| {
        call_coroutine.send(CallCommand::Answer);
    };

    let on_decline = move |_| {
        call_coroutine.send(CallCommand::End { reason: EndReason::Declined });
    };

    let on_hang_up = move |_| {
        call_coroutine.send(CallCommand::End { reason: EndReason::HungUp });
    };

    // Render based on current call state
    let current_state = call.read().clone();

    rsx! {
        style {
            {include_str!("../../assets/simulator.css")}
        }

        div {
            class: "app",
            match current_state {
                CallState::Setup => rsx! {
                    SetupScreen {
                        contact_name: contact_name,
                        on_start: on_start,
                    }
                },
                CallState::Incoming(contact) => rsx! {
                    IncomingCallScreen {
                        contact: contact,
                        carrier: config.carrier.clone(),
                        phone_number: config.placeholder_number.clone(),
                        on_answer: on_answer,
                        on_decline: on_decline,
                    }
                },
                CallState::Active { contact, elapsed } => rsx! {
                    ActiveCallScreen {
                        contact: contact,
                        elapsed: elapsed,
                        on_end_call: on_hang_up,
                    }
                },
            }
        }
    }
}
