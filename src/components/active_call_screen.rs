use dioxus::prelude::*;
use crate::components::{CallControlButtons, CallerCard, StatusBar};
use crate::simulator::{CallDuration, Contact};

#[component]
pub fn ActiveCallScreen(
    contact: Contact,
    elapsed: CallDuration,
    on_end_call: EventHandler<()>
) -> Element {
    let timer = elapsed.to_string();

    rsx! {
        div {
            class: "call-screen slide-up",

            StatusBar { leading: format!("Call {}", timer), in_call: true }

            div {
                class: "caller-spacer",
                CallerCard {
                    contact: contact,
                    subtitle: timer.clone(),
                    ringing: false
                }
            }

            div {
                class: "call-actions",
                CallControlButtons { on_end_call: on_end_call }
            }
        }
    }
}
