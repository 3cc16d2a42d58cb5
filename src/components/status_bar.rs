use dioxus::prelude::*;
use lucide_dioxus::{Battery, Phone, Signal as SignalBars, Wifi};
use crate::clock::current_time;

/// Fake phone status bar. `leading` is the carrier, or the call timer during a call.
#[component]
pub fn StatusBar(leading: String, in_call: bool) -> Element {
    let now = current_time();

    rsx! {
        div {
            class: "status-bar",
            span {
                class: if in_call { "status-item status-call" } else { "status-item" },
                if in_call {
                    Phone { size: 12, color: "#34C759", stroke_width: 2 }
                }
                " {leading}"
            }
            span { class: "status-item", "{now}" }
            span {
                class: "status-icons",
                SignalBars { size: 16, color: "white", stroke_width: 2 }
                Wifi { size: 16, color: "white", stroke_width: 2 }
                Battery { size: 24, color: "white", stroke_width: 2 }
            }
        }
    }
}
