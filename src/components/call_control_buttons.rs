use dioxus::prelude::*;
use lucide_dioxus::{MicOff, PhoneOff, Plus, Users, Video, Volume2};
use crate::components::call_control_state::{ButtonStyle, InCallControl};

#[component]
pub fn CallControlButtons(on_end_call: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "call-controls",

            // Inert control grid
            for row in InCallControl::GRID {
                div {
                    class: "control-row",
                    for control in row {
                        button {
                            class: ButtonStyle::Control.class(),
                            title: control.label(),
                            ControlIcon { control: control }
                            span {
                                class: "control-label",
                                {control.label()}
                            }
                        }
                    }
                }
            }

            // End call button
            div {
                class: "end-row",
                button {
                    class: ButtonStyle::Decline.class(),
                    title: "End Call",
                    onclick: move |_| on_end_call.call(()),
                    PhoneOff {
                        size: 32,
                        color: "white",
                        stroke_width: 2
                    }
                }
            }
        }
    }
}

#[component]
fn ControlIcon(control: InCallControl) -> Element {
    match control {
        InCallControl::Mute => rsx! {
            MicOff { size: 24, color: "white", stroke_width: 2 }
        },
        InCallControl::Keypad => rsx! {
            div {
                class: "keypad-dots",
                for dot in 0..9 {
                    span { key: "{dot}", class: "keypad-dot" }
                }
            }
        },
        InCallControl::Speaker => rsx! {
            Volume2 { size: 24, color: "white", stroke_width: 2 }
        },
        InCallControl::AddCall => rsx! {
            Plus { size: 24, color: "white", stroke_width: 2 }
        },
        InCallControl::FaceTime => rsx! {
            Video { size: 24, color: "white", stroke_width: 2 }
        },
        InCallControl::Contacts => rsx! {
            Users { size: 24, color: "white", stroke_width: 2 }
        },
    }
}
