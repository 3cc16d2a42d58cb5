use dioxus::prelude::*;
use lucide_dioxus::{Clock, MessageCircle, Phone, PhoneOff};
use crate::components::call_control_state::ButtonStyle;
use crate::components::{CallerCard, StatusBar};
use crate::simulator::Contact;

#[component]
pub fn IncomingCallScreen(
    contact: Contact,
    carrier: String,
    phone_number: String,
    on_answer: EventHandler<()>,
    on_decline: EventHandler<()>
) -> Element {
    rsx! {
        div {
            class: "call-screen slide-up",

            StatusBar { leading: carrier, in_call: false }

            p { class: "call-label", "incoming call" }

            CallerCard {
                contact: contact,
                subtitle: phone_number,
                ringing: true
            }

            div {
                class: "call-actions",

                // Remind me / message, both inert
                div {
                    class: "secondary-row",
                    button {
                        class: ButtonStyle::Secondary.class(),
                        title: "Remind Me",
                        Clock { size: 24, color: "white", stroke_width: 2 }
                    }
                    button {
                        class: ButtonStyle::Secondary.class(),
                        title: "Message",
                        MessageCircle { size: 24, color: "white", stroke_width: 2 }
                    }
                }

                div {
                    class: "primary-row",
                    button {
                        class: ButtonStyle::Decline.class(),
                        title: "Decline",
                        onclick: move |_| on_decline.call(()),
                        PhoneOff { size: 32, color: "white", stroke_width: 2 }
                    }
                    button {
                        class: ButtonStyle::Answer.class(),
                        title: "Answer",
                        onclick: move |_| on_answer.call(()),
                        Phone { size: 32, color: "white", stroke_width: 2 }
                    }
                }

                p { class: "hint", "slide to answer" }
            }
        }
    }
}
