use dioxus::prelude::*;
use crate::simulator::Contact;

#[component]
pub fn CallerCard(
    contact: Contact,
    subtitle: String,
    ringing: bool
) -> Element {
    rsx! {
        div {
            class: "caller",

            div {
                class: "avatar-wrap",
                if ringing {
                    div { class: "pulse-ring" }
                }
                img {
                    class: "avatar contact-glow",
                    src: "{contact.avatar}",
                    alt: "Contact Avatar"
                }
            }

            h2 { class: "caller-name", "{contact.name}" }

            p {
                class: if ringing { "caller-subtitle" } else { "caller-subtitle call-timer" },
                "{subtitle}"
            }
        }
    }
}
