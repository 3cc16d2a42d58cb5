use dioxus::prelude::*;
use crate::components::{ContactNameInput, PresetContacts, TitleBanner};

const HOW_IT_WORKS: [&str; 4] = [
    "Enter a contact name or use a preset",
    "Tap \"Call Me Now\" to start the fake call",
    "Show your phone screen to others",
    "Say \"Sorry, I have to take this\" and walk away",
];

#[component]
pub fn SetupScreen(
    contact_name: Signal<String>,
    on_start: EventHandler<()>
) -> Element {
    // Submit stays inert until there is something other than whitespace
    let can_start = !contact_name.read().trim().is_empty();

    rsx! {
        div {
            class: "setup-screen",

            TitleBanner {}

            main {
                class: "setup-body",

                section {
                    class: "card",
                    h2 { class: "card-title", "Create Your Fake Call" }

                    ContactNameInput {
                        contact_name: contact_name,
                        on_start: on_start
                    }

                    PresetContacts {
                        contact_name: contact_name
                    }

                    button {
                        class: "call-now",
                        disabled: !can_start,
                        onclick: move |_| {
                            if can_start {
                                on_start.call(())
                            }
                        },
                        "📞 Call Me Now"
                    }
                }

                section {
                    class: "card",
                    h3 { class: "card-subtitle", "How it works:" }
                    ol {
                        class: "steps",
                        for (number, step) in HOW_IT_WORKS.iter().enumerate().map(|(i, step)| (i + 1, step)) {
                            li { key: "{number}", "{number}. {step}" }
                        }
                    }
                }
            }

            footer {
                class: "setup-footer",
                "Free forever • No app required • Works on any device"
            }
        }
    }
}
