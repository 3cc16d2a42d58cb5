use dioxus::prelude::*;
use crate::simulator::PRESET_CONTACTS;

#[component]
pub fn PresetContacts(mut contact_name: Signal<String>) -> Element {
    rsx! {
        div {
            class: "field",
            span { class: "field-label", "Quick Presets" }
            div {
                class: "preset-grid",
                for preset in PRESET_CONTACTS {
                    button {
                        key: "{preset.name}",
                        class: "preset-button",
                        onclick: move |_| contact_name.set(preset.name.to_string()),
                        "{preset.emoji} {preset.name}"
                    }
                }
            }
        }
    }
}
