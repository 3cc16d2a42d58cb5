use dioxus::prelude::*;
use crate::simulator::MAX_CONTACT_NAME_LEN;

#[component]
pub fn ContactNameInput(
    mut contact_name: Signal<String>,
    on_start: EventHandler<()>
) -> Element {
    let can_start = !contact_name.read().trim().is_empty();

    rsx! {
        div {
            class: "field",
            label {
                class: "field-label",
                r#for: "contact-name",
                "Contact Name"
            }
            input {
                id: "contact-name",
                r#type: "text",
                placeholder: "Enter contact name...",
                class: "text-input",
                maxlength: "{MAX_CONTACT_NAME_LEN}",
                autofocus: true,
                value: "{contact_name.read()}",
                oninput: move |evt| contact_name.set(evt.value()),
                onkeypress: move |evt| {
                    if evt.key() == dioxus::events::Key::Enter && can_start {
                        on_start.call(());
                    }
                }
            }
        }
    }
}
