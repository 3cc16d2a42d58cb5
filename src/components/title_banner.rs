use dioxus::prelude::*;

#[component]
pub fn TitleBanner() -> Element {
    rsx! {
        header {
            class: "setup-header",
            h1 { class: "brand", "FakeiPhoneCalls" }
            p { class: "tagline", "The perfect excuse - realistic iPhone call simulator" }
        }
    }
}
