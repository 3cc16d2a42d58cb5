use dioxus::prelude::*;
use log::{debug, warn};
use serde::Deserialize;

use crate::commands::{CallCommand, EndReason};

/// Installs a document-level keydown listener that forwards key presses to Rust.
/// Any previous listener from this app is replaced first.
const SUBSCRIBE_JS: &str = r#"
    if (window.__fakeCallKeydown) {
        document.removeEventListener("keydown", window.__fakeCallKeydown);
    }
    window.__fakeCallKeydown = (e) => dioxus.send({ key: e.key, repeat: e.repeat });
    document.addEventListener("keydown", window.__fakeCallKeydown);
"#;

const UNSUBSCRIBE_JS: &str = r#"
    if (window.__fakeCallKeydown) {
        document.removeEventListener("keydown", window.__fakeCallKeydown);
        window.__fakeCallKeydown = undefined;
    }
"#;

/// Key press forwarded from the webview
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeyPress {
    pub key: String,
    #[serde(default)]
    pub repeat: bool,
}

/// Global shortcuts
pub struct KeyBinding;

impl KeyBinding {
    /// Escape asks to end the call. Nothing else is bound.
    ///
    /// The key maps the same way in every phase; the call coroutine drops it
    /// when no call is in progress.
    pub fn resolve(key: &str) -> Option<CallCommand> {
        match key {
            "Escape" => Some(CallCommand::End {
                reason: EndReason::EscapeKey,
            }),
            _ => None,
        }
    }
}

/// Subscribe to global key presses for the lifetime of the calling component.
///
/// The listener is added on mount and removed when the component is dropped.
pub fn use_key_bindings(commands: Coroutine<CallCommand>) {
    use_future(move || async move {
        let mut listener = document::eval(SUBSCRIBE_JS);
        debug!("Key listener subscribed");

        loop {
            match listener.recv::<KeyPress>().await {
                Ok(press) if press.repeat => {}
                Ok(press) => {
                    if let Some(command) = KeyBinding::resolve(&press.key) {
                        debug!("Key {:?} -> {:?}", press.key, command);
                        commands.send(command);
                    }
                }
                Err(e) => {
                    warn!("Key listener closed: {:?}", e);
                    break;
                }
            }
        }
    });

    use_drop(|| {
        let _ = document::eval(UNSUBSCRIBE_JS);
        debug!("Key listener unsubscribed");
    });
}
