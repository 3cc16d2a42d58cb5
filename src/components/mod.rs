pub mod app;
pub mod setup_screen;
pub mod contact_name_input;
pub mod preset_contacts;
pub mod title_banner;
pub mod status_bar;
pub mod caller_card;
pub mod incoming_call_screen;
pub mod active_call_screen;
pub mod call_control_state;
pub mod call_control_buttons;

pub use app::App;
pub use setup_screen::SetupScreen;
pub use contact_name_input::ContactNameInput;
pub use preset_contacts::PresetContacts;
pub use title_banner::TitleBanner;
pub use status_bar::StatusBar;
pub use caller_card::CallerCard;
pub use incoming_call_screen::IncomingCallScreen;
pub use active_call_screen::ActiveCallScreen;
pub use call_control_buttons::CallControlButtons;
