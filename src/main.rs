use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use log::info;

mod audio;
mod clock;
mod commands;
mod components;
mod config;
mod effects;
mod error;
mod keyboard;
mod simulator;

use components::App;
use config::SimulatorConfig;

fn main() {
    // Initialize logging
    env_logger::init();

    let config = SimulatorConfig::from_env();
    info!("Starting {}", config.window_title);

    // Launch the Dioxus desktop application in a phone-sized window
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(config.window_title.clone())
                    .with_inner_size(LogicalSize::new(400.0, 820.0)),
            ),
        )
        .with_context(config)
        .launch(App);
}
