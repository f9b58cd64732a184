//! Clipnote
//!
//! A desktop video review tool: timestamped comments pinned to a clickable
//! timeline.

mod app;
mod components;
mod constants;
mod core;
mod hotkeys;
mod state;
mod timeline;
mod utils;

use dioxus::desktop::{Config, WindowBuilder, LogicalSize};

fn main() {
    // Configure the window
    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("Clipnote")
                .with_inner_size(LogicalSize::new(1100.0, 720.0))
                .with_resizable(true)
        )
        .with_menu(None); // Disable default menu bar

    // Launch the Dioxus desktop application
    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
