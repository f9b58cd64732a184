use dioxus::prelude::*;
use crate::constants::{BG_HOVER, TEXT_MUTED};

/// Transport button
#[component]
pub fn PlaybackBtn(
    icon: &'static str,
    #[props(default = false)] primary: bool,
    #[props(default = "")] hint: &'static str,
    on_click: EventHandler<MouseEvent>,
) -> Element {
    let bg = if primary { BG_HOVER } else { "transparent" };
    rsx! {
        button {
            class: "transport-btn",
            style: "width: 28px; height: 28px; border: none; border-radius: 4px; background-color: {bg}; color: {TEXT_MUTED}; font-size: 11px; cursor: pointer; display: flex; align-items: center; justify-content: center; transition: all 0.12s ease;",
            title: "{hint}",
            onclick: move |e| on_click.call(e),
            "{icon}"
        }
    }
}
