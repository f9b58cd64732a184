use dioxus::prelude::*;

use crate::constants::*;
use crate::core::timecode::format_time;

#[component]
pub fn StatusBar(video_name: String, current_time: f64, duration: f64, comment_count: usize) -> Element {
    let status = if duration > 0.0 { "Ready" } else { "Loading metadata…" };
    let timecode = format!("{} / {}", format_time(current_time), format_time(duration));
    let comment_label = if comment_count == 1 {
        "1 comment".to_string()
    } else {
        format!("{} comments", comment_count)
    };

    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: space-between; height: 22px; padding: 0 14px; background-color: {BG_SURFACE}; border-top: 1px solid {BORDER_DEFAULT}; font-size: 11px; color: {TEXT_DIM};",
            span {
                style: "white-space: nowrap; overflow: hidden; text-overflow: ellipsis; max-width: 50%;",
                "{status} · {video_name}"
            }
            div {
                style: "display: flex; gap: 16px; font-family: 'SF Mono', Consolas, monospace;",
                span { "{comment_label}" }
                span { "{timecode}" }
            }
        }
    }
}
