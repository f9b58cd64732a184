use dioxus::prelude::*;

use crate::constants::*;
use crate::core::bounds::SurfaceBounds;
use crate::core::timecode::{format_time, format_time_precise};
use crate::state::Comment;
use crate::timeline::{PlaybackBtn, TimelineOverlay};

/// Video surface plus transport row.
///
/// The container div is the element the bounds bridge measures against;
/// the timeline overlay only renders once both a duration and measured
/// bounds exist, so a click can never be interpreted through stale or
/// missing geometry.
#[component]
pub fn PlayerPanel(
    video_url: String,
    video_name: String,
    comments: Vec<Comment>,
    duration: f64,
    current_time: f64,
    is_playing: bool,
    bounds: Option<SurfaceBounds>,
    container_left: f64,
    on_seek: EventHandler<f64>,
    on_play_pause: EventHandler<()>,
    on_add_comment: EventHandler<()>,
    on_open_video: EventHandler<()>,
) -> Element {
    let play_icon = if is_playing { "⏸" } else { "▶" };
    let timecode = format!("{} / {}", format_time_precise(current_time), format_time(duration));
    // Skip timeline rendering until both duration and bounds are known.
    let timeline_bounds = if duration > 0.0 { bounds } else { None };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; flex: 1; min-width: 0; background-color: {BG_DEEPEST};",

            // Header
            div {
                style: "
                    display: flex; align-items: center; justify-content: space-between;
                    height: 32px; padding: 0 14px;
                    background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                    flex-shrink: 0;
                ",
                span {
                    style: "font-size: 11px; font-weight: 500; color: {TEXT_MUTED}; text-transform: uppercase; letter-spacing: 0.5px;",
                    "Player"
                }
                span {
                    style: "
                        flex: 1; min-width: 0; margin: 0 12px;
                        font-size: 11px; color: {TEXT_DIM}; text-align: center;
                        white-space: nowrap; overflow: hidden; text-overflow: ellipsis;
                    ",
                    "{video_name}"
                }
                button {
                    class: "transport-btn",
                    style: "
                        padding: 0 10px; height: 22px; border: 1px solid {BORDER_DEFAULT};
                        border-radius: 4px; background: transparent; color: {TEXT_SECONDARY};
                        font-size: 11px; cursor: pointer;
                    ",
                    onclick: move |_| on_open_video.call(()),
                    "Open Video…"
                }
            }

            // Playback surface + timeline overlay
            div {
                id: "video-container",
                style: "
                    position: relative; flex: 1; min-height: 0;
                    display: flex; align-items: center; justify-content: center;
                    background-color: #000; overflow: hidden;
                ",
                video {
                    id: "video-player",
                    src: "{video_url}",
                    preload: "metadata",
                    style: "max-width: 100%; max-height: 100%; width: auto; height: auto; display: block;",
                }
                if let Some(bounds) = timeline_bounds {
                    TimelineOverlay {
                        comments: comments.clone(),
                        duration: duration,
                        bounds: bounds,
                        container_left: container_left,
                        current_time: current_time,
                        on_seek: move |t| on_seek.call(t),
                    }
                }
            }

            // Transport row
            div {
                style: "
                    display: flex; align-items: center; gap: 10px;
                    height: 40px; padding: 0 14px;
                    background-color: {BG_ELEVATED}; border-top: 1px solid {BORDER_DEFAULT};
                    flex-shrink: 0;
                ",
                div {
                    style: "display: flex; align-items: center; gap: 4px;",
                    PlaybackBtn {
                        icon: "⏮",
                        hint: "Back to start",
                        on_click: move |_| on_seek.call(0.0),
                    }
                    PlaybackBtn {
                        icon: play_icon,
                        primary: true,
                        hint: "Play / pause (Space)",
                        on_click: move |_| on_play_pause.call(()),
                    }
                    PlaybackBtn {
                        icon: "⏭",
                        hint: "Jump to end",
                        on_click: move |_| on_seek.call(duration),
                    }
                }
                span {
                    style: "font-family: 'SF Mono', Consolas, monospace; font-size: 11px; color: {TEXT_DIM};",
                    "{timecode}"
                }
                div { style: "flex: 1;" }
                button {
                    style: "
                        display: flex; align-items: center; gap: 6px;
                        padding: 0 12px; height: 26px; border: none; border-radius: 4px;
                        background-color: {ACCENT_PRIMARY}; color: white;
                        font-size: 11px; font-weight: 500; cursor: pointer;
                        transition: filter 0.12s ease;
                    ",
                    title: "Add comment at current time (C)",
                    onclick: move |_| on_add_comment.call(()),
                    "💬 Add Comment"
                }
            }
        }
    }
}
