use dioxus::prelude::*;

use crate::constants::{
    ACCENT_PRIMARY, BG_SURFACE, BORDER_DEFAULT, BORDER_STRONG, TEXT_DIM, TEXT_PRIMARY,
    TIMELINE_STRIP_BOTTOM_PX, TIMELINE_STRIP_HEIGHT,
};
use crate::core::bounds::SurfaceBounds;
use crate::core::timecode::format_time_precise;
use crate::core::timeline_map::{point_to_time, time_to_percent};
use crate::state::Comment;

use super::marker_element::CommentMarker;

/// Interactive timeline strip, sized and positioned to exactly cover the
/// rendered video's horizontal extent (not the container's: letterbox
/// gutters stay outside the strip).
///
/// Every pointer position goes through `point_to_time` and every rendered
/// position through `time_to_percent`, so the hover indicator, the seek
/// target, and the comment markers can never disagree.
#[component]
pub fn TimelineOverlay(
    comments: Vec<Comment>,
    duration: f64,
    bounds: SurfaceBounds,
    container_left: f64,
    current_time: f64,
    on_seek: EventHandler<f64>,
) -> Element {
    let mut hover_time = use_signal(|| None::<f64>);
    let mut hovered_comment = use_signal(|| None::<Comment>);
    let mut scrubbing = use_signal(|| false);

    let playhead_percent = time_to_percent(current_time, duration, &bounds);
    let hover = hover_time()
        .map(|t| (time_to_percent(t, duration, &bounds), format_time_precise(t)));
    let tooltip = hovered_comment()
        .map(|comment| (time_to_percent(comment.timestamp, duration, &bounds), comment));
    // Tooltips and the hover label sit just above the strip.
    let tip_bottom = TIMELINE_STRIP_HEIGHT + 6.0;

    rsx! {
        div {
            style: "
                position: absolute;
                left: {bounds.offset}px;
                bottom: {TIMELINE_STRIP_BOTTOM_PX}px;
                width: {bounds.width}px;
                height: {TIMELINE_STRIP_HEIGHT}px;
                cursor: pointer;
                z-index: 5;
            ",
            onmousedown: move |e| {
                e.prevent_default();
                let t = point_to_time(e.client_coordinates().x, container_left, &bounds, duration);
                on_seek.call(t);
                scrubbing.set(true);
            },
            onmousemove: move |e| {
                let t = point_to_time(e.client_coordinates().x, container_left, &bounds, duration);
                hover_time.set(Some(t));
                // Keep seeking while the button is held for frame-precise scrubbing.
                if scrubbing() {
                    on_seek.call(t);
                }
            },
            onmouseup: move |_| scrubbing.set(false),
            onmouseleave: move |_| {
                hover_time.set(None);
                scrubbing.set(false);
            },

            // Track baseline
            div {
                style: "
                    position: absolute;
                    left: 0; right: 0; top: 50%;
                    height: 4px;
                    transform: translateY(-50%);
                    border-radius: 2px;
                    background-color: rgba(255, 255, 255, 0.25);
                    pointer-events: none;
                ",
            }

            // Playhead tick
            div {
                style: "
                    position: absolute;
                    left: {playhead_percent}%;
                    top: 2px;
                    bottom: 2px;
                    width: 2px;
                    transform: translateX(-50%);
                    background-color: {ACCENT_PRIMARY};
                    pointer-events: none;
                    z-index: 2;
                ",
            }

            // Hover time indicator, fed by the same mapping as the seek
            if let Some((percent, label)) = hover.as_ref() {
                div {
                    style: "
                        position: absolute;
                        left: {percent}%;
                        top: 0;
                        bottom: 0;
                        width: 1px;
                        transform: translateX(-50%);
                        background-color: {BORDER_STRONG};
                        pointer-events: none;
                        z-index: 1;
                    ",
                }
                div {
                    style: "
                        position: absolute;
                        left: {percent}%;
                        bottom: {tip_bottom}px;
                        transform: translateX(-50%);
                        padding: 2px 6px;
                        border-radius: 4px;
                        background-color: {BG_SURFACE};
                        border: 1px solid {BORDER_DEFAULT};
                        font-family: 'SF Mono', Consolas, monospace;
                        font-size: 10px;
                        color: {TEXT_DIM};
                        white-space: nowrap;
                        pointer-events: none;
                        z-index: 4;
                    ",
                    "{label}"
                }
            }

            for comment in comments.iter() {
                CommentMarker {
                    key: "{comment.id}",
                    comment: comment.clone(),
                    position_percent: time_to_percent(comment.timestamp, duration, &bounds),
                    on_seek: move |t| on_seek.call(t),
                    on_hover: move |c| hovered_comment.set(c),
                }
            }

            if let Some((tooltip_percent, comment)) = tooltip.as_ref() {
                div {
                    style: "
                        position: absolute;
                        left: {tooltip_percent}%;
                        bottom: {tip_bottom}px;
                        transform: translateX(-50%);
                        max-width: 220px;
                        padding: 6px 10px;
                        border-radius: 6px;
                        background-color: {BG_SURFACE};
                        border: 1px solid {BORDER_DEFAULT};
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.4);
                        pointer-events: none;
                        z-index: 6;
                    ",
                    div {
                        style: "font-family: 'SF Mono', Consolas, monospace; font-size: 10px; color: {TEXT_DIM}; margin-bottom: 2px;",
                        "{comment.time_string}"
                    }
                    div {
                        style: "font-size: 11px; color: {TEXT_PRIMARY}; overflow: hidden; text-overflow: ellipsis; display: -webkit-box; -webkit-line-clamp: 3; -webkit-box-orient: vertical;",
                        "{comment.text}"
                    }
                }
            }
        }
    }
}
