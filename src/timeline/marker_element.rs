use dioxus::prelude::*;

use crate::constants::{ACCENT_MARKER, MARKER_SIZE_PX};
use crate::state::Comment;

/// One comment's dot on the timeline strip.
///
/// Clicking a marker seeks to its own timestamp, so both the click and the
/// press must stop propagating; otherwise the strip underneath would also
/// interpret the pointer position and seek somewhere slightly different.
#[component]
pub(crate) fn CommentMarker(
    comment: Comment,
    position_percent: f64,
    on_seek: EventHandler<f64>,
    on_hover: EventHandler<Option<Comment>>,
) -> Element {
    let timestamp = comment.timestamp;
    let hover_comment = comment.clone();
    let title = format!("Comment at {}", comment.time_string);

    rsx! {
        div {
            style: "
                position: absolute;
                left: {position_percent}%;
                top: 50%;
                width: {MARKER_SIZE_PX}px;
                height: {MARKER_SIZE_PX}px;
                transform: translate(-50%, -50%);
                border-radius: 50%;
                background-color: {ACCENT_MARKER};
                border: 2px solid rgba(0, 0, 0, 0.4);
                cursor: pointer;
                z-index: 3;
            ",
            title: "{title}",
            onmousedown: move |e| {
                e.stop_propagation();
            },
            onclick: move |e| {
                e.stop_propagation();
                on_seek.call(timestamp);
            },
            onmouseenter: move |_| on_hover.call(Some(hover_comment.clone())),
            onmouseleave: move |_| on_hover.call(None),
        }
    }
}
