use dioxus::prelude::*;

use crate::constants::*;
use crate::state::Comment;

/// Side panel listing all comments in timestamp order.
/// Clicking an entry seeks the player to that comment's time.
#[component]
pub fn CommentPanel(comments: Vec<Comment>, on_select: EventHandler<f64>) -> Element {
    let count = comments.len();

    rsx! {
        div {
            style: "
                display: flex; flex-direction: column;
                width: {COMMENTS_PANEL_WIDTH}px; min-width: {COMMENTS_PANEL_WIDTH}px;
                background-color: {BG_ELEVATED}; border-left: 1px solid {BORDER_DEFAULT};
                overflow: hidden;
            ",

            div {
                style: "
                    display: flex; align-items: center;
                    height: 32px; padding: 0 14px;
                    background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                    flex-shrink: 0;
                ",
                span {
                    style: "font-size: 11px; font-weight: 500; color: {TEXT_MUTED}; text-transform: uppercase; letter-spacing: 0.5px;",
                    "Comments ({count})"
                }
            }

            div {
                style: "flex: 1; overflow-y: auto; padding: 8px;",
                for comment in comments.iter() {
                    {
                        let timestamp = comment.timestamp;
                        rsx! {
                            div {
                                key: "{comment.id}",
                                class: "comment-item",
                                style: "
                                    display: flex; flex-direction: column; gap: 4px;
                                    padding: 8px 10px; margin-bottom: 6px;
                                    border: 1px solid {BORDER_SUBTLE}; border-radius: 6px;
                                    background-color: {BG_SURFACE};
                                    cursor: pointer;
                                    transition: border-color 0.12s ease;
                                ",
                                onclick: move |_| on_select.call(timestamp),
                                span {
                                    style: "font-family: 'SF Mono', Consolas, monospace; font-size: 10px; color: {ACCENT_MARKER};",
                                    "{comment.time_string}"
                                }
                                span {
                                    style: "font-size: 12px; color: {TEXT_PRIMARY}; word-break: break-word;",
                                    "{comment.text}"
                                }
                            }
                        }
                    }
                }
                if count == 0 {
                    p {
                        style: "margin: 12px 6px; font-size: 12px; color: {TEXT_DIM}; line-height: 1.5;",
                        "No comments yet. Click \"Add Comment\" to leave the first note at the current time."
                    }
                }
            }
        }
    }
}
