use dioxus::prelude::*;

use crate::constants::*;

/// Draft editor modal.
///
/// The header shows the capture time frozen when the draft opened; the
/// submit button stays disabled while the text trims to empty. Clicking
/// the dimmed backdrop or pressing Escape cancels.
#[component]
pub fn CommentModal(
    show: bool,
    time_label: String,
    text: String,
    can_submit: bool,
    on_input: EventHandler<String>,
    on_submit: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    if !show {
        return rsx! {
            div {}
        };
    }

    let submit_opacity = if can_submit { "1" } else { "0.4" };
    let submit_cursor = if can_submit { "pointer" } else { "default" };

    rsx! {
        div {
            style: "
                position: fixed; top: 0; left: 0; right: 0; bottom: 0;
                background-color: rgba(0, 0, 0, 0.5);
                display: flex; align-items: center; justify-content: center;
                z-index: 2000;
            ",
            onclick: move |_| on_cancel.call(()),
            div {
                style: "
                    width: 420px; background-color: {BG_ELEVATED};
                    border: 1px solid {BORDER_DEFAULT}; border-radius: 8px;
                    padding: 24px; box-shadow: 0 10px 25px rgba(0,0,0,0.5);
                ",
                onclick: move |e| e.stop_propagation(),
                onkeydown: move |e: KeyboardEvent| {
                    if e.key() == Key::Escape {
                        on_cancel.call(());
                    }
                },

                h3 {
                    style: "margin: 0 0 16px 0; font-size: 16px; color: {TEXT_PRIMARY};",
                    "Add comment at {time_label}"
                }
                textarea {
                    style: "
                        width: 100%; height: 90px; resize: vertical;
                        padding: 10px; border-radius: 6px;
                        background-color: {BG_SURFACE}; border: 1px solid {BORDER_DEFAULT};
                        color: {TEXT_PRIMARY}; font-size: 13px; font-family: inherit;
                        outline: none;
                    ",
                    placeholder: "Enter your comment...",
                    autofocus: true,
                    value: "{text}",
                    oninput: move |e| on_input.call(e.value()),
                }
                div {
                    style: "display: flex; justify-content: flex-end; gap: 8px; margin-top: 16px;",
                    button {
                        style: "
                            padding: 8px 14px; border: 1px solid {BORDER_DEFAULT}; border-radius: 6px;
                            background: transparent; color: {TEXT_SECONDARY};
                            font-size: 12px; cursor: pointer;
                        ",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        style: "
                            padding: 8px 14px; border: none; border-radius: 6px;
                            background-color: {ACCENT_PRIMARY}; color: white;
                            font-size: 12px; font-weight: 500;
                            opacity: {submit_opacity}; cursor: {submit_cursor};
                        ",
                        disabled: !can_submit,
                        onclick: move |_| {
                            if can_submit {
                                on_submit.call(());
                            }
                        },
                        "Add Comment"
                    }
                }
            }
        }
    }
}
