//! Root application component
//!
//! This defines the main App component: the top-level signals, the webview
//! bridges (player control, video events, surface bounds), and the overall
//! layout structure.

use std::time::Duration;

use dioxus::desktop::use_asset_handler;
use dioxus::prelude::*;

use crate::components::{CommentModal, CommentPanel, PlayerPanel, StatusBar};
use crate::constants::*;
use crate::core::bounds::{SurfaceBounds, SurfaceMeasurement};
use crate::core::draft::CommentDraft;
use crate::core::playback::{PlaybackController, PlayerEvent};
use crate::core::timecode::format_time_precise;
use crate::hotkeys::{handle_hotkey, HotkeyAction, HotkeyContext, HotkeyResult};
use crate::state::CommentStore;

/// Main application component
#[component]
pub fn App() -> Element {
    // Session state - the core data model
    let mut comments = use_signal(CommentStore::new);
    let mut draft = use_signal(CommentDraft::default);

    // Playback state. Current time and duration are re-read from the
    // element's notifications, never advanced locally.
    let mut current_time = use_signal(|| 0.0_f64);
    let mut duration = use_signal(|| 0.0_f64);
    let mut is_playing = use_signal(|| false);

    // Video source
    let mut video_url = use_signal(|| SAMPLE_VIDEO_URL.to_string());
    let mut video_name = use_signal(|| SAMPLE_VIDEO_NAME.to_string());

    // Geometry published by the bounds bridge
    let mut surface_bounds = use_signal(|| None::<SurfaceBounds>);
    let mut container_left = use_signal(|| 0.0_f64);

    // Eval channels into the webview
    let mut control_eval = use_signal(|| None::<document::Eval>);
    let mut events_eval = use_signal(|| None::<document::Eval>);
    let mut bounds_eval = use_signal(|| None::<document::Eval>);

    let controller = PlaybackController::new(control_eval);

    // Serve picked local files to the <video> element. Range support lets
    // the element seek inside large files without re-downloading them.
    use_asset_handler("media", move |request, responder| {
        let path = request.uri().path().to_string();
        let range = request
            .headers()
            .get(http::header::RANGE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        tokio::task::spawn_blocking(move || {
            responder.respond(crate::core::media::serve_media(&path, range.as_deref()));
        });
    });

    use_effect(move || {
        if control_eval().is_some() {
            return;
        }
        let eval = document::eval(PLAYER_CONTROL_SCRIPT);
        control_eval.set(Some(eval));
    });

    use_effect(move || {
        if events_eval().is_some() {
            return;
        }
        let eval = document::eval(VIDEO_EVENTS_SCRIPT);
        events_eval.set(Some(eval));
    });

    use_effect(move || {
        if bounds_eval().is_some() {
            return;
        }
        let eval = document::eval(SURFACE_BOUNDS_SCRIPT);
        bounds_eval.set(Some(eval));
    });

    // Pump video element notifications into playback state.
    use_future(move || {
        let events_eval = events_eval.clone();
        let mut current_time = current_time.clone();
        let mut duration = duration.clone();
        let mut is_playing = is_playing.clone();
        async move {
            loop {
                let Some(eval) = events_eval() else {
                    tokio::time::sleep(Duration::from_millis(100)).await;
                    continue;
                };
                let mut eval = eval;
                loop {
                    match eval.recv::<PlayerEvent>().await {
                        Ok(PlayerEvent::Time { time }) => current_time.set(time),
                        Ok(PlayerEvent::Metadata { duration: known }) => {
                            duration.set(known.max(0.0));
                        }
                        Ok(PlayerEvent::Play) => is_playing.set(true),
                        Ok(PlayerEvent::Pause) => is_playing.set(false),
                        Err(_) => break,
                    }
                }
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
        }
    });

    // Pump surface measurements into published bounds. Bounds are replaced
    // wholesale; a measurement taken mid-layout (zero width) is skipped and
    // the previous value stays in effect.
    use_future(move || {
        let bounds_eval = bounds_eval.clone();
        let mut surface_bounds = surface_bounds.clone();
        let mut container_left = container_left.clone();
        async move {
            loop {
                let Some(eval) = bounds_eval() else {
                    tokio::time::sleep(Duration::from_millis(100)).await;
                    continue;
                };
                let mut eval = eval;
                loop {
                    match eval.recv::<SurfaceMeasurement>().await {
                        Ok(measurement) => {
                            container_left.set(measurement.container.left);
                            if let Some(bounds) = SurfaceBounds::from_measurement(&measurement) {
                                if surface_bounds() != Some(bounds) {
                                    surface_bounds.set(Some(bounds));
                                }
                            }
                        }
                        Err(_) => break,
                    }
                }
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
        }
    });

    let mut seek_to = move |t: f64| {
        let clamped = t.clamp(0.0, duration().max(0.0));
        controller.seek(clamped);
        current_time.set(clamped);
    };

    let toggle_playback = move |_: ()| {
        if is_playing() {
            controller.pause();
        } else {
            controller.play();
        }
    };

    // Entering the draft captures the playback time once and pauses; the
    // captured value stays frozen however far playback drifts afterwards.
    let mut open_draft = move |_: ()| {
        controller.pause();
        draft.write().open(current_time());
    };

    let mut submit_draft = move |_: ()| {
        if let Some((text, at)) = draft.write().submit() {
            comments.write().add(&text, at);
        }
    };

    let mut cancel_draft = move |_: ()| draft.write().cancel();

    let mut open_video = move |_: ()| {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Video", &["mp4", "mov", "webm", "mkv", "avi"])
            .pick_file()
        {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "Untitled video".to_string());
            video_url.set(crate::utils::local_media_url(&path));
            video_name.set(name);
            // Comments are pinned to timestamps in the previous video.
            comments.set(CommentStore::new());
            draft.write().cancel();
            current_time.set(0.0);
            duration.set(0.0);
            is_playing.set(false);
            surface_bounds.set(None);
        }
    };

    let (draft_open, draft_text, draft_can_submit, draft_time_label) = {
        let d = draft.read();
        (
            d.is_open(),
            d.text().to_string(),
            d.can_submit(),
            d.captured_at().map(format_time_precise).unwrap_or_default(),
        )
    };

    rsx! {
        // Global CSS
        style {
            r#"
            *, *::before, *::after {{ box-sizing: border-box; }}
            html, body {{ margin: 0; padding: 0; overflow: hidden; background-color: {BG_BASE}; }}
            body {{ -webkit-font-smoothing: antialiased; }}
            ::-webkit-scrollbar {{ width: 6px; height: 6px; }}
            ::-webkit-scrollbar-track {{ background: transparent; }}
            ::-webkit-scrollbar-thumb {{ background: {BORDER_DEFAULT}; border-radius: 3px; }}
            ::-webkit-scrollbar-thumb:hover {{ background: {BORDER_STRONG}; }}
            .transport-btn {{ opacity: 0.75; transition: opacity 0.15s ease, background-color 0.15s ease; }}
            .transport-btn:hover {{ opacity: 1; background-color: {BG_HOVER} !important; }}
            .comment-item:hover {{ border-color: {BORDER_STRONG} !important; }}
            "#
        }

        // Main app container
        div {
            class: "app-container",
            style: "
                display: flex; flex-direction: column;
                width: 100vw; height: 100vh;
                background-color: {BG_BASE}; color: {TEXT_PRIMARY};
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
                overflow: hidden; position: fixed; top: 0; left: 0;
            ",
            // Suppress the browser's default context menu
            oncontextmenu: move |e| e.prevent_default(),
            // Enable keyboard focus on this container for hotkeys
            tabindex: "0",
            onkeydown: move |e: KeyboardEvent| {
                let hotkey_context = HotkeyContext {
                    input_focused: draft.read().is_open(),
                    video_ready: duration() > 0.0,
                };

                let modifiers = e.modifiers();
                let shift = modifiers.shift();
                let ctrl = modifiers.ctrl();
                let alt = modifiers.alt();
                let meta = modifiers.meta();

                match handle_hotkey(&e.key(), shift, ctrl, alt, meta, &hotkey_context) {
                    HotkeyResult::Action(action) => {
                        e.prevent_default();
                        match action {
                            HotkeyAction::PlayPause => toggle_playback(()),
                            HotkeyAction::AddComment => open_draft(()),
                            HotkeyAction::SeekStart => seek_to(0.0),
                            HotkeyAction::SeekEnd => seek_to(duration()),
                        }
                    }
                    HotkeyResult::NoMatch | HotkeyResult::Suppressed => {}
                }
            },

            div {
                style: "display: flex; flex: 1; min-height: 0;",

                PlayerPanel {
                    video_url: video_url(),
                    video_name: video_name(),
                    comments: comments.read().all().to_vec(),
                    duration: duration(),
                    current_time: current_time(),
                    is_playing: is_playing(),
                    bounds: surface_bounds(),
                    container_left: container_left(),
                    on_seek: move |t| seek_to(t),
                    on_play_pause: move |_| toggle_playback(()),
                    on_add_comment: move |_| open_draft(()),
                    on_open_video: move |_| open_video(()),
                }

                CommentPanel {
                    comments: comments.read().all().to_vec(),
                    on_select: move |t| seek_to(t),
                }
            }

            StatusBar {
                video_name: video_name(),
                current_time: current_time(),
                duration: duration(),
                comment_count: comments.read().len(),
            }

            CommentModal {
                show: draft_open,
                time_label: draft_time_label,
                text: draft_text,
                can_submit: draft_can_submit,
                on_input: move |value: String| draft.write().set_text(value),
                on_submit: move |_| submit_draft(()),
                on_cancel: move |_| cancel_draft(()),
            }
        }
    }
}
