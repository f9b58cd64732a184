//! Webview video element facade.
//!
//! Commands flow Rust -> JS over an eval channel (`PLAYER_CONTROL_SCRIPT`
//! pulls them with `dioxus.recv`); notifications flow JS -> Rust
//! (`VIDEO_EVENTS_SCRIPT` pushes them with `dioxus.send`). Current time and
//! duration always come from the element through those notifications; they
//! are re-read, never advanced locally.

use dioxus::document::Eval;
use dioxus::prelude::{ReadableExt, Signal};
use serde::{Deserialize, Serialize};

/// Command sent to the video element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlayerCommand {
    Seek { time: f64 },
    Play,
    Pause,
}

/// Notification from the video element.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlayerEvent {
    /// Fired on every playback time advance.
    Time { time: f64 },
    /// Fired once duration and intrinsic size are known.
    Metadata { duration: f64 },
    Play,
    Pause,
}

/// Thin handle over the control channel; owned by the App component.
///
/// Commands sent before the control script is installed are dropped, which
/// is fine: nothing can be interacted with before the player mounts.
#[derive(Clone, Copy)]
pub struct PlaybackController {
    eval: Signal<Option<Eval>>,
}

impl PlaybackController {
    pub fn new(eval: Signal<Option<Eval>>) -> Self {
        Self { eval }
    }

    /// Seek to `time` seconds. Negative input clamps to zero; the element
    /// itself clamps past-duration targets.
    pub fn seek(&self, time: f64) {
        self.send(PlayerCommand::Seek { time: time.max(0.0) });
    }

    pub fn play(&self) {
        self.send(PlayerCommand::Play);
    }

    pub fn pause(&self) {
        self.send(PlayerCommand::Pause);
    }

    fn send(&self, command: PlayerCommand) {
        let Some(eval) = self.eval.read().clone() else {
            return;
        };
        let _ = eval.send(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_command_wire_shape_matches_control_script() {
        // The control script dispatches on `msg.kind` and reads `msg.time`.
        assert_eq!(
            serde_json::to_value(PlayerCommand::Seek { time: 61.5 }).unwrap(),
            json!({"kind": "seek", "time": 61.5})
        );
        assert_eq!(
            serde_json::to_value(PlayerCommand::Pause).unwrap(),
            json!({"kind": "pause"})
        );
    }

    #[test]
    fn test_events_parse_from_bridge_payloads() {
        let time: PlayerEvent = serde_json::from_str(r#"{"kind":"time","time":12.25}"#).unwrap();
        assert_eq!(time, PlayerEvent::Time { time: 12.25 });

        let metadata: PlayerEvent =
            serde_json::from_str(r#"{"kind":"metadata","duration":120.0}"#).unwrap();
        assert_eq!(metadata, PlayerEvent::Metadata { duration: 120.0 });

        let play: PlayerEvent = serde_json::from_str(r#"{"kind":"play"}"#).unwrap();
        assert_eq!(play, PlayerEvent::Play);
    }
}
