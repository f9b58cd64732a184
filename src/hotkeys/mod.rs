//! Hotkey system
//!
//! Centralized hotkey management for the player.
//!
//! # Architecture
//!
//! - **HotkeyAction**: Enum of all possible actions that can be triggered by hotkeys
//! - **HotkeyContext**: Determines which hotkeys are active based on app state
//! - **handle_hotkey()**: Main dispatch function that maps key events to actions
//!
//! # Adding New Hotkeys
//!
//! 1. Add a variant to `HotkeyAction`
//! 2. Add the key binding in `handle_hotkey()`
//! 3. Handle the action in the App component's hotkey handler

use dioxus::prelude::Key;

/// All possible actions that can be triggered by hotkeys.
///
/// Each variant represents a semantic action, not a key binding.
/// This decouples "what key was pressed" from "what should happen".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    /// Toggle playback.
    PlayPause,
    /// Open a comment draft frozen at the current playback time.
    AddComment,
    /// Jump back to the start of the video.
    SeekStart,
    /// Jump to the end of the video.
    SeekEnd,
}

/// Context information that affects which hotkeys are active.
///
/// All bindings are suppressed while the draft modal is up: the textarea
/// owns the keyboard, and a stray Space must not unpause the video behind
/// the modal.
#[derive(Debug, Clone, Default)]
pub struct HotkeyContext {
    /// Whether an input field has focus (suppresses all hotkeys)
    pub input_focused: bool,
    /// Whether the video has loaded metadata (seek targets exist)
    pub video_ready: bool,
}

/// Result of processing a key event.
#[derive(Debug, Clone)]
pub enum HotkeyResult {
    /// A hotkey action was matched and should be executed
    Action(HotkeyAction),
    /// No matching hotkey for this key/context combination
    NoMatch,
    /// Hotkey would match but is suppressed (e.g., input field focused)
    Suppressed,
}

/// Maps a key event to an action, considering the current context.
pub fn handle_hotkey(
    key: &Key,
    _shift: bool,
    _ctrl: bool,
    _alt: bool,
    _meta: bool,
    context: &HotkeyContext,
) -> HotkeyResult {
    // Suppress hotkeys when typing in an input field
    if context.input_focused {
        return HotkeyResult::Suppressed;
    }

    match key {
        Key::Character(c) if c == " " => return HotkeyResult::Action(HotkeyAction::PlayPause),
        Key::Character(c) if c == "c" || c == "C" => {
            return HotkeyResult::Action(HotkeyAction::AddComment);
        }
        _ => {}
    }

    // Seek hotkeys only make sense once a duration is known.
    if context.video_ready {
        match key {
            Key::Home => return HotkeyResult::Action(HotkeyAction::SeekStart),
            Key::End => return HotkeyResult::Action(HotkeyAction::SeekEnd),
            _ => {}
        }
    }

    HotkeyResult::NoMatch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_toggles_playback() {
        let ctx = HotkeyContext::default();
        let result = handle_hotkey(&Key::Character(" ".to_string()), false, false, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::PlayPause)));
    }

    #[test]
    fn test_c_opens_comment_draft() {
        let ctx = HotkeyContext::default();
        let result = handle_hotkey(&Key::Character("c".to_string()), false, false, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::AddComment)));
    }

    #[test]
    fn test_home_seeks_start_once_ready() {
        let ctx = HotkeyContext { video_ready: true, ..Default::default() };
        let result = handle_hotkey(&Key::Home, false, false, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::SeekStart)));
    }

    #[test]
    fn test_seek_keys_inactive_before_metadata() {
        let ctx = HotkeyContext::default();
        let result = handle_hotkey(&Key::End, false, false, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::NoMatch));
    }

    #[test]
    fn test_suppressed_when_input_focused() {
        let ctx = HotkeyContext {
            input_focused: true,
            ..Default::default()
        };
        let result = handle_hotkey(&Key::Character(" ".to_string()), false, false, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::Suppressed));
    }
}
