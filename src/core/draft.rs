//! Comment draft state machine.
//!
//! The draft flow is a two-state machine, `Idle` and `Open`. Opening
//! captures the playback time once; the submitted comment gets that
//! captured value no matter how far playback advances while the modal is
//! up. Submit and cancel both return to `Idle`.

/// Draft lifecycle state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CommentDraft {
    #[default]
    Idle,
    Open {
        /// Playback time captured when the draft opened.
        captured_at: f64,
        text: String,
    },
}

impl CommentDraft {
    pub fn is_open(&self) -> bool {
        matches!(self, CommentDraft::Open { .. })
    }

    /// Open a draft frozen at `current_time`. Ignored if a draft is
    /// already open, so repeated open requests cannot move the capture.
    pub fn open(&mut self, current_time: f64) {
        if self.is_open() {
            return;
        }
        *self = CommentDraft::Open {
            captured_at: current_time.max(0.0),
            text: String::new(),
        };
    }

    /// The frozen capture time, while a draft is open.
    pub fn captured_at(&self) -> Option<f64> {
        match self {
            CommentDraft::Open { captured_at, .. } => Some(*captured_at),
            CommentDraft::Idle => None,
        }
    }

    /// Current draft text; empty while idle.
    pub fn text(&self) -> &str {
        match self {
            CommentDraft::Open { text, .. } => text,
            CommentDraft::Idle => "",
        }
    }

    /// Replace the draft text. Ignored while idle.
    pub fn set_text(&mut self, new_text: impl Into<String>) {
        if let CommentDraft::Open { text, .. } = self {
            *text = new_text.into();
        }
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        match self {
            CommentDraft::Open { text, .. } => !text.trim().is_empty(),
            CommentDraft::Idle => false,
        }
    }

    /// Submit the draft: returns the text and the frozen timestamp and
    /// transitions to `Idle`. A draft whose text trims to empty stays open
    /// and returns `None` (the submit control is disabled in that state).
    pub fn submit(&mut self) -> Option<(String, f64)> {
        if !self.can_submit() {
            return None;
        }
        match std::mem::take(self) {
            CommentDraft::Open { captured_at, text } => Some((text, captured_at)),
            CommentDraft::Idle => None,
        }
    }

    /// Discard the draft text and return to `Idle`.
    pub fn cancel(&mut self) {
        *self = CommentDraft::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_freezes_capture_time() {
        let mut draft = CommentDraft::default();
        draft.open(42.123);
        draft.set_text("too fast on the entry");
        // Playback keeps advancing while the modal is up; a second open
        // request must not move the capture.
        draft.open(50.0);
        let (text, at) = draft.submit().unwrap();
        assert_eq!(text, "too fast on the entry");
        assert_eq!(at, 42.123);
        assert_eq!(draft, CommentDraft::Idle);
    }

    #[test]
    fn test_empty_submit_keeps_draft_open() {
        let mut draft = CommentDraft::default();
        draft.open(10.0);
        draft.set_text("   ");
        assert!(!draft.can_submit());
        assert_eq!(draft.submit(), None);
        assert!(draft.is_open());
    }

    #[test]
    fn test_cancel_discards_text() {
        let mut draft = CommentDraft::default();
        draft.open(10.0);
        draft.set_text("never mind");
        draft.cancel();
        assert_eq!(draft, CommentDraft::Idle);
        assert_eq!(draft.text(), "");
        assert_eq!(draft.captured_at(), None);
    }

    #[test]
    fn test_idle_ignores_text_updates() {
        let mut draft = CommentDraft::default();
        draft.set_text("orphan input");
        assert_eq!(draft, CommentDraft::Idle);
        assert!(!draft.can_submit());
    }
}
