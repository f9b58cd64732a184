//! Data model
//!
//! - Comment: one timestamped annotation
//! - CommentStore: the ordered, session-scoped collection of comments
//!
//! Playback state (current time, duration, playing flag) and the draft
//! state machine are owned as signals by the App component; see `app.rs`
//! and `core/draft.rs`.

mod comment;

pub use comment::*;
