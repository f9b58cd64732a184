use chrono::Utc;

use crate::core::timecode::format_time;

/// A single timestamped comment. Immutable once created; comments live
/// only for the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    /// Unique, strictly increasing id (epoch milliseconds at creation).
    pub id: u64,
    /// Comment body; never empty after trimming.
    pub text: String,
    /// Position in the video, seconds.
    pub timestamp: f64,
    /// Preformatted `M:SS` display string for the timestamp.
    pub time_string: String,
}

/// Ordered comment collection, always sorted ascending by timestamp.
#[derive(Debug, Clone, Default)]
pub struct CommentStore {
    comments: Vec<Comment>,
    last_id: u64,
}

impl CommentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a comment at `timestamp`.
    ///
    /// Text that trims to empty is rejected and the store is left
    /// untouched. Insertion keeps the list sorted by timestamp; the sort
    /// is stable, so equal timestamps keep their insertion order.
    pub fn add(&mut self, text: &str, timestamp: f64) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.fresh_id();
        self.comments.push(Comment {
            id,
            text: text.to_string(),
            timestamp,
            time_string: format_time(timestamp),
        });
        self.comments
            .sort_by(|a, b| a.timestamp.partial_cmp(&b.timestamp).unwrap());
        Some(id)
    }

    /// All comments, timestamp-ascending.
    pub fn all(&self) -> &[Comment] {
        &self.comments
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    // Epoch-millisecond id, bumped past the last one handed out so rapid
    // submissions stay strictly increasing.
    fn fresh_id(&mut self) -> u64 {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        self.last_id = now.max(self.last_id + 1);
        self.last_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_rejected() {
        let mut store = CommentStore::new();
        assert_eq!(store.add("", 10.0), None);
        assert_eq!(store.add("   \n\t", 10.0), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_insertion_keeps_timestamp_order() {
        let mut store = CommentStore::new();
        store.add("late", 50.0);
        store.add("early", 10.0);
        store.add("middle", 30.0);
        let timestamps: Vec<f64> = store.all().iter().map(|c| c.timestamp).collect();
        assert_eq!(timestamps, vec![10.0, 30.0, 50.0]);
    }

    #[test]
    fn test_equal_timestamps_preserve_insertion_order() {
        let mut store = CommentStore::new();
        store.add("first", 20.0);
        store.add("second", 20.0);
        store.add("zeroth", 5.0);
        let texts: Vec<&str> = store.all().iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["zeroth", "first", "second"]);
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut store = CommentStore::new();
        store.add("a", 1.0);
        store.add("b", 2.0);
        store.add("c", 3.0);
        let mut ids: Vec<u64> = store.all().iter().map(|c| c.id).collect();
        // `all()` is timestamp-ordered, which here matches creation order.
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_text_is_trimmed_and_time_string_formatted() {
        let mut store = CommentStore::new();
        store.add("  nice cut  ", 65.25);
        let comment = &store.all()[0];
        assert_eq!(comment.text, "nice cut");
        assert_eq!(comment.time_string, "1:05");
    }
}
