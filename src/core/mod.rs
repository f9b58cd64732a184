pub mod bounds;
pub mod draft;
pub mod media;
pub mod playback;
pub mod timecode;
pub mod timeline_map;
