use std::path::Path;
use urlencoding;

/// Generates a webview URL for a local media file, routed through the
/// "media" asset handler registered in `app.rs`. This abstracts away the
/// route prefix and the encoding requirements for paths with spaces or
/// non-ASCII characters.
pub fn local_media_url(path: &Path) -> String {
    // 1. Convert path separators to forward slashes (standard API for URL paths)
    let p_str = path.to_string_lossy().replace("\\", "/");

    // 2. Percent-encode the path, then prefix with the handler route.
    format!("/media/{}", urlencoding::encode(&p_str))
}
