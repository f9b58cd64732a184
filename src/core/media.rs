//! Local media serving for the webview.
//!
//! The `<video>` element cannot read arbitrary filesystem paths, so files
//! picked with the native dialog are routed through the `media` asset
//! handler registered in `app.rs`. Seeking inside a local file requires
//! byte-range support: the webview issues `Range: bytes=...` requests and
//! expects 206 responses carrying `Content-Range`.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::PathBuf;

use http::{header, Response, StatusCode};
use percent_encoding::percent_decode_str;

/// Resolved byte range of a `Range` header, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

impl ByteRange {
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }
}

/// Parse a single-range `bytes=start-end` header value against a known
/// file size.
///
/// Open-ended (`bytes=500-`) and suffix (`bytes=-500`) forms are handled.
/// Multi-range requests and anything malformed return `None`; the handler
/// then answers with the whole file, which the webview accepts.
pub fn parse_byte_range(value: &str, file_size: u64) -> Option<ByteRange> {
    if file_size == 0 {
        return None;
    }
    let ranges = value.trim().strip_prefix("bytes=")?;
    if ranges.contains(',') {
        return None;
    }
    let (start_str, end_str) = ranges.split_once('-')?;
    let start_str = start_str.trim();
    let end_str = end_str.trim();

    if start_str.is_empty() {
        // Suffix form: the last N bytes.
        let suffix: u64 = end_str.parse().ok()?;
        if suffix == 0 {
            return None;
        }
        return Some(ByteRange {
            start: file_size.saturating_sub(suffix),
            end: file_size - 1,
        });
    }

    let start: u64 = start_str.parse().ok()?;
    if start >= file_size {
        return None;
    }
    let end = if end_str.is_empty() {
        file_size - 1
    } else {
        end_str.parse::<u64>().ok()?.min(file_size - 1)
    };
    if end < start {
        return None;
    }
    Some(ByteRange { start, end })
}

/// Decode the filesystem path from a `/media/...` request path.
pub fn decode_media_path(uri_path: &str) -> Option<PathBuf> {
    let encoded = uri_path.strip_prefix("/media/")?;
    let decoded = percent_decode_str(encoded).decode_utf8().ok()?;
    if decoded.is_empty() {
        return None;
    }
    Some(PathBuf::from(decoded.into_owned()))
}

/// Build the response for one media request.
pub fn serve_media(uri_path: &str, range_header: Option<&str>) -> Response<Vec<u8>> {
    let Some(path) = decode_media_path(uri_path) else {
        return status_response(StatusCode::BAD_REQUEST);
    };
    let Ok(mut file) = File::open(&path) else {
        return status_response(StatusCode::NOT_FOUND);
    };
    let Ok(metadata) = file.metadata() else {
        return status_response(StatusCode::NOT_FOUND);
    };
    let file_size = metadata.len();
    let mime = mime_guess::from_path(&path).first_or_octet_stream();

    let builder = Response::builder()
        .header(header::CONTENT_TYPE, mime.as_ref())
        .header(header::ACCEPT_RANGES, "bytes");

    let result = match range_header.and_then(|value| parse_byte_range(value, file_size)) {
        Some(range) => read_range(&mut file, range).and_then(|body| {
            builder
                .status(StatusCode::PARTIAL_CONTENT)
                .header(
                    header::CONTENT_RANGE,
                    format!("bytes {}-{}/{}", range.start, range.end, file_size),
                )
                .body(body)
                .ok()
        }),
        None => {
            let mut body = Vec::with_capacity(file_size as usize);
            file.read_to_end(&mut body)
                .ok()
                .and_then(|_| builder.status(StatusCode::OK).body(body).ok())
        }
    };

    result.unwrap_or_else(|| status_response(StatusCode::INTERNAL_SERVER_ERROR))
}

fn read_range(file: &mut File, range: ByteRange) -> Option<Vec<u8>> {
    file.seek(SeekFrom::Start(range.start)).ok()?;
    let mut body = vec![0_u8; range.len() as usize];
    file.read_exact(&mut body).ok()?;
    Some(body)
}

fn status_response(status: StatusCode) -> Response<Vec<u8>> {
    let mut response = Response::new(Vec::new());
    *response.status_mut() = status;
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_range() {
        assert_eq!(
            parse_byte_range("bytes=0-499", 1000),
            Some(ByteRange { start: 0, end: 499 })
        );
        assert_eq!(parse_byte_range("bytes=0-499", 1000).unwrap().len(), 500);
    }

    #[test]
    fn test_open_ended_range() {
        assert_eq!(
            parse_byte_range("bytes=500-", 1000),
            Some(ByteRange { start: 500, end: 999 })
        );
    }

    #[test]
    fn test_suffix_range() {
        assert_eq!(
            parse_byte_range("bytes=-200", 1000),
            Some(ByteRange { start: 800, end: 999 })
        );
        // Suffix longer than the file clamps to the whole file.
        assert_eq!(
            parse_byte_range("bytes=-5000", 1000),
            Some(ByteRange { start: 0, end: 999 })
        );
    }

    #[test]
    fn test_end_clamped_to_file_size() {
        assert_eq!(
            parse_byte_range("bytes=900-4000", 1000),
            Some(ByteRange { start: 900, end: 999 })
        );
    }

    #[test]
    fn test_rejected_ranges() {
        assert_eq!(parse_byte_range("bytes=1000-", 1000), None);
        assert_eq!(parse_byte_range("bytes=5-2", 1000), None);
        assert_eq!(parse_byte_range("bytes=0-100,200-300", 1000), None);
        assert_eq!(parse_byte_range("items=0-100", 1000), None);
        assert_eq!(parse_byte_range("bytes=-0", 1000), None);
        assert_eq!(parse_byte_range("bytes=0-", 0), None);
    }

    #[test]
    fn test_decode_media_path_round_trips_url_helper() {
        let path = PathBuf::from("/videos/Review Session 2.mp4");
        let url = crate::utils::local_media_url(&path);
        assert_eq!(decode_media_path(&url), Some(path));
    }

    #[test]
    fn test_decode_rejects_foreign_paths() {
        assert_eq!(decode_media_path("/assets/icon.png"), None);
        assert_eq!(decode_media_path("/media/"), None);
    }
}
