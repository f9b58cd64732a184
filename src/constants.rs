//! Shared UI constants: colors, panel sizing, and the webview bridge scripts.

pub const BG_DEEPEST: &str = "#09090b";
pub const BG_BASE: &str = "#0a0a0b";
pub const BG_ELEVATED: &str = "#141414";
pub const BG_SURFACE: &str = "#1a1a1a";
pub const BG_HOVER: &str = "#262626";

pub const BORDER_SUBTLE: &str = "#1f1f1f";
pub const BORDER_DEFAULT: &str = "#27272a";
pub const BORDER_STRONG: &str = "#3f3f46";

pub const TEXT_PRIMARY: &str = "#fafafa";
pub const TEXT_SECONDARY: &str = "#a1a1aa";
pub const TEXT_MUTED: &str = "#71717a";
pub const TEXT_DIM: &str = "#52525b";

pub const ACCENT_PRIMARY: &str = "#3b82f6";
pub const ACCENT_MARKER: &str = "#f97316";

pub const COMMENTS_PANEL_WIDTH: f64 = 300.0;
pub const TIMELINE_STRIP_HEIGHT: f64 = 28.0;
pub const TIMELINE_STRIP_BOTTOM_PX: f64 = 14.0;
pub const MARKER_SIZE_PX: f64 = 12.0;

/// Startup video before the user opens a local file.
pub const SAMPLE_VIDEO_URL: &str =
    "http://commondatastorage.googleapis.com/gtv-videos-bucket/sample/WeAreGoingOnBullrun.mp4";
pub const SAMPLE_VIDEO_NAME: &str = "WeAreGoingOnBullrun.mp4";

/// Measures the video container and the rendered video rectangle and sends
/// both to Rust whenever either can have changed. The extra measurement one
/// frame after `loadedmetadata` matters: the webview settles letterboxed
/// layout a frame late, and a click interpreted against the pre-settle
/// bounds would mis-seek.
pub const SURFACE_BOUNDS_SCRIPT: &str = r#"
const containerId = "video-container";
const surfaceId = "video-player";
let last = null;

function measure() {
    const container = document.getElementById(containerId);
    const surface = document.getElementById(surfaceId);
    if (!container || !surface) {
        return null;
    }
    const c = container.getBoundingClientRect();
    const s = surface.getBoundingClientRect();
    return {
        container: { left: c.left, width: c.width },
        surface: { left: s.left, width: s.width }
    };
}

function sendBounds() {
    const next = measure();
    if (!next) {
        return;
    }
    if (last &&
        Math.abs(last.container.left - next.container.left) < 0.5 &&
        Math.abs(last.container.width - next.container.width) < 0.5 &&
        Math.abs(last.surface.left - next.surface.left) < 0.5 &&
        Math.abs(last.surface.width - next.surface.width) < 0.5) {
        return;
    }
    last = next;
    dioxus.send(next);
}

function attach() {
    const container = document.getElementById(containerId);
    const surface = document.getElementById(surfaceId);
    if (!container || !surface) {
        setTimeout(attach, 100);
        return;
    }
    const observer = new ResizeObserver(() => sendBounds());
    observer.observe(container);
    observer.observe(surface);
    window.addEventListener("resize", sendBounds, { passive: true });
    surface.addEventListener("loadedmetadata", () => {
        sendBounds();
        requestAnimationFrame(() => sendBounds());
    });
    sendBounds();
}

attach();
await new Promise(() => {});
"#;

/// Forwards the video element's notifications (time advance, metadata,
/// play/pause) to Rust. Also suppresses the context menu over the video.
pub const VIDEO_EVENTS_SCRIPT: &str = r#"
const videoId = "video-player";

function attach() {
    const video = document.getElementById(videoId);
    if (!video) {
        setTimeout(attach, 100);
        return;
    }
    video.addEventListener("timeupdate", () => {
        dioxus.send({ kind: "time", time: video.currentTime });
    });
    video.addEventListener("loadedmetadata", () => {
        dioxus.send({ kind: "metadata", duration: video.duration });
    });
    video.addEventListener("play", () => dioxus.send({ kind: "play" }));
    video.addEventListener("pause", () => dioxus.send({ kind: "pause" }));
    video.addEventListener("contextmenu", (e) => e.preventDefault());
    if (video.readyState >= 1 && video.duration) {
        dioxus.send({ kind: "metadata", duration: video.duration });
    }
}

attach();
await new Promise(() => {});
"#;

/// Applies player commands pulled from Rust to the video element.
pub const PLAYER_CONTROL_SCRIPT: &str = r#"
function getVideo() {
    return document.getElementById("video-player");
}

while (true) {
    const msg = await dioxus.recv();
    if (!msg) {
        continue;
    }
    const video = getVideo();
    if (!video) {
        continue;
    }
    if (msg.kind === "seek") {
        video.currentTime = Math.max(0, msg.time);
        continue;
    }
    if (msg.kind === "play") {
        video.play().catch(() => {});
        continue;
    }
    if (msg.kind === "pause") {
        video.pause();
    }
}
"#;
