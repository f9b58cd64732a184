//! Position <-> time mapping for the timeline overlay.
//!
//! Marker placement and click interpretation must both go through these two
//! functions. Using different math for each makes markers and seek targets
//! drift apart as soon as the video is letterboxed.

use crate::core::bounds::SurfaceBounds;

/// Decimal places kept by both mapping directions.
const MAP_PRECISION: f64 = 1e6;

fn round_mapped(value: f64) -> f64 {
    (value * MAP_PRECISION).round() / MAP_PRECISION
}

/// Horizontal marker position for `timestamp`, as a percentage of the
/// playback surface width.
///
/// Returns 0.0 while the duration or the measured surface width is still
/// unknown; callers skip timeline rendering in that state.
pub fn time_to_percent(timestamp: f64, duration: f64, bounds: &SurfaceBounds) -> f64 {
    if duration <= 0.0 || bounds.width <= 0.0 {
        return 0.0;
    }
    round_mapped(timestamp.clamp(0.0, duration) / duration * 100.0)
}

/// Playback time for a pointer at viewport x position `pointer_x`.
///
/// `container_left` is the container's viewport left edge; the surface's
/// offset inside the container comes from `bounds`. The result is clamped
/// to `[0, duration]`, so clicks in the letterbox gutters land on the
/// nearest end of the timeline.
pub fn point_to_time(
    pointer_x: f64,
    container_left: f64,
    bounds: &SurfaceBounds,
    duration: f64,
) -> f64 {
    if duration <= 0.0 || bounds.width <= 0.0 {
        return 0.0;
    }
    let relative_x = (pointer_x - container_left) - bounds.offset;
    let percentage = (relative_x / bounds.width).clamp(0.0, 1.0);
    round_mapped(percentage * duration).clamp(0.0, duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: SurfaceBounds = SurfaceBounds { offset: 10.0, width: 380.0 };

    #[test]
    fn test_click_center_of_letterboxed_surface() {
        // Container is 400px wide at viewport x=0; the surface occupies
        // [10, 390]. A click at x=200 is halfway across the surface.
        let time = point_to_time(200.0, 0.0, &BOUNDS, 120.0);
        assert_eq!(time, 60.0);
    }

    #[test]
    fn test_resize_changes_click_meaning() {
        // Same click position after the surface narrows maps to a different
        // time, so bounds must be re-measured rather than cached.
        let narrow = SurfaceBounds { offset: 10.0, width: 200.0 };
        let time = point_to_time(200.0, 0.0, &narrow, 120.0);
        assert_eq!(time, 114.0);
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        let duration = 173.4;
        let container_left = 25.0;
        for i in 0..=100 {
            let t = duration * i as f64 / 100.0;
            let percent = time_to_percent(t, duration, &BOUNDS);
            let pixel_x = container_left + BOUNDS.offset + percent / 100.0 * BOUNDS.width;
            let back = point_to_time(pixel_x, container_left, &BOUNDS, duration);
            assert!(
                (back - t).abs() < 1e-4,
                "round trip drifted: {} -> {} (delta {})",
                t,
                back,
                (back - t).abs()
            );
        }
    }

    #[test]
    fn test_percent_is_monotonic() {
        let duration = 90.0;
        let mut last = -1.0;
        for i in 0..=90 {
            let percent = time_to_percent(i as f64, duration, &BOUNDS);
            assert!(percent > last);
            last = percent;
        }
    }

    #[test]
    fn test_degenerate_states_map_to_zero() {
        let unmeasured = SurfaceBounds { offset: 0.0, width: 0.0 };
        assert_eq!(time_to_percent(30.0, 0.0, &BOUNDS), 0.0);
        assert_eq!(time_to_percent(30.0, 120.0, &unmeasured), 0.0);
        assert_eq!(point_to_time(200.0, 0.0, &BOUNDS, 0.0), 0.0);
        assert_eq!(point_to_time(200.0, 0.0, &unmeasured, 120.0), 0.0);
    }

    #[test]
    fn test_out_of_range_inputs_clamp() {
        assert_eq!(time_to_percent(-5.0, 120.0, &BOUNDS), 0.0);
        assert_eq!(time_to_percent(500.0, 120.0, &BOUNDS), 100.0);
        // Clicks left of the surface (in the gutter) land on time zero,
        // clicks past its right edge on the duration.
        assert_eq!(point_to_time(3.0, 0.0, &BOUNDS, 120.0), 0.0);
        assert_eq!(point_to_time(900.0, 0.0, &BOUNDS, 120.0), 120.0);
    }
}
