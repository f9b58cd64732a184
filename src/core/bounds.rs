//! Measured geometry of the rendered video surface.
//!
//! The `<video>` element letterboxes: its rendered frame can be narrower
//! than the container that holds it, so the timeline overlay cannot assume
//! "full container width". The bounds bridge script in `constants.rs`
//! measures both rectangles whenever either can have changed (attach,
//! metadata load, element resize, window resize) and sends them here;
//! [`SurfaceBounds::from_measurement`] reduces a measurement to the
//! offset/width pair the mapper consumes.

use serde::Deserialize;

/// One element's measured horizontal extent, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ElementRect {
    pub left: f64,
    pub width: f64,
}

/// Raw measurement message from the bounds bridge script.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SurfaceMeasurement {
    pub container: ElementRect,
    pub surface: ElementRect,
}

/// Published bounds of the playback surface relative to its container.
///
/// Always replaced wholesale on recompute, never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceBounds {
    /// Horizontal offset of the rendered video from the container's left edge.
    pub offset: f64,
    /// Rendered width of the video surface.
    pub width: f64,
}

impl SurfaceBounds {
    /// Recompute bounds from a fresh measurement.
    ///
    /// Returns `None` while either element is unmounted or has no layout
    /// yet (zero width); the previously published value stays in effect.
    pub fn from_measurement(measurement: &SurfaceMeasurement) -> Option<Self> {
        if measurement.container.width <= 0.0 || measurement.surface.width <= 0.0 {
            return None;
        }
        Some(Self {
            offset: (measurement.surface.left - measurement.container.left).max(0.0),
            width: measurement.surface.width,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement(container: (f64, f64), surface: (f64, f64)) -> SurfaceMeasurement {
        SurfaceMeasurement {
            container: ElementRect { left: container.0, width: container.1 },
            surface: ElementRect { left: surface.0, width: surface.1 },
        }
    }

    #[test]
    fn test_letterboxed_surface_offset() {
        let bounds = SurfaceBounds::from_measurement(&measurement((0.0, 400.0), (10.0, 380.0)));
        assert_eq!(bounds, Some(SurfaceBounds { offset: 10.0, width: 380.0 }));
    }

    #[test]
    fn test_unlaid_out_elements_are_skipped() {
        assert_eq!(SurfaceBounds::from_measurement(&measurement((0.0, 0.0), (0.0, 380.0))), None);
        assert_eq!(SurfaceBounds::from_measurement(&measurement((0.0, 400.0), (0.0, 0.0))), None);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let m = measurement((120.0, 640.0), (160.0, 560.0));
        let first = SurfaceBounds::from_measurement(&m);
        let second = SurfaceBounds::from_measurement(&m);
        assert_eq!(first, second);
        assert_eq!(first, Some(SurfaceBounds { offset: 40.0, width: 560.0 }));
    }

    #[test]
    fn test_offset_never_negative() {
        // A surface measured left of its container (mid-layout transient)
        // clamps to zero instead of producing a negative offset.
        let bounds = SurfaceBounds::from_measurement(&measurement((50.0, 400.0), (40.0, 380.0)));
        assert_eq!(bounds, Some(SurfaceBounds { offset: 0.0, width: 380.0 }));
    }

    #[test]
    fn test_measurement_deserializes_from_bridge_payload() {
        let payload = r#"{"container":{"left":0.0,"width":400.0},"surface":{"left":10.0,"width":380.0}}"#;
        let m: SurfaceMeasurement = serde_json::from_str(payload).unwrap();
        assert_eq!(m.surface.width, 380.0);
        assert_eq!(SurfaceBounds::from_measurement(&m).unwrap().offset, 10.0);
    }
}
