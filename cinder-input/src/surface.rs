//! Surface geometry and the shared coordinate-normalization routine.

/// Geometry of the capture surface at the moment an event arrives.
///
/// Backing size is the drawing-buffer resolution; client size is the CSS
/// display size. They differ on high-DPI displays or when the canvas is
/// styled, and every coordinate must be scaled by their ratio. The adapter
/// re-reads this per event because layout and scroll offsets change freely.
#[derive(Clone, Copy, Debug)]
pub struct SurfaceGeometry {
    pub backing_width: f64,
    pub backing_height: f64,
    pub client_width: f64,
    pub client_height: f64,
    /// Viewport-relative position of the surface's top-left corner.
    pub left: f64,
    pub top: f64,
    /// Scroll offset of the surface element itself (normally zero).
    pub scroll_left: f64,
    pub scroll_top: f64,
}

impl SurfaceGeometry {
    /// Convert a client-space x coordinate into surface space.
    ///
    /// Shared by the mouse and touch paths; they must not drift apart.
    pub fn relative_x(&self, client_x: f64) -> i32 {
        let scale = if self.client_width > 0.0 {
            self.backing_width / self.client_width
        } else {
            1.0
        };
        (scale * (client_x - self.left + self.scroll_left)).round() as i32
    }

    /// Convert a client-space y coordinate into surface space.
    pub fn relative_y(&self, client_y: f64) -> i32 {
        let scale = if self.client_height > 0.0 {
            self.backing_height / self.client_height
        } else {
            1.0
        };
        (scale * (client_y - self.top + self.scroll_top)).round() as i32
    }

    /// Whether a surface-space position lies inside the visible surface.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as f64) <= self.backing_width && y >= 0 && (y as f64) <= self.backing_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> SurfaceGeometry {
        SurfaceGeometry {
            backing_width: 800.0,
            backing_height: 600.0,
            client_width: 400.0,
            client_height: 300.0,
            left: 0.0,
            top: 0.0,
            scroll_left: 0.0,
            scroll_top: 0.0,
        }
    }

    // ── relative coordinates ──

    #[test]
    fn test_backing_scale_applied() {
        // 2x backing scale: 200 client px → 400 surface px
        let g = geometry();
        assert_eq!(g.relative_x(200.0), 400);
        assert_eq!(g.relative_y(150.0), 300);
    }

    #[test]
    fn test_surface_offset_subtracted() {
        let g = SurfaceGeometry {
            left: 50.0,
            top: 20.0,
            ..geometry()
        };
        assert_eq!(g.relative_x(50.0), 0);
        assert_eq!(g.relative_x(250.0), 400);
        assert_eq!(g.relative_y(20.0), 0);
    }

    #[test]
    fn test_rounds_to_nearest() {
        let g = SurfaceGeometry {
            backing_width: 400.0,
            client_width: 400.0,
            ..geometry()
        };
        assert_eq!(g.relative_x(10.4), 10);
        assert_eq!(g.relative_x(10.6), 11);
    }

    #[test]
    fn test_zero_client_size_does_not_divide() {
        let g = SurfaceGeometry {
            client_width: 0.0,
            client_height: 0.0,
            ..geometry()
        };
        assert_eq!(g.relative_x(123.0), 123);
        assert_eq!(g.relative_y(45.0), 45);
    }

    // ── contains ──

    #[test]
    fn test_contains_bounds() {
        let g = geometry();
        assert!(g.contains(0, 0));
        assert!(g.contains(800, 600));
        assert!(!g.contains(-1, 10));
        assert!(!g.contains(801, 10));
        assert!(!g.contains(10, 601));
    }
}
