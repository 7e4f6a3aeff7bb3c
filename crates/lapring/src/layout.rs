use crate::progress::Progress;
use std::f64::consts::TAU;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn scale(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k)
    }
}

/// Size of the view hosting the indicator. Only the width is used: the
/// indicator is always laid out in a `width` x `width` square.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn square(side: f64) -> Self {
        Self::new(side, side)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedGeometry {
    pub center: Point,
    pub outer_radius: f64,
    /// Radius of the stroke centerline. Negative when the stroke is wider
    /// than the box.
    pub arc_radius: f64,
}

impl DerivedGeometry {
    pub fn is_drawable(&self) -> bool {
        self.arc_radius > 0.0
    }

    pub fn drawable_radius(&self) -> f64 {
        self.arc_radius.max(0.0)
    }
}

pub fn compute_geometry(bbox: BoundingBox, stroke_width: f64) -> DerivedGeometry {
    let half_width = bbox.width / 2.0;
    DerivedGeometry {
        center: Point::new(half_width, half_width),
        outer_radius: half_width,
        arc_radius: half_width - stroke_width / 2.0,
    }
}

/// Rotation about the geometry center applied to the whole stroke layer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverlayTransform {
    pub rotation: f64,
}

impl OverlayTransform {
    pub fn for_progress(progress: Progress) -> Self {
        Self {
            rotation: overlay_rotation(progress),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.rotation == 0.0
    }
}

/// Once progress wraps, the arc is always a full circle; the part of the
/// current lap is shown by turning that circle so its start cap lands on the
/// lap position.
pub fn overlay_rotation(progress: Progress) -> f64 {
    if progress.is_wrapped() {
        progress.fraction() * TAU
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_geometry_from_box() {
        let g = compute_geometry(BoundingBox::square(200.0), 20.0);
        assert_eq!(g.center, Point::new(100.0, 100.0));
        assert_eq!(g.outer_radius, 100.0);
        assert_eq!(g.arc_radius, 90.0);
        assert!(g.is_drawable());
    }

    #[test]
    fn test_width_is_authoritative() {
        let g = compute_geometry(BoundingBox::new(100.0, 300.0), 10.0);
        assert_eq!(g.center, Point::new(50.0, 50.0));
        assert_eq!(g.arc_radius, 45.0);
    }

    #[test]
    fn test_degenerate_stroke_keeps_negative_radius() {
        let g = compute_geometry(BoundingBox::square(10.0), 20.0);
        assert_eq!(g.arc_radius, -5.0);
        assert!(!g.is_drawable());
        assert_eq!(g.drawable_radius(), 0.0);
    }

    #[test]
    fn test_overlay_rotation() {
        assert_eq!(overlay_rotation(Progress::new(0.0)), 0.0);
        assert_eq!(overlay_rotation(Progress::new(0.75)), 0.0);
        assert_eq!(overlay_rotation(Progress::new(0.999_999)), 0.0);
        assert_eq!(overlay_rotation(Progress::new(1.0)), 0.0);
        assert_eq!(overlay_rotation(Progress::new(3.0)), 0.0);
        assert!((overlay_rotation(Progress::new(1.25)) - PI / 2.0).abs() < EPS);
        assert!((overlay_rotation(Progress::new(2.5)) - PI).abs() < EPS);

        for p in [1.1, 1.6, 2.3, 7.9] {
            let expected = (p % 1.0) * TAU;
            assert!((overlay_rotation(Progress::new(p)) - expected).abs() < EPS);
        }
    }

    #[test]
    fn test_overlay_transform_identity() {
        assert!(OverlayTransform::for_progress(Progress::new(0.4)).is_identity());
        assert!(!OverlayTransform::for_progress(Progress::new(1.4)).is_identity());
    }
}
