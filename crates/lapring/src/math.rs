//! End-point placement along the ring.
//!
//! Positions are offsets from the top-left corner of the square that bounds
//! the arc, in y-down coordinates. `(r, 0)` is the top center, where every
//! lap starts.

use crate::layout::Point;
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use strum::{EnumIter, FromRepr};

/// Quarter turns, clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, FromRepr)]
#[repr(u8)]
pub enum Quadrant {
    TopRight = 0,
    BottomRight = 1,
    BottomLeft = 2,
    TopLeft = 3,
}

impl Quadrant {
    /// Splits an angle travelled from the top into its quadrant and the angle
    /// left over inside that quadrant.
    pub fn locate(angle: f64) -> (Self, f64) {
        // clamp: percent just below 1 can round up to a fifth quarter
        let index = (angle * 2.0 / PI).floor().clamp(0.0, 3.0) as u8;
        let quadrant = Self::from_repr(index).unwrap_or(Self::TopRight);
        (quadrant, angle - f64::from(index) * FRAC_PI_2)
    }

    pub fn offset(self, local: f64, radius: f64) -> Point {
        let (sin, cos) = local.sin_cos();
        let r = radius;
        let (x, y) = match self {
            Self::TopRight => (r + sin * r, r - cos * r),
            Self::BottomRight => (r + cos * r, r + sin * r),
            Self::BottomLeft => (r - sin * r, r + cos * r),
            Self::TopLeft => (r - cos * r, r - sin * r),
        };
        Point::new(x, y)
    }
}

/// Offset of the end-point marker for a position within a lap.
///
/// `percent` is reduced mod 1 and `radius` is clamped to zero, so a ring with
/// no drawable radius collapses to the origin. The result is used as the
/// marker's top-left corner as-is.
pub fn end_point_offset(percent: f64, radius: f64) -> Point {
    let percent = if percent.is_finite() {
        percent.rem_euclid(1.0)
    } else {
        0.0
    };
    let angle = percent * TAU;
    let (quadrant, local) = Quadrant::locate(angle);
    quadrant.offset(local, radius.max(0.0))
}

/// Single-expression parametrisation of the same clockwise-from-top circle.
pub fn closed_form_offset(percent: f64, radius: f64) -> Point {
    let (sin, cos) = (percent * TAU).sin_cos();
    Point::new(radius + radius * sin, radius - radius * cos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    const EPS: f64 = 1e-9;

    fn assert_close(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn test_cardinal_points() {
        assert_close(end_point_offset(0.0, 10.0), Point::new(10.0, 0.0));
        assert_close(end_point_offset(0.25, 10.0), Point::new(20.0, 10.0));
        assert_close(end_point_offset(0.5, 10.0), Point::new(10.0, 20.0));
        assert_close(end_point_offset(0.75, 10.0), Point::new(0.0, 10.0));
    }

    #[test]
    fn test_locate() {
        let (q, local) = Quadrant::locate(FRAC_PI_2);
        assert_eq!(q, Quadrant::BottomRight);
        assert_eq!(local, 0.0);

        let (q, local) = Quadrant::locate(PI);
        assert_eq!(q, Quadrant::BottomLeft);
        assert_eq!(local, 0.0);

        let (q, _) = Quadrant::locate(TAU - 1e-9);
        assert_eq!(q, Quadrant::TopLeft);

        let (q, _) = Quadrant::locate(TAU);
        assert_eq!(q, Quadrant::TopLeft);
    }

    #[test]
    fn test_wraparound_continuity() {
        for r in [0.5, 1.0, 10.0, 480.0] {
            let start = end_point_offset(0.0, r);
            assert_eq!(start, Point::new(r, 0.0));

            let end = end_point_offset(1.0 - 1e-12, r);
            assert!((end.x - r).abs() < 1e-6 * r, "x at r={r}: {end:?}");
            assert!(end.y.abs() < 1e-6 * r, "y at r={r}: {end:?}");

            assert_close(Quadrant::TopLeft.offset(FRAC_PI_2, r), start);
        }
    }

    #[test]
    fn test_quadrant_boundaries_agree() {
        let r = 37.5;
        let pairs = [
            (Quadrant::TopRight, Quadrant::BottomRight),
            (Quadrant::BottomRight, Quadrant::BottomLeft),
            (Quadrant::BottomLeft, Quadrant::TopLeft),
        ];

        for (below, above) in pairs {
            assert_close(below.offset(FRAC_PI_2, r), above.offset(0.0, r));
        }
    }

    #[test]
    fn test_linear_in_radius() {
        for p in [0.0, 0.1, 0.3, 0.49, 0.6, 0.8, 0.95] {
            let base = end_point_offset(p, 10.0);
            for k in [0.5, 2.0, 7.25] {
                assert_close(end_point_offset(p, 10.0 * k), base.scale(k));
            }
        }
    }

    #[test]
    fn test_matches_closed_form() {
        for i in 0..400 {
            let p = f64::from(i) / 400.0;
            assert_close(end_point_offset(p, 25.0), closed_form_offset(p, 25.0));
        }
    }

    #[test]
    fn test_percent_taken_mod_one() {
        assert_close(end_point_offset(1.25, 10.0), Point::new(20.0, 10.0));
        assert_close(end_point_offset(3.5, 10.0), Point::new(10.0, 20.0));
    }

    #[test]
    fn test_non_positive_radius_collapses() {
        for q in Quadrant::iter() {
            assert_eq!(q.offset(0.3, 0.0), Point::new(0.0, 0.0));
        }
        assert_eq!(end_point_offset(0.3, -5.0), Point::new(0.0, 0.0));
    }
}
