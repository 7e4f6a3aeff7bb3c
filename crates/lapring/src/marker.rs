use crate::layout::{DerivedGeometry, Point};
use crate::math::end_point_offset;
use crate::progress::Progress;
use crate::style::StyleConfig;
use strum::Display;

/// Square frame for the end-point marker, `size` wide on each side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerPlacement {
    pub top_left: Point,
    pub size: f64,
}

impl MarkerPlacement {
    /// Before the first lap completes the marker sits on the start cap. After
    /// that it follows the lap position, which is where the rotated circle's
    /// start cap ends up.
    pub fn for_progress(
        progress: Progress,
        geometry: &DerivedGeometry,
        stroke_width: f64,
    ) -> Self {
        let percent = if progress.is_wrapped() {
            progress.fraction()
        } else {
            0.0
        };

        Self {
            top_left: end_point_offset(percent, geometry.arc_radius),
            size: stroke_width.max(0.0),
        }
    }

    pub fn corner_radius(&self) -> f64 {
        self.size / 2.0
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.top_left.x + self.corner_radius(),
            self.top_left.y + self.corner_radius(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum MarkerTone {
    Dark,
    Light,
}

impl MarkerTone {
    pub fn for_progress(progress: Progress) -> Self {
        if progress.is_wrapped() {
            Self::Light
        } else {
            Self::Dark
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn pick<C>(self, style: &StyleConfig<C>) -> &C {
        match self {
            Self::Dark => &style.dark_color,
            Self::Light => &style.light_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{BoundingBox, compute_geometry};

    fn assert_close(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn test_marker_sits_on_start_below_one_lap() {
        let g = compute_geometry(BoundingBox::square(24.0), 4.0);
        for p in [0.0, 0.3, 0.99] {
            let m = MarkerPlacement::for_progress(Progress::new(p), &g, 4.0);
            assert_eq!(m.top_left, Point::new(10.0, 0.0));
            assert_eq!(m.size, 4.0);
        }
    }

    #[test]
    fn test_marker_follows_lap_position() {
        // arc radius 10
        let g = compute_geometry(BoundingBox::square(24.0), 4.0);
        let m = MarkerPlacement::for_progress(Progress::new(1.25), &g, 4.0);
        assert_close(m.top_left, Point::new(20.0, 10.0));

        let m = MarkerPlacement::for_progress(Progress::new(2.5), &g, 4.0);
        assert_close(m.top_left, Point::new(10.0, 20.0));
        assert_close(m.center(), Point::new(12.0, 22.0));
        assert_eq!(m.corner_radius(), 2.0);
    }

    #[test]
    fn test_exact_lap_returns_to_start() {
        let g = compute_geometry(BoundingBox::square(24.0), 4.0);
        let m = MarkerPlacement::for_progress(Progress::new(2.0), &g, 4.0);
        assert_eq!(m.top_left, Point::new(10.0, 0.0));
        assert_eq!(MarkerTone::for_progress(Progress::new(2.0)), MarkerTone::Light);
    }

    #[test]
    fn test_tone() {
        assert!(MarkerTone::for_progress(Progress::new(0.0)).is_dark());
        assert!(MarkerTone::for_progress(Progress::new(0.999)).is_dark());
        assert!(!MarkerTone::for_progress(Progress::new(1.0)).is_dark());
        assert_eq!(MarkerTone::Light.to_string(), "light");
    }

    #[test]
    fn test_pick_opaque_colors() {
        let style = StyleConfig {
            dark_color: "dark",
            mid_color: "mid",
            light_color: "light",
            background_color: "bg",
            stroke_width: 2.0,
            progress: Progress::new(0.5),
        };
        assert_eq!(*MarkerTone::Dark.pick(&style), "dark");
        assert_eq!(*MarkerTone::Light.pick(&style), "light");
    }
}
