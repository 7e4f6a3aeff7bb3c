use crate::layout::{DerivedGeometry, Point};
use crate::progress::Progress;
use std::f64::consts::{PI, TAU};

/// 12 o'clock, with 0 pointing right and angles growing clockwise (y down).
pub const START_ANGLE: f64 = 1.5 * PI;

/// Arc a backend strokes to build the progress mask.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpec {
    pub start_angle: f64,
    pub end_angle: f64,
    pub clockwise: bool,
    pub radius: f64,
    pub center: Point,
}

impl ArcSpec {
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn is_full_circle(&self) -> bool {
        // sweep is recovered by subtraction, allow for rounding
        self.sweep() >= TAU - 1e-9
    }
}

/// Below one lap the arc covers the completed share of the circle. From one
/// lap on it is a whole circle and the lap position comes from the overlay
/// rotation instead.
pub fn build_arc(progress: Progress, geometry: &DerivedGeometry) -> ArcSpec {
    let sweep = if progress.is_wrapped() {
        TAU
    } else {
        progress.value() * TAU
    };

    ArcSpec {
        start_angle: START_ANGLE,
        end_angle: START_ANGLE + sweep,
        clockwise: true,
        radius: geometry.drawable_radius(),
        center: geometry.center,
    }
}
