//! Geometry for a circular progress indicator that keeps going past 100%.
//!
//! A pass takes a [`BoundingBox`] and a [`StyleConfig`] and produces a
//! [`RingFrame`]: the arc to stroke, the rotation to apply to the stroke layer
//! once progress wraps, and where to put the end-point marker. Drawing is left
//! to a [`RenderAdapter`].

pub mod arc;
pub mod color;
pub mod config;
pub mod frame;
pub mod layout;
pub mod marker;
pub mod math;
pub mod progress;
pub mod render;
pub mod style;
pub mod theme;

pub use arc::{ArcSpec, build_arc};
pub use color::Color;
pub use frame::RingFrame;
pub use layout::{
    BoundingBox, DerivedGeometry, OverlayTransform, Point, compute_geometry, overlay_rotation,
};
pub use marker::{MarkerPlacement, MarkerTone};
pub use math::{Quadrant, end_point_offset};
pub use progress::Progress;
pub use render::RenderAdapter;
pub use style::StyleConfig;
pub use theme::{Preset, ThemeColors};
