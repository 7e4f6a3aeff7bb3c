use crate::arc::{ArcSpec, build_arc};
use crate::layout::{BoundingBox, DerivedGeometry, OverlayTransform, compute_geometry};
use crate::marker::{MarkerPlacement, MarkerTone};
use crate::style::StyleConfig;

/// Result of one geometry pass.
///
/// Frames are rebuilt from scratch whenever the box or the progress changes;
/// nothing carries over from the previous pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingFrame {
    pub geometry: DerivedGeometry,
    pub arc: ArcSpec,
    pub overlay: OverlayTransform,
    pub marker: MarkerPlacement,
    pub marker_tone: MarkerTone,
}

impl RingFrame {
    pub fn compute<C>(bbox: BoundingBox, style: &StyleConfig<C>) -> Self {
        let progress = style.progress;
        let geometry = compute_geometry(bbox, style.stroke_width);

        if !style.fits(bbox.width) {
            log::debug!(
                "Stroke {} does not fit a {} wide box, arc radius is {}",
                style.stroke_width,
                bbox.width,
                geometry.arc_radius
            );
        }

        Self {
            geometry,
            arc: build_arc(progress, &geometry),
            overlay: OverlayTransform::for_progress(progress),
            marker: MarkerPlacement::for_progress(progress, &geometry, style.stroke_width),
            marker_tone: MarkerTone::for_progress(progress),
        }
    }

    pub fn use_dark_color(&self) -> bool {
        self.marker_tone.is_dark()
    }
}
