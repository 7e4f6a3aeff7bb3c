//! Backend contract.
//!
//! The geometry core never draws. A backend receives the style and a
//! [`RingFrame`] each pass and is expected to:
//!
//! - stroke a full circle at [`DerivedGeometry::arc_radius`] in the
//!   background color;
//! - build a mask from [`RingFrame::arc`], rotate the stroke layer by
//!   [`RingFrame::overlay`] about the geometry center, and fill it with two
//!   gradients: dark to mid over the right half of the square and mid to
//!   light over the left half, flipped vertically;
//! - place a round marker in [`RingFrame::marker`], colored by
//!   [`RingFrame::marker_tone`].
//!
//! [`DerivedGeometry::arc_radius`]: crate::layout::DerivedGeometry::arc_radius

use crate::color::Color;
use crate::frame::RingFrame;
use crate::layout::BoundingBox;
use crate::style::StyleConfig;

pub trait RenderAdapter<C = Color> {
    type Error;

    fn present(&mut self, style: &StyleConfig<C>, frame: &RingFrame) -> Result<(), Self::Error>;
}

/// Runs a geometry pass and hands the result to `adapter`.
pub fn draw<C, A>(
    adapter: &mut A,
    bbox: BoundingBox,
    style: &StyleConfig<C>,
) -> Result<RingFrame, A::Error>
where
    A: RenderAdapter<C>,
{
    let frame = RingFrame::compute(bbox, style);
    adapter.present(style, &frame)?;
    Ok(frame)
}
