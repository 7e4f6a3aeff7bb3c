use cairo::{Context, LineCap, LinearGradient};
use lapring::{ArcSpec, Color, RenderAdapter, RingFrame, StyleConfig};
use std::f64::consts::TAU;

fn set_source_color(cr: &Context, color: &Color) {
    let (r, g, b, a) = color.components();
    cr.set_source_rgba(r, g, b, a);
}

fn trace_arc(cr: &Context, arc: &ArcSpec) {
    cr.new_path();
    if arc.clockwise {
        cr.arc(arc.center.x, arc.center.y, arc.radius, arc.start_angle, arc.end_angle);
    } else {
        cr.arc_negative(arc.center.x, arc.center.y, arc.radius, arc.start_angle, arc.end_angle);
    }
}

/// One half of the stroke: a vertical gradient clipped to a vertical strip.
struct GradientBand<'a> {
    x: f64,
    from: &'a Color,
    to: &'a Color,
    /// Gradient runs bottom to top instead of top to bottom.
    flipped: bool,
}

impl GradientBand<'_> {
    fn draw(&self, cr: &Context, arc: &ArcSpec, half: f64) -> Result<(), cairo::Error> {
        let side = half * 2.0;
        let (y0, y1) = if self.flipped { (side, 0.0) } else { (0.0, side) };

        let gradient = LinearGradient::new(0.0, y0, 0.0, y1);
        for (offset, color) in [(0.0, self.from), (1.0, self.to)] {
            let (r, g, b, a) = color.components();
            gradient.add_color_stop_rgba(offset, r, g, b, a);
        }

        cr.save()?;
        cr.rectangle(self.x, 0.0, half, side);
        cr.clip();
        cr.set_source(&gradient)?;
        trace_arc(cr, arc);
        cr.stroke()?;
        cr.restore()
    }
}

/// Draws ring frames onto a cairo context whose origin is the top-left of
/// the indicator's box.
pub struct CairoRenderer<'a> {
    cr: &'a Context,
}

impl<'a> CairoRenderer<'a> {
    pub fn new(cr: &'a Context) -> Self {
        Self { cr }
    }

    fn draw_track(&self, style: &StyleConfig, frame: &RingFrame) -> Result<(), cairo::Error> {
        let g = &frame.geometry;
        set_source_color(self.cr, &style.background_color);
        self.cr.set_line_width(style.stroke_width);
        self.cr.new_path();
        self.cr.arc(g.center.x, g.center.y, g.arc_radius, 0.0, TAU);
        self.cr.stroke()
    }

    fn draw_stroke(&self, style: &StyleConfig, frame: &RingFrame) -> Result<(), cairo::Error> {
        let cr = self.cr;
        let g = &frame.geometry;
        let half = g.outer_radius;

        cr.save()?;
        cr.translate(g.center.x, g.center.y);
        cr.rotate(frame.overlay.rotation);
        cr.translate(-g.center.x, -g.center.y);
        cr.set_line_width(style.stroke_width);
        cr.set_line_cap(LineCap::Round);

        let bands = [
            GradientBand {
                x: half,
                from: &style.dark_color,
                to: &style.mid_color,
                flipped: false,
            },
            GradientBand {
                x: 0.0,
                from: &style.mid_color,
                to: &style.light_color,
                flipped: true,
            },
        ];
        for band in &bands {
            band.draw(cr, &frame.arc, half)?;
        }

        cr.restore()
    }

    fn draw_marker(&self, style: &StyleConfig, frame: &RingFrame) -> Result<(), cairo::Error> {
        let marker = &frame.marker;
        if marker.size <= 0.0 {
            return Ok(());
        }
        let center = marker.center();
        set_source_color(self.cr, frame.marker_tone.pick(style));
        self.cr.new_path();
        self.cr.arc(center.x, center.y, marker.corner_radius(), 0.0, TAU);
        self.cr.fill()
    }
}

impl RenderAdapter for CairoRenderer<'_> {
    type Error = cairo::Error;

    fn present(&mut self, style: &StyleConfig, frame: &RingFrame) -> Result<(), Self::Error> {
        if frame.geometry.is_drawable() {
            self.draw_track(style, frame)?;
            self.draw_stroke(style, frame)?;
        } else {
            log::debug!(
                "Skipping arc, nothing drawable at radius {}",
                frame.geometry.arc_radius
            );
        }
        self.draw_marker(style, frame)
    }
}
