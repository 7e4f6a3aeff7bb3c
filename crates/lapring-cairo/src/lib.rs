//! Cairo backend for `lapring`: rasterizes ring frames and writes PNGs.

pub mod output;
pub mod renderer;
pub mod watch;

pub use output::{RenderError, render_surface, write_png};
pub use renderer::CairoRenderer;
