use crate::renderer::CairoRenderer;
use cairo::{Context, Format, ImageSurface};
use lapring::{BoundingBox, RingFrame, StyleConfig};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Image size {0} is too large")]
    TooLarge(u32),
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),
    #[error("PNG error: {0}")]
    Png(#[from] cairo::IoError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Renders onto a fresh transparent `size` x `size` surface.
pub fn render_surface(
    style: &StyleConfig,
    size: u32,
) -> Result<(ImageSurface, RingFrame), RenderError> {
    let side = i32::try_from(size).map_err(|_| RenderError::TooLarge(size))?;
    let surface = ImageSurface::create(Format::ARgb32, side, side)?;

    let frame = {
        let cr = Context::new(&surface)?;
        let mut renderer = CairoRenderer::new(&cr);
        lapring::render::draw(&mut renderer, BoundingBox::square(f64::from(size)), style)?
    };

    Ok((surface, frame))
}

pub fn write_png(style: &StyleConfig, size: u32, path: &Path) -> Result<RingFrame, RenderError> {
    let (surface, frame) = render_surface(style, size)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs_err::create_dir_all(parent)?;
    }
    let mut file = fs_err::File::create(path)?;
    surface.write_to_png(&mut file)?;

    Ok(frame)
}
