//! Procedural icon: an amber rounded square with a deep orange play triangle.

use crate::{
    config::IconConfig,
    error::Result,
    png::write_png,
    shape::{rounded_rect_mask, Triangle, MASK_INCLUDE},
};
use image::{Rgba, RgbaImage};
use log::{debug, info};
use std::path::Path;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Draw the icon in memory.
pub fn render_icon(config: &IconConfig) -> Result<RgbaImage> {
    config.validate()?;

    let (width, height) = (config.width, config.height);
    debug!(
        "Drawing {width}x{height} silhouette with corner radius {}",
        config.effective_radius()
    );

    let mask = rounded_rect_mask(width, height, config.radius);
    let mut canvas = RgbaImage::from_fn(width, height, |x, y| {
        if *mask.get_pixel(x, y) == MASK_INCLUDE {
            config.fill
        } else {
            TRANSPARENT
        }
    });

    let cx = (width / 2) as f32;
    let cy = (height / 2) as f32;
    let r = width as f32 * config.glyph_scale;
    debug!("Drawing play glyph at ({cx}, {cy}) with radius {r}");

    Triangle::play(cx, cy, r).fill(&mut canvas, config.glyph);

    Ok(canvas)
}

/// Draw the icon and write it as a PNG to `output`.
pub fn generate_icon(output: &Path, config: &IconConfig) -> Result<()> {
    let icon = render_icon(config)?;
    write_png(&icon, output)?;

    info!("Successfully generated icon at {}", output.display());
    Ok(())
}
