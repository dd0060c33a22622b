//! Turns an arbitrary image into a rounded-square icon on a transparent
//! background.

use crate::{
    config::IconConfig,
    error::{IconError, Result},
    png::write_png,
    shape::{rounded_rect_mask, MASK_INCLUDE},
};
use image::{DynamicImage, Rgba, RgbaImage};
use log::{debug, info};
use std::path::Path;

/// Stretch `source` to the configured size and cut it to the silhouette.
///
/// Aspect ratio is not preserved. Inside the silhouette each pixel is copied
/// from the resized source, alpha included; outside it is fully transparent.
pub fn round_image(source: &DynamicImage, config: &IconConfig) -> Result<RgbaImage> {
    config.validate()?;

    let (width, height) = (config.width, config.height);
    debug!(
        "Resizing {}x{} source to {width}x{height}",
        source.width(),
        source.height()
    );
    let resized = DynamicImage::ImageRgba8(source.to_rgba8())
        .resize_exact(width, height, config.filter)
        .into_rgba8();

    let mask = rounded_rect_mask(width, height, config.radius);

    let mut output = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));
    for (x, y, pixel) in output.enumerate_pixels_mut() {
        if *mask.get_pixel(x, y) == MASK_INCLUDE {
            *pixel = *resized.get_pixel(x, y);
        }
    }

    Ok(output)
}

/// Read the image at `input`, round it and write the PNG to `output`.
///
/// The input is fully decoded before `output` is touched, so a bad input never
/// leaves a file behind.
pub fn round_icon(input: &Path, output: &Path, config: &IconConfig) -> Result<()> {
    config.validate()?;

    let source = image::open(input).map_err(|source| IconError::Open {
        path: input.to_path_buf(),
        source,
    })?;
    debug!("Decoded {} ({:?})", input.display(), source.color());

    let icon = round_image(&source, config)?;
    write_png(&icon, output)?;

    info!("Successfully saved rounded icon to {}", output.display());
    Ok(())
}
