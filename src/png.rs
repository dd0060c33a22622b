use crate::error::{IconError, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, RgbaImage,
};
use std::{
    fs::{self, File},
    io::Write,
    path::Path,
};

/// Encode an RGBA icon as PNG and write it to `path`.
///
/// The image is encoded in memory first. If writing fails after the file was
/// created, the partial file is removed.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let mut buf = Vec::new();
    encode_png(image, &mut buf).map_err(|source| IconError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    let write_err = |source| IconError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut out_file = File::create(path).map_err(write_err)?;
    if let Err(err) = out_file.write_all(&buf).and_then(|()| out_file.flush()) {
        drop(out_file);
        let _ = fs::remove_file(path);
        return Err(write_err(err));
    }

    Ok(())
}

// Best compression with adaptive filtering
fn encode_png<W: Write>(image: &RgbaImage, w: W) -> image::ImageResult<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgba8)
}
