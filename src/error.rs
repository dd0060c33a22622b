use std::{io, path::PathBuf};

/// Failures reported by the icon pipelines.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("invalid icon size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("failed to open image {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode PNG {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T, E = IconError> = std::result::Result<T, E>;
