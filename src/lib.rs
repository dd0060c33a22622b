//! Rounded-square icon tooling.
//!
//! Two independent pipelines live here:
//!
//! - [`generator`] draws a flat amber rounded square with a deep orange "play"
//!   triangle on top of it.
//! - [`rounder`] takes any raster image, stretches it to the icon size and cuts
//!   it into the same rounded-square silhouette on a transparent background.
//!
//! Both are driven by an [`IconConfig`] and report failures as [`IconError`].
//! The `play-icon` binary is a thin wrapper around [`cli::run`].

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod png;
pub mod rounder;
pub mod shape;

pub use config::IconConfig;
pub use error::IconError;
pub use generator::{generate_icon, render_icon};
pub use rounder::{round_icon, round_image};
