//! Icon parameters.
//!
//! Every constant the pipelines use lives on [`IconConfig`]. The CLI always
//! runs with [`IconConfig::default`]; library callers can override fields.

use crate::{
    error::{IconError, Result},
    shape::clamp_radius,
};
use image::{imageops::FilterType, Rgba};

/// Amber 500.
pub const AMBER: Rgba<u8> = Rgba([255, 193, 7, 255]);

/// Amber 900, used for the play glyph.
pub const DEEP_ORANGE: Rgba<u8> = Rgba([255, 111, 0, 255]);

pub const DEFAULT_SIZE: u32 = 512;
pub const DEFAULT_RADIUS: u32 = 100;
pub const DEFAULT_GLYPH_SCALE: f32 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconConfig {
    /// Canvas width in pixels.
    pub width: u32,

    /// Canvas height in pixels.
    pub height: u32,

    /// Corner radius of the rounded-square silhouette.
    pub radius: u32,

    /// Silhouette color of generated icons.
    pub fill: Rgba<u8>,

    /// Color of the play triangle on generated icons.
    pub glyph: Rgba<u8>,

    /// Glyph radius as a fraction of the canvas width.
    pub glyph_scale: f32,

    /// Resampling filter used when the rounder resizes its input.
    pub filter: FilterType,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            radius: DEFAULT_RADIUS,
            fill: AMBER,
            glyph: DEEP_ORANGE,
            glyph_scale: DEFAULT_GLYPH_SCALE,
            filter: FilterType::Lanczos3,
        }
    }
}

impl IconConfig {
    /// Default config with a square canvas of the given side.
    pub fn square(size: u32) -> Self {
        Self {
            width: size,
            height: size,
            ..Self::default()
        }
    }

    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    /// Corner radius actually drawn: never more than half the shorter side.
    pub fn effective_radius(&self) -> u32 {
        clamp_radius(self.width, self.height, self.radius)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(IconError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
