//! Shared color types for Keel
//!
//! This crate contains serializable plain-data types that are shared between
//! the core library (keel-core) and embedding applications.

use serde::{Deserialize, Serialize};

/// RGBA color with channel values in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color from 8-bit channels and an explicit alpha.
    pub fn from_rgb8(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: alpha,
        }
    }

    /// Returns true if the color has no transparency.
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }
}
