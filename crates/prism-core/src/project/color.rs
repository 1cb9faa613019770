//! Colors and their hex representations

use super::identity::Identity;
use serde::{Deserialize, Serialize};

/// Raw channel values of a color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in the 0.0..=1.0 range
    pub a: f32,
}

impl Rgba {
    /// Alpha channel scaled to a byte
    pub fn alpha_byte(&self) -> u8 {
        (self.a * 255.0).round().clamp(0.0, 255.0) as u8
    }

    /// `#aarrggbb`, lowercase
    pub fn argb_value(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            self.alpha_byte(),
            self.r,
            self.g,
            self.b
        )
    }

    /// `#rrggbb`, lowercase
    pub fn rgb_value(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A named color from the design project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub name: String,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub fn new(name: impl Into<String>, rgba: Rgba) -> Self {
        Self {
            name: name.into(),
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }

    pub fn identity(&self) -> Identity {
        Identity::new(&self.name)
    }

    pub fn rgba(&self) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a: self.a,
        }
    }

    pub fn argb_value(&self) -> String {
        self.rgba().argb_value()
    }

    pub fn rgb_value(&self) -> String {
        self.rgba().rgb_value()
    }
}
