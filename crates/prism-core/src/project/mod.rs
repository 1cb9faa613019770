//! Design project model
//!
//! A `Project` is the already-fetched design project: its colors and text
//! styles in the order the design tool lists them. It is decoded from the API's
//! JSON representation and never mutated afterwards.

pub mod color;
pub mod identity;
pub mod text_style;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use color::{Color, Rgba};
pub use identity::Identity;
pub use text_style::TextStyle;

/// A design project with its colors and text styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub colors: Vec<Color>,
    #[serde(default)]
    pub text_styles: Vec<TextStyle>,
}

impl Project {
    /// Decode a project from its JSON representation
    pub fn decode(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Encode the project back to JSON
    pub fn encode(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Project '{}' ({})", self.name, self.id)?;

        writeln!(f, "Colors:")?;
        for color in &self.colors {
            writeln!(
                f,
                "  - {} ({}): {}",
                color.name,
                color.identity(),
                color.argb_value()
            )?;
        }

        writeln!(f, "Text styles:")?;
        for style in &self.text_styles {
            writeln!(
                f,
                "  - {} ({}): {} {}pt, {}",
                style.name,
                style.identity(),
                style.font_face,
                style.font_size,
                style.color.argb_value()
            )?;
        }

        Ok(())
    }
}
