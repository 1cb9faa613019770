use super::color::{Color, Rgba};
use super::identity::Identity;
use serde::{Deserialize, Serialize};

/// A named text style from the design project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub name: String,
    pub font_face: String,
    pub font_size: f64,
    /// Foreground color channels. Matched against the project's colors, never owned.
    pub color: Rgba,
}

impl TextStyle {
    pub fn identity(&self) -> Identity {
        Identity::new(&self.name)
    }

    /// Find the project color whose channels equal this style's foreground
    pub fn matching_color<'a>(&self, colors: &'a [Color]) -> Option<&'a Color> {
        colors.iter().find(|color| color.rgba() == self.color)
    }
}
