//! Token paths and their resolution against a loop element
//!
//! Paths are parsed into closed sets of variants first and only then resolved,
//! so every recognized path is listed in exactly one `match`.

use crate::project::{Color, TextStyle};

/// Loop key for the project's colors
pub const COLOR_LOOP: &str = "color";
/// Loop key for the project's text styles
pub const TEXT_STYLE_LOOP: &str = "textStyle";

/// Element a token is resolved against
#[derive(Debug, Clone, Copy)]
pub enum Context<'a> {
    /// Outside any loop. Nothing resolves here.
    Empty,
    Color(&'a Color),
    /// A text style along with every color its foreground may match
    TextStyle {
        style: &'a TextStyle,
        colors: &'a [Color],
    },
}

/// Properties readable from a color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorPath {
    CamelCase,
    SnakeCase,
    Red,
    Green,
    Blue,
    Alpha,
    Argb { uppercase: bool },
    Rgb { uppercase: bool },
}

impl ColorPath {
    pub fn parse(path: &str) -> Option<Self> {
        let parsed = match path {
            "identity.camelcase" => Self::CamelCase,
            "identity.snakecase" => Self::SnakeCase,
            "r" => Self::Red,
            "g" => Self::Green,
            "b" => Self::Blue,
            "a" => Self::Alpha,
            "argb" => Self::Argb { uppercase: false },
            "ARGB" => Self::Argb { uppercase: true },
            "rgb" => Self::Rgb { uppercase: false },
            "RGB" => Self::Rgb { uppercase: true },
            _ => return None,
        };
        Some(parsed)
    }

    pub fn resolve(&self, color: &Color) -> String {
        match self {
            Self::CamelCase => color.identity().camelcase,
            Self::SnakeCase => color.identity().snakecase,
            Self::Red => color.r.to_string(),
            Self::Green => color.g.to_string(),
            Self::Blue => color.b.to_string(),
            Self::Alpha => color.a.to_string(),
            Self::Argb { uppercase } => cased(color.argb_value(), *uppercase),
            Self::Rgb { uppercase } => cased(color.rgb_value(), *uppercase),
        }
    }
}

fn cased(value: String, uppercase: bool) -> String {
    if uppercase {
        value.to_uppercase()
    } else {
        value
    }
}

/// Properties readable from a text style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStylePath {
    CamelCase,
    SnakeCase,
    FontName,
    FontSize,
    /// A property of the project color matching the style's foreground
    Color(ColorPath),
}

impl TextStylePath {
    pub fn parse(path: &str) -> Option<Self> {
        let parsed = match path {
            "identity.camelcase" => Self::CamelCase,
            "identity.snakecase" => Self::SnakeCase,
            "fontName" => Self::FontName,
            "fontSize" => Self::FontSize,
            other => Self::Color(ColorPath::parse(other.strip_prefix("color.")?)?),
        };
        Some(parsed)
    }

    /// `None` when the style's color is not among `colors`
    pub fn resolve(&self, style: &TextStyle, colors: &[Color]) -> Option<String> {
        let value = match self {
            Self::CamelCase => style.identity().camelcase,
            Self::SnakeCase => style.identity().snakecase,
            Self::FontName => style.font_face.clone(),
            Self::FontSize => style.font_size.to_string(),
            Self::Color(path) => path.resolve(style.matching_color(colors)?),
        };
        Some(value)
    }
}

/// Which path a token matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Color(ColorPath),
    TextStyle(TextStylePath),
}

/// A token path resolved against its context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Token {
    /// Resolve a raw dot-path such as `textStyle.color.argb`.
    /// Returns `None` for unknown paths, paths of the wrong loop, and text
    /// style colors missing from the context.
    pub fn resolve(raw: &str, context: Context<'_>) -> Option<Self> {
        let (collection, path) = raw.split_once('.')?;

        match context {
            Context::Empty => None,
            Context::Color(color) if collection == COLOR_LOOP => {
                let path = ColorPath::parse(path)?;
                Some(Self {
                    kind: TokenKind::Color(path),
                    value: path.resolve(color),
                })
            }
            Context::TextStyle { style, colors } if collection == TEXT_STYLE_LOOP => {
                let path = TextStylePath::parse(path)?;
                Some(Self {
                    kind: TokenKind::TextStyle(path),
                    value: path.resolve(style, colors)?,
                })
            }
            _ => None,
        }
    }
}
