//! Post-processing applied to a resolved token value
//!
//! Transformations follow the token path, each introduced by `|`:
//! `{{%textStyle.fontName|lowercase|replace(-,_)%}}`.

/// Separator between a token path and its transformations
pub const PIPE: char = '|';

/// A single string transformation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transformation {
    Lowercase,
    Uppercase,
    /// Replace every occurrence of a literal substring
    Replace { from: String, to: String },
}

impl Transformation {
    /// Parse one transformation, `None` if the name is not recognized
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "lowercase" => Some(Self::Lowercase),
            "uppercase" => Some(Self::Uppercase),
            other => {
                let args = other.strip_prefix("replace(")?.strip_suffix(')')?;
                let (from, to) = args.split_once(',')?;
                Some(Self::Replace {
                    from: from.to_string(),
                    to: to.to_string(),
                })
            }
        }
    }

    pub fn apply(&self, value: &str) -> String {
        match self {
            Self::Lowercase => value.to_lowercase(),
            Self::Uppercase => value.to_uppercase(),
            // An empty pattern would interleave `to` between every character
            Self::Replace { from, .. } if from.is_empty() => value.to_string(),
            Self::Replace { from, to } => value.replace(from.as_str(), to),
        }
    }
}

/// Split raw token content into its path and the transformations that follow.
/// Unrecognized transformations are dropped from the pipeline.
pub fn split_pipeline(content: &str) -> (&str, Vec<Transformation>) {
    let mut parts = content.split(PIPE);
    let path = parts.next().unwrap_or_default().trim();
    let transformations = parts.filter_map(Transformation::parse).collect();
    (path, transformations)
}

/// Apply transformations left to right
pub fn apply_all(value: String, transformations: &[Transformation]) -> String {
    transformations
        .iter()
        .fold(value, |current, transformation| transformation.apply(&current))
}
