//! Template rendering errors

use thiserror::Error;

/// Failures that abort a render. No partial output is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A `FOR` marker was never closed by its `END`
    #[error("Detected FOR loop '{identifier}' with no closing END")]
    OpenLoop { identifier: String },

    /// A `FOR` marker named something other than `color` or `textStyle`
    #[error("Illegal FOR loop identifier '{identifier}'")]
    UnknownLoop { identifier: String },

    /// A token path did not resolve in its context
    #[error("Illegal token in template '{token}'")]
    UnknownToken { token: String },

    /// Reserved words collide with derived identities (comma-joined)
    #[error("Prohibited identities '{identities}' can't be used")]
    ProhibitedIdentities { identities: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptions() {
        let errors = [
            TemplateError::OpenLoop {
                identifier: "color".to_string(),
            },
            TemplateError::UnknownLoop {
                identifier: "fake".to_string(),
            },
            TemplateError::UnknownToken {
                token: "fake".to_string(),
            },
            TemplateError::ProhibitedIdentities {
                identities: "fake1, fake2".to_string(),
            },
        ];

        let descriptions: Vec<String> = errors.iter().map(ToString::to_string).collect();
        assert_eq!(
            descriptions,
            vec![
                "Detected FOR loop 'color' with no closing END",
                "Illegal FOR loop identifier 'fake'",
                "Illegal token in template 'fake'",
                "Prohibited identities 'fake1, fake2' can't be used",
            ]
        );
    }
}
