//! Template engine
//!
//! Templates are plain text with two kinds of `{{% ... %}}` constructs:
//!
//! - Loop markers, each alone on its line: `{{% FOR color %}}` ... `{{% END color %}}`
//!   and `{{% FOR textStyle %}}` ... `{{% END textStyle %}}`. Nesting is not supported.
//! - Tokens inside a loop body: `{{%color.argb%}}`, `{{%textStyle.color.identity.snakecase%}}`,
//!   optionally followed by transformations: `{{%textStyle.fontName|lowercase|replace(-,_)%}}`.
//!
//! Rendering is a pure function of the template, the project and the
//! configuration: identities are validated first, then loops are expanded.

pub mod error;
pub mod parser;
pub mod token;
pub mod transformation;
pub mod validator;

use crate::config::Configuration;
use crate::project::Project;

pub use error::TemplateError;
pub use parser::{TemplateParser, CLOSE, OPEN};
pub use token::{ColorPath, Context, TextStylePath, Token, TokenKind};
pub use transformation::Transformation;
pub use validator::validate_identities;

/// Render a template (convenience wrapper around [`TemplateParser`])
pub fn render(
    template: &str,
    project: &Project,
    configuration: &Configuration,
) -> Result<String, TemplateError> {
    TemplateParser::new(project, configuration).parse(template)
}
