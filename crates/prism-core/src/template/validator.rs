//! Reserved identifier checks run before rendering

use super::error::TemplateError;
use crate::config::Configuration;
use crate::project::{Identity, Project};

/// Reserved words that equal one of `identities`' derived forms, in configured order
fn collisions<'a>(reserved: &'a [String], identities: &[Identity]) -> Vec<&'a str> {
    reserved
        .iter()
        .filter(|word| identities.iter().any(|identity| identity.matches(word)))
        .map(String::as_str)
        .collect()
}

/// Fail with [`TemplateError::ProhibitedIdentities`] if any reserved word
/// collides with a project identity. Color collisions are listed first.
pub fn validate_identities(
    project: &Project,
    configuration: &Configuration,
) -> Result<(), TemplateError> {
    let color_identities: Vec<Identity> = project.colors.iter().map(|c| c.identity()).collect();
    let style_identities: Vec<Identity> =
        project.text_styles.iter().map(|s| s.identity()).collect();

    let mut prohibited = collisions(&configuration.reserved_colors, &color_identities);
    prohibited.extend(collisions(
        &configuration.reserved_textstyles,
        &style_identities,
    ));

    if prohibited.is_empty() {
        Ok(())
    } else {
        Err(TemplateError::ProhibitedIdentities {
            identities: prohibited.join(", "),
        })
    }
}
