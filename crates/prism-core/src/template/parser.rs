//! Line-based loop expansion and token substitution
//!
//! The parser walks the template one line at a time with two states:
//!
//! | State | Line | Next state |
//! |---|---|---|
//! | outside | `{{% FOR color %}}` / `{{% FOR textStyle %}}` | inside |
//! | outside | `{{% FOR <other> %}}` | error: unknown loop |
//! | outside | anything else | outside, line rendered without context |
//! | inside | `{{% END <open loop> %}}` | outside, body rendered per element |
//! | inside | anything else (other `END`s, nested `FOR`s) | inside, line buffered |
//! | inside | end of input | error: open loop |
//!
//! Marker lines hold nothing but the marker and are dropped from the output.

use super::error::TemplateError;
use super::token::{Context, Token, COLOR_LOOP, TEXT_STYLE_LOOP};
use super::transformation::{apply_all, split_pipeline};
use super::validator::validate_identities;
use crate::config::Configuration;
use crate::project::Project;

/// Opening delimiter of a token or marker
pub const OPEN: &str = "{{%";
/// Closing delimiter of a token or marker
pub const CLOSE: &str = "%}}";

/// Collections a template can loop over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopKind {
    Color,
    TextStyle,
}

impl LoopKind {
    fn from_identifier(identifier: &str) -> Option<Self> {
        match identifier {
            COLOR_LOOP => Some(Self::Color),
            TEXT_STYLE_LOOP => Some(Self::TextStyle),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker<'t> {
    For(&'t str),
    End(&'t str),
}

impl<'t> Marker<'t> {
    /// Recognize a line consisting solely of `{{% FOR x %}}` or `{{% END x %}}`
    fn parse(line: &'t str) -> Option<Self> {
        let inner = line.trim().strip_prefix(OPEN)?.strip_suffix(CLOSE)?;
        if inner.contains(CLOSE) {
            return None;
        }

        let mut words = inner.split_whitespace();
        let (keyword, identifier) = (words.next()?, words.next()?);
        if words.next().is_some() {
            return None;
        }

        match keyword {
            "FOR" => Some(Self::For(identifier)),
            "END" => Some(Self::End(identifier)),
            _ => None,
        }
    }
}

#[derive(Debug)]
enum State<'t> {
    OutsideLoop,
    InsideLoop {
        kind: LoopKind,
        identifier: &'t str,
        body: Vec<&'t str>,
    },
}

/// Renders templates against a project
#[derive(Debug, Clone, Copy)]
pub struct TemplateParser<'a> {
    project: &'a Project,
    configuration: &'a Configuration,
}

impl<'a> TemplateParser<'a> {
    pub fn new(project: &'a Project, configuration: &'a Configuration) -> Self {
        Self {
            project,
            configuration,
        }
    }

    /// Render `template`, or report the first problem found
    pub fn parse(&self, template: &str) -> Result<String, TemplateError> {
        validate_identities(self.project, self.configuration)?;

        let mut output = Vec::new();
        let mut state = State::OutsideLoop;

        for line in template.split('\n') {
            state = match state {
                State::OutsideLoop => match Marker::parse(line) {
                    Some(Marker::For(identifier)) => {
                        let kind = LoopKind::from_identifier(identifier).ok_or_else(|| {
                            TemplateError::UnknownLoop {
                                identifier: identifier.to_string(),
                            }
                        })?;
                        State::InsideLoop {
                            kind,
                            identifier,
                            body: Vec::new(),
                        }
                    }
                    _ => {
                        output.push(render_line(line, Context::Empty)?);
                        State::OutsideLoop
                    }
                },
                State::InsideLoop {
                    kind,
                    identifier,
                    mut body,
                } => match Marker::parse(line) {
                    Some(Marker::End(closing)) if closing == identifier => {
                        self.expand(kind, &body, &mut output)?;
                        State::OutsideLoop
                    }
                    _ => {
                        body.push(line);
                        State::InsideLoop {
                            kind,
                            identifier,
                            body,
                        }
                    }
                },
            };
        }

        if let State::InsideLoop { identifier, .. } = state {
            return Err(TemplateError::OpenLoop {
                identifier: identifier.to_string(),
            });
        }

        Ok(output.join("\n"))
    }

    /// Render `body` once per element of the loop's collection, in order
    fn expand(
        &self,
        kind: LoopKind,
        body: &[&str],
        output: &mut Vec<String>,
    ) -> Result<(), TemplateError> {
        let contexts: Vec<Context<'_>> = match kind {
            LoopKind::Color => self.project.colors.iter().map(Context::Color).collect(),
            LoopKind::TextStyle => self
                .project
                .text_styles
                .iter()
                .map(|style| Context::TextStyle {
                    style,
                    colors: &self.project.colors,
                })
                .collect(),
        };

        for context in contexts {
            for line in body {
                output.push(render_line(line, context)?);
            }
        }

        Ok(())
    }
}

/// Substitute every `{{%path|transformations%}}` token in a line.
/// An opening delimiter without a closing one is kept as literal text.
fn render_line(line: &str, context: Context<'_>) -> Result<String, TemplateError> {
    let mut rendered = String::with_capacity(line.len());
    let mut rest = line;

    while let Some(start) = rest.find(OPEN) {
        let after_open = &rest[start + OPEN.len()..];
        let Some(end) = after_open.find(CLOSE) else {
            break;
        };

        rendered.push_str(&rest[..start]);

        let (path, transformations) = split_pipeline(&after_open[..end]);
        let token = Token::resolve(path, context).ok_or_else(|| TemplateError::UnknownToken {
            token: path.to_string(),
        })?;
        rendered.push_str(&apply_all(token.value, &transformations));

        rest = &after_open[end + CLOSE.len()..];
    }

    rendered.push_str(rest);
    Ok(rendered)
}
