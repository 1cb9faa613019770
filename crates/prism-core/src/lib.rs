//! Prism Core - Design system code generation
//!
//! This library renders text templates against a design project's colors and
//! text styles. It is used by the `prism` binary and can be embedded by other
//! tools that already hold a decoded [`Project`].
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Template Engine** - Pure rendering of a template against a project
//!   and configuration (`template`, `project`)
//! - **Layer 2: Collaborators** - Configuration file, API client, and the
//!   generation workflow that reads templates and writes output (`config`, `api`, `generate`)
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based `init` prompts
//!
//! # Example Usage
//!
//! ```ignore
//! use prism_core::{Configuration, Project, TemplateParser};
//!
//! let project = Project::decode(&bytes)?;
//! let configuration = Configuration::with_reserved(["primary"], ["body"]);
//! let output = TemplateParser::new(&project, &configuration).parse(&template)?;
//! ```

pub mod api;
pub mod config;
pub mod generate;
pub mod project;
pub mod template;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use api::{ApiError, PrismApi};
pub use config::Configuration;
pub use generate::{discover_templates, generate, GeneratedFile};
pub use project::{Color, Identity, Project, Rgba, TextStyle};
pub use template::{render, TemplateError, TemplateParser, Transformation};

#[cfg(feature = "tui")]
pub use tui::{run_init, InitArgs};
