//! Charm-style prompts for creating a configuration file

use crate::config::Configuration;
use anyhow::Result;
use std::path::PathBuf;

/// CLI arguments for the init command
#[derive(Debug, Clone)]
pub struct InitArgs {
    /// Where to write the configuration file
    pub config_path: PathBuf,

    /// Project ID to store, skips the prompt
    pub project_id: Option<String>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

impl Default for InitArgs {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(crate::config::DEFAULT_CONFIG_PATH),
            project_id: None,
            yes: false,
        }
    }
}

/// Create a configuration file, prompting for each setting
pub fn run_init(args: InitArgs) -> Result<()> {
    cliclack::intro("prism init")?;

    // Step 1: Confirm overwriting an existing file
    if args.config_path.exists() && !args.yes {
        let overwrite: bool = cliclack::confirm(format!(
            "{} already exists. Overwrite it?",
            args.config_path.display()
        ))
        .initial_value(false)
        .interact()?;

        if !overwrite {
            cliclack::outro_cancel("Configuration left unchanged")?;
            return Ok(());
        }
    }

    // Step 2: Collect settings
    let configuration = if args.yes {
        Configuration {
            project_id: args.project_id.clone(),
            ..Configuration::default()
        }
    } else {
        prompt_configuration(&args)?
    };

    // Step 3: Write the file
    configuration.save(&args.config_path)?;
    cliclack::log::success(format!("Wrote {}", args.config_path.display()))?;

    // Step 4: Show next steps
    let mut steps = Vec::new();
    if configuration.project_id.is_none() {
        steps.push(format!(
            "Add a project_id to {}",
            args.config_path.display()
        ));
    }
    steps.push(format!(
        "Add *.prism templates to {}",
        configuration.templates_path.display()
    ));
    steps.push("Run: prism generate".to_string());

    cliclack::note("Next steps", steps.join("\n"))?;
    cliclack::outro("Happy generating!")?;

    Ok(())
}

fn prompt_configuration(args: &InitArgs) -> Result<Configuration> {
    let defaults = Configuration::default();

    let project_id = match &args.project_id {
        Some(id) => {
            cliclack::log::info(format!("Using project {}", id))?;
            Some(id.clone())
        }
        None => {
            let id: String = cliclack::input("Project ID")
                .placeholder("leave empty to set it later")
                .required(false)
                .validate(|input: &String| {
                    if input.chars().all(|c| c.is_ascii_alphanumeric()) {
                        Ok(())
                    } else {
                        Err("Project IDs contain only letters and digits")
                    }
                })
                .interact()?;
            Some(id).filter(|id| !id.is_empty())
        }
    };

    let templates_path: String = cliclack::input("Templates directory")
        .default_input(&defaults.templates_path.display().to_string())
        .interact()?;

    let output_path: String = cliclack::input("Output directory")
        .default_input(&defaults.output_path.display().to_string())
        .interact()?;

    let reserved_colors: String = cliclack::input("Reserved color identities")
        .placeholder("comma-separated, e.g. primary, clear")
        .required(false)
        .interact()?;

    let reserved_textstyles: String = cliclack::input("Reserved text style identities")
        .placeholder("comma-separated, e.g. body, title")
        .required(false)
        .interact()?;

    Ok(Configuration {
        project_id,
        templates_path: PathBuf::from(templates_path),
        output_path: PathBuf::from(output_path),
        reserved_colors: parse_word_list(&reserved_colors),
        reserved_textstyles: parse_word_list(&reserved_textstyles),
    })
}

/// Split a comma-separated answer into trimmed, non-empty words
fn parse_word_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}
