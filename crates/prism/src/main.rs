//! Prism CLI - Design system code generation from Zeplin projects

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use colored::Colorize;
use prism_core::config::DEFAULT_CONFIG_PATH;
use prism_core::{Configuration, InitArgs, PrismApi};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
const LOG_ENV: &str = "PRISM_LOG";

#[derive(Parser, Debug)]
#[command(name = "prism")]
#[command(about = "Generate design system code from your Zeplin project")]
#[command(version)]
pub struct Args {
    /// Enable debug logging (overridden by PRISM_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render every *.prism template against the project and write the results
    Generate(GenerateArgs),
    /// Create a configuration file
    Init(CliInitArgs),
}

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Project ID (overrides project_id from the configuration)
    #[arg(short, long = "project-id")]
    pub project_id: Option<String>,

    /// Templates directory (overrides templates_path)
    #[arg(long = "templates-path")]
    pub templates_path: Option<PathBuf>,

    /// Output directory (overrides output_path)
    #[arg(short, long = "output-path")]
    pub output_path: Option<PathBuf>,

    /// API token (defaults to the ZEPLIN_TOKEN environment variable)
    #[arg(long)]
    pub token: Option<String>,
}

#[derive(Parser, Debug)]
pub struct CliInitArgs {
    /// Configuration file to create
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Project ID to store in the configuration
    #[arg(short, long = "project-id")]
    pub project_id: Option<String>,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliInitArgs> for InitArgs {
    fn from(args: CliInitArgs) -> Self {
        InitArgs {
            config_path: args.config,
            project_id: args.project_id,
            yes: args.yes,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run_generate(args: GenerateArgs) -> Result<()> {
    let mut configuration = Configuration::load_or_default(&args.config)?;

    // Command line flags take precedence over the configuration file
    if let Some(project_id) = args.project_id {
        configuration.project_id = Some(project_id);
    }
    if let Some(templates_path) = args.templates_path {
        configuration.templates_path = templates_path;
    }
    if let Some(output_path) = args.output_path {
        configuration.output_path = output_path;
    }

    tracing::debug!(?configuration, "resolved configuration");

    let project_id = configuration.project_id.clone().with_context(|| {
        format!(
            "No project ID. Pass --project-id or set project_id in {}",
            args.config.display()
        )
    })?;

    let api = PrismApi::from_env(args.token)?;
    println!(
        "{} {}",
        "Fetching project".dimmed(),
        project_id.as_str().yellow()
    );
    let project = api
        .get_project(&project_id)
        .await
        .with_context(|| format!("Failed to fetch project {}", project_id))?;

    let files = prism_core::generate(
        &project,
        &configuration,
        &configuration.templates_path,
        &configuration.output_path,
    )
    .await?;

    println!();
    prism_core::generate::print_summary(&project, &files);

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Some(Command::Generate(generate_args)) => run_generate(generate_args).await,
        Some(Command::Init(init_args)) => {
            let result = prism_core::run_init(init_args.into());

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
        None => {
            Args::command().print_help()?;
            Ok(())
        }
    }
}
