//! Command-line interface implementation for helm-scaffold.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for helm-scaffold.
#[derive(Parser, Debug)]
#[command(author, version, about = "helm-scaffold: add boilerplate resources to a Helm chart", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Directory of the chart to add resources to
    #[arg(long, value_name = "CHART_DIR", default_value = ".", global = true)]
    pub chart_dir: PathBuf,

    /// Directory holding the resource templates (overrides `templatesDir`)
    #[arg(short, long, value_name = "TEMPLATES_DIR", global = true)]
    pub templates_dir: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new resource template in the current chart
    #[command(after_help = r#"Examples:

# Create a new resource template in the current chart
helm-scaffold resource

# Create multiple resources interactively in the current chart
helm-scaffold resource --multi
"#)]
    Resource {
        /// Component to generate the new resource(s) under
        #[arg(short, long)]
        component: Option<String>,

        /// Create multiple resources interactively
        #[arg(short, long)]
        multi: bool,
    },
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if the subcommand is missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::MissingSubcommand
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            }
            _ => e.exit(),
        },
    }
}
