use crate::constants::{exit_codes, verbosity, ASSETS_DIR_ENV, BIN_NAME};
use crate::registry::template_names;
use clap::{error::ErrorKind, Args, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

const AFTER_HELP: &str = r#"Templates:
  - eula
  - licenses
  - attribution

Examples:
  licensing-skill guide
  licensing-skill copy eula
  licensing-skill copy licenses

Documentation:
  For full documentation, run "licensing-skill readme"."#;

/// Software Licensing Skill CLI
#[derive(Parser, Debug)]
#[command(
    name = BIN_NAME,
    author,
    version,
    about,
    long_about = None,
    help_template = HELP_TEMPLATE,
    after_help = AFTER_HELP,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Directory holding SKILL.md, README.md and references/.
    #[arg(long = "assets-dir", value_name = "DIR", env = ASSETS_DIR_ENV, global = true)]
    pub assets_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Show this help message
    Help(TrailingArgs),
    /// Display the complete licensing workflow guide (SKILL.md)
    Guide(TrailingArgs),
    /// Display the EULA template
    Eula(TrailingArgs),
    /// Display the third-party licenses template
    Licenses(TrailingArgs),
    /// Display the attribution UI template
    Attribution(TrailingArgs),
    /// Display the package README
    Readme(TrailingArgs),
    /// List all available templates
    List(ListArgs),
    /// Copy a template to current directory
    Copy(CopyArgs),
}

/// Tokens after the command are accepted and ignored.
#[derive(Args, Debug, Clone, PartialEq, Default)]
pub struct TrailingArgs {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub extra: Vec<String>,
}

#[derive(Args, Debug, Clone, PartialEq, Default)]
pub struct ListArgs {
    /// Print the templates as a JSON array.
    #[arg(long)]
    pub json: bool,

    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub extra: Vec<String>,
}

#[derive(Args, Debug, Clone, PartialEq, Default)]
pub struct CopyArgs {
    /// Template to copy: eula, licenses or attribution.
    #[arg(value_name = "TEMPLATE")]
    pub template: String,

    /// Ignored; the template is always copied into the current directory.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub extra: Vec<String>,
}

/// Parse command line arguments.
///
/// Help and version requests exit with status 0; every other parse failure
/// prints the clap error plus a hint and exits with status 1.
pub fn get_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        kind => {
            if let Err(print_err) = e.print() {
                eprintln!("Failed to display error: {print_err}");
            }
            if kind == ErrorKind::MissingRequiredArgument {
                eprintln!("Available templates: {}", template_names());
            } else {
                eprintln!("Run \"{BIN_NAME} help\" for usage information.");
            }
            std::process::exit(exit_codes::FAILURE);
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
