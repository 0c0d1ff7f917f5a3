use crate::constants::{exit_codes, verbosity};
use clap::builder::{BoolishValueParser, NonEmptyStringValueParser, TypedValueParser};
use clap::{error::ErrorKind, CommandFactory, Parser};
use log::LevelFilter;
use std::ffi::OsString;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// Long flags that may also be written with a single dash, Go style (`-projectName`).
const GO_STYLE_FLAGS: &[&str] = &["projectName", "projectPath", "useTailwind", "generateGoMod"];

/// CLI arguments for goscaffold.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Project name, used as the module name in go.mod.
    #[arg(long = "projectName", value_name = "NAME")]
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub project_name: String,

    /// Directory the project is created in.
    #[arg(long = "projectPath", value_name = "PATH")]
    #[arg(value_parser = NonEmptyStringValueParser::new().map(PathBuf::from))]
    pub project_path: PathBuf,

    /// Generate a tailwind.config.js file.
    #[arg(long = "useTailwind", value_name = "BOOL")]
    #[arg(action = clap::ArgAction::Set, num_args = 0..=1, require_equals = true)]
    #[arg(default_missing_value = "true")]
    #[arg(default_value = "false", value_parser = BoolishValueParser::new())]
    pub use_tailwind: bool,

    /// Generate a go.mod file named after the project.
    #[arg(long = "generateGoMod", value_name = "BOOL")]
    #[arg(action = clap::ArgAction::Set, num_args = 0..=1, require_equals = true)]
    #[arg(default_missing_value = "true")]
    #[arg(default_value = "false", value_parser = BoolishValueParser::new())]
    pub generate_go_mod: bool,

    /// Increase logging verbosity (`-v`, `-vv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Preview actions without touching the filesystem.
    ///
    /// A placeholder Go version is used when no Go toolchain is installed.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// Rewrites `-projectName` style flags to `--projectName` so clap accepts them.
pub fn normalize_go_style_flag(arg: OsString) -> OsString {
    let normalized = match arg.to_str() {
        Some(s) if is_go_style_flag(s) => Some(format!("-{s}")),
        _ => None,
    };
    normalized.map(OsString::from).unwrap_or(arg)
}

fn is_go_style_flag(arg: &str) -> bool {
    match arg.strip_prefix('-') {
        Some(rest) if !rest.starts_with('-') => {
            let name = rest.split('=').next().unwrap_or(rest);
            GO_STYLE_FLAGS.contains(&name)
        }
        _ => false,
    }
}

/// Parses the given arguments, accepting Go-style single-dash long flags.
pub fn try_parse_args_from<I, T>(args: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    Args::try_parse_from(args.into_iter().map(Into::into).map(normalize_go_style_flag))
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn get_args() -> Args {
    try_parse_args_from(std::env::args_os()).unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            let mut command = Args::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
///
/// Progress lines are logged at info level, so they show by default.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::DEFAULT => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
