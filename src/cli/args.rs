//! Command-line argument parsing.

use std::path::PathBuf;

use crate::models::{DisplayMode, Tab};

/// Overrides taken from the command line for a dashboard run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub display_mode: Option<DisplayMode>,
    pub tab: Option<Tab>,
    /// `Some(false)` when `--no-feed` was given
    pub feed: Option<bool>,
    pub config_path: Option<PathBuf>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the dashboard (default)
    Run(RunOptions),
    /// Arguments could not be parsed
    Invalid(String),
}

/// Parse command-line arguments, skipping the program name.
///
/// `--version` and `--help` win over everything else. The last of
/// `--dark`/`--light` wins. Options that take a value accept both
/// `--tab bias` and `--tab=bias`.
///
/// ```
/// use fraudshield::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["fraudshield".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => {
                (flag.to_string(), Some(value.to_string()))
            }
            _ => (arg.clone(), None),
        };
        let takes_value = matches!(flag.as_str(), "--tab" | "--config");
        if inline.is_some() && !takes_value {
            return CliCommand::Invalid(format!("{} does not take a value", flag));
        }

        match flag.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--dark" => options.display_mode = Some(DisplayMode::Dark),
            "--light" => options.display_mode = Some(DisplayMode::Light),
            "--no-feed" => options.feed = Some(false),
            "--tab" => {
                let Some(value) = inline.or_else(|| args.next()) else {
                    return CliCommand::Invalid("--tab requires a value".to_string());
                };
                match value.parse::<Tab>() {
                    Ok(tab) => options.tab = Some(tab),
                    Err(err) => return CliCommand::Invalid(err.to_string()),
                }
            }
            "--config" => {
                let Some(value) = inline.or_else(|| args.next()) else {
                    return CliCommand::Invalid("--config requires a path".to_string());
                };
                options.config_path = Some(PathBuf::from(value));
            }
            _ => return CliCommand::Invalid(format!("unknown argument: {}", arg)),
        }
    }
    CliCommand::Run(options)
}
