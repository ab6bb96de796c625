use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `elpick` binary.
#[derive(Parser, Debug)]
#[command(
    name = "elpick",
    version,
    long_version = long_version(),
    about = "Pick up to a handful of elements from a searchable list",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "ELPICK_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        long,
        value_name = "NUM",
        help = "Number of generated elements (default: 300)"
    )]
    pub(crate) count: Option<usize>,
    #[arg(
        long = "latency-ms",
        value_name = "MS",
        help = "Simulated load latency in milliseconds (default: 500)"
    )]
    pub(crate) latency_ms: Option<u64>,
    #[arg(
        long = "fail-with",
        value_name = "MESSAGE",
        help = "Make the load fail with this message (default: none)"
    )]
    pub(crate) fail_with: Option<String>,
    #[arg(
        long = "never-resolve",
        help = "Keep the load pending forever (default: disabled)"
    )]
    pub(crate) never_resolve: bool,
    #[arg(
        short = 'm',
        long = "max-selection",
        value_name = "NUM",
        help = "Maximum number of selected elements (default: 3)"
    )]
    pub(crate) max_selection: Option<usize>,
    #[arg(
        long = "debounce-ms",
        value_name = "MS",
        help = "Quiet period before a search is applied (default: 300)"
    )]
    pub(crate) debounce_ms: Option<u64>,
    #[arg(
        short = 'f',
        long,
        value_name = "TOKEN",
        allow_hyphen_values = true,
        help = "Initial id filter, one of \"\", >10, >100, >200 (default: none)"
    )]
    pub(crate) filter: Option<String>,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a theme by name (default: default)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        short = 't',
        long,
        value_name = "TITLE",
        help = "Set the main view title (default: Select items)"
    )]
    pub(crate) title: Option<String>,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'l',
        long = "list-themes",
        help = "List supported themes and exit (default: disabled)"
    )]
    pub(crate) list_themes: bool,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Choose how to print the result"
    )]
    pub(crate) output: OutputFormat,
}
