use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `vexi` binary.
#[derive(Parser, Debug)]
#[command(
    name = "vexi",
    version,
    long_version = long_version(),
    about = "Interactive browser for world countries and their flags",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "VEXI_CONFIG",
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
        short = 'e',
        long,
        value_name = "URL",
        help = "Override the countries API endpoint (default: restcountries.com v3.1)"
    )]
    pub(crate) endpoint: Option<String>,
    #[arg(
        short = 't',
        long,
        value_name = "TITLE",
        help = "Set the input prompt title (default: Countries)"
    )]
    pub(crate) title: Option<String>,
    #[arg(
        short = 'q',
        long = "query",
        value_name = "QUERY",
        help = "Provide an initial search query (default: empty)"
    )]
    pub(crate) initial_query: Option<String>,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a theme by name (default: slate)"
    )]
    pub(crate) theme: Option<String>,
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
