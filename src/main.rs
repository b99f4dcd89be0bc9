use std::path::PathBuf;

use byteconv::commands::config_cmd::ConfigOptions;
use byteconv::commands::convert_cmd::ConvertCommandOptions;
use byteconv::commands::format_cmd::FormatCommandOptions;
use byteconv::commands::parse_cmd::ParseCommandOptions;
use byteconv::commands::{
    OptionOverrides, execute_config, execute_convert, execute_format, execute_parse,
};
use byteconv::error::ConvertError;
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run(cli: Cli) -> Result<(), ConvertError> {
    match cli.command {
        Commands::Format(args) => {
            let options = FormatCommandOptions {
                value: args.value,
                overrides: args.options.into(),
                config_path: cli.config,
            };
            execute_format(options)?;
        }
        Commands::Parse(args) => {
            execute_parse(ParseCommandOptions { text: args.text })?;
        }
        Commands::Convert(args) => {
            let options = ConvertCommandOptions {
                value: args.value,
                overrides: args.options.into(),
                config_path: cli.config,
            };
            execute_convert(options)?;
        }
        Commands::Config(args) => {
            execute_config(ConfigOptions { show_path: args.path, config_path: cli.config })?;
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(
    name = "byteconv",
    version,
    about = "Convert between byte counts and human-readable sizes."
)]
struct Cli {
    /// Read default format options from this TOML file.
    #[arg(long = "config", value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Log conversion decisions to stderr.
    #[arg(short, long, action = ArgAction::SetTrue, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a byte count such as 1536 as "1.5KB".
    #[command(visible_alias = "fmt")]
    Format(FormatArgs),
    /// Read a size such as "1.5GB" into a byte count.
    #[command(visible_alias = "ps")]
    Parse(ParseArgs),
    /// Format numbers and parse text, deciding from the value itself.
    #[command(visible_alias = "cv")]
    Convert(ConvertArgs),
    /// Show the configuration file path or the effective format options.
    Config(ConfigArgs),
}

#[derive(Args)]
struct FormatArgs {
    /// Byte count to format.
    #[arg(value_name = "BYTES", allow_hyphen_values = true)]
    value: String,

    #[command(flatten)]
    options: FormatFlags,
}

#[derive(Args)]
struct ParseArgs {
    /// Size to parse, e.g. "1.5GB" or "512".
    #[arg(value_name = "SIZE", allow_hyphen_values = true)]
    text: String,
}

#[derive(Args)]
struct ConvertArgs {
    /// A byte count, a size string, or a JSON value.
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    value: String,

    #[command(flatten)]
    options: FormatFlags,
}

#[derive(Args)]
struct ConfigArgs {
    /// Print the configuration file path.
    #[arg(long = "path", action = ArgAction::SetTrue)]
    path: bool,
}

#[derive(Args)]
struct FormatFlags {
    /// Digits after the decimal point.
    #[arg(short = 'd', long = "decimals", value_name = "N")]
    decimals: Option<usize>,

    /// Keep trailing zero decimals.
    #[arg(long = "fixed", action = ArgAction::SetTrue, conflicts_with = "no_fixed")]
    fixed: bool,

    /// Strip trailing zero decimals even when the configuration keeps them.
    #[arg(long = "no-fixed", action = ArgAction::SetTrue)]
    no_fixed: bool,

    /// Separator inserted every three digits of the integer part.
    #[arg(long = "thousands", value_name = "SEP")]
    thousands: Option<String>,

    /// Separator between the number and the unit.
    #[arg(short = 's', long = "separator", value_name = "SEP")]
    separator: Option<String>,

    /// Force a unit (B, KB, MB, GB, TB, PB) instead of choosing one by size.
    #[arg(short = 'u', long = "unit", value_name = "UNIT")]
    unit: Option<String>,
}

impl From<FormatFlags> for OptionOverrides {
    fn from(flags: FormatFlags) -> Self {
        OptionOverrides {
            decimal_places: flags.decimals,
            fixed_decimals: match (flags.fixed, flags.no_fixed) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
            thousands_separator: flags.thousands,
            unit_separator: flags.separator,
            unit: flags.unit,
        }
    }
}
