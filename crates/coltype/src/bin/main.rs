//! coltype command-line interface

use clap::{Parser, Subcommand};
use coltype::FormatSettings;
use coltype::cli::output::{self, ColorMode, OutputFormat};
use coltype::cli::{describe, parse, types};
use log::LevelFilter;

/// Decimal data type tool
#[derive(Parser)]
#[command(name = "coltype")]
#[command(author, version, about = "Fixed-point decimal data type tools", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "pretty", global = true)]
    format: OutputFormat,

    /// Color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    color: ColorMode,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a type declaration such as `Decimal(10, 2)`
    Describe {
        /// Type declaration
        declaration: String,
    },

    /// Parse decimal literals as a declared type
    Parse {
        /// Type declaration
        declaration: String,

        /// Literals to parse
        #[arg(allow_hyphen_values = true)]
        literals: Vec<String>,

        /// Keep trailing zeros of the fractional part
        #[arg(long)]
        trailing_zeros: bool,
    },

    /// List registered type families and aliases
    Types,
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    output::setup_colors(cli.color);

    // RUST_LOG wins; --verbose only raises the default
    let default_level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    let result = match cli.command {
        Commands::Describe { declaration } => describe::describe(describe::DescribeConfig {
            declaration,
            format: cli.format,
        }),

        Commands::Parse {
            declaration,
            literals,
            trailing_zeros,
        } => parse::parse(parse::ParseConfig {
            declaration,
            literals,
            format: cli.format,
            settings: FormatSettings {
                decimal_trailing_zeros: trailing_zeros,
            },
        }),

        Commands::Types => types::types(cli.format),
    };

    if let Err(e) = result {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}
