//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use super::commands;
use bunkcalc::config::Config;
use bunkcalc::output::OutputMode;

/// bunkcalc - Attendance calculator
#[derive(Parser, Debug)]
#[command(
    name = "bunkcalc",
    version,
    about = "Attendance calculator",
    long_about = "Work out how many classes you can bunk, or must attend,\n\
                  to stay at or above a required attendance percentage.\n\n\
                  Give it classes attended, classes held, and the percentage\n\
                  your institution requires."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate attendance once
    Calc {
        /// Classes attended
        #[arg(allow_hyphen_values = true)]
        present: String,

        /// Classes held so far
        #[arg(allow_hyphen_values = true)]
        total: String,

        /// Required attendance percentage (defaults to the configured default)
        #[arg(short, long, allow_hyphen_values = true)]
        required: Option<String>,
    },

    /// List the offered required percentages
    Options,

    /// Serve the calculator form in a local web page
    #[cfg(feature = "ui")]
    Serve {
        /// Port to listen on (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,

        /// Interface to bind (defaults to the configured host)
        #[arg(long)]
        host: Option<String>,

        /// Open the page in a browser
        #[arg(long)]
        open: bool,
    },

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the config file location
    Path,

    /// Print the effective configuration
    Show,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Calc {
            present,
            total,
            required,
        }) => commands::calc(&present, &total, required.as_deref(), &Config::load(), output_mode),
        Some(Command::Options) => commands::options(&Config::load(), output_mode),
        #[cfg(feature = "ui")]
        Some(Command::Serve { port, host, open }) => {
            commands::serve(port, host.as_deref(), open, &Config::load())
        },
        Some(Command::Config { action }) => commands::config_cmd(action, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("bunkcalc v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("bunkcalc v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'bunkcalc --help' for usage");
                println!("Run 'bunkcalc calc 40 50' to try it");
            }
            Ok(())
        },
    }
}
