//! Config command - inspect or create the config file

use bunkcalc::config::Config;
use bunkcalc::output::{OperationResult, OutputMode};

use crate::cli::app::ConfigAction;

/// Handle `config` subcommands
pub fn config_cmd(action: ConfigAction, mode: OutputMode) -> anyhow::Result<()> {
    let path = Config::config_path();

    match action {
        ConfigAction::Path => {
            if mode == OutputMode::Json {
                println!("{}", serde_json::json!({ "path": path }));
            } else {
                println!("{}", path.display());
            }
        },
        ConfigAction::Show => {
            let config = if path.exists() { Config::load_from(&path)? } else { Config::default() };
            if mode == OutputMode::Json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                print!("{}", toml::to_string_pretty(&config)?);
            }
        },
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                anyhow::bail!(
                    "Config already exists at {} (use --force to overwrite)",
                    path.display()
                );
            }
            Config::default().save_to(&path)?;
            OperationResult::ok(format!("Created {}", path.display())).render(mode);
        },
    }

    Ok(())
}
