//! Options command - list offered percentages

use bunkcalc::api;
use bunkcalc::config::Config;
use bunkcalc::output::OutputMode;

/// Print the offered required percentages
#[allow(clippy::unnecessary_wraps)]
pub fn options(config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    api::list_options(config).render(mode);
    Ok(())
}
