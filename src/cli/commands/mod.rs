//! Command implementations

mod calc;
mod config_cmd;
mod options;
#[cfg(feature = "ui")]
mod serve;

pub use calc::calc;
pub use config_cmd::config_cmd;
pub use options::options;
#[cfg(feature = "ui")]
pub use serve::serve;
