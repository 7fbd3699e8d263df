//! Serve command - local web form
//!
//! Provides a local HTTP server hosting the calculator form.

use std::process::Command;

use bunkcalc::config::Config;
use bunkcalc::server;

/// Start the local form server
pub fn serve(
    port: Option<u16>,
    host: Option<&str>,
    open: bool,
    config: &Config,
) -> anyhow::Result<()> {
    let host = host.unwrap_or(&config.server.host);
    let port = port.unwrap_or(config.server.port);
    let addr = format!("{host}:{port}");
    let url = format!("http://localhost:{port}");

    println!("Starting bunkcalc form...");
    println!("Open {url} in your browser");
    println!();
    println!("Press Ctrl+C to stop");

    if open {
        open_browser(&url);
    }

    server::serve(&addr, config)
}

fn open_browser(url: &str) {
    let spawned = if cfg!(target_os = "macos") {
        Command::new("open").arg(url).spawn()
    } else if cfg!(target_os = "windows") {
        Command::new("cmd").args(["/c", "start", url]).spawn()
    } else {
        Command::new("xdg-open").arg(url).spawn()
    };

    if let Err(e) = spawned {
        log::warn!("Could not open browser: {e}");
    }
}
