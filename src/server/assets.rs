//! Embedded form page
//!
//! The `ui/` directory is compiled into the binary so `bunkcalc serve` works
//! from anywhere.

use include_dir::{Dir, include_dir};

static UI_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/ui");

/// A static file ready to serve
#[derive(Debug, Clone, Copy)]
pub struct Asset {
    /// File contents
    pub contents: &'static [u8],
    /// MIME type with charset
    pub content_type: &'static str,
}

/// Look up an asset by request path (`/` maps to `index.html`)
#[must_use]
pub fn lookup(path: &str) -> Option<Asset> {
    let name = match path.trim_start_matches('/') {
        "" => "index.html",
        other => other,
    };
    if name.contains("..") {
        return None;
    }

    let file = UI_DIR.get_file(name)?;
    Some(Asset {
        contents: file.contents(),
        content_type: content_type_for(name),
    })
}

fn content_type_for(name: &str) -> &'static str {
    match name.rsplit_once('.').map(|(_, ext)| ext) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
