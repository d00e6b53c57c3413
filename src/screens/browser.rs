//! Browser screen: the first few entries of a fixed directory.
//!
//! Listing never fails. Every I/O error becomes a single placeholder entry so
//! the screen always has something to show.

use std::fs;
use std::io;
use std::path::Path;

use embedded_graphics::prelude::*;
use log::{debug, warn};

use crate::config::BROWSER_MAX_ENTRIES;
use crate::framebuffer::FrameBuffer;
use crate::state::truncate_chars;
use crate::styles::BODY_STYLE;
use crate::widgets::{CONTENT_TOP, MARGIN_X, columns_from, draw_app_frame, draw_rows};

/// Shown when the directory may not be read.
pub const PERMISSION_DENIED: &str = "Permission Denied";

/// Shown when the directory does not exist.
pub const NOT_FOUND: &str = "Not Found";

/// Shown for any other I/O failure.
pub const READ_ERROR: &str = "Read Error";

/// Names of up to [`BROWSER_MAX_ENTRIES`] visible entries of `dir`, sorted.
///
/// Names starting with `.` are hidden. Entries whose names are not valid
/// UTF-8 are shown lossily.
pub fn list_entries(dir: &Path) -> Vec<String> {
    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(err) => {
            warn!("cannot list {}: {err}", dir.display());
            return vec![placeholder(err.kind()).to_owned()];
        }
    };

    let mut names: Vec<String> = read_dir
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.file_name().to_string_lossy().into_owned()),
            Err(err) => {
                debug!("skipping entry in {}: {err}", dir.display());
                None
            }
        })
        .filter(|name| !name.starts_with('.'))
        .collect();

    names.sort_unstable();
    names.truncate(BROWSER_MAX_ENTRIES);
    names
}

/// Placeholder entry for a failed listing.
pub const fn placeholder(kind: io::ErrorKind) -> &'static str {
    match kind {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::NotFound => NOT_FOUND,
        _ => READ_ERROR,
    }
}

/// Draw the Browser screen with `entries`, one per row.
pub fn draw_browser(
    frame: &mut FrameBuffer,
    entries: &[String],
) {
    draw_app_frame(frame, "Browser");

    let columns = columns_from(MARGIN_X);
    let rows: Vec<&str> = entries
        .iter()
        .take(BROWSER_MAX_ENTRIES)
        .map(|name| truncate_chars(name, columns))
        .collect();
    draw_rows(frame, &rows, Point::new(MARGIN_X, CONTENT_TOP), BODY_STYLE);
}
