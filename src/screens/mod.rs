//! Screen renderers.
//!
//! Each renderer draws one complete frame into a [`FrameBuffer`]. Only the
//! current screen is drawn; nothing is layered.
//!
//! - **Home** ([`home`]): three colored icons, selected one highlighted
//! - **Browser** ([`browser`]): up to five entries of [`BROWSER_ROOT`](crate::config::BROWSER_ROOT)
//! - **Clock** ([`clock`]): local time and date
//! - **Terminal** ([`terminal`]): command line and last output
//!
//! The Clock reads the time while drawing. The Browser draws the listing
//! taken when the screen was entered (see [`list_entries`]).

mod browser;
mod clock;
mod home;
mod terminal;

use chrono::{DateTime, TimeZone};

pub use browser::{NOT_FOUND, PERMISSION_DENIED, READ_ERROR, draw_browser, list_entries, placeholder};
pub use clock::{ClockReading, draw_clock};
pub use home::{ICON_POSITIONS, ICON_SIZE, draw_home};
pub use terminal::draw_terminal;

use crate::framebuffer::FrameBuffer;
use crate::state::{AppState, Screen};

/// Draw the screen selected by `state`.
pub fn draw_screen<Tz: TimeZone>(
    frame: &mut FrameBuffer,
    state: &AppState,
    now: &DateTime<Tz>,
    browser_entries: &[String],
) where
    Tz::Offset: core::fmt::Display,
{
    match state.screen() {
        Screen::Home => draw_home(frame, state.selected()),
        Screen::Browser => draw_browser(frame, browser_entries),
        Screen::Clock => draw_clock(frame, now),
        Screen::Terminal => draw_terminal(frame, state.terminal()),
    }
}
