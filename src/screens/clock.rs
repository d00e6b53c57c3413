//! Clock screen: local time and date, formatted at render time.
//!
//! ```text
//! Clock
//!
//! Time: 14:05:09      (ProFont 12pt)
//!
//! Date: Saturday, Oct
//! 18
//!
//! [Key3] Back
//! ```

use core::fmt::Write;

use chrono::{DateTime, TimeZone};
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use crate::framebuffer::FrameBuffer;
use crate::styles::{BODY_STYLE, CLOCK_STYLE, TOP_LEFT};
use crate::widgets::{CONTENT_TOP, MARGIN_X, columns_from, draw_app_frame, draw_rows, wrap_rows};

/// Top of the date rows.
const DATE_TOP: i32 = 55;

/// Rows the date may wrap onto before reaching the footer.
const DATE_MAX_ROWS: usize = 3;

/// Pre-formatted clock text for one frame.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ClockReading {
    /// `Time: HH:MM:SS`
    pub time: heapless::String<16>,
    /// `Date: <Weekday>, <Mon> <DD>`
    pub date: heapless::String<32>,
}

impl ClockReading {
    /// Format `now` for display.
    pub fn at<Tz: TimeZone>(now: &DateTime<Tz>) -> Self
    where
        Tz::Offset: core::fmt::Display,
    {
        let mut time = heapless::String::new();
        let mut date = heapless::String::new();
        // Both formats are fixed width and fit their buffers
        write!(time, "Time: {}", now.format("%H:%M:%S")).ok();
        write!(date, "Date: {}", now.format("%A, %b %d")).ok();
        Self { time, date }
    }
}

/// Draw the Clock screen for `now`.
pub fn draw_clock<Tz: TimeZone>(
    frame: &mut FrameBuffer,
    now: &DateTime<Tz>,
) where
    Tz::Offset: core::fmt::Display,
{
    let reading = ClockReading::at(now);
    draw_app_frame(frame, "Clock");

    Text::with_text_style(&reading.time, Point::new(MARGIN_X, CONTENT_TOP), CLOCK_STYLE, TOP_LEFT)
        .draw(frame)
        .ok();

    let rows = wrap_rows(&reading.date, columns_from(MARGIN_X), DATE_MAX_ROWS);
    draw_rows(frame, &rows, Point::new(MARGIN_X, DATE_TOP), BODY_STYLE);
}
