//! Low-level text helpers shared across screens.
//!
//! `FONT_6X10` text does not wrap on its own, and at 128 px a line holds only
//! about twenty glyphs, so longer strings are cut into rows here before drawing.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use crate::config::SCREEN_WIDTH;
use crate::framebuffer::FrameBuffer;
use crate::styles::{GLYPH_WIDTH, LINE_HEIGHT, TOP_LEFT};

/// Glyphs that fit between `x` and the right edge of the screen.
#[inline]
pub const fn columns_from(x: i32) -> usize { (SCREEN_WIDTH.saturating_sub(x as u32) / GLYPH_WIDTH) as usize }

/// Split `text` into display rows of at most `columns` characters.
///
/// Line breaks in the text start a new row; tabs and other control characters
/// become spaces. At most `max_rows` rows are returned.
pub fn wrap_rows(
    text: &str,
    columns: usize,
    max_rows: usize,
) -> Vec<String> {
    let mut rows = Vec::new();
    if columns == 0 {
        return rows;
    }

    for line in text.lines() {
        let chars: Vec<char> = line
            .chars()
            .map(|c| if c.is_control() { ' ' } else { c })
            .collect();
        if chars.is_empty() {
            rows.push(String::new());
        }
        for chunk in chars.chunks(columns) {
            rows.push(chunk.iter().collect());
        }
        if rows.len() >= max_rows {
            rows.truncate(max_rows);
            break;
        }
    }
    rows
}

/// Draw rows of text top to bottom starting at `origin`, one [`LINE_HEIGHT`] apart.
pub fn draw_rows<S: AsRef<str>>(
    frame: &mut FrameBuffer,
    rows: &[S],
    origin: Point,
    style: MonoTextStyle<'_, Rgb565>,
) {
    for (i, row) in rows.iter().enumerate() {
        let pos = origin + Point::new(0, i as i32 * LINE_HEIGHT);
        Text::with_text_style(row.as_ref(), pos, style, TOP_LEFT)
            .draw(frame)
            .ok();
    }
}
