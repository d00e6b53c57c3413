//! Title and footer shared by the three app screens.
//!
//! Every app screen uses the same frame: white background, black title in the
//! top-left corner, red "[Key3] Back" hint near the bottom.

use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use crate::colors::WHITE;
use crate::framebuffer::FrameBuffer;
use crate::styles::{BODY_STYLE, HINT_STYLE, TOP_LEFT};

/// Left margin of all app screen text.
pub const MARGIN_X: i32 = 10;

/// Position of the screen title.
const TITLE_POS: Point = Point::new(MARGIN_X, 10);

/// First content row below the title.
pub const CONTENT_TOP: i32 = 30;

/// Position of the back hint.
const HINT_POS: Point = Point::new(MARGIN_X, 100);

/// Footer text telling the user how to leave the screen.
pub const BACK_HINT: &str = "[Key3] Back";

/// Clear to white and draw the title and the back hint.
pub fn draw_app_frame(
    frame: &mut FrameBuffer,
    title: &str,
) {
    frame.clear_buffer(WHITE);

    Text::with_text_style(title, TITLE_POS, BODY_STYLE, TOP_LEFT)
        .draw(frame)
        .ok();

    Text::with_text_style(BACK_HINT, HINT_POS, HINT_STYLE, TOP_LEFT)
        .draw(frame)
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, RED};

    #[test]
    fn test_app_frame_has_white_background() {
        let mut frame = FrameBuffer::new();
        draw_app_frame(&mut frame, "Clock");
        assert_eq!(frame.pixel(Point::new(120, 60)), Some(WHITE));
        assert_eq!(frame.pixel(Point::new(0, 0)), Some(WHITE));
    }

    #[test]
    fn test_app_frame_draws_title_and_hint() {
        let mut frame = FrameBuffer::new();
        draw_app_frame(&mut frame, "Browser");

        let title_row = (10..20).flat_map(|y| (10..60).map(move |x| Point::new(x, y)));
        assert!(title_row.clone().any(|p| frame.pixel(p) == Some(BLACK)), "Title ink");

        let hint_row = (100..110).flat_map(|y| (10..80).map(move |x| Point::new(x, y)));
        assert!(hint_row.clone().any(|p| frame.pixel(p) == Some(RED)), "Hint ink");
    }
}
