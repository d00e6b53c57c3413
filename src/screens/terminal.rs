//! Terminal screen: the command line and the output of the last command.
//!
//! The output area wraps at the screen edge and holds four rows, enough for the
//! 50 characters kept from a command.

use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use crate::framebuffer::FrameBuffer;
use crate::state::TerminalSession;
use crate::styles::{BODY_STYLE, TOP_LEFT};
use crate::widgets::{CONTENT_TOP, MARGIN_X, columns_from, draw_app_frame, draw_rows, wrap_rows};

/// Prefix of the command line row.
const PROMPT: &str = "> ";

/// Top of the output rows.
const OUTPUT_TOP: i32 = 50;

/// Output rows between the command line and the footer.
const OUTPUT_MAX_ROWS: usize = 4;

/// Draw the Terminal screen for `session`.
pub fn draw_terminal(
    frame: &mut FrameBuffer,
    session: &TerminalSession,
) {
    draw_app_frame(frame, "Terminal");

    let columns = columns_from(MARGIN_X);
    let line = format!("{PROMPT}{}", tail_chars(session.buffer(), columns - PROMPT.len()));
    Text::with_text_style(&line, Point::new(MARGIN_X, CONTENT_TOP), BODY_STYLE, TOP_LEFT)
        .draw(frame)
        .ok();

    let rows = wrap_rows(&session.output_text(), columns, OUTPUT_MAX_ROWS);
    draw_rows(frame, &rows, Point::new(MARGIN_X, OUTPUT_TOP), BODY_STYLE);
}

/// The last `max` characters of `text`, so the end being typed stays visible.
fn tail_chars(
    text: &str,
    max: usize,
) -> &str {
    let len = text.chars().count();
    match text.char_indices().nth(len.saturating_sub(max)) {
        Some((idx, _)) => &text[idx..],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, WHITE};

    fn row_has_ink(
        frame: &FrameBuffer,
        top: i32,
    ) -> bool {
        (top..top + 10)
            .flat_map(|y| (0..128).map(move |x| Point::new(x, y)))
            .any(|p| frame.pixel(p) == Some(BLACK))
    }

    #[test]
    fn test_empty_session_shows_placeholder_row() {
        let session = TerminalSession::new();
        assert_eq!(session.output_text(), "Enter command");

        let mut frame = FrameBuffer::new();
        draw_terminal(&mut frame, &session);
        assert!(row_has_ink(&frame, CONTENT_TOP), "Prompt row");
        assert!(row_has_ink(&frame, OUTPUT_TOP), "Placeholder row");
        assert!(!row_has_ink(&frame, OUTPUT_TOP + 10), "Placeholder fits one row");
    }

    #[test]
    fn test_long_output_wraps() {
        let mut session = TerminalSession::new();
        session.record(Ok("y".repeat(50)));

        let mut frame = FrameBuffer::new();
        draw_terminal(&mut frame, &session);
        // 50 characters at 19 per row
        assert!(row_has_ink(&frame, OUTPUT_TOP + 20));
        assert!(!row_has_ink(&frame, OUTPUT_TOP + 30));
        assert_eq!(frame.pixel(Point::new(125, 95)), Some(WHITE));
    }

    #[test]
    fn test_prompt_keeps_long_multibyte_line() {
        let mut plain = TerminalSession::new();
        plain.push(' ');
        let mut wide = TerminalSession::new();
        for _ in 0..20 {
            wide.push('é');
        }

        let mut bare = FrameBuffer::new();
        draw_terminal(&mut bare, &plain);
        let mut typed = FrameBuffer::new();
        draw_terminal(&mut typed, &wide);
        assert_ne!(bare, typed, "Multibyte characters still reach the prompt row");
    }

    #[test]
    fn test_tail_keeps_end_of_line() {
        assert_eq!(tail_chars("abcdef", 3), "def");
        assert_eq!(tail_chars("ab", 3), "ab");
        assert_eq!(tail_chars("", 3), "");
        assert_eq!(tail_chars("aé", 1), "é");
    }

    #[test]
    fn test_prompt_shows_typed_spaces() {
        let mut session = TerminalSession::new();
        session.push('l');
        session.push('s');

        let mut plain = FrameBuffer::new();
        draw_terminal(&mut plain, &TerminalSession::new());
        let mut typed = FrameBuffer::new();
        draw_terminal(&mut typed, &session);
        assert_ne!(plain, typed);
    }
}
