//! Home screen: three app icons with labels.
//!
//! # Visual Layout
//!
//! ```text
//! ┌────────────────────────┐
//! │ ┌──────┐    ┌──────┐   │
//! │ │ RED  │    │GREEN │   │  Browser, Clock
//! │ └──────┘    └──────┘   │
//! │  Browser      Clock    │
//! │       ┌──────┐         │
//! │       │ BLUE │         │  Terminal
//! │       └──────┘         │
//! │        Terminal        │
//! └────────────────────────┘
//! ```
//!
//! The selected icon is filled white with a white outline and a white label.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyleBuilder, Rectangle, StrokeAlignment};
use embedded_graphics::text::Text;

use crate::colors::{GRAY, LIGHT_GRAY, WHITE};
use crate::framebuffer::FrameBuffer;
use crate::state::{MENU, MENU_LEN};
use crate::styles::{LABEL_STYLE, LABEL_STYLE_SELECTED, TOP_LEFT};

/// Top-left corner of each icon, in menu order.
pub const ICON_POSITIONS: [Point; MENU_LEN] = [Point::new(10, 10), Point::new(70, 10), Point::new(40, 70)];

/// Icon edge length. The outline is included.
pub const ICON_SIZE: u32 = 41;

/// Label offset from the icon's top-left corner.
const LABEL_OFFSET: Point = Point::new(5, 45);

/// Draw the home menu with `selected` highlighted.
pub fn draw_home(
    frame: &mut FrameBuffer,
    selected: usize,
) {
    frame.clear_buffer(GRAY);
    Rectangle::new(Point::zero(), frame.size())
        .into_styled(PrimitiveStyleBuilder::new().fill_color(LIGHT_GRAY).build())
        .draw(frame)
        .ok();

    for (i, (item, pos)) in MENU.iter().zip(ICON_POSITIONS).enumerate() {
        let is_selected = i == selected;
        let (fill, outline, label_style) = if is_selected {
            (WHITE, WHITE, LABEL_STYLE_SELECTED)
        } else {
            (item.color, LIGHT_GRAY, LABEL_STYLE)
        };

        let style = PrimitiveStyleBuilder::new()
            .fill_color(fill)
            .stroke_color(outline)
            .stroke_width(1)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();
        Rectangle::new(pos, Size::new_equal(ICON_SIZE))
            .into_styled(style)
            .draw(frame)
            .ok();

        Text::with_text_style(item.label, pos + LABEL_OFFSET, label_style, TOP_LEFT)
            .draw(frame)
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, BLUE, GREEN, RED};

    fn icon_center(idx: usize) -> Point { ICON_POSITIONS[idx] + Point::new(20, 20) }

    #[test]
    fn test_selected_icon_is_white() {
        let mut frame = FrameBuffer::new();
        draw_home(&mut frame, 1);

        assert_eq!(frame.pixel(icon_center(0)), Some(RED));
        assert_eq!(frame.pixel(icon_center(1)), Some(WHITE), "Clock is highlighted");
        assert_eq!(frame.pixel(icon_center(2)), Some(BLUE));
    }

    #[test]
    fn test_each_selection_highlights_only_one_icon() {
        for selected in 0..MENU_LEN {
            let mut frame = FrameBuffer::new();
            draw_home(&mut frame, selected);
            let white = (0..MENU_LEN)
                .filter(|&i| frame.pixel(icon_center(i)) == Some(WHITE))
                .count();
            assert_eq!(white, 1, "Selection {selected}");
        }
    }

    #[test]
    fn test_background_is_light_gray() {
        let mut frame = FrameBuffer::new();
        draw_home(&mut frame, 0);
        assert_eq!(frame.pixel(Point::new(125, 125)), Some(LIGHT_GRAY));
        assert_eq!(frame.pixel(Point::new(64, 2)), Some(LIGHT_GRAY));
    }

    #[test]
    fn test_outline_marks_selection() {
        let mut frame = FrameBuffer::new();
        draw_home(&mut frame, 0);
        assert_eq!(frame.pixel(ICON_POSITIONS[0]), Some(WHITE), "Selected outline");
        assert_eq!(frame.pixel(ICON_POSITIONS[1]), Some(LIGHT_GRAY), "Idle outline");
        assert_eq!(frame.pixel(icon_center(1)), Some(GREEN));
    }

    #[test]
    fn test_labels_are_drawn() {
        let mut frame = FrameBuffer::new();
        draw_home(&mut frame, 0);
        // Idle "Clock" label below the second icon is black ink
        let mut label_area = (55..65).flat_map(|y| (75..110).map(move |x| Point::new(x, y)));
        assert!(label_area.any(|p| frame.pixel(p) == Some(BLACK)));
    }
}
