//! Pre-computed text styles shared by all screens.
//!
//! `MonoTextStyle::new` and the `TextStyleBuilder` methods are const fn in
//! embedded-graphics 0.8, so these are built at compile time.

use embedded_graphics::{
    mono_font::{MonoTextStyle, ascii::FONT_6X10},
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_12_POINT;

use crate::colors::{BLACK, RED, WHITE};

/// Left-aligned text anchored at its top-left corner.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Width of one `FONT_6X10` glyph.
pub const GLYPH_WIDTH: u32 = 6;

/// Vertical distance between two text rows.
pub const LINE_HEIGHT: i32 = 10;

/// Regular black text on white app screens.
pub const BODY_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, BLACK);

/// Red footer hint.
pub const HINT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, RED);

/// Label under an idle menu icon.
pub const LABEL_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, BLACK);

/// Label under the selected menu icon.
pub const LABEL_STYLE_SELECTED: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Clock digits (`ProFont` 12pt, 8px wide).
pub const CLOCK_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_12_POINT, BLACK);
