//! Color constants for the launcher screens.
//!
//! Rgb565 is the ST7789's native pixel format, so every color is stored in it
//! directly and the frame buffer never converts.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Pure black. Body text on the white app screens.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. App screen background and the selected menu icon.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red. Browser icon and the "[Key3] Back" hint.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green. Clock icon.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure blue. Terminal icon.
pub const BLUE: Rgb565 = Rgb565::BLUE;

/// Light gray (211, 211, 211). Home screen background and idle icon outline.
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(211 >> 3, 211 >> 2, 211 >> 3);

/// Gray (169, 169, 169). Canvas fill underneath the home background.
pub const GRAY: Rgb565 = Rgb565::new(169 >> 3, 169 >> 2, 169 >> 3);
