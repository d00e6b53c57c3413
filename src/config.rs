//! Application configuration constants.
//!
//! Everything the launcher needs to know about its hardware and its screens is
//! fixed at compile time. There are no CLI flags and no environment variables:
//! the HAT is always wired the same way and the launcher always shows the same
//! four screens.

use std::time::Duration;

use log::LevelFilter;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ST7789 driving a 128x128 panel).
pub const SCREEN_WIDTH: u32 = 128;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 128;

/// SPI clock for the display. The ST7789 accepts up to 62.5 MHz, the Pi's
/// spidev driver is comfortable at 32 MHz.
pub const SPI_CLOCK_HZ: u32 = 32_000_000;

/// First controller column used by the panel.
///
/// The ST7789 has 240x320 pixels of RAM; a 128x128 panel is centered in it.
pub const COLUMN_OFFSET: u16 = (240 - SCREEN_WIDTH as u16) / 2;

/// First controller row used by the panel.
pub const ROW_OFFSET: u16 = (320 - SCREEN_HEIGHT as u16) / 2;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Main loop period. Inputs are sampled and the screen redrawn once per tick.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Upper bound for a Terminal command. The child is killed when it expires.
pub const COMMAND_TIMEOUT: Duration = Duration::from_secs(5);

// =============================================================================
// Screen Content
// =============================================================================

/// Directory listed by the Browser screen.
pub const BROWSER_ROOT: &str = "/home/pi";

/// Maximum number of directory entries shown by the Browser screen.
pub const BROWSER_MAX_ENTRIES: usize = 5;

/// Maximum number of characters of command output shown by the Terminal.
pub const TERMINAL_OUTPUT_LIMIT: usize = 50;

// =============================================================================
// Logging
// =============================================================================

/// Most verbose level written to stderr.
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;

// =============================================================================
// Pin Assignments (BCM numbering)
// =============================================================================

/// GPIO lines of the LCD HAT.
///
/// All inputs are active-low with the internal pull-up enabled.
pub mod pins {
    /// Joystick up.
    pub const JOYSTICK_UP: u8 = 5;
    /// Joystick down.
    pub const JOYSTICK_DOWN: u8 = 6;
    /// Joystick left.
    pub const JOYSTICK_LEFT: u8 = 13;
    /// Joystick right.
    pub const JOYSTICK_RIGHT: u8 = 19;
    /// KEY1: confirm.
    pub const KEY1: u8 = 26;
    /// KEY2: secondary (Terminal input).
    pub const KEY2: u8 = 21;
    /// KEY3: back.
    pub const KEY3: u8 = 20;

    /// Display data/command select.
    pub const DISPLAY_DC: u8 = 25;
    /// Display hardware reset.
    pub const DISPLAY_RESET: u8 = 24;
    /// Display backlight enable.
    pub const DISPLAY_BACKLIGHT: u8 = 18;
}
