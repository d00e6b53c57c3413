//! Screens of the launcher and the home menu that leads to them.
//!
//! # Screens
//!
//! - [`Screen::Home`]: three app icons, joystick moves the selection
//! - [`Screen::Browser`]: first entries of the home directory
//! - [`Screen::Clock`]: local time and date
//! - [`Screen::Terminal`]: run a command line and show its output

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{BLUE, GREEN, RED};

/// Screens the launcher can show.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Screen {
    /// App menu. Shown at startup.
    #[default]
    Home,

    /// Directory listing.
    Browser,

    /// Wall clock.
    Clock,

    /// Command runner.
    Terminal,
}

impl Screen {
    /// Whether this is the home menu.
    #[inline]
    pub const fn is_home(self) -> bool { matches!(self, Self::Home) }

    /// Human-readable name, used in logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Browser => "Browser",
            Self::Clock => "Clock",
            Self::Terminal => "Terminal",
        }
    }
}

/// One icon of the home menu.
#[derive(Clone, Copy, Debug)]
pub struct MenuItem {
    /// Text drawn under the icon.
    pub label: &'static str,
    /// Icon fill color when not selected.
    pub color: Rgb565,
    /// Screen opened by KEY1 while this item is selected.
    pub target: Screen,
}

/// Number of entries in the home menu.
pub const MENU_LEN: usize = 3;

/// The home menu, in selection order.
pub const MENU: [MenuItem; MENU_LEN] = [
    MenuItem {
        label: "Browser",
        color: RED,
        target: Screen::Browser,
    },
    MenuItem {
        label: "Clock",
        color: GREEN,
        target: Screen::Clock,
    },
    MenuItem {
        label: "Terminal",
        color: BLUE,
        target: Screen::Terminal,
    },
];
