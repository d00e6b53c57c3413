//! Button debounce handling.
//!
//! Provides time-based edge detection with debouncing to prevent
//! multiple triggers from contact bounce on physical buttons.

use std::time::{Duration, Instant};

/// Debounce duration in milliseconds.
pub const DEBOUNCE_MS: u64 = 50;

/// Button debounce state with time-based edge detection.
#[derive(Clone, Copy, Debug)]
pub struct ButtonState {
    was_pressed: bool,
    last_change: Option<Instant>,
}

impl ButtonState {
    /// Create a new button state (not pressed).
    pub const fn new() -> Self {
        Self {
            was_pressed: false,
            last_change: None,
        }
    }

    /// Returns true only on the falling edge (button just pressed).
    ///
    /// Buttons are active-low, so `is_low` means pressed.
    pub fn just_pressed(
        &mut self,
        is_low: bool,
    ) -> bool {
        self.just_pressed_at(is_low, Instant::now())
    }

    /// Same as [`just_pressed`](Self::just_pressed) with an explicit sample time.
    pub fn just_pressed_at(
        &mut self,
        is_low: bool,
        now: Instant,
    ) -> bool {
        if is_low != self.was_pressed {
            // Contact bounce: ignore changes too close to the previous one
            if let Some(last) = self.last_change
                && now.saturating_duration_since(last) < Duration::from_millis(DEBOUNCE_MS)
            {
                return false;
            }

            self.was_pressed = is_low;
            self.last_change = Some(now);

            return is_low;
        }

        false
    }

    /// Whether the button is currently considered held.
    #[inline]
    pub const fn is_held(&self) -> bool { self.was_pressed }
}

impl Default for ButtonState {
    fn default() -> Self { Self::new() }
}
