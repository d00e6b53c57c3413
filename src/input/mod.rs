//! Joystick and button input.
//!
//! The HAT has seven active-low lines with pull-ups: four joystick directions
//! and three keys. A backend samples their raw levels ([`InputLines`]); the
//! [`InputReader`] turns a sample into at most one [`InputEvent`].
//!
//! # Event Mapping
//!
//! | Line     | Event       |
//! |----------|-------------|
//! | up       | `Up`        |
//! | down     | `Down`      |
//! | left     | `Left`      |
//! | right    | `Right`     |
//! | KEY1     | `Confirm`   |
//! | KEY2     | `Secondary` |
//! | KEY3     | `Back`      |
//!
//! Each line fires once on its falling edge (press), never while held.

mod button;
mod reader;

pub use button::{ButtonState, DEBOUNCE_MS};
pub use reader::InputReader;

/// Logical input event, one per poll at most.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputEvent {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Secondary,
    Back,
}

/// Physical input line of the HAT.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Line {
    JoystickUp,
    JoystickDown,
    JoystickLeft,
    JoystickRight,
    Key1,
    Key2,
    Key3,
}

/// Number of sampled input lines.
pub const LINE_COUNT: usize = 7;

impl Line {
    /// All lines in priority order: when several fire in one sample, the first wins.
    pub const ALL: [Self; LINE_COUNT] = [
        Self::JoystickUp,
        Self::JoystickDown,
        Self::JoystickLeft,
        Self::JoystickRight,
        Self::Key1,
        Self::Key2,
        Self::Key3,
    ];

    /// Event produced by a press on this line.
    pub const fn event(self) -> InputEvent {
        match self {
            Self::JoystickUp => InputEvent::Up,
            Self::JoystickDown => InputEvent::Down,
            Self::JoystickLeft => InputEvent::Left,
            Self::JoystickRight => InputEvent::Right,
            Self::Key1 => InputEvent::Confirm,
            Self::Key2 => InputEvent::Secondary,
            Self::Key3 => InputEvent::Back,
        }
    }

    /// Position in [`Line::ALL`] and in [`LineLevels`].
    #[inline]
    pub const fn index(self) -> usize { self as usize }
}

/// One raw sample of all lines. `true` means the line reads high (released).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LineLevels([bool; LINE_COUNT]);

impl LineLevels {
    /// All lines high: nothing pressed.
    pub const fn released() -> Self { Self([true; LINE_COUNT]) }

    /// Sample with exactly the given lines pulled low.
    pub fn pressed(lines: &[Line]) -> Self {
        let mut levels = Self::released();
        for line in lines {
            levels.set(*line, false);
        }
        levels
    }

    /// Set the level of one line.
    #[inline]
    pub const fn set(
        &mut self,
        line: Line,
        high: bool,
    ) {
        self.0[line.index()] = high;
    }

    /// Whether the line reads low, i.e. is pressed.
    #[inline]
    pub const fn is_low(
        &self,
        line: Line,
    ) -> bool {
        !self.0[line.index()]
    }
}

impl Default for LineLevels {
    fn default() -> Self { Self::released() }
}

/// Source of raw input levels (GPIO on the HAT, keyboard in the simulator).
pub trait InputLines {
    /// Sample all seven lines once.
    fn sample(&mut self) -> LineLevels;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_indices_match_priority_order() {
        for (idx, line) in Line::ALL.iter().enumerate() {
            assert_eq!(line.index(), idx);
        }
    }

    #[test]
    fn test_keys_map_to_events() {
        assert_eq!(Line::Key1.event(), InputEvent::Confirm);
        assert_eq!(Line::Key2.event(), InputEvent::Secondary);
        assert_eq!(Line::Key3.event(), InputEvent::Back);
    }

    #[test]
    fn test_levels_are_active_low() {
        let levels = LineLevels::pressed(&[Line::Key3]);
        assert!(levels.is_low(Line::Key3));
        assert!(!levels.is_low(Line::Key1));
        assert!(Line::ALL.iter().all(|line| !LineLevels::released().is_low(*line)));
    }
}
