//! Turns raw line samples into input events.

use std::time::Instant;

use super::{ButtonState, InputEvent, InputLines, LINE_COUNT, Line, LineLevels};

/// Edge detector for all seven lines.
#[derive(Debug, Default)]
pub struct InputReader {
    buttons: [ButtonState; LINE_COUNT],
}

impl InputReader {
    /// Create a reader with every line released.
    pub const fn new() -> Self {
        Self {
            buttons: [ButtonState::new(); LINE_COUNT],
        }
    }

    /// Sample the lines once and return the event of the highest-priority press.
    pub fn read(
        &mut self,
        lines: &mut impl InputLines,
    ) -> Option<InputEvent> {
        let levels = lines.sample();
        self.process(levels, Instant::now())
    }

    /// Feed one sample taken at `now`.
    ///
    /// Every line's edge state is updated, even when a higher-priority line
    /// already produced the event for this sample.
    pub fn process(
        &mut self,
        levels: LineLevels,
        now: Instant,
    ) -> Option<InputEvent> {
        let mut event = None;
        for line in Line::ALL {
            let fired = self.buttons[line.index()].just_pressed_at(levels.is_low(line), now);
            if fired && event.is_none() {
                event = Some(line.event());
            }
        }
        event
    }
}
