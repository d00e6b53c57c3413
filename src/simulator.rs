//! Desktop stand-in for the HAT: an SDL window and the keyboard.
//!
//! # Controls
//!
//! | Key              | Line     |
//! |------------------|----------|
//! | Arrow keys       | joystick |
//! | `1` / `Return`   | KEY1     |
//! | `2` / `Space`    | KEY2     |
//! | `3` / `Escape`   | KEY3     |
//!
//! Key repeat is ignored. Closing the window raises the shutdown flag.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};

use crate::colors::BLACK;
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::display::PixelSink;
use crate::error::Error;
use crate::framebuffer::FrameBuffer;
use crate::input::{InputLines, Line, LineLevels};

/// Window scale; 128 px is tiny on a desktop monitor.
const SCALE: u32 = 3;

/// HAT line simulated by a key.
fn key_line(keycode: Keycode) -> Option<Line> {
    match keycode {
        Keycode::Up => Some(Line::JoystickUp),
        Keycode::Down => Some(Line::JoystickDown),
        Keycode::Left => Some(Line::JoystickLeft),
        Keycode::Right => Some(Line::JoystickRight),
        Keycode::Num1 | Keycode::Return => Some(Line::Key1),
        Keycode::Num2 | Keycode::Space => Some(Line::Key2),
        Keycode::Num3 | Keycode::Escape => Some(Line::Key3),
        _ => None,
    }
}

/// Simulated HAT.
pub struct SimulatorBoard {
    display: SimulatorDisplay<Rgb565>,
    window: Window,
    held: LineLevels,
    /// Lines pressed since the last sample, reported low even if already released.
    tapped: Vec<Line>,
    shutdown: Arc<AtomicBool>,
}

impl SimulatorBoard {
    /// Open the window. `shutdown` is raised when it is closed.
    pub fn new(shutdown: Arc<AtomicBool>) -> Self {
        let mut display = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        display.clear(BLACK).ok();

        let output_settings = OutputSettingsBuilder::new().scale(SCALE).build();
        let mut window = Window::new("LCD HAT Launcher", &output_settings);
        // The SDL window only exists after the first update
        window.update(&display);

        Self {
            display,
            window,
            held: LineLevels::released(),
            tapped: Vec::new(),
            shutdown,
        }
    }

    fn pump_events(&mut self) {
        for event in self.window.events() {
            match event {
                SimulatorEvent::Quit => self.shutdown.store(true, Ordering::Relaxed),
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    if let Some(line) = key_line(keycode) {
                        self.held.set(line, false);
                        self.tapped.push(line);
                    }
                }
                SimulatorEvent::KeyUp { keycode, .. } => {
                    if let Some(line) = key_line(keycode) {
                        self.held.set(line, true);
                    }
                }
                _ => {}
            }
        }
    }
}

impl InputLines for SimulatorBoard {
    fn sample(&mut self) -> LineLevels {
        self.pump_events();
        let mut levels = self.held;
        for line in self.tapped.drain(..) {
            levels.set(line, false);
        }
        levels
    }
}

impl PixelSink for SimulatorBoard {
    fn present(
        &mut self,
        frame: &FrameBuffer,
    ) -> Result<(), Error> {
        self.display.draw_iter(frame.pixels()).ok();
        self.window.update(&self.display);
        Ok(())
    }
}
