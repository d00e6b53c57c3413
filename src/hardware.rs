//! The LCD HAT on a Raspberry Pi: ST7789 over SPI0 plus seven GPIO inputs.
//!
//! Lines are opened once in [`HatBoard::open`] and held until the board is
//! dropped, which blanks the panel and switches the backlight off. rppal
//! restores every pin to its previous mode when its handle drops.

use anyhow::{Context, Result};
use log::{info, warn};
use rppal::gpio::{Gpio, InputPin, OutputPin};
use rppal::hal::Delay;
use rppal::spi::{Bus, Mode, SimpleHalSpiDevice, SlaveSelect, Spi};

use crate::config::{SPI_CLOCK_HZ, pins};
use crate::display::PixelSink;
use crate::error::Error;
use crate::framebuffer::FrameBuffer;
use crate::input::{InputLines, LINE_COUNT, Line, LineLevels};
use crate::st7789::St7789;

/// ST7789 on SPI0 CE0 with rppal output pins.
type Panel = St7789<SimpleHalSpiDevice, OutputPin, OutputPin, OutputPin>;

/// BCM pin for each input line.
const fn input_pin(line: Line) -> u8 {
    match line {
        Line::JoystickUp => pins::JOYSTICK_UP,
        Line::JoystickDown => pins::JOYSTICK_DOWN,
        Line::JoystickLeft => pins::JOYSTICK_LEFT,
        Line::JoystickRight => pins::JOYSTICK_RIGHT,
        Line::Key1 => pins::KEY1,
        Line::Key2 => pins::KEY2,
        Line::Key3 => pins::KEY3,
    }
}

/// The HAT's display and buttons.
pub struct HatBoard {
    panel: Panel,
    /// Indexed by [`Line::index`].
    inputs: Vec<InputPin>,
}

impl HatBoard {
    /// Claim the GPIO lines and the SPI bus and initialize the panel.
    pub fn open() -> Result<Self> {
        let gpio = Gpio::new().context("opening GPIO")?;

        let mut inputs = Vec::with_capacity(LINE_COUNT);
        for line in Line::ALL {
            let pin = input_pin(line);
            let input = gpio
                .get(pin)
                .with_context(|| format!("claiming GPIO{pin} for {line:?}"))?
                .into_input_pullup();
            inputs.push(input);
        }

        let output = |pin: u8, what: &str| -> Result<OutputPin> {
            Ok(gpio
                .get(pin)
                .with_context(|| format!("claiming GPIO{pin} for display {what}"))?
                .into_output())
        };
        let dc = output(pins::DISPLAY_DC, "DC")?;
        let rst = output(pins::DISPLAY_RESET, "reset")?;
        let backlight = output(pins::DISPLAY_BACKLIGHT, "backlight")?;

        let spi = Spi::new(Bus::Spi0, SlaveSelect::Ss0, SPI_CLOCK_HZ, Mode::Mode0).context("opening SPI0")?;
        let mut panel = St7789::new(SimpleHalSpiDevice::new(spi), dc, rst, backlight);
        panel.init(&mut Delay::new()).context("initializing ST7789")?;

        info!("LCD HAT ready: SPI0 at {} MHz", SPI_CLOCK_HZ / 1_000_000);
        Ok(Self { panel, inputs })
    }
}

impl InputLines for HatBoard {
    fn sample(&mut self) -> LineLevels {
        let mut levels = LineLevels::released();
        for (line, pin) in Line::ALL.into_iter().zip(&self.inputs) {
            levels.set(line, pin.is_high());
        }
        levels
    }
}

impl PixelSink for HatBoard {
    fn present(
        &mut self,
        frame: &FrameBuffer,
    ) -> Result<(), Error> {
        self.panel.flush(frame)
    }
}

impl Drop for HatBoard {
    fn drop(&mut self) {
        match self.panel.power_off() {
            Ok(()) => info!("display off"),
            Err(err) => warn!("could not switch display off: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sink<T: PixelSink>() {}

    #[test]
    fn test_panel_type_drives_rppal_spi() {
        // Fails to build if the rppal types stop fitting the driver bounds
        assert_sink::<Panel>();
        assert_sink::<HatBoard>();
    }
}
