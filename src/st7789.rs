//! Blocking ST7789 driver on `embedded-hal` 1.0 traits.
//!
//! The controller has 240x320 pixels of RAM; the 128x128 panel is a window
//! inside it at [`COLUMN_OFFSET`]/[`ROW_OFFSET`]. Every frame is sent whole:
//! set the window once during [`St7789::init`], then `RAMWR` followed by the
//! framebuffer bytes.
//!
//! Chip select is handled by the `SpiDevice`, the data/command line by the
//! driver.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;
use log::debug;

use crate::config::{COLUMN_OFFSET, ROW_OFFSET, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::display::PixelSink;
use crate::error::Error;
use crate::framebuffer::FrameBuffer;

// ST7789 Commands
const SWRESET: u8 = 0x01;
const SLPIN: u8 = 0x10;
const SLPOUT: u8 = 0x11;
const NORON: u8 = 0x13;
const INVON: u8 = 0x21;
const DISPOFF: u8 = 0x28;
const DISPON: u8 = 0x29;
const CASET: u8 = 0x2A;
const RASET: u8 = 0x2B;
const RAMWR: u8 = 0x2C;
const MADCTL: u8 = 0x36;
const COLMOD: u8 = 0x3A;

/// 16 bits per pixel, RGB565.
const COLMOD_RGB565: u8 = 0x55;

/// Row-major, top-left origin, RGB order.
const MADCTL_DEFAULT: u8 = 0x00;

/// Largest single SPI write. spidev rejects transfers above its buffer size
/// (4096 bytes by default).
const MAX_TRANSFER: usize = 4096;

/// ST7789 panel with its control lines.
pub struct St7789<SPI, DC, RST, BL> {
    spi: SPI,
    dc: DC,
    rst: RST,
    backlight: BL,
}

impl<SPI, DC, RST, BL> St7789<SPI, DC, RST, BL>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    BL: OutputPin,
{
    /// Wrap the bus and pins. Call [`init`](Self::init) before presenting.
    pub const fn new(
        spi: SPI,
        dc: DC,
        rst: RST,
        backlight: BL,
    ) -> Self {
        Self {
            spi,
            dc,
            rst,
            backlight,
        }
    }

    /// Reset the controller, configure RGB565 and turn the panel on.
    pub fn init(
        &mut self,
        delay: &mut impl DelayNs,
    ) -> Result<(), Error> {
        // Hardware reset pulse
        self.rst.set_high().map_err(pin_error)?;
        delay.delay_ms(10);
        self.rst.set_low().map_err(pin_error)?;
        delay.delay_ms(10);
        self.rst.set_high().map_err(pin_error)?;
        delay.delay_ms(120);

        self.command(SWRESET, &[])?;
        delay.delay_ms(150);

        self.command(SLPOUT, &[])?;
        delay.delay_ms(10);

        self.command(COLMOD, &[COLMOD_RGB565])?;
        self.command(MADCTL, &[MADCTL_DEFAULT])?;

        // Panel is IPS: colors are inverted without this
        self.command(INVON, &[])?;
        delay.delay_ms(10);

        self.command(NORON, &[])?;
        delay.delay_ms(10);

        self.command(DISPON, &[])?;
        delay.delay_ms(10);

        self.set_window(COLUMN_OFFSET, ROW_OFFSET, SCREEN_WIDTH as u16, SCREEN_HEIGHT as u16)?;
        self.backlight.set_high().map_err(pin_error)?;

        debug!("st7789 ready, window at ({COLUMN_OFFSET}, {ROW_OFFSET})");
        Ok(())
    }

    /// Send a full frame.
    pub fn flush(
        &mut self,
        frame: &FrameBuffer,
    ) -> Result<(), Error> {
        self.dc.set_low().map_err(pin_error)?;
        self.spi.write(&[RAMWR]).map_err(spi_error)?;
        self.dc.set_high().map_err(pin_error)?;
        for chunk in frame.as_bytes().chunks(MAX_TRANSFER) {
            self.spi.write(chunk).map_err(spi_error)?;
        }
        Ok(())
    }

    /// Blank the panel, put the controller to sleep and switch the backlight off.
    pub fn power_off(&mut self) -> Result<(), Error> {
        self.command(DISPOFF, &[])?;
        self.command(SLPIN, &[])?;
        self.backlight.set_low().map_err(pin_error)
    }

    /// Send a command byte followed by its parameters.
    fn command(
        &mut self,
        cmd: u8,
        params: &[u8],
    ) -> Result<(), Error> {
        self.dc.set_low().map_err(pin_error)?;
        self.spi.write(&[cmd]).map_err(spi_error)?;
        if !params.is_empty() {
            self.dc.set_high().map_err(pin_error)?;
            self.spi.write(params).map_err(spi_error)?;
        }
        Ok(())
    }

    /// Set the RAM window that `RAMWR` fills.
    fn set_window(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
    ) -> Result<(), Error> {
        self.command(CASET, &window_bounds(x, w))?;
        self.command(RASET, &window_bounds(y, h))
    }
}

impl<SPI, DC, RST, BL> PixelSink for St7789<SPI, DC, RST, BL>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    BL: OutputPin,
{
    fn present(
        &mut self,
        frame: &FrameBuffer,
    ) -> Result<(), Error> {
        self.flush(frame)
    }
}

/// CASET/RASET parameters: inclusive start and end, big-endian.
fn window_bounds(
    start: u16,
    len: u16,
) -> [u8; 4] {
    let [s0, s1] = start.to_be_bytes();
    let [e0, e1] = (start + len - 1).to_be_bytes();
    [s0, s1, e0, e1]
}

#[inline]
fn spi_error(err: impl embedded_hal::spi::Error) -> Error { Error::Spi(err.kind()) }

#[inline]
fn pin_error(err: impl embedded_hal::digital::Error) -> Error { Error::Pin(err.kind()) }
