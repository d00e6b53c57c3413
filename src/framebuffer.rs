//! In-memory RGB565 canvas that every screen draws into.
//!
//! The buffer stores pixels big-endian, exactly as the ST7789 expects them on
//! the wire, so presenting a frame is a single bulk transfer with no per-pixel
//! conversion.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PointsIter, Rectangle};

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Display dimensions as `usize` for indexing.
pub const WIDTH: usize = SCREEN_WIDTH as usize;
pub const HEIGHT: usize = SCREEN_HEIGHT as usize;

/// Size of one frame in bytes (2 bytes per pixel).
pub const BUFFER_SIZE: usize = WIDTH * HEIGHT * 2;

/// A full 128x128 frame.
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    bytes: Box<[u8]>,
}

impl FrameBuffer {
    /// Create a black frame.
    pub fn new() -> Self {
        Self {
            bytes: vec![0u8; BUFFER_SIZE].into_boxed_slice(),
        }
    }

    /// Raw big-endian RGB565 bytes, row-major.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] { &self.bytes }

    /// Read back a pixel. Returns `None` outside the screen.
    pub fn pixel(
        &self,
        point: Point,
    ) -> Option<Rgb565> {
        let idx = Self::index(point.x, point.y)?;
        let raw = u16::from_be_bytes([self.bytes[idx], self.bytes[idx + 1]]);
        Some(Rgb565::from(RawU16::new(raw)))
    }

    /// Iterate over every pixel, row by row.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel<Rgb565>> + '_ {
        self.bytes.chunks_exact(2).enumerate().map(|(i, px)| {
            let point = Point::new((i % WIDTH) as i32, (i / WIDTH) as i32);
            let raw = u16::from_be_bytes([px[0], px[1]]);
            Pixel(point, Rgb565::from(RawU16::new(raw)))
        })
    }

    /// Fill the whole frame with one color.
    pub fn clear_buffer(
        &mut self,
        color: Rgb565,
    ) {
        let bytes = encode(color);
        for px in self.bytes.chunks_exact_mut(2) {
            px.copy_from_slice(&bytes);
        }
    }

    /// Byte offset of a pixel, `None` when off-screen.
    #[inline]
    fn index(
        x: i32,
        y: i32,
    ) -> Option<usize> {
        if x >= 0 && x < WIDTH as i32 && y >= 0 && y < HEIGHT as i32 {
            Some((y as usize * WIDTH + x as usize) * 2)
        } else {
            None
        }
    }

    #[inline]
    fn set_pixel(
        &mut self,
        x: i32,
        y: i32,
        color: Rgb565,
    ) {
        if let Some(idx) = Self::index(x, y) {
            self.bytes[idx..idx + 2].copy_from_slice(&encode(color));
        }
    }
}

impl core::fmt::Debug for FrameBuffer {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("width", &WIDTH)
            .field("height", &HEIGHT)
            .finish_non_exhaustive()
    }
}

impl Default for FrameBuffer {
    fn default() -> Self { Self::new() }
}

/// Big-endian wire encoding of one pixel.
#[inline]
fn encode(color: Rgb565) -> [u8; 2] {
    let raw: RawU16 = color.into();
    raw.into_inner().to_be_bytes()
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }

    fn fill_contiguous<I>(
        &mut self,
        area: &Rectangle,
        colors: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        // Colors arrive for the whole area, so clipped points still consume one.
        let mut colors = colors.into_iter();
        for point in area.points() {
            match colors.next() {
                Some(color) => self.set_pixel(point.x, point.y, color),
                None => break,
            }
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let drawable_area = area.intersection(&self.bounding_box());
        if drawable_area.size == Size::zero() {
            return Ok(());
        }

        let bytes = encode(color);
        let x_start = drawable_area.top_left.x as usize;
        let width = drawable_area.size.width as usize;

        for y in drawable_area.rows() {
            let row_start = (y as usize * WIDTH + x_start) * 2;
            for px in self.bytes[row_start..row_start + width * 2].chunks_exact_mut(2) {
                px.copy_from_slice(&bytes);
            }
        }
        Ok(())
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.clear_buffer(color);
        Ok(())
    }
}
