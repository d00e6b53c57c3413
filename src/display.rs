//! Output side of a board: something that can show a finished frame.

use crate::error::Error;
use crate::framebuffer::FrameBuffer;

/// Destination for complete frames.
///
/// Implemented by the ST7789 driver on the Pi and by the simulator window on a
/// desktop.
pub trait PixelSink {
    /// Show `frame`, replacing whatever was on screen.
    fn present(
        &mut self,
        frame: &FrameBuffer,
    ) -> Result<(), Error>;
}
