//! Tracks what the panel currently shows so unchanged frames are not resent.
//!
//! A full 128x128 frame is 32 KiB over SPI. Home, Browser and Terminal only
//! change on input, and the Clock changes once a second, so most ticks produce
//! a frame identical to the last one. Comparing against a copy is far cheaper
//! than the transfer.

use crate::framebuffer::FrameBuffer;

/// Copy of the last frame that reached the display.
#[derive(Debug, Default)]
pub struct RenderState {
    /// `None` until the first frame is presented, or after [`invalidate`](Self::invalidate).
    presented: Option<Box<[u8]>>,
}

impl RenderState {
    /// Nothing presented yet; the first frame is always sent.
    pub const fn new() -> Self { Self { presented: None } }

    /// Whether `frame` differs from what the panel shows.
    #[inline]
    pub fn needs_present(
        &self,
        frame: &FrameBuffer,
    ) -> bool {
        self.presented.as_deref() != Some(frame.as_bytes())
    }

    /// Record that `frame` is now on the panel.
    pub fn mark_presented(
        &mut self,
        frame: &FrameBuffer,
    ) {
        match &mut self.presented {
            Some(copy) => copy.copy_from_slice(frame.as_bytes()),
            None => self.presented = Some(frame.as_bytes().into()),
        }
    }

    /// Forget the panel contents, e.g. after a failed transfer.
    pub fn invalidate(&mut self) { self.presented = None; }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::prelude::*;

    use super::*;
    use crate::colors::{RED, WHITE};

    #[test]
    fn test_first_frame_is_always_sent() {
        let render = RenderState::new();
        assert!(render.needs_present(&FrameBuffer::new()));
    }

    #[test]
    fn test_identical_frame_is_skipped() {
        let mut render = RenderState::new();
        let mut frame = FrameBuffer::new();
        frame.clear_buffer(WHITE);
        render.mark_presented(&frame);

        let mut again = FrameBuffer::new();
        again.clear_buffer(WHITE);
        assert!(!render.needs_present(&again));
    }

    #[test]
    fn test_single_pixel_change_is_sent() {
        let mut render = RenderState::new();
        let mut frame = FrameBuffer::new();
        render.mark_presented(&frame);

        Pixel(Point::new(64, 64), RED).draw(&mut frame).ok();
        assert!(render.needs_present(&frame));
    }

    #[test]
    fn test_invalidate_forces_resend() {
        let mut render = RenderState::new();
        let frame = FrameBuffer::new();
        render.mark_presented(&frame);
        render.invalidate();
        assert!(render.needs_present(&frame));
    }
}
