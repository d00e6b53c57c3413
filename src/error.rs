//! Error type for the display path.
//!
//! Screen content failures (unreadable directories, failing commands) are not
//! errors here: they are turned into text and shown on screen. What remains are
//! the faults of talking to the panel itself.

use core::fmt;

use embedded_hal::{digital, spi};

/// Failure while pushing a frame to the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An SPI transfer to the display controller failed.
    Spi(spi::ErrorKind),

    /// A control line (DC, reset, backlight) could not be driven.
    Pin(digital::ErrorKind),
}

impl fmt::Display for Error {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Spi(kind) => write!(f, "display SPI transfer failed: {kind}"),
            Self::Pin(kind) => write!(f, "display control pin failed: {kind}"),
        }
    }
}

impl std::error::Error for Error {}

// Convenience conversions

impl From<spi::ErrorKind> for Error {
    fn from(kind: spi::ErrorKind) -> Self { Self::Spi(kind) }
}

impl From<digital::ErrorKind> for Error {
    fn from(kind: digital::ErrorKind) -> Self { Self::Pin(kind) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_failing_part() {
        let spi_err = Error::from(spi::ErrorKind::Overrun);
        let pin_err = Error::from(digital::ErrorKind::Other);

        assert!(spi_err.to_string().starts_with("display SPI"), "got {spi_err}");
        assert!(pin_err.to_string().starts_with("display control pin"), "got {pin_err}");
    }
}
