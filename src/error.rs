//! Startup error reporting.
//!
//! Initialization is the only fallible phase. Steady-state peripheral writes
//! are fire-and-forget and never surface errors.

use core::fmt;

/// Step of peripheral bring-up that failed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InitError {
    /// SSD1306 did not accept its initialization sequence.
    DisplayInit,
    /// First (blank) frame could not be sent to the display.
    DisplayFlush,
    /// A PWM slice did not yield the expected output channel.
    PwmChannel,
    /// The button task could not be spawned.
    TaskSpawn,
}

impl InitError {
    /// Get a short human-readable description.
    pub const fn message(self) -> &'static str {
        match self {
            Self::DisplayInit => "display initialization failed",
            Self::DisplayFlush => "display flush failed",
            Self::PwmChannel => "PWM channel unavailable",
            Self::TaskSpawn => "task spawn failed",
        }
    }
}

impl fmt::Display for InitError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.message())
    }
}
