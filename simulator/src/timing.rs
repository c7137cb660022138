//! Timing constants for the simulator.

use std::time::Duration;

use joystick_pico::config::LOOP_PERIOD_MS;

/// Pause after every frame, same as the firmware loop.
pub const FRAME_TIME: Duration = Duration::from_millis(LOOP_PERIOD_MS);
