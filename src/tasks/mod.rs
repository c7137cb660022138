//! Async tasks for the joystick firmware.
//!
//! - `buttons`: Falling-edge handling for the joystick button and button A

pub mod buttons;

pub use buttons::button_task;
