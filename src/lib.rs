//! Joystick firmware library - testable modules for the joystick/OLED board.
//!
//! This library contains the control logic that can be tested on the host
//! machine. The binary (`main.rs`) uses this library and adds the
//! RP2040-specific peripheral wiring.
//!
//! # Data Flow
//!
//! - Button edges -> [`ButtonHandler`](state::ButtonHandler) -> [`SharedMode`](state::SharedMode)
//! - [`SharedMode`](state::SharedMode) + joystick sample -> [`RenderLoop`](control::RenderLoop) -> display + LEDs
//!
//! Nothing flows back from the render loop into button handling.
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib --target x86_64-unknown-linux-gnu  # Linux
//! cargo test --lib --target x86_64-pc-windows-msvc    # Windows
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// === Pure logic modules (testable on host, no ARM dependencies) ===

// Configuration
pub mod config;
pub mod error;

// Input -> output mapping
pub mod mapping;
pub mod state;

// Output
pub mod display;
pub mod leds;
pub mod render;

// Loop glue
pub mod control;

#[cfg(test)]
mod test_support;
