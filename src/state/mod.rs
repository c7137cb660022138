//! Mode state shared between button handling and the render loop.
//!
//! - `mode`: Border style and LED flags, plus their shared container
//! - `debounce`: Global time-gap filter for button events
//! - `input`: Button source dispatch and event handling

mod debounce;
mod input;
mod mode;

pub use debounce::DebounceGate;
pub use input::{ButtonAction, ButtonHandler, ButtonSource};
pub use mode::{BorderStyle, ModeState, SharedMode};
