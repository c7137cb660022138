//! Display and LED mode flags.
//!
//! # Ownership
//!
//! [`SharedMode`] has exactly one writer, the button handler, and one reader,
//! the render loop. On the firmware the writer runs at interrupt priority and
//! may preempt the reader between any two loads. Every update is a single aligned byte store, so readers
//! never observe a torn value. Toggles are a load followed by a store rather
//! than a read-modify-write atomic (RP2040's Cortex-M0+ has no CAS), which is
//! only sound because:
//!
//! - all firmware work runs on core 0, and
//! - button events are handled one at a time, never re-entrantly.
//!
//! Introducing a second writer requires a critical section around toggles.

use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Display border drawn around the marker area.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[repr(u8)]
pub enum BorderStyle {
    /// One rectangle along the panel edge.
    #[default]
    Simple = 0,
    /// Two nested rectangles, one pixel apart.
    Double = 1,
}

impl BorderStyle {
    /// Number of styles cycled by the joystick button.
    pub const COUNT: u8 = 2;

    /// Cycle to the next style: Simple -> Double -> Simple
    pub const fn next(self) -> Self { Self::from_index((self as u8 + 1) % Self::COUNT) }

    /// Style for a stored index. Out-of-range indices fall back to Simple.
    pub const fn from_index(index: u8) -> Self {
        match index {
            1 => Self::Double,
            _ => Self::Simple,
        }
    }

    /// Get display label for the style.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Simple => "Simple",
            Self::Double => "Double",
        }
    }
}

/// Point-in-time copy of all mode flags.
///
/// Power-up values: simple border, green LED off, PWM LEDs disabled.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct ModeState {
    pub border_style: BorderStyle,
    pub green_led_on: bool,
    pub pwm_leds_enabled: bool,
}

/// Mode flags readable from the render loop and writable only from button
/// handling (see module docs for the synchronization assumptions).
pub struct SharedMode {
    border_style: AtomicU8,
    green_led_on: AtomicBool,
    pwm_leds_enabled: AtomicBool,
}

impl SharedMode {
    /// Create the power-up state. `const` so it can back a `static`.
    pub const fn new() -> Self {
        Self {
            border_style: AtomicU8::new(BorderStyle::Simple as u8),
            green_led_on: AtomicBool::new(false),
            pwm_leds_enabled: AtomicBool::new(false),
        }
    }

    #[inline]
    pub fn border_style(&self) -> BorderStyle { BorderStyle::from_index(self.border_style.load(Ordering::Relaxed)) }

    #[inline]
    pub fn green_led_on(&self) -> bool { self.green_led_on.load(Ordering::Relaxed) }

    #[inline]
    pub fn pwm_leds_enabled(&self) -> bool { self.pwm_leds_enabled.load(Ordering::Relaxed) }

    /// Read all flags. Each flag is read independently; a button event landing
    /// between the reads can show up in some fields only.
    pub fn snapshot(&self) -> ModeState {
        ModeState {
            border_style: self.border_style(),
            green_led_on: self.green_led_on(),
            pwm_leds_enabled: self.pwm_leds_enabled(),
        }
    }

    /// Advance the border style and return the new one.
    pub(crate) fn advance_border_style(&self) -> BorderStyle {
        let next = self.border_style().next();
        self.border_style.store(next as u8, Ordering::Relaxed);
        next
    }

    /// Flip the green LED flag and return the new value.
    pub(crate) fn toggle_green_led(&self) -> bool {
        let on = !self.green_led_on();
        self.green_led_on.store(on, Ordering::Relaxed);
        on
    }

    /// Flip the PWM LED enable flag and return the new value.
    pub(crate) fn toggle_pwm_leds(&self) -> bool {
        let enabled = !self.pwm_leds_enabled();
        self.pwm_leds_enabled.store(enabled, Ordering::Relaxed);
        enabled
    }
}

impl Default for SharedMode {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_style_cycles() {
        assert_eq!(BorderStyle::Simple.next(), BorderStyle::Double);
        assert_eq!(BorderStyle::Double.next(), BorderStyle::Simple);
    }

    #[test]
    fn test_border_style_from_index() {
        assert_eq!(BorderStyle::from_index(0), BorderStyle::Simple);
        assert_eq!(BorderStyle::from_index(1), BorderStyle::Double);
        assert_eq!(BorderStyle::from_index(7), BorderStyle::Simple);
    }

    #[test]
    fn test_border_style_labels() {
        assert_eq!(BorderStyle::Simple.label(), "Simple");
        assert_eq!(BorderStyle::Double.label(), "Double");
    }

    #[test]
    fn test_power_up_state() {
        let mode = SharedMode::new();
        assert_eq!(mode.snapshot(), ModeState::default());
        assert_eq!(mode.border_style(), BorderStyle::Simple);
        assert!(!mode.green_led_on());
        assert!(!mode.pwm_leds_enabled());
    }

    #[test]
    fn test_toggles_return_new_value() {
        let mode = SharedMode::new();
        assert!(mode.toggle_green_led());
        assert!(!mode.toggle_green_led());
        assert!(mode.toggle_pwm_leds());
        assert_eq!(mode.advance_border_style(), BorderStyle::Double);
        assert_eq!(mode.advance_border_style(), BorderStyle::Simple);
    }

    #[test]
    fn test_snapshot_reflects_writes() {
        let mode = SharedMode::new();
        mode.toggle_pwm_leds();
        mode.advance_border_style();

        let snapshot = mode.snapshot();
        assert_eq!(snapshot.border_style, BorderStyle::Double);
        assert!(!snapshot.green_led_on);
        assert!(snapshot.pwm_leds_enabled);
    }
}
