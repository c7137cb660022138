//! Peripheral ranges, bus settings and loop timing.
//!
//! Pin assignments live with the peripheral setup in the binary since
//! embassy-rp pins are distinct types; only the values the host-testable
//! logic needs are mirrored here.

// =============================================================================
// Analog Input
// =============================================================================

/// Maximum raw reading of the 12-bit ADC.
pub const ADC_MAX: u16 = 4095;

/// Raw reading treated as the joystick's resting center.
pub const ADC_CENTER: u16 = 2048;

// =============================================================================
// PWM
// =============================================================================

/// Counter wrap value for every LED slice. Duty levels run `0..=PWM_WRAP`.
pub const PWM_WRAP: u16 = 4095;

// =============================================================================
// Display Bus
// =============================================================================

/// 7-bit I2C address of the SSD1306.
pub const DISPLAY_I2C_ADDRESS: u8 = 0x3C;

/// I2C1 bus clock.
pub const I2C_FREQUENCY_HZ: u32 = 400_000;

// =============================================================================
// Buttons
// =============================================================================

/// GPIO line of the joystick push button (active low, pulled up).
pub const JOYSTICK_BUTTON_GPIO: u8 = 22;

/// GPIO line of button A (active low, pulled up).
pub const BUTTON_A_GPIO: u8 = 5;

/// Minimum gap between two accepted button events, shared by both buttons.
pub const DEBOUNCE_WINDOW_US: u64 = 200_000;

// =============================================================================
// Timing
// =============================================================================

/// Pause at the end of every render loop iteration.
pub const LOOP_PERIOD_MS: u64 = 50;
