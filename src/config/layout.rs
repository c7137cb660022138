//! Display and layout configuration constants.
//!
//! All geometry is fixed at compile time for the 128x64 SSD1306 panel.

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (SSD1306 128x64 OLED)
pub const SCREEN_WIDTH: u32 = 128;

/// Display height in pixels
pub const SCREEN_HEIGHT: u32 = 64;

// =============================================================================
// Marker
// =============================================================================

/// Side length of the filled square that follows the joystick.
pub const MARKER_SIZE: u32 = 10;

/// Largest horizontal marker position. The joystick's full ADC range is
/// rescaled onto `0..=MARKER_X_RANGE`.
pub const MARKER_X_RANGE: u32 = 112;

/// Largest vertical marker position.
pub const MARKER_Y_RANGE: u32 = 56;

// =============================================================================
// Border
// =============================================================================

/// Outer border rectangle width. The inner rectangle of the double style is
/// two pixels narrower and inset by one.
pub const BORDER_WIDTH: u32 = 127;

/// Outer border rectangle height.
pub const BORDER_HEIGHT: u32 = 63;
