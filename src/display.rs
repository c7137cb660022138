//! Display surface abstraction and SSD1306 bring-up.
//!
//! Drawing goes through `embedded-graphics`; [`Surface`] adds the explicit
//! "push the framebuffer to the panel" step the render loop needs.

use display_interface::WriteOnlyDataCommand;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use ssd1306::Ssd1306;
use ssd1306::mode::{BufferedGraphicsMode, DisplayConfig};
use ssd1306::size::DisplaySize;

use crate::error::InitError;

/// Buffered monochrome draw target whose frame becomes visible on `flush`.
pub trait Surface: DrawTarget<Color = BinaryColor> {
    /// Send the buffered frame to the physical display.
    fn flush(&mut self) -> Result<(), Self::Error>;
}

impl<DI, SIZE> Surface for Ssd1306<DI, SIZE, BufferedGraphicsMode<SIZE>>
where
    DI: WriteOnlyDataCommand,
    SIZE: DisplaySize,
{
    fn flush(&mut self) -> Result<(), Self::Error> { Ssd1306::flush(self) }
}

/// Initialize the panel and show a blank frame.
pub fn start_display<DI, SIZE>(display: &mut Ssd1306<DI, SIZE, BufferedGraphicsMode<SIZE>>) -> Result<(), InitError>
where
    DI: WriteOnlyDataCommand,
    SIZE: DisplaySize,
{
    display.init().map_err(|_| InitError::DisplayInit)?;
    display.clear_buffer();
    Ssd1306::flush(display).map_err(|_| InitError::DisplayFlush)
}
