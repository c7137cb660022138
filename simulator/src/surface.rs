//! Simulator window as a render surface.
//!
//! Drawing goes to an in-memory `SimulatorDisplay`; `flush` pushes it to the
//! SDL window, just like the SSD1306 flush pushes the framebuffer over I2C.

use std::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{
    BinaryColorTheme,
    OutputSettingsBuilder,
    SimulatorDisplay,
    SimulatorEvent,
    Window,
};
use joystick_pico::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use joystick_pico::display::Surface;

/// Pixel scale of the window relative to the 128x64 panel.
const WINDOW_SCALE: u32 = 5;

pub struct SimSurface {
    display: SimulatorDisplay<BinaryColor>,
    window: Window,
}

impl SimSurface {
    pub fn new(title: &str) -> Self {
        let output_settings = OutputSettingsBuilder::new()
            .theme(BinaryColorTheme::OledBlue)
            .scale(WINDOW_SCALE)
            .build();

        Self {
            display: SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)),
            window: Window::new(title, &output_settings),
        }
    }

    /// Pending window events. Only valid after the first `flush`.
    pub fn events(&mut self) -> impl Iterator<Item = SimulatorEvent> + '_ { self.window.events() }
}

impl OriginDimensions for SimSurface {
    fn size(&self) -> Size { self.display.size() }
}

impl DrawTarget for SimSurface {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.display.draw_iter(pixels)
    }
}

impl Surface for SimSurface {
    fn flush(&mut self) -> Result<(), Self::Error> {
        self.window.update(&self.display);
        Ok(())
    }
}
