//! Hardware fakes for host tests.

use core::cell::Cell;
use core::convert::Infallible;

use display_interface::{DataFormat, DisplayError, WriteOnlyDataCommand};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_hal::pwm::{self, ErrorKind, SetDutyCycle};

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::control::JoystickAxes;
use crate::display::Surface;
use crate::mapping::AnalogSample;

// =============================================================================
// PWM
// =============================================================================

#[derive(Debug)]
pub struct DutyOutOfRange;

impl pwm::Error for DutyOutOfRange {
    fn kind(&self) -> ErrorKind { ErrorKind::Other }
}

/// PWM channel that rejects duty levels above its maximum, like embassy-rp.
pub struct FakePwm {
    max: u16,
    duty: u16,
    writes: u32,
    rejected: u32,
}

impl FakePwm {
    pub fn new(max: u16) -> Self {
        Self {
            max,
            duty: 0,
            writes: 0,
            rejected: 0,
        }
    }

    pub fn duty(&self) -> u16 { self.duty }

    pub fn writes(&self) -> u32 { self.writes }

    pub fn rejected(&self) -> u32 { self.rejected }
}

impl pwm::ErrorType for FakePwm {
    type Error = DutyOutOfRange;
}

impl SetDutyCycle for FakePwm {
    fn max_duty_cycle(&self) -> u16 { self.max }

    fn set_duty_cycle(
        &mut self,
        duty: u16,
    ) -> Result<(), Self::Error> {
        if duty > self.max {
            self.rejected += 1;
            return Err(DutyOutOfRange);
        }
        self.duty = duty;
        self.writes += 1;
        Ok(())
    }
}

// =============================================================================
// Display
// =============================================================================

const W: usize = SCREEN_WIDTH as usize;
const H: usize = SCREEN_HEIGHT as usize;

/// 128x64 monochrome framebuffer that counts flushes.
pub struct FakeSurface {
    pixels: [[bool; W]; H],
    flushes: u32,
}

impl FakeSurface {
    pub fn new() -> Self {
        Self {
            pixels: [[false; W]; H],
            flushes: 0,
        }
    }

    pub fn is_on(
        &self,
        x: usize,
        y: usize,
    ) -> bool {
        self.pixels[y][x]
    }

    pub fn lit_count(&self) -> usize { self.pixels.iter().flatten().filter(|&&p| p).count() }

    pub fn flushes(&self) -> u32 { self.flushes }

    pub fn fill_all(&mut self) {
        for row in self.pixels.iter_mut() {
            row.fill(true);
        }
    }
}

impl OriginDimensions for FakeSurface {
    fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
}

impl DrawTarget for FakeSurface {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y))
                && x < W
                && y < H
            {
                self.pixels[y][x] = color.is_on();
            }
        }
        Ok(())
    }
}

impl Surface for FakeSurface {
    fn flush(&mut self) -> Result<(), Self::Error> {
        self.flushes += 1;
        Ok(())
    }
}

/// Display bus that accepts or refuses every transfer, counting bytes into
/// caller-owned cells so the counts survive handing the bus to the driver.
pub struct FakeInterface<'a> {
    fail: bool,
    commands: &'a Cell<usize>,
    data_bytes: &'a Cell<usize>,
}

impl<'a> FakeInterface<'a> {
    pub fn new(
        fail: bool,
        commands: &'a Cell<usize>,
        data_bytes: &'a Cell<usize>,
    ) -> Self {
        Self {
            fail,
            commands,
            data_bytes,
        }
    }
}

impl WriteOnlyDataCommand for FakeInterface<'_> {
    fn send_commands(
        &mut self,
        cmd: DataFormat<'_>,
    ) -> Result<(), DisplayError> {
        if self.fail {
            return Err(DisplayError::BusWriteError);
        }
        if let DataFormat::U8(bytes) = cmd {
            self.commands.set(self.commands.get() + bytes.len());
        }
        Ok(())
    }

    fn send_data(
        &mut self,
        buf: DataFormat<'_>,
    ) -> Result<(), DisplayError> {
        if self.fail {
            return Err(DisplayError::BusWriteError);
        }
        if let DataFormat::U8(bytes) = buf {
            self.data_bytes.set(self.data_bytes.get() + bytes.len());
        }
        Ok(())
    }
}

// =============================================================================
// Joystick
// =============================================================================

/// Joystick that replays a fixed list of samples, then repeats the last one.
pub struct ScriptedJoystick<'a> {
    samples: &'a [AnalogSample],
    next: usize,
}

impl<'a> ScriptedJoystick<'a> {
    pub fn new(samples: &'a [AnalogSample]) -> Self { Self { samples, next: 0 } }
}

impl JoystickAxes for ScriptedJoystick<'_> {
    async fn read_axes(&mut self) -> AnalogSample {
        let idx = self.next.min(self.samples.len().saturating_sub(1));
        self.next += 1;
        self.samples.get(idx).copied().unwrap_or(AnalogSample::CENTER)
    }
}
