//! The steady-state render loop.
//!
//! One [`RenderLoop::cycle`] performs, in order:
//!
//! 1. clear the surface
//! 2. draw the border for the current style
//! 3. sample both joystick axes
//! 4. draw the marker at the mapped position
//! 5. flush the surface to the panel
//! 6. drive the blue/red LEDs from the same sample
//!
//! The caller paces the loop (see [`LOOP_PERIOD_MS`](crate::config::LOOP_PERIOD_MS)).
//! Draw, flush and PWM errors are discarded; a failed frame is replaced by
//! the next one 50 ms later.

use embedded_hal::pwm::SetDutyCycle;

use crate::display::Surface;
use crate::leds::IntensityLeds;
use crate::mapping::{AnalogSample, DisplayPosition, LedIntensity, map_to_display, map_to_intensity};
use crate::render::{clear_frame, draw_border, draw_marker};
use crate::state::{ModeState, SharedMode};

/// Source of joystick readings.
#[allow(async_fn_in_trait)]
pub trait JoystickAxes {
    /// Read X then Y. Implementations never fail; on a read error they
    /// return their previous reading for that axis.
    async fn read_axes(&mut self) -> AnalogSample;
}

/// What one cycle sampled and produced.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cycle {
    pub sample: AnalogSample,
    pub position: DisplayPosition,
    pub intensity: LedIntensity,
    pub mode: ModeState,
}

/// Owner of the intensity LEDs for the lifetime of the loop.
pub struct RenderLoop<B, R> {
    leds: IntensityLeds<B, R>,
    cycles: u32,
}

impl<B, R> RenderLoop<B, R>
where
    B: SetDutyCycle,
    R: SetDutyCycle,
{
    pub fn new(leds: IntensityLeds<B, R>) -> Self { Self { leds, cycles: 0 } }

    /// Run one iteration (without the pacing delay).
    pub async fn cycle<S, J>(
        &mut self,
        surface: &mut S,
        joystick: &mut J,
        mode: &SharedMode,
    ) -> Cycle
    where
        S: Surface,
        J: JoystickAxes,
    {
        let border_style = mode.border_style();
        clear_frame(surface).ok();
        draw_border(surface, border_style).ok();

        let sample = joystick.read_axes().await;
        let position = map_to_display(sample);
        draw_marker(surface, position).ok();
        surface.flush().ok();

        // Read the flags after sampling so a button press during the ADC
        // transfer takes effect this frame
        let snapshot = mode.snapshot();
        let intensity = map_to_intensity(snapshot.pwm_leds_enabled, sample);
        self.leds.apply(intensity);

        self.cycles = self.cycles.wrapping_add(1);

        Cycle {
            sample,
            position,
            intensity,
            mode: ModeState {
                border_style,
                ..snapshot
            },
        }
    }

    /// Number of completed cycles (wraps).
    pub const fn cycles(&self) -> u32 { self.cycles }

    pub const fn leds(&self) -> &IntensityLeds<B, R> { &self.leds }
}

#[cfg(test)]
mod tests {
    use embassy_futures::block_on;

    use super::*;
    use crate::config::PWM_WRAP;
    use crate::state::{BorderStyle, ButtonHandler, ButtonSource};
    use crate::test_support::{FakePwm, FakeSurface, ScriptedJoystick};

    fn new_loop() -> RenderLoop<FakePwm, FakePwm> {
        RenderLoop::new(IntensityLeds::new(FakePwm::new(PWM_WRAP), FakePwm::new(PWM_WRAP)))
    }

    #[test]
    fn test_cycle_draws_and_flushes() {
        let mode = SharedMode::new();
        let mut surface = FakeSurface::new();
        let samples = [AnalogSample::new(0, 0)];
        let mut joystick = ScriptedJoystick::new(&samples);
        let mut render_loop = new_loop();

        let cycle = block_on(render_loop.cycle(&mut surface, &mut joystick, &mode));

        assert_eq!(cycle.position, DisplayPosition { x: 0, y: 0 });
        assert_eq!(cycle.mode, ModeState::default());
        assert_eq!(surface.flushes(), 1);
        assert_eq!(render_loop.cycles(), 1);
        // Marker in the corner overlaps the border
        assert!(surface.is_on(9, 9));
        assert!(surface.is_on(126, 62));
        assert!(!surface.is_on(10, 10));
    }

    #[test]
    fn test_cycle_clears_previous_marker() {
        let mode = SharedMode::new();
        let mut surface = FakeSurface::new();
        let samples = [AnalogSample::new(0, 0), AnalogSample::new(4095, 4095)];
        let mut joystick = ScriptedJoystick::new(&samples);
        let mut render_loop = new_loop();

        block_on(render_loop.cycle(&mut surface, &mut joystick, &mode));
        let cycle = block_on(render_loop.cycle(&mut surface, &mut joystick, &mode));

        assert_eq!(cycle.position, DisplayPosition { x: 112, y: 56 });
        assert!(!surface.is_on(5, 5));
        assert!(surface.is_on(115, 60));
        assert_eq!(surface.flushes(), 2);
    }

    #[test]
    fn test_leds_off_while_disabled() {
        let mode = SharedMode::new();
        let mut surface = FakeSurface::new();
        let samples = [AnalogSample::new(0, 4095)];
        let mut joystick = ScriptedJoystick::new(&samples);
        let mut render_loop = new_loop();

        let cycle = block_on(render_loop.cycle(&mut surface, &mut joystick, &mode));

        assert_eq!(cycle.intensity, LedIntensity::OFF);
        assert_eq!(render_loop.leds().current(), LedIntensity::OFF);
    }

    #[test]
    fn test_button_a_enables_leds() {
        let mode = SharedMode::new();
        let mut green = FakePwm::new(PWM_WRAP);
        let mut handler = ButtonHandler::new();
        let mut surface = FakeSurface::new();
        let samples = [AnalogSample::new(0, 4095)];
        let mut joystick = ScriptedJoystick::new(&samples);
        let mut render_loop = new_loop();

        handler.handle(ButtonSource::ButtonA, 0, &mode, &mut green);
        let cycle = block_on(render_loop.cycle(&mut surface, &mut joystick, &mode));

        assert!(cycle.mode.pwm_leds_enabled);
        assert_eq!(cycle.intensity, LedIntensity { blue: 4096, red: 4094 });
        assert_eq!(render_loop.leds().current(), cycle.intensity);
    }

    #[test]
    fn test_border_follows_joystick_button() {
        let mode = SharedMode::new();
        let mut green = FakePwm::new(PWM_WRAP);
        let mut handler = ButtonHandler::new();
        let mut surface = FakeSurface::new();
        let samples = [AnalogSample::CENTER];
        let mut joystick = ScriptedJoystick::new(&samples);
        let mut render_loop = new_loop();

        block_on(render_loop.cycle(&mut surface, &mut joystick, &mode));
        assert!(!surface.is_on(1, 1));

        handler.handle(ButtonSource::JoystickButton, 0, &mode, &mut green);
        let cycle = block_on(render_loop.cycle(&mut surface, &mut joystick, &mode));
        assert_eq!(cycle.mode.border_style, BorderStyle::Double);
        assert!(cycle.mode.green_led_on);
        assert!(surface.is_on(1, 1));

        handler.handle(ButtonSource::JoystickButton, 200_000, &mode, &mut green);
        block_on(render_loop.cycle(&mut surface, &mut joystick, &mode));
        assert!(!surface.is_on(1, 1));
    }
}
