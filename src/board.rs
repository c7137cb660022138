//! Peripheral bring-up for the BitDogLab carrier (Raspberry Pi Pico, RP2040).
//!
//! Pin mapping:
//! - Joystick X: GPIO26 (ADC0), Y: GPIO27 (ADC1)
//! - Joystick button: GPIO22, Button A: GPIO5 (active low, internal pull-up)
//! - Green LED: GPIO11 (PWM5 B)
//! - Blue LED: GPIO12 (PWM6 A), Red LED: GPIO13 (PWM6 B)
//! - SSD1306 OLED: I2C1, SDA GPIO14, SCL GPIO15, address 0x3C

use defmt::info;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, Blocking, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_rp::pwm::{self, Pwm, PwmOutput};
use embassy_rp::{Peripherals, bind_interrupts};
use joystick_pico::config::{DISPLAY_I2C_ADDRESS, I2C_FREQUENCY_HZ, PWM_WRAP};
use joystick_pico::display::start_display;
use joystick_pico::error::InitError;
use joystick_pico::leds::set_green_led;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

use crate::joystick::AdcJoystick;

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => adc::InterruptHandler;
});

/// SSD1306 128x64 in buffered mode on blocking I2C1.
pub type Oled = Ssd1306<
    I2CInterface<I2c<'static, I2C1, Blocking>>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

/// Every peripheral the firmware uses, configured and ready.
pub struct Board {
    pub display: Oled,
    pub joystick: AdcJoystick,
    pub joystick_button: Input<'static>,
    pub button_a: Input<'static>,
    pub blue: PwmOutput<'static>,
    pub red: PwmOutput<'static>,
    pub green: PwmOutput<'static>,
}

/// Configure all inputs and outputs once.
///
/// Returns the first step that failed; nothing is retried.
pub fn init_board(p: Peripherals) -> Result<Board, InitError> {
    // Joystick axes
    let adc = Adc::new(p.ADC, Irqs, adc::Config::default());
    let x = Channel::new_pin(p.PIN_26, Pull::None);
    let y = Channel::new_pin(p.PIN_27, Pull::None);
    let joystick = AdcJoystick::new(adc, x, y);
    info!("ADC initialized");

    // Buttons (active-low with internal pull-up)
    let joystick_button = Input::new(p.PIN_22, Pull::Up);
    let button_a = Input::new(p.PIN_5, Pull::Up);
    info!("Buttons initialized");

    // Display
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config);
    let interface = I2CDisplayInterface::new_custom_address(i2c, DISPLAY_I2C_ADDRESS);
    let mut display =
        Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0).into_buffered_graphics_mode();
    start_display(&mut display)?;
    info!("Display initialized");

    // LEDs: all slices wrap at PWM_WRAP and start dark
    let mut pwm_config = pwm::Config::default();
    pwm_config.top = PWM_WRAP;

    let (blue, red) = Pwm::new_output_ab(p.PWM_SLICE6, p.PIN_12, p.PIN_13, pwm_config.clone()).split();
    let (_, green) = Pwm::new_output_b(p.PWM_SLICE5, p.PIN_11, pwm_config).split();

    let blue = blue.ok_or(InitError::PwmChannel)?;
    let red = red.ok_or(InitError::PwmChannel)?;
    let mut green = green.ok_or(InitError::PwmChannel)?;
    set_green_led(&mut green, false);
    info!("PWM initialized (wrap = {})", PWM_WRAP);

    Ok(Board {
        display,
        joystick,
        joystick_button,
        button_a,
        blue,
        red,
        green,
    })
}
