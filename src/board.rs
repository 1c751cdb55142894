//! Pin assignment for the nRF52840 DK and the pin initializer.
//!
//! Buttons 1–3 of the DK sit on P0.11, P0.12 and P0.24 and short to ground.
//! The 15 LEDs hang off P1.01–P1.15 through resistors to ground, so they light
//! when the pin is driven high. Every pin, LEDs included, gets its pull-up
//! enabled.

use embedded_hal::{blocking::delay::DelayMs, digital::v2::OutputPin};
use nrf52840_hal::{
    gpio::{p0, p1, Disconnected, Input, Level, Output, Pin, Port, PullUp, PushPull},
    pac::{self, P0, P1},
};

use crate::peripherals::{Button, LedBank, LED_COUNT};

pub const BUTTON_COUNT: usize = 3;

pub type LedPin = Pin<Output<PushPull>>;
pub type ButtonPin = Pin<Input<PullUp>>;

pub struct Board {
    pub leds: [LedPin; LED_COUNT],
    pub buttons: [ButtonPin; BUTTON_COUNT],
}

impl Board {
    /// Configures every pin in turn, pausing `settle_delay_ms` after each one
    pub fn configure(
        p0: p0::Parts,
        p1: p1::Parts,
        delay: &mut impl DelayMs<u32>,
        settle_delay_ms: u32,
    ) -> Self {
        let led_pins: [Pin<Disconnected>; LED_COUNT] = [
            p1.p1_01.degrade(),
            p1.p1_02.degrade(),
            p1.p1_03.degrade(),
            p1.p1_04.degrade(),
            p1.p1_05.degrade(),
            p1.p1_06.degrade(),
            p1.p1_07.degrade(),
            p1.p1_08.degrade(),
            p1.p1_09.degrade(),
            p1.p1_10.degrade(),
            p1.p1_11.degrade(),
            p1.p1_12.degrade(),
            p1.p1_13.degrade(),
            p1.p1_14.degrade(),
            p1.p1_15.degrade(),
        ];
        let leds = led_pins.map(|pin| {
            let led = pin.into_push_pull_output(Level::Low);
            enable_pull_up(led.port(), led.pin());
            delay.delay_ms(settle_delay_ms);
            led
        });
        defmt::info!("LEDs configured");

        let button_pins: [Pin<Disconnected>; BUTTON_COUNT] = [
            p0.p0_11.degrade(),
            p0.p0_12.degrade(),
            p0.p0_24.degrade(),
        ];
        let buttons = button_pins.map(|pin| {
            let button = pin.into_pullup_input();
            delay.delay_ms(settle_delay_ms);
            button
        });
        defmt::info!("Buttons configured");

        Board { leds, buttons }
    }

    /// Wraps the pins into the drivers the controller works with
    pub fn split(
        self,
    ) -> Result<(LedBank<LedPin>, [Button<ButtonPin>; BUTTON_COUNT]), <LedPin as OutputPin>::Error>
    {
        let leds = LedBank::new(self.leds)?;
        Ok((leds, self.buttons.map(Button::new)))
    }
}

fn port_registers(port: Port) -> *const pac::p0::RegisterBlock {
    match port {
        Port::Port0 => P0::ptr(),
        Port::Port1 => P1::ptr(),
    }
}

/// The HAL only offers pull resistors on inputs, so the PULL field of the
/// pin's PIN_CNF is set through the PAC
fn enable_pull_up(port: Port, pin: u8) {
    let registers = port_registers(port);
    // SAFETY: read-modify-write of the config register of a pin we own, single core
    unsafe {
        (*registers).pin_cnf[usize::from(pin & 0x1f)].modify(|_, w| w.pull().pullup());
    }
}

/// Whether the pin's pull-up is switched on, straight from PIN_CNF
pub fn has_pull_up(port: Port, pin: u8) -> bool {
    let registers = port_registers(port);
    // SAFETY: plain register read
    unsafe {
        (*registers).pin_cnf[usize::from(pin & 0x1f)]
            .read()
            .pull()
            .is_pullup()
    }
}
