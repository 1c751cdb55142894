#![no_main]
#![no_std]

use nrf52840_hal::{
    self as hal,
    gpio::{p0::Parts as P0Parts, p1::Parts as P1Parts},
    Timer,
};

use alu4::{self as _, board::Board, controller::Controller, error::Error, logic::Config}; // global logger + panicking-behavior + memory layout

#[cortex_m_rt::entry]
fn main() -> ! {
    defmt::println!("4-bit ALU");

    let Some(board) = hal::pac::Peripherals::take() else {
        defmt::panic!("peripherals already taken");
    };
    let pins_0 = P0Parts::new(board.P0);
    let pins_1 = P1Parts::new(board.P1);
    let mut timer = Timer::new(board.TIMER0);

    let config = Config::default();
    defmt::info!("{}", config);

    let board = Board::configure(pins_0, pins_1, &mut timer, config.settle_delay_ms);
    let (leds, buttons) = match board.split() {
        Ok(drivers) => drivers,
        Err(_) => defmt::panic!("LED setup failed"),
    };

    let mut controller = Controller::new(leds, buttons, timer, config);
    match controller.run() {
        Ok(never) => match never {},
        // nRF pin errors are uninhabited, there is no cause to print
        Err(Error::Led(_)) => defmt::panic!("LED pin write failed"),
        Err(Error::Button(_)) => defmt::panic!("button pin read failed"),
    }
}
