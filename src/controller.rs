use core::convert::Infallible;

use embedded_hal::{
    blocking::delay::DelayMs,
    digital::v2::{InputPin, OutputPin},
};

use crate::{
    board::BUTTON_COUNT,
    error::Error,
    logic::{
        formatting::{format_bits, format_register},
        AluState, ButtonAction, Config, InputMode, StateChange,
    },
    peripherals::{Button, LedBank, LedField},
};

/// Scans the buttons, keeps the ALU state and mirrors it on the LEDs
pub struct Controller<L, B, D> {
    leds: LedBank<L>,
    buttons: [Button<B>; BUTTON_COUNT],
    delay: D,
    state: AluState,
    config: Config,
}

impl<L, B, D> Controller<L, B, D>
where
    L: OutputPin,
    B: InputPin,
    D: DelayMs<u32>,
{
    /// `buttons` are in scan order: edit, next target, reset
    pub fn new(
        leds: LedBank<L>,
        buttons: [Button<B>; BUTTON_COUNT],
        delay: D,
        config: Config,
    ) -> Self {
        Controller {
            leds,
            buttons,
            delay,
            state: AluState::new(),
            config,
        }
    }

    pub fn state(&self) -> &AluState {
        &self.state
    }

    pub fn leds(&self) -> &LedBank<L> {
        &self.leds
    }

    /// Polls forever. Only returns if a pin fails.
    pub fn run(&mut self) -> Result<Infallible, Error<L::Error, B::Error>> {
        defmt::info!("Entering loop");
        loop {
            self.poll()?;
        }
    }

    /// One pass over all buttons. Every button that counts as pressed is
    /// handled in order, so two buttons held together both act.
    pub fn poll(&mut self) -> Result<(), Error<L::Error, B::Error>> {
        for (index, action) in ButtonAction::ALL.into_iter().enumerate() {
            if self.triggered(index)? {
                defmt::debug!("Button {=usize} pressed", index);
                self.handle(action)?;
                self.refresh_result()?;
                self.delay.delay_ms(self.config.press_delay_ms);
            }
        }
        self.delay.delay_ms(self.config.poll_delay_ms);
        Ok(())
    }

    fn triggered(&mut self, index: usize) -> Result<bool, Error<L::Error, B::Error>> {
        let Some(button) = self.buttons.get_mut(index) else {
            return Ok(false);
        };
        let triggered = match self.config.input_mode {
            InputMode::Level => button.is_pressed(),
            InputMode::Edge => button.check_pressed_edge(),
        };
        triggered.map_err(Error::Button)
    }

    /// Applies a button action and redraws whatever LEDs it changed. The
    /// result LEDs are left to `refresh_result`.
    pub fn handle(&mut self, action: ButtonAction) -> Result<StateChange, Error<L::Error, B::Error>> {
        let change = self.state.apply(action);
        match change {
            StateChange::FirstOperand(value) => {
                self.show(LedField::FirstOperand, value)?;
                defmt::info!("First operand: {=str}", format_register(value, 4).as_str());
            }
            StateChange::Operation(operation) => {
                self.show(LedField::Operation, operation.bits())?;
                defmt::info!("Operation: {} ({=str})", operation, operation.symbol());
            }
            StateChange::SecondOperand(value) => {
                self.show(LedField::SecondOperand, value)?;
                defmt::info!("Second operand: {=str}", format_register(value, 4).as_str());
            }
            StateChange::Target(target) => {
                defmt::info!("Switching to set {=u8} ({})", target.index(), target);
            }
            StateChange::Reset => {
                self.leds.clear_all().map_err(Error::Led)?;
                defmt::info!("Reset");
            }
        }
        Ok(change)
    }

    /// Recomputes the ALU output from the current state and puts it on the
    /// result LEDs
    pub fn refresh_result(&mut self) -> Result<(), Error<L::Error, B::Error>> {
        let output = self.state.result();
        let width = if self.config.clear_sign_on_logic_ops {
            LedField::Result.width()
        } else {
            output.width
        };
        self.leds
            .show(LedField::Result, output.value, width)
            .map_err(Error::Led)?;
        defmt::info!(
            "{=u8} {=str} {=u8} = {=str}",
            self.state.first_operand,
            self.state.operation.symbol(),
            self.state.second_operand,
            format_bits(output.value, output.width).as_str()
        );
        Ok(())
    }

    fn show(&mut self, field: LedField, value: u8) -> Result<(), Error<L::Error, B::Error>> {
        self.leds
            .show(field, value, field.width())
            .map_err(Error::Led)
    }

    pub fn free(self) -> (LedBank<L>, [Button<B>; BUTTON_COUNT], D) {
        (self.leds, self.buttons, self.delay)
    }
}
