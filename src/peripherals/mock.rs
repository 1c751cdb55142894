//! Stand-in pins and delay for running the logic without the board wiring

use core::{cell::Cell, convert::Infallible};

use embedded_hal::{
    blocking::delay::DelayMs,
    digital::v2::{InputPin, OutputPin, StatefulOutputPin},
};

/// Input whose level the test sets through the shared cell (`true` = high)
pub struct MockInput<'a>(pub &'a Cell<bool>);

impl InputPin for MockInput<'_> {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Self::Error> {
        Ok(self.0.get())
    }

    fn is_low(&self) -> Result<bool, Self::Error> {
        Ok(!self.0.get())
    }
}

/// Output that mirrors its level into the shared cell
pub struct MockOutput<'a>(pub &'a Cell<bool>);

impl OutputPin for MockOutput<'_> {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.set(true);
        Ok(())
    }
}

impl StatefulOutputPin for MockOutput<'_> {
    fn is_set_high(&self) -> Result<bool, Self::Error> {
        Ok(self.0.get())
    }

    fn is_set_low(&self) -> Result<bool, Self::Error> {
        Ok(!self.0.get())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub struct PinFault;

/// Output that starts failing once `broken` is set
pub struct FlakyOutput<'a> {
    pub level: &'a Cell<bool>,
    pub broken: &'a Cell<bool>,
}

impl OutputPin for FlakyOutput<'_> {
    type Error = PinFault;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        if self.broken.get() {
            return Err(PinFault);
        }
        self.level.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        if self.broken.get() {
            return Err(PinFault);
        }
        self.level.set(true);
        Ok(())
    }
}

#[derive(Default)]
pub struct MockDelay {
    pub elapsed_ms: u32,
    pub calls: u32,
}

impl DelayMs<u32> for MockDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.elapsed_ms += ms;
        self.calls += 1;
    }
}
