use embedded_hal::digital::v2::{OutputPin, StatefulOutputPin};

pub const LED_COUNT: usize = 15;

/// Groups of LEDs that together show one register, least significant bit first
#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub enum LedField {
    FirstOperand,
    Operation,
    SecondOperand,
    Result,
}

impl LedField {
    pub fn first_led(self) -> usize {
        match self {
            LedField::FirstOperand => 0,
            LedField::Operation => 4,
            LedField::SecondOperand => 6,
            LedField::Result => 10,
        }
    }

    pub fn width(self) -> u8 {
        match self {
            LedField::FirstOperand => 4,
            LedField::Operation => 2,
            LedField::SecondOperand => 4,
            LedField::Result => 5,
        }
    }
}

/// The 15 active-high LEDs. Keeps the last level written to each one.
pub struct LedBank<P> {
    leds: [P; LED_COUNT],
    levels: [bool; LED_COUNT],
}

impl<P> LedBank<P>
where
    P: OutputPin,
{
    /// Takes over the pins as they are and switches every LED off
    pub fn new(leds: [P; LED_COUNT]) -> Result<Self, P::Error> {
        let mut bank = LedBank {
            leds,
            levels: [false; LED_COUNT],
        };
        bank.clear_all()?;
        Ok(bank)
    }

    fn set(&mut self, index: usize, on: bool) -> Result<(), P::Error> {
        debug_assert!(index < LED_COUNT, "LED index {} out of range", index);
        if let (Some(led), Some(level)) = (self.leds.get_mut(index), self.levels.get_mut(index)) {
            if on {
                led.set_high()?;
            } else {
                led.set_low()?;
            }
            *level = on;
        }
        Ok(())
    }

    /// Writes the low `width` bits of `value` to the field's LEDs. `width` is
    /// capped at the field's size; LEDs past `width` are not touched.
    pub fn show(&mut self, field: LedField, value: u8, width: u8) -> Result<(), P::Error> {
        let first = field.first_led();
        for bit in 0..width.min(field.width()) {
            self.set(first + bit as usize, (value >> bit) & 1 == 1)?;
        }
        Ok(())
    }

    pub fn clear_all(&mut self) -> Result<(), P::Error> {
        for index in 0..LED_COUNT {
            self.set(index, false)?;
        }
        Ok(())
    }

    /// Last level written to the LED, `false` for an unknown index
    pub fn level(&self, index: usize) -> bool {
        self.levels.get(index).copied().unwrap_or(false)
    }

    pub fn levels(&self) -> [bool; LED_COUNT] {
        self.levels
    }

    /// Value currently shown by a field, rebuilt from the recorded levels
    pub fn field_value(&self, field: LedField) -> u8 {
        let first = field.first_led();
        (0..field.width()).fold(0, |acc, bit| {
            if self.level(first + bit as usize) {
                acc | (1 << bit)
            } else {
                acc
            }
        })
    }
}

impl<P> LedBank<P>
where
    P: StatefulOutputPin,
{
    /// Levels as reported back by the pins themselves
    pub fn read_back(&self) -> Result<[bool; LED_COUNT], P::Error> {
        let mut levels = [false; LED_COUNT];
        for (level, led) in levels.iter_mut().zip(self.leds.iter()) {
            *level = led.is_set_high()?;
        }
        Ok(levels)
    }
}

#[cfg(test)]
pub mod tests {
    use core::cell::Cell;

    use super::{LedBank, LedField, LED_COUNT};
    use crate::peripherals::mock::MockOutput;

    pub fn new_bank_is_dark() {
        let cells: [Cell<bool>; LED_COUNT] = Default::default();
        for cell in cells.iter() {
            cell.set(true);
        }
        let bank = LedBank::new(core::array::from_fn(|i| MockOutput(&cells[i]))).unwrap();
        assert_eq!(bank.levels(), [false; LED_COUNT]);
        assert!(cells.iter().all(|cell| !cell.get()));
    }

    pub fn show_writes_field_bits() {
        let cells: [Cell<bool>; LED_COUNT] = Default::default();
        let mut bank = LedBank::new(core::array::from_fn(|i| MockOutput(&cells[i]))).unwrap();
        bank.show(LedField::SecondOperand, 0b1011, 4).unwrap();
        assert!(cells[6].get());
        assert!(cells[7].get());
        assert!(!cells[8].get());
        assert!(cells[9].get());
        assert_eq!(bank.field_value(LedField::SecondOperand), 0b1011);
        assert_eq!(bank.field_value(LedField::FirstOperand), 0);
    }

    pub fn show_leaves_leds_past_width() {
        let cells: [Cell<bool>; LED_COUNT] = Default::default();
        let mut bank = LedBank::new(core::array::from_fn(|i| MockOutput(&cells[i]))).unwrap();
        bank.show(LedField::Result, 0b10000, 5).unwrap();
        bank.show(LedField::Result, 0b0011, 4).unwrap();
        assert_eq!(bank.field_value(LedField::Result), 0b10011);
    }

    pub fn fields_fit_in_bank() {
        let fields = [
            LedField::FirstOperand,
            LedField::Operation,
            LedField::SecondOperand,
            LedField::Result,
        ];
        let mut next_free = 0;
        for field in fields {
            assert_eq!(field.first_led(), next_free);
            next_free = field.first_led() + field.width() as usize;
        }
        assert_eq!(next_free, LED_COUNT);
    }

    pub fn full_result_lights_last_led() {
        let cells: [Cell<bool>; LED_COUNT] = Default::default();
        let mut bank = LedBank::new(core::array::from_fn(|i| MockOutput(&cells[i]))).unwrap();
        bank.show(LedField::Result, 0b11111, 5).unwrap();
        assert!(cells[10..LED_COUNT].iter().all(|cell| cell.get()));
        assert!(cells[..10].iter().all(|cell| !cell.get()));
    }

    pub fn read_back_matches_levels() {
        let cells: [Cell<bool>; LED_COUNT] = Default::default();
        let mut bank = LedBank::new(core::array::from_fn(|i| MockOutput(&cells[i]))).unwrap();
        bank.show(LedField::Operation, 0b10, 2).unwrap();
        assert_eq!(bank.read_back().unwrap(), bank.levels());
        assert!(bank.level(5));
        assert!(!bank.level(99));
    }
}
