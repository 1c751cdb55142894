use embedded_hal::digital::v2::InputPin;

/// Push-button wired to ground, read through a pull-up
pub struct Button<P> {
    pin: P,
    was_pressed: bool,
}

impl<P> Button<P>
where
    P: InputPin,
{
    /// The pin must already be configured as a pull-up input
    pub fn new(pin: P) -> Self {
        Button {
            pin,
            was_pressed: false,
        }
    }

    pub fn is_pressed(&self) -> Result<bool, P::Error> {
        self.pin.is_low()
    }

    /// Check when button changes state from not being pressed to being pressed
    pub fn check_pressed_edge(&mut self) -> Result<bool, P::Error> {
        let is_pressed = self.is_pressed()?;
        let pressed_edge = !self.was_pressed && is_pressed;
        self.was_pressed = is_pressed;
        Ok(pressed_edge)
    }
}
