/// How a held button is treated
#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub enum InputMode {
    /// Act on every poll that sees the button down. Holding a button repeats
    /// its action once per press delay.
    Level,
    /// Act only when the button goes from released to pressed
    Edge,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub struct Config {
    /// Pause after configuring each pin
    pub settle_delay_ms: u32,
    /// Pause after handling a pressed button
    pub press_delay_ms: u32,
    /// Pause between two scans of the buttons
    pub poll_delay_ms: u32,
    pub input_mode: InputMode,
    /// AND and OR only drive four result LEDs. When set, the fifth one is
    /// switched off for them instead of keeping a stale subtraction sign.
    pub clear_sign_on_logic_ops: bool,
}

pub const SETTLE_DELAY_MS: u32 = 100;
pub const PRESS_DELAY_MS: u32 = 500;
pub const POLL_DELAY_MS: u32 = 10;

impl Default for Config {
    fn default() -> Self {
        Config {
            settle_delay_ms: SETTLE_DELAY_MS,
            press_delay_ms: PRESS_DELAY_MS,
            poll_delay_ms: POLL_DELAY_MS,
            input_mode: InputMode::Level,
            clear_sign_on_logic_ops: false,
        }
    }
}
