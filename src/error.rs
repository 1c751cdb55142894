/// A GPIO access failed. `O` is the LED pins' error, `I` the buttons'.
///
/// On the nRF52840 both are uninhabited, so the firmware never sees one; other
/// HALs report a real cause, which the `defmt` output carries along.
#[derive(Debug, PartialEq, Eq)]
pub enum Error<O, I> {
    Led(O),
    Button(I),
}

impl<O, I> defmt::Format for Error<O, I>
where
    O: defmt::Format,
    I: defmt::Format,
{
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Error::Led(cause) => defmt::write!(fmt, "LED pin write failed: {}", cause),
            Error::Button(cause) => defmt::write!(fmt, "button pin read failed: {}", cause),
        }
    }
}
