/// Operands are 4 bits wide
pub const OPERAND_MASK: u8 = 0x0f;

/// Set on the 5th result bit when a subtraction came out negative
pub const SIGN_BIT: u8 = 1 << 4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, defmt::Format)]
pub enum Operation {
    #[default]
    Add,
    Subtract,
    And,
    Or,
}

/// What the ALU puts on the result LEDs. `width` is the number of result LEDs
/// that get driven; AND and OR leave the 5th one alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub struct AluOutput {
    pub value: u8,
    pub width: u8,
}

impl Operation {
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Operation::Add,
            1 => Operation::Subtract,
            2 => Operation::And,
            _ => Operation::Or,
        }
    }

    /// Encoding shown on the two operation LEDs
    pub fn bits(self) -> u8 {
        match self {
            Operation::Add => 0,
            Operation::Subtract => 1,
            Operation::And => 2,
            Operation::Or => 3,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Operation::Add => Operation::Subtract,
            Operation::Subtract => Operation::And,
            Operation::And => Operation::Or,
            Operation::Or => Operation::Add,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::And => "&",
            Operation::Or => "|",
        }
    }

    pub fn apply(self, a: u8, b: u8) -> AluOutput {
        let a = a & OPERAND_MASK;
        let b = b & OPERAND_MASK;
        match self {
            // 15 + 15 still fits in 5 bits, the carry lands on the 5th LED
            Operation::Add => AluOutput {
                value: a + b,
                width: 5,
            },
            Operation::Subtract => {
                let negative = a < b;
                let magnitude = a.abs_diff(b) & OPERAND_MASK;
                let sign = if negative { SIGN_BIT } else { 0 };
                AluOutput {
                    value: magnitude | sign,
                    width: 5,
                }
            }
            Operation::And => AluOutput {
                value: a & b,
                width: 4,
            },
            Operation::Or => AluOutput {
                value: a | b,
                width: 4,
            },
        }
    }
}
