/// Widest register we ever print
pub const MAX_BITS: u8 = 8;

/// Binary digits of `value`, most significant first, exactly `width` long
pub fn format_bits(value: u8, width: u8) -> heapless::String<8> {
    let mut output: heapless::String<8> = heapless::String::new();
    for bit in (0..width.min(MAX_BITS)).rev() {
        let digit = if (value >> bit) & 1 == 1 { '1' } else { '0' };
        // can't overflow, width is clamped to the capacity
        output.push(digit).ok();
    }
    output
}

/// Register value as decimal followed by its LED pattern, e.g. `5 [0101]`
pub fn format_register(value: u8, width: u8) -> heapless::String<16> {
    let mut output: heapless::String<16> = heapless::String::new();
    let bits = format_bits(value, width);
    // at most "255 [" + 8 digits + "]"
    ufmt::uwrite!(output, "{} [{}]", value, bits.as_str()).ok();
    output
}

#[cfg(test)]
pub mod tests {
    use super::{format_bits, format_register};

    pub fn bits_zero() {
        let res = format_bits(0, 4);
        assert_eq!(res.as_str(), "0000");
    }

    pub fn bits_sign_pattern() {
        let res = format_bits(0b10010, 5);
        assert_eq!(res.as_str(), "10010");
    }

    pub fn bits_truncate_to_width() {
        let res = format_bits(0b1_0110, 4);
        assert_eq!(res.as_str(), "0110");
    }

    pub fn bits_clamp_width() {
        let res = format_bits(0xff, 12);
        assert_eq!(res.as_str(), "11111111");
    }

    pub fn register_operand() {
        let res = format_register(5, 4);
        assert_eq!(res.as_str(), "5 [0101]");
    }

    pub fn register_operation() {
        let res = format_register(3, 2);
        assert_eq!(res.as_str(), "3 [11]");
    }
}
