use std::ops::Not;

use super::mask::MaskPattern;

// Color
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Color {
    Light,
    Dark,
}

impl Not for Color {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl From<bool> for Color {
    fn from(bit: bool) -> Self {
        if bit {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

impl Color {
    pub fn select<T>(&self, light: T, dark: T) -> T {
        match self {
            Self::Light => light,
            Self::Dark => dark,
        }
    }
}

// Symbol parameters
//------------------------------------------------------------------------------
// Only version 1 at error correction level L is generated.

pub const VERSION: usize = 1;

pub const WIDTH: usize = 21;

pub const EC_LEVEL: char = 'L';

pub const DATA_CODEWORDS: usize = 19;

pub const ECC_CODEWORDS: usize = 7;

pub const TOTAL_CODEWORDS: usize = DATA_CODEWORDS + ECC_CODEWORDS;

pub const DATA_BIT_CAPACITY: usize = DATA_CODEWORDS << 3;

pub const TOTAL_BIT_CAPACITY: usize = TOTAL_CODEWORDS << 3;

pub const MODE_BITS: usize = 4;

pub const CHAR_CNT_BITS: usize = 8;

// Largest byte mode payload that fits after the mode and char count header
pub const MAX_PAYLOAD_LEN: usize = (DATA_BIT_CAPACITY - MODE_BITS - CHAR_CNT_BITS) >> 3;

pub const PADDING_CODEWORDS: [u8; 2] = [0b1110_1100, 0b0001_0001];

// Format info
//------------------------------------------------------------------------------

pub const EC_LEVEL_BITS: u16 = 0b01;

pub const FORMAT_INFO_BIT_LEN: usize = 15;

pub const FORMAT_ERROR_BIT_LEN: usize = 10;

pub const FORMAT_GENERATOR: u16 = 0b101_0011_0111;

pub const FORMAT_MASK: u16 = 0b101_0100_0001_0010;

// Coordinates are listed from the most significant bit to the least significant bit.
// Negative values wrap around from the bottom or right edge.
pub const FORMAT_INFO_COORDS_QR_MAIN: [(i16, i16); 15] = [
    (8, 0),
    (8, 1),
    (8, 2),
    (8, 3),
    (8, 4),
    (8, 5),
    (8, 7),
    (8, 8),
    (7, 8),
    (5, 8),
    (4, 8),
    (3, 8),
    (2, 8),
    (1, 8),
    (0, 8),
];

pub const FORMAT_INFO_COORDS_QR_SIDE: [(i16, i16); 15] = [
    (-1, 8),
    (-2, 8),
    (-3, 8),
    (-4, 8),
    (-5, 8),
    (-6, 8),
    (-7, 8),
    (8, -8),
    (8, -7),
    (8, -6),
    (8, -5),
    (8, -4),
    (8, -3),
    (8, -2),
    (8, -1),
];

// Always dark module above the bottom left format strip
pub const DARK_MODULE_COORD: (i16, i16) = (-8, 8);

// 5 data bits (ec level, mask) followed by 10 BCH bits, xored with the format mask
pub fn generate_format_info_qr(mask: MaskPattern) -> u16 {
    let data = (EC_LEVEL_BITS << 3) | *mask as u16;
    let mut rem = data << FORMAT_ERROR_BIT_LEN;
    for i in (FORMAT_ERROR_BIT_LEN..FORMAT_INFO_BIT_LEN).rev() {
        if rem & (1 << i) != 0 {
            rem ^= FORMAT_GENERATOR << (i - FORMAT_ERROR_BIT_LEN);
        }
    }
    ((data << FORMAT_ERROR_BIT_LEN) | rem) ^ FORMAT_MASK
}

pub fn metadata(mask: MaskPattern) -> String {
    format!("{{ Version: {VERSION}, Ec level: {EC_LEVEL}, Mask: {} }}", *mask)
}

#[cfg(test)]
mod metadata_tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_capacities() {
        assert_eq!(DATA_BIT_CAPACITY, 152);
        assert_eq!(TOTAL_BIT_CAPACITY, 208);
        assert_eq!(MAX_PAYLOAD_LEN, 17);
    }

    #[test]
    fn test_color() {
        assert_eq!(!Color::Dark, Color::Light);
        assert_eq!(Color::from(true), Color::Dark);
        assert_eq!(Color::Light.select('.', '#'), '.');
    }

    #[test_case(0, 0b111011111000100)]
    #[test_case(1, 0b111001011110011)]
    #[test_case(2, 0b111110110101010)]
    #[test_case(3, 0b111100010011101)]
    #[test_case(4, 0b110011000101111)]
    #[test_case(5, 0b110001100011000)]
    #[test_case(6, 0b110110001000001)]
    #[test_case(7, 0b110100101110110)]
    fn test_format_info(mask: u8, exp: u16) {
        let mask = MaskPattern::new(mask).unwrap();
        assert_eq!(generate_format_info_qr(mask), exp);
    }

    #[test]
    fn test_metadata() {
        assert_eq!(metadata(MaskPattern::CHECKERBOARD), "{ Version: 1, Ec level: L, Mask: 0 }");
    }
}
