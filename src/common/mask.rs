use std::ops::Deref;

use super::error::{QRError, QRResult};

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
pub struct MaskPattern(u8);

impl MaskPattern {
    // Pattern 000, flips modules where (r + c) mod 2 == 0
    pub const CHECKERBOARD: Self = Self(0b000);

    pub fn new(pattern: u8) -> QRResult<Self> {
        if pattern >= 8 {
            return Err(QRError::InvalidMaskingPattern);
        }
        Ok(Self(pattern))
    }
}

impl Default for MaskPattern {
    fn default() -> Self {
        Self::CHECKERBOARD
    }
}

impl Deref for MaskPattern {
    type Target = u8;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

mod mask_functions {
    pub fn checkerboard(r: i16, c: i16) -> bool {
        (r + c) & 1 == 0
    }

    pub fn horizontal_lines(r: i16, _: i16) -> bool {
        r & 1 == 0
    }

    pub fn vertical_lines(_: i16, c: i16) -> bool {
        c % 3 == 0
    }

    pub fn diagonal_lines(r: i16, c: i16) -> bool {
        (r + c) % 3 == 0
    }

    pub fn large_checkerboard(r: i16, c: i16) -> bool {
        ((r >> 1) + (c / 3)) & 1 == 0
    }

    pub fn fields(r: i16, c: i16) -> bool {
        ((r * c) & 1) + ((r * c) % 3) == 0
    }

    pub fn diamonds(r: i16, c: i16) -> bool {
        (((r * c) & 1) + ((r * c) % 3)) & 1 == 0
    }

    pub fn meadow(r: i16, c: i16) -> bool {
        (((r + c) & 1) + ((r * c) % 3)) & 1 == 0
    }
}

impl MaskPattern {
    pub fn mask_function(self) -> fn(i16, i16) -> bool {
        match *self {
            0b000 => mask_functions::checkerboard,
            0b001 => mask_functions::horizontal_lines,
            0b010 => mask_functions::vertical_lines,
            0b011 => mask_functions::diagonal_lines,
            0b100 => mask_functions::large_checkerboard,
            0b101 => mask_functions::fields,
            0b110 => mask_functions::diamonds,
            0b111 => mask_functions::meadow,
            _ => unreachable!("Invalid pattern"),
        }
    }
}

#[cfg(test)]
mod mask_tests {
    use test_case::test_case;

    use super::MaskPattern;
    use crate::common::error::QRError;

    #[test]
    fn test_new() {
        assert_eq!(MaskPattern::new(7).map(|m| *m), Ok(7));
        assert_eq!(MaskPattern::new(8), Err(QRError::InvalidMaskingPattern));
        assert_eq!(MaskPattern::default(), MaskPattern::CHECKERBOARD);
    }

    #[test]
    fn test_checkerboard() {
        let f = MaskPattern::CHECKERBOARD.mask_function();
        assert!(f(0, 0));
        assert!(!f(0, 1));
        assert!(!f(1, 0));
        assert!(f(20, 20));
    }

    #[test_case(1, 2, 0, true)]
    #[test_case(2, 0, 3, true)]
    #[test_case(3, 1, 2, true)]
    #[test_case(4, 2, 0, false)]
    #[test_case(5, 3, 2, true)]
    #[test_case(6, 1, 4, false)]
    #[test_case(7, 1, 2, false)]
    fn test_mask_functions(pattern: u8, r: i16, c: i16, exp: bool) {
        let f = MaskPattern::new(pattern).unwrap().mask_function();
        assert_eq!(f(r, c), exp);
    }
}
