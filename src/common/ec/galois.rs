// Galois field GF(2^8)
//------------------------------------------------------------------------------

/// Exponent and log lookup tables for GF(2^8) reduced by x^8 + x^4 + x^3 + x^2 + 1.
///
/// The exponent table is doubled so that `exp[log[a] + log[b]]` never needs a modulo.
/// `log[0]` is undefined and left as zero; callers must special case zero operands.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct GaloisField {
    exp: [u8; 512],
    log: [u8; 256],
}

impl GaloisField {
    pub const fn new() -> Self {
        let mut exp = [0u8; 512];
        let mut log = [0u8; 256];

        let mut x: u16 = 1;
        let mut i = 0;
        while i < 255 {
            exp[i] = x as u8;
            log[x as usize] = i as u8;
            x <<= 1;
            if x & 0x100 != 0 {
                x ^= PRIMITIVE_POLY;
            }
            i += 1;
        }

        let mut i = 0;
        while i < 255 {
            exp[i + 255] = exp[i];
            i += 1;
        }

        Self { exp, log }
    }

    #[inline]
    pub fn exp(&self, power: usize) -> u8 {
        debug_assert!(power < 510, "Power exceeds doubled table: {power}");
        self.exp[power]
    }

    #[inline]
    pub fn log(&self, elem: u8) -> usize {
        debug_assert!(elem != 0, "Log of zero is undefined");
        self.log[elem as usize] as usize
    }

    #[inline]
    pub fn mul(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        self.exp[self.log(a) + self.log(b)]
    }
}

impl Default for GaloisField {
    fn default() -> Self {
        Self::new()
    }
}

// Tables are built at compile time and only ever read afterwards
pub static GALOIS_FIELD: GaloisField = GaloisField::new();

pub const PRIMITIVE_POLY: u16 = 0x11D;
