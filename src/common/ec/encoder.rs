use super::galois::{GaloisField, GALOIS_FIELD};

// Reed-Solomon encoder
//------------------------------------------------------------------------------

/// Systematic Reed-Solomon encoder over GF(2^8) with a fixed number of ecc symbols.
/// Polynomials are stored highest degree first.
#[derive(Debug, Clone)]
pub struct ReedSolomon<'a> {
    gf: &'a GaloisField,
    gen_poly: Vec<u8>,
}

impl<'a> ReedSolomon<'a> {
    pub fn new(gf: &'a GaloisField, ecc_count: usize) -> Self {
        let gen_poly = generator_polynomial(gf, ecc_count);
        Self { gf, gen_poly }
    }

    pub fn ecc_count(&self) -> usize {
        self.gen_poly.len() - 1
    }

    pub fn generator(&self) -> &[u8] {
        &self.gen_poly
    }

    // Appends ecc_count zeros to the data and returns the remainder of its division by
    // the generator polynomial
    pub fn encode(&self, data: &[u8]) -> Vec<u8> {
        let mut dividend = data.to_vec();
        dividend.resize(data.len() + self.ecc_count(), 0);
        poly_rem(self.gf, &dividend, &self.gen_poly)
    }
}

// ECC: Error Correction Codeword generator
pub fn ecc(data: &[u8], ecc_count: usize) -> Vec<u8> {
    ReedSolomon::new(&GALOIS_FIELD, ecc_count).encode(data)
}

// Product of (x - 2^i) for i in 0..ecc_count, leading coefficient 1
pub fn generator_polynomial(gf: &GaloisField, ecc_count: usize) -> Vec<u8> {
    (0..ecc_count).fold(vec![1], |poly, i| poly_mul(gf, &poly, &[1, gf.exp(i)]))
}

pub fn poly_mul(gf: &GaloisField, p: &[u8], q: &[u8]) -> Vec<u8> {
    debug_assert!(!p.is_empty() && !q.is_empty(), "Cannot multiply empty polynomials");

    let mut res = vec![0; p.len() + q.len() - 1];
    for (i, &a) in p.iter().enumerate() {
        for (j, &b) in q.iter().enumerate() {
            res[i + j] ^= gf.mul(a, b);
        }
    }
    res
}

// Synthetic division, returns the last divisor.len() - 1 coefficients
pub fn poly_rem(gf: &GaloisField, dividend: &[u8], divisor: &[u8]) -> Vec<u8> {
    debug_assert!(divisor.first() == Some(&1), "Divisor must be monic");

    let rem_len = divisor.len().saturating_sub(1);
    // Lower degree than the divisor, the dividend is its own remainder
    if dividend.len() < divisor.len() {
        let mut res = vec![0; rem_len.saturating_sub(dividend.len())];
        res.extend_from_slice(&dividend[dividend.len().saturating_sub(rem_len)..]);
        return res;
    }

    let mut res = dividend.to_vec();
    for i in 0..=dividend.len() - divisor.len() {
        let lead_coeff = res[i];
        if lead_coeff == 0 {
            continue;
        }

        for (u, &v) in res[i + 1..].iter_mut().zip(divisor[1..].iter()) {
            if v != 0 {
                *u ^= gf.mul(v, lead_coeff);
            }
        }
    }

    res.split_off(dividend.len() + 1 - divisor.len())
}

#[cfg(test)]
mod ec_tests {
    use proptest::prelude::*;
    use test_case::test_case;

    use super::{ecc, generator_polynomial, poly_mul, poly_rem, ReedSolomon};
    use crate::common::ec::galois::GALOIS_FIELD;

    #[test]
    fn test_generator_polynomial() {
        let gen = generator_polynomial(&GALOIS_FIELD, 7);
        assert_eq!(gen, [1, 127, 122, 154, 164, 11, 68, 117]);
        let gen = generator_polynomial(&GALOIS_FIELD, 10);
        assert_eq!(gen, [1, 216, 194, 159, 111, 199, 94, 95, 113, 157, 193]);
    }

    #[test]
    fn test_generator_polynomial_empty() {
        assert_eq!(generator_polynomial(&GALOIS_FIELD, 0), [1]);
    }

    #[test]
    fn test_poly_mul() {
        assert_eq!(poly_mul(&GALOIS_FIELD, &[1, 1], &[1, 2]), [1, 3, 2]);
        assert_eq!(poly_mul(&GALOIS_FIELD, &[5], &[1, 0, 7]), [5, 0, GALOIS_FIELD.mul(5, 7)]);
    }

    #[test]
    fn test_poly_rem_exact_division() {
        let gen = generator_polynomial(&GALOIS_FIELD, 4);
        let product = poly_mul(&GALOIS_FIELD, &[3, 9, 27], &gen);
        assert_eq!(poly_rem(&GALOIS_FIELD, &product, &gen), [0, 0, 0, 0]);
    }

    #[test_case(b" [\x0bx\xd1r\xdcMC@\xec\x11\xec\x11\xec\x11", 10, b"\xc4#'w\xeb\xd7\xe7\xe2]\x17"; "v1_m")]
    #[test_case(b" [\x0bx\xd1r\xdcMC@\xec\x11\xec", 13, b"\xa8H\x16R\xd96\x9c\x00.\x0f\xb4z\x10"; "v1_q")]
    #[test_case(b"CUF\x86W&U\xc2w2\x06\x12\x06g&", 18, b"\xd5\xc7\x0b-s\xf7\xf1\xdf\xe5\xf8\x9au\x9aoV\xa1o'"; "v5_q")]
    fn test_ecc(data: &[u8], ecc_count: usize, exp_ecc: &[u8]) {
        assert_eq!(ecc(data, ecc_count), exp_ecc);
    }

    #[test]
    fn test_ecc_single_byte_payload() {
        let data = [
            0x40, 0x14, 0x10, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC,
            0x11, 0xEC, 0x11, 0xEC, 0x11,
        ];
        let rs = ReedSolomon::new(&GALOIS_FIELD, 7);
        assert_eq!(rs.encode(&data), [0x52, 0x4B, 0xB5, 0x3B, 0xAF, 0x8D, 0xF1]);
    }

    #[test]
    fn test_ecc_empty() {
        assert_eq!(ecc(&[], 7), [0; 7]);
        assert_eq!(ReedSolomon::new(&GALOIS_FIELD, 10).encode(&[]), [0; 10]);
    }

    #[test]
    fn test_poly_rem_short_dividend() {
        let gen = generator_polynomial(&GALOIS_FIELD, 4);
        assert_eq!(poly_rem(&GALOIS_FIELD, &[5, 6], &gen), [0, 0, 5, 6]);
        assert_eq!(poly_rem(&GALOIS_FIELD, &[], &gen), [0; 4]);
    }

    #[test]
    fn test_ecc_is_remainder() {
        let data = b"https://x.io";
        let rs = ReedSolomon::new(&GALOIS_FIELD, 7);
        let mut codeword = data.to_vec();
        codeword.extend(rs.encode(data));
        assert_eq!(poly_rem(&GALOIS_FIELD, &codeword, rs.generator()), [0; 7]);
    }

    proptest! {
        #[test]
        fn proptest_ecc_len_and_determinism(data in prop::collection::vec(any::<u8>(), 19)) {
            let rs = ReedSolomon::new(&GALOIS_FIELD, 7);
            let first = rs.encode(&data);
            prop_assert_eq!(first.len(), 7);
            prop_assert_eq!(first, rs.encode(&data));
        }

        #[test]
        fn proptest_single_bit_flip_changes_ecc(
            data in prop::collection::vec(any::<u8>(), 19),
            idx in 0usize..19,
            bit in 0u8..8,
        ) {
            let rs = ReedSolomon::new(&GALOIS_FIELD, 7);
            let mut flipped = data.clone();
            flipped[idx] ^= 1 << bit;
            prop_assert_ne!(rs.encode(&data), rs.encode(&flipped));
        }
    }
}
