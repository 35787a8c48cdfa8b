use std::{fmt::Display, mem};

use num_traits::PrimInt;

use super::metadata::TOTAL_CODEWORDS;

// Bit stream
//------------------------------------------------------------------------------

/// Append-only sequence of bits packed MSB first, with a read cursor so that the
/// finished stream can be drained bit by bit into the symbol.
#[derive(Debug, Clone)]
pub struct BitStream {
    data: [u8; MAX_PAYLOAD_SIZE],
    // Bit length
    len: usize,
    // Max bit capacity
    capacity: usize,
    // Pointer to take bits
    cursor: usize,
}

impl BitStream {
    pub fn new(capacity: usize) -> Self {
        debug_assert!(
            capacity <= MAX_PAYLOAD_SIZE << 3,
            "Capacity exceeds max payload size: Capacity {capacity}"
        );
        Self { data: [0; MAX_PAYLOAD_SIZE], len: 0, capacity, cursor: 0 }
    }

    // Input past the symbol's codeword capacity is dropped
    pub fn from(inp: &[u8]) -> Self {
        debug_assert!(
            inp.len() <= MAX_PAYLOAD_SIZE,
            "Input exceeds max payload size: Input {}, Max {MAX_PAYLOAD_SIZE}",
            inp.len()
        );
        let len = inp.len().min(MAX_PAYLOAD_SIZE);
        let bit_len = len << 3;
        let mut data = [0; MAX_PAYLOAD_SIZE];
        data[..len].copy_from_slice(&inp[..len]);
        Self { data, len: bit_len, capacity: bit_len, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn data(&self) -> &[u8] {
        &self.data[..(self.len + 7) >> 3]
    }

    #[cfg(test)]
    pub fn to_bit_str(&self) -> String {
        (0..self.len)
            .map(|i| if (self.data[i >> 3] << (i & 7)) & 0x80 != 0 { '1' } else { '0' })
            .collect()
    }
}

// Push bits for bit stream
//------------------------------------------------------------------------------

impl BitStream {
    pub fn push_bits<T>(&mut self, bits: T, size: usize)
    where
        T: PrimInt + Display,
    {
        let max_bits = mem::size_of::<T>() * 8;
        debug_assert!(
            size >= max_bits - bits.leading_zeros() as usize,
            "Bit count shouldn't exceed bit length: Length {size}, Bits {bits}"
        );
        debug_assert!(
            self.len + size <= self.capacity,
            "Insufficient capacity: Capacity {}, Size {}",
            self.capacity,
            self.len + size
        );

        match size {
            0 => (),
            1..=8 => {
                let bits = bits.to_u8().unwrap_or_default();
                let offset = self.len & 7;
                let pos = self.len >> 3;

                if offset + size <= 8 {
                    self.data[pos] |= bits << (8 - size - offset);
                } else {
                    self.data[pos] |= bits >> (size + offset - 8);
                    self.data[pos + 1] = bits << (16 - size - offset);
                }

                self.len += size;
            }
            9..=16 => {
                let bits = bits.to_u16().unwrap_or_default();
                self.push_bits((bits >> 8) as u8, size - 8);
                self.push_bits((bits & 0xFF) as u8, 8);
            }
            _ => unreachable!("Bits from only u8 and u16 can be pushed"),
        }
    }

    pub fn push(&mut self, bit: bool) {
        debug_assert!(
            self.len < self.capacity,
            "Insufficient capacity: Capacity {}, Size {}",
            self.capacity,
            self.len + 1
        );

        if bit {
            let offset = self.len & 7;
            let pos = self.len >> 3;
            self.data[pos] |= 0b10000000 >> offset;
        }

        self.len += 1;
    }

    pub fn extend(&mut self, arr: &[u8]) {
        debug_assert!(
            (self.len & 7) == 0,
            "Bit offset must be zero to extend from another array: Bit offset {}",
            self.len & 7
        );
        let pos = self.len >> 3;
        let arr_bits = arr.len() << 3;
        debug_assert!(
            self.len + arr_bits <= self.capacity,
            "Extension shouldn't overflow capacity: Capacity {}, Size {}",
            self.capacity,
            self.len + arr_bits
        );

        self.data[pos..pos + arr.len()].copy_from_slice(arr);
        self.len += arr_bits;
    }
}


// Take bits for bit stream
//------------------------------------------------------------------------------

impl BitStream {
    pub fn take_bit(&mut self) -> Option<bool> {
        if self.cursor == self.len {
            return None;
        }

        let offset = self.cursor & 7;
        let pos = self.cursor >> 3;
        let bit = (self.data[pos] << offset) >> 7;

        self.cursor += 1;

        Some(bit != 0)
    }
}

impl Iterator for BitStream {
    type Item = bool;
    fn next(&mut self) -> Option<Self::Item> {
        self.take_bit()
    }
}

#[cfg(test)]
mod bit_stream_take_tests {

    use super::{BitStream, MAX_PAYLOAD_SIZE};

    #[test]
    fn test_take() {
        let mut bs = BitStream::from(&[0b10110000]);
        let bits = Iterator::take(&mut bs, 4).collect::<Vec<_>>();
        assert_eq!(bits, [true, false, true, true]);
        assert_eq!(bs.count(), 4);
    }

    #[test]
    fn test_from_full_payload() {
        let bs = BitStream::from(&[0xA5; MAX_PAYLOAD_SIZE]);
        assert_eq!(bs.len(), MAX_PAYLOAD_SIZE << 3);
        assert_eq!(bs.capacity(), MAX_PAYLOAD_SIZE << 3);
        assert_eq!(bs.data(), [0xA5; MAX_PAYLOAD_SIZE]);
    }

    #[test]
    #[should_panic]
    fn test_from_oversized_payload() {
        BitStream::from(&[0; MAX_PAYLOAD_SIZE + 1]);
    }

    #[test]
    fn test_take_empty() {
        let mut bs = BitStream::from(&[]);
        assert_eq!(bs.take_bit(), None);
    }
}

// Global constants
//------------------------------------------------------------------------------

pub const MAX_PAYLOAD_SIZE: usize = TOTAL_CODEWORDS;
