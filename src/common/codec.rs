use std::borrow::Cow;

use encoding_rs::mem::{encode_latin1_lossy, is_str_latin1};
use tracing::trace;

use super::{
    bit_utils::BitStream,
    error::{QRError, QRResult},
    metadata::{CHAR_CNT_BITS, DATA_BIT_CAPACITY, MAX_PAYLOAD_LEN, MODE_BITS, PADDING_CODEWORDS},
};

// Mode
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Mode {
    Byte = 0b0100,
}

// Text to single byte charset
//------------------------------------------------------------------------------

// ISO-8859-1, the byte mode default. Code points above U+00FF are rejected rather
// than replaced
pub fn encode_text(text: &str) -> QRResult<Cow<'_, [u8]>> {
    if !is_str_latin1(text) {
        return Err(QRError::InvalidChar);
    }
    Ok(encode_latin1_lossy(text))
}

// Encoder
//------------------------------------------------------------------------------

// Byte mode segment followed by terminator, bit padding and pad codewords
pub fn encode(data: &[u8]) -> QRResult<BitStream> {
    let mut bs = encode_bits(data)?;
    pad(&mut bs);
    Ok(bs)
}

// Mode indicator, char count and data bits without any padding
pub fn encode_bits(data: &[u8]) -> QRResult<BitStream> {
    if data.len() > MAX_PAYLOAD_LEN {
        return Err(QRError::DataTooLong);
    }

    let mut bs = BitStream::new(DATA_BIT_CAPACITY);
    writer::push_header(Mode::Byte, data.len(), &mut bs);
    writer::push_byte_data(data, &mut bs);

    trace!("Encoded {} bytes into {} bits", data.len(), bs.len());
    Ok(bs)
}

pub fn pad(bs: &mut BitStream) {
    writer::push_terminator(bs);
    writer::pad_remaining_capacity(bs);
    debug_assert_eq!(bs.len(), bs.capacity(), "Padded stream must fill capacity");
}

// Writer for encoded data
//------------------------------------------------------------------------------

pub(super) mod writer {
    use super::{BitStream, Mode, CHAR_CNT_BITS, MODE_BITS, PADDING_CODEWORDS};

    pub fn push_header(mode: Mode, char_cnt: usize, out: &mut BitStream) {
        out.push_bits(mode as u8, MODE_BITS);
        debug_assert!(
            char_cnt < (1 << CHAR_CNT_BITS),
            "Char count exceeds bit length: Char count {char_cnt}, Char count bits {CHAR_CNT_BITS}"
        );
        out.push_bits(char_cnt as u8, CHAR_CNT_BITS);
    }

    pub fn push_byte_data(data: &[u8], out: &mut BitStream) {
        for &b in data {
            out.push_bits(b, 8);
        }
    }

    pub fn push_terminator(out: &mut BitStream) {
        let bit_len = out.len();
        let bit_capacity = out.capacity();
        if bit_len < bit_capacity {
            let term_len = std::cmp::min(4, bit_capacity - bit_len);
            out.push_bits(0u8, term_len);
        }
    }

    pub fn pad_remaining_capacity(out: &mut BitStream) {
        push_padding_bits(out);
        push_padding_codewords(out);
    }

    fn push_padding_bits(out: &mut BitStream) {
        let offset = out.len() & 7;
        if offset > 0 {
            let padding_bits_len = 8 - offset;
            out.push_bits(0u8, padding_bits_len);
        }
    }

    fn push_padding_codewords(out: &mut BitStream) {
        let offset = out.len() & 7;
        debug_assert!(
            offset == 0,
            "Bit offset should be zero before padding codewords: {}",
            offset
        );

        let remain_byte_capacity = (out.capacity() - out.len()) >> 3;
        PADDING_CODEWORDS.iter().copied().cycle().take(remain_byte_capacity).for_each(|pc| {
            out.push_bits(pc, 8);
        });
    }

}
