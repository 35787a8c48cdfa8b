mod qr;
mod render;

pub use qr::{Module, QR};

use std::borrow::Cow;

use tracing::{debug, info, trace};

use crate::common::{
    bit_utils::BitStream,
    codec::{encode, encode_text},
    ec::{ReedSolomon, GALOIS_FIELD},
    error::QRResult,
    mask::MaskPattern,
    metadata::{metadata, DATA_CODEWORDS, ECC_CODEWORDS, TOTAL_BIT_CAPACITY, WIDTH},
};

/// Configures and builds a version 1-L symbol from a byte payload.
///
/// ```
/// use qrlink::{MaskPattern, QRBuilder};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let qr = QRBuilder::from_text("https://x.io")?.mask(MaskPattern::new(2)?).build()?;
/// assert_eq!(qr.width(), 21);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct QRBuilder<'a> {
    data: Cow<'a, [u8]>,
    mask: MaskPattern,
}

impl<'a> QRBuilder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data: Cow::Borrowed(data), mask: MaskPattern::default() }
    }

    /// Converts the text to its single byte representation first. Fails with
    /// [`QRError::InvalidChar`](crate::QRError::InvalidChar) for non-latin text.
    pub fn from_text(text: &'a str) -> QRResult<Self> {
        Ok(Self { data: encode_text(text)?, mask: MaskPattern::default() })
    }

    pub fn data(&mut self, data: &'a [u8]) -> &mut Self {
        self.data = Cow::Borrowed(data);
        self
    }

    pub fn mask(&mut self, mask: MaskPattern) -> &mut Self {
        self.mask = mask;
        self
    }

    pub fn metadata(&self) -> String {
        metadata(self.mask)
    }
}


impl QRBuilder<'_> {
    pub fn build(&self) -> QRResult<QR> {
        debug!("Generating QR {}", self.metadata());

        debug!("Encoding data...");
        let encoded_data = encode(&self.data)?;
        debug_assert_eq!(encoded_data.data().len(), DATA_CODEWORDS);

        debug!("Constructing payload with ecc...");
        let payload = Self::construct_payload(encoded_data.data());
        trace!("Payload codewords: {:02X?}", payload.data());

        debug!("Constructing QR...");
        let mut qr = QR::new();

        debug!("Drawing functional patterns...");
        qr.draw_all_function_patterns();

        debug!("Drawing encoding region...");
        qr.draw_encoding_region(payload);

        debug!("Applying mask {}...", *self.mask);
        qr.apply_mask(self.mask);

        let total_modules = WIDTH * WIDTH;
        let dark_modules = qr.count_dark_modules();
        info!(
            data_len = self.data.len(),
            dark_modules,
            light_modules = total_modules - dark_modules,
            balance = dark_modules * 100 / total_modules,
            "QR generated {}",
            qr.metadata()
        );

        Ok(qr)
    }

    // Data codewords followed by their ECC codewords, a single block at version 1-L
    fn construct_payload(data: &[u8]) -> BitStream {
        let rs = ReedSolomon::new(&GALOIS_FIELD, ECC_CODEWORDS);
        let ecc = rs.encode(data);

        let mut payload = BitStream::new(TOTAL_BIT_CAPACITY);
        payload.extend(data);
        payload.extend(&ecc);
        payload
    }
}
