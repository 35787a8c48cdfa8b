//! # qrlink
//!
//! A Rust library for turning a short link into a Version 1 QR code with Reed-Solomon
//! error correction.
//!
//! ## Features
//!
//! - **Link Validation**: Accepts http, https, ftp and ftps links with a domain, `localhost`, IPv4 or IPv6 host
//! - **Byte Mode Encoding**: Latin text is carried in byte mode, padded to the full data capacity
//! - **Reed-Solomon Error Correction**: 7 ECC codewords over GF(2^8), error correction level L
//! - **Masking**: All eight standard mask patterns, checkerboard by default
//! - **Rendering**: Grayscale images through the `image` crate, or block characters for terminals
//!
//! ## Quick Start
//!
//! ```rust
//! use qrlink::{validate_link, QRBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let link = "https://x.io";
//! validate_link(link)?;
//!
//! let qr = QRBuilder::from_text(link)?.build()?;
//! let img = qr.render(8); // 8 pixels per module
//! assert_eq!(img.dimensions(), (168, 168));
//! # Ok(())
//! # }
//! ```
//!
//! ### Choosing a mask
//!
//! ```rust
//! use qrlink::{MaskPattern, QRBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let qr = QRBuilder::new(b"https://x.io").mask(MaskPattern::new(3)?).build()?;
//! let img = qr.render_with_quiet_zone(4, 4); // 4 module wide border
//! assert_eq!(img.width(), (21 + 8) * 4);
//! # Ok(())
//! # }
//! ```
//!
//! ## Symbol
//!
//! Only version 1 at error correction level L is produced: 21x21 modules holding 19 data
//! codewords and 7 ECC codewords. A byte mode payload may be at most 17 bytes long.

#![allow(clippy::items_after_test_module)]

pub mod builder;
pub(crate) mod common;

pub use builder::{Module, QRBuilder, QR};
pub use common::codec::encode_text;
pub use common::ec::{ecc, GaloisField, ReedSolomon, GALOIS_FIELD};
pub use common::error::{QRError, QRResult};
pub use common::link::validate_link;
pub use common::mask::MaskPattern;
pub use common::metadata::{Color, MAX_PAYLOAD_LEN, WIDTH};
