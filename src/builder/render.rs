use image::{GrayImage, Luma};

use super::qr::{Module, QR};
use crate::common::metadata::Color;

// Render
//------------------------------------------------------------------------------

impl QR {
    /// Grayscale image with each module drawn as a `module_sz` square. Dark modules are
    /// black and light modules white. No quiet zone is added.
    pub fn render(&self, module_sz: u32) -> GrayImage {
        self.render_with_quiet_zone(module_sz, 0)
    }

    /// Same as [`QR::render`] with a white border `qz_modules` modules wide on every side.
    ///
    /// The side length, `(21 + 2 * qz_modules) * module_sz`, must fit in a `u32`.
    pub fn render_with_quiet_zone(&self, module_sz: u32, qz_modules: u32) -> GrayImage {
        debug_assert!(
            (self.width() as u32)
                .checked_add(qz_modules.saturating_mul(2))
                .and_then(|w| w.checked_mul(module_sz))
                .is_some()
                && qz_modules <= u32::MAX / 2,
            "Image side overflows u32: Module size {module_sz}, Quiet zone {qz_modules}"
        );
        let qz_sz = qz_modules * module_sz;
        let qr_sz = self.width() as u32 * module_sz;
        let total_sz = qz_sz + qr_sz + qz_sz;

        let mut canvas = GrayImage::from_pixel(total_sz, total_sz, Luma([255]));
        for i in qz_sz..qz_sz + qr_sz {
            for j in qz_sz..qz_sz + qr_sz {
                let r = (i - qz_sz) / module_sz;
                let c = (j - qz_sz) / module_sz;

                let module = self.get(r as i16, c as i16);
                debug_assert!(module != Module::Empty, "Empty module found at: {r} {c}");

                let pixel = match *module {
                    Color::Dark => Luma([0]),
                    Color::Light => Luma([255]),
                };
                canvas.put_pixel(j, i, pixel);
            }
        }

        canvas
    }

    /// Text rendering for terminals, using full blocks for light modules so that the
    /// symbol reads correctly on a dark background.
    pub fn to_str(&self, module_sz: usize, qz_modules: usize) -> String {
        let qz_sz = qz_modules * module_sz;
        let qr_sz = self.width() * module_sz;
        let total_sz = qz_sz + qr_sz + qz_sz;

        let mut canvas = String::new();
        for i in 0..total_sz {
            for j in 0..total_sz {
                if i < qz_sz || i >= qz_sz + qr_sz || j < qz_sz || j >= qz_sz + qr_sz {
                    canvas.push('█');
                    continue;
                }
                let r = ((i - qz_sz) / module_sz) as i16;
                let c = ((j - qz_sz) / module_sz) as i16;
                canvas.push(self.get(r, c).select('█', ' '));
            }
            canvas.push('\n');
        }

        canvas
    }
}
