use std::ops::Deref;

use crate::common::{
    bit_utils::BitStream,
    iter::EncRegionIter,
    mask::MaskPattern,
    metadata::{
        generate_format_info_qr, metadata, Color, DARK_MODULE_COORD, FORMAT_INFO_BIT_LEN,
        FORMAT_INFO_COORDS_QR_MAIN, FORMAT_INFO_COORDS_QR_SIDE, WIDTH,
    },
};

/// A module is `Empty` until some stage claims it. Every other variant is reserved,
/// which keeps the color and the reserved flag of a cell from drifting apart.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Module {
    Empty,
    Func(Color),
    Format(Color),
    Data(Color),
}

impl Deref for Module {
    type Target = Color;
    fn deref(&self) -> &Self::Target {
        match self {
            Module::Empty => &Color::Light,
            Module::Func(c) => c,
            Module::Format(c) => c,
            Module::Data(c) => c,
        }
    }
}

impl Module {
    pub fn is_reserved(&self) -> bool {
        !matches!(self, Module::Empty)
    }
}

#[derive(Debug, Clone)]
pub struct QR {
    grid: [Module; WIDTH * WIDTH],
    w: usize,
    mask: Option<MaskPattern>,
}

// QR type for builder
//------------------------------------------------------------------------------

impl QR {
    pub fn new() -> Self {
        Self { grid: [Module::Empty; WIDTH * WIDTH], w: WIDTH, mask: None }
    }

    pub fn grid(&self) -> &[Module] {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn mask(&self) -> Option<MaskPattern> {
        self.mask
    }

    pub fn metadata(&self) -> String {
        metadata(self.mask.unwrap_or_default())
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.iter().filter(|&m| matches!(**m, Color::Dark)).count()
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let w = self.w as i16;
        let mut res = String::with_capacity((w * (w + 1)) as usize);
        res.push('\n');
        for i in 0..w {
            for j in 0..w {
                let c = match self.get(i, j) {
                    Module::Empty => '.',
                    Module::Func(Color::Dark) => 'f',
                    Module::Func(Color::Light) => 'F',
                    Module::Format(Color::Dark) => 'm',
                    Module::Format(Color::Light) => 'M',
                    Module::Data(Color::Dark) => 'd',
                    Module::Data(Color::Light) => 'D',
                };
                res.push(c);
            }
            res.push('\n');
        }
        res
    }

    fn coord_to_index(&self, r: i16, c: i16) -> usize {
        let w = self.w as i16;
        debug_assert!(-w <= r && r < w, "row should be greater than or equal to w");
        debug_assert!(-w <= c && c < w, "column should be greater than or equal to w");

        let r = if r < 0 { r + w } else { r };
        let c = if c < 0 { c + w } else { c };
        (r * w + c) as _
    }

    pub fn get(&self, r: i16, c: i16) -> Module {
        self.grid[self.coord_to_index(r, c)]
    }

    pub fn get_mut(&mut self, r: i16, c: i16) -> &mut Module {
        let index = self.coord_to_index(r, c);
        &mut self.grid[index]
    }

    pub fn set(&mut self, r: i16, c: i16, module: Module) {
        *self.get_mut(r, c) = module;
    }
}

impl Default for QR {
    fn default() -> Self {
        Self::new()
    }
}


// Finder pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_finder_patterns(&mut self) {
        self.draw_finder_pattern_at(3, 3);
        self.draw_finder_pattern_at(3, -4);
        self.draw_finder_pattern_at(-4, 3);
    }

    // Centre of the 7x7 pattern, ring 4 is the separator and is clipped at the edges
    fn draw_finder_pattern_at(&mut self, r: i16, c: i16) {
        let (dr_top, dr_bottom) = if r > 0 { (-3, 4) } else { (-4, 3) };
        let (dc_left, dc_right) = if c > 0 { (-3, 4) } else { (-4, 3) };
        for i in dr_top..=dr_bottom {
            for j in dc_left..=dc_right {
                self.set(
                    r + i,
                    c + j,
                    match (i, j) {
                        (4 | -4, _) | (_, 4 | -4) => Module::Func(Color::Light),
                        (3 | -3, _) | (_, 3 | -3) => Module::Func(Color::Dark),
                        (2 | -2, _) | (_, 2 | -2) => Module::Func(Color::Light),
                        _ => Module::Func(Color::Dark),
                    },
                );
            }
        }
    }
}

#[cfg(test)]
mod finder_pattern_tests {
    use super::QR;

    #[test]
    fn test_finder_pattern_qr() {
        let mut qr = QR::new();
        qr.draw_finder_patterns();
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             fffffffF.....Ffffffff\n\
             fFFFFFfF.....FfFFFFFf\n\
             fFfffFfF.....FfFfffFf\n\
             fFfffFfF.....FfFfffFf\n\
             fFfffFfF.....FfFfffFf\n\
             fFFFFFfF.....FfFFFFFf\n\
             fffffffF.....Ffffffff\n\
             FFFFFFFF.....FFFFFFFF\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             FFFFFFFF.............\n\
             fffffffF.............\n\
             fFFFFFfF.............\n\
             fFfffFfF.............\n\
             fFfffFfF.............\n\
             fFfffFfF.............\n\
             fFFFFFfF.............\n\
             fffffffF.............\n"
        );
    }
}

// Timing pattern
//------------------------------------------------------------------------------

impl QR {
    // Runs between the separators, dark on even indices
    fn draw_timing_pattern(&mut self) {
        let w = self.w as i16;
        let (off, last) = (6, w - 9);
        self.draw_line(off, 8, off, last);
        self.draw_line(8, off, last, off);
    }

    fn draw_line(&mut self, r1: i16, c1: i16, r2: i16, c2: i16) {
        debug_assert!(r1 == r2 || c1 == c2, "Line is neither vertical nor horizontal");

        if r1 == r2 {
            for j in c1..=c2 {
                let m =
                    if j & 1 == 0 { Module::Func(Color::Dark) } else { Module::Func(Color::Light) };
                self.set(r1, j, m);
            }
        } else {
            for i in r1..=r2 {
                let m =
                    if i & 1 == 0 { Module::Func(Color::Dark) } else { Module::Func(Color::Light) };
                self.set(i, c1, m);
            }
        }
    }
}


// All function patterns
//------------------------------------------------------------------------------

impl QR {
    pub fn draw_all_function_patterns(&mut self) {
        self.draw_finder_patterns();
        self.draw_timing_pattern();
    }
}

// Format info
//------------------------------------------------------------------------------

impl QR {
    // Placeholder bits, overwritten once the mask is known
    fn reserve_format_area(&mut self) {
        self.draw_format_info((1 << FORMAT_INFO_BIT_LEN) - 1);
    }

    pub fn draw_format_info(&mut self, format_info: u16) {
        self.draw_number(
            format_info,
            FORMAT_INFO_BIT_LEN,
            Module::Format(Color::Light),
            Module::Format(Color::Dark),
            &FORMAT_INFO_COORDS_QR_MAIN,
        );
        self.draw_number(
            format_info,
            FORMAT_INFO_BIT_LEN,
            Module::Format(Color::Light),
            Module::Format(Color::Dark),
            &FORMAT_INFO_COORDS_QR_SIDE,
        );
        let (r, c) = DARK_MODULE_COORD;
        self.set(r, c, Module::Format(Color::Dark));
    }

    fn draw_number(
        &mut self,
        number: u16,
        bit_len: usize,
        off_clr: Module,
        on_clr: Module,
        coords: &[(i16, i16)],
    ) {
        let mut mask = 1 << (bit_len - 1);
        for (r, c) in coords {
            if number & mask == 0 {
                self.set(*r, *c, off_clr);
            } else {
                self.set(*r, *c, on_clr);
            }
            mask >>= 1;
        }
    }
}


// Encoding region
//------------------------------------------------------------------------------

impl QR {
    pub fn draw_encoding_region(&mut self, payload: BitStream) {
        self.reserve_format_area();
        self.draw_payload(payload);

        debug_assert!(!self.grid.contains(&Module::Empty), "Empty module found in debug");
    }

    // Places bits along the zigzag, skipping reserved modules. Modules left over once the
    // payload runs out are light.
    fn draw_payload(&mut self, payload: BitStream) {
        let mut coords = EncRegionIter::new();
        for bit in payload {
            let module = Module::Data(Color::from(bit));
            for (r, c) in coords.by_ref() {
                if matches!(self.get(r, c), Module::Empty) {
                    self.set(r, c, module);
                    break;
                }
            }
        }
        self.fill_remainder_bits(coords);
    }

    fn fill_remainder_bits(&mut self, coords: impl Iterator<Item = (i16, i16)>) {
        for (r, c) in coords {
            if matches!(self.get(r, c), Module::Empty) {
                self.set(r, c, Module::Data(Color::Light));
            }
        }
    }

    // Flips data modules only, then writes the format info matching the pattern
    pub fn apply_mask(&mut self, pattern: MaskPattern) {
        self.mask = Some(pattern);
        let mask_fn = pattern.mask_function();
        let w = self.w as i16;
        for r in 0..w {
            for c in 0..w {
                if mask_fn(r, c) {
                    if let Module::Data(clr) = self.get(r, c) {
                        self.set(r, c, Module::Data(!clr))
                    }
                }
            }
        }
        let format_info = generate_format_info_qr(pattern);
        self.draw_format_info(format_info);
    }
}

#[cfg(test)]
mod encoding_region_tests {
    use super::{Module, QR};
    use crate::common::{
        bit_utils::BitStream,
        iter::EncRegionIter,
        mask::MaskPattern,
        metadata::{Color, TOTAL_BIT_CAPACITY},
    };

    fn function_qr() -> QR {
        let mut qr = QR::new();
        qr.draw_all_function_patterns();
        qr.reserve_format_area();
        qr
    }

    #[test]
    fn test_unreserved_modules_match_codeword_capacity() {
        let qr = function_qr();
        let visited = EncRegionIter::new().filter(|&(r, c)| !qr.get(r, c).is_reserved()).count();
        let empty = qr.grid().iter().filter(|m| !m.is_reserved()).count();
        assert_eq!(visited, TOTAL_BIT_CAPACITY);
        assert_eq!(empty, TOTAL_BIT_CAPACITY);
    }

    #[test]
    fn test_draw_payload_order() {
        let mut qr = function_qr();
        let mut payload = [0u8; 26];
        payload[0] = 0b1010_0000;
        qr.draw_payload(BitStream::from(&payload));
        assert_eq!(qr.get(20, 20), Module::Data(Color::Dark));
        assert_eq!(qr.get(20, 19), Module::Data(Color::Light));
        assert_eq!(qr.get(19, 20), Module::Data(Color::Dark));
        assert_eq!(qr.get(19, 19), Module::Data(Color::Light));
        assert!(!qr.grid().contains(&Module::Empty));
    }

    #[test]
    fn test_draw_payload_skips_reserved() {
        let mut qr = function_qr();
        qr.draw_payload(BitStream::from(&[0xFF; 26]));
        for r in 0..9 {
            for c in 0..9 {
                assert!(!matches!(qr.get(r, c), Module::Data(_)), "Data module at ({r}, {c})");
            }
        }
        let data_cnt = qr.grid().iter().filter(|m| matches!(m, Module::Data(Color::Dark))).count();
        assert_eq!(data_cnt, TOTAL_BIT_CAPACITY);
    }

    #[test]
    fn test_short_payload_fills_light() {
        let mut qr = function_qr();
        qr.draw_payload(BitStream::from(&[0xFF]));
        let dark = qr.grid().iter().filter(|m| matches!(m, Module::Data(Color::Dark))).count();
        let light = qr.grid().iter().filter(|m| matches!(m, Module::Data(Color::Light))).count();
        assert_eq!(dark, 8);
        assert_eq!(light, TOTAL_BIT_CAPACITY - 8);
    }

    #[test]
    fn test_apply_mask_flips_data_only() {
        let mut qr = function_qr();
        qr.draw_payload(BitStream::from(&[0u8; 26]));
        let before = qr.clone();
        qr.apply_mask(MaskPattern::CHECKERBOARD);
        assert_eq!(qr.mask(), Some(MaskPattern::CHECKERBOARD));
        for r in 0..21i16 {
            for c in 0..21i16 {
                match (before.get(r, c), qr.get(r, c)) {
                    (Module::Data(_), Module::Data(clr)) => {
                        let exp = if (r + c) % 2 == 0 { Color::Dark } else { Color::Light };
                        assert_eq!(clr, exp, "Data module at ({r}, {c})");
                    }
                    (Module::Func(a), Module::Func(b)) => assert_eq!(a, b),
                    (Module::Format(_), Module::Format(_)) => {}
                    (a, b) => panic!("Module kind changed at ({r}, {c}): {a:?} -> {b:?}"),
                }
            }
        }
    }
}
