use super::metadata::WIDTH;

// Iterator for placing data in encoding region of QR
//------------------------------------------------------------------------------

/// Walks the symbol in the two column wide zigzag used for codeword placement: starts
/// at the bottom right corner, visits the right then the left module of each row,
/// reverses vertical direction at the edges and jumps over the vertical timing column.
///
/// Every coordinate outside the timing column is yielded exactly once, reserved or not.
/// Callers skip modules that are already occupied.
#[derive(Debug, Clone)]
pub struct EncRegionIter {
    r: i16,
    c: i16,
    w: i16,
    vert_timing_col: i16,
}

impl EncRegionIter {
    pub const fn new() -> Self {
        let w = WIDTH as i16;
        Self { r: w - 1, c: w - 1, w, vert_timing_col: 6 }
    }
}

impl Default for EncRegionIter {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for EncRegionIter {
    type Item = (i16, i16);

    fn next(&mut self) -> Option<Self::Item> {
        if self.c < 0 {
            return None;
        }

        let res = (self.r, self.c);

        // Columns left of the timing column are shifted by one to keep pairs aligned
        let adjusted_c = if self.c <= self.vert_timing_col { self.c + 1 } else { self.c };
        let col_type = (self.w - adjusted_c) % 4;
        match col_type {
            // Left module of an upward pair
            2 if self.r > 0 => {
                self.r -= 1;
                self.c += 1;
            }
            // Left module of a downward pair
            0 if self.r < self.w - 1 => {
                self.r += 1;
                self.c += 1;
            }
            0 | 2 if self.c == self.vert_timing_col + 1 => {
                self.c -= 2;
            }
            _ => {
                self.c -= 1;
            }
        }

        Some(res)
    }
}
