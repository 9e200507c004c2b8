//! Built-in 7x5 bitmap letterforms used by the pixel art renderer.
//!
//! Each glyph is stored as packed rows, one byte per row. Only the low five
//! bits are used with MSB-first ordering inside that field:
//! - Bit 4 = leftmost pixel
//! - Bit 0 = rightmost pixel

use std::{collections::HashMap, fmt::Display};

use once_cell::sync::Lazy;

/// Glyph height in pixels
pub const BITMAP_HEIGHT: usize = 7;

/// Glyph width in pixels
pub const BITMAP_WIDTH: usize = 5;

const LEFTMOST_BIT: u8 = 1 << (BITMAP_WIDTH - 1);
const ROW_MASK: u8 = (1 << BITMAP_WIDTH) - 1;

/// A 7x5 bitmap glyph stored as packed bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bitmap {
    rows: [u8; BITMAP_HEIGHT],
}

impl Default for Bitmap {
    fn default() -> Self {
        Self::BLANK
    }
}

impl Bitmap {
    /// A glyph with every pixel off. Used for characters the atlas doesn't know.
    pub const BLANK: Self = Self { rows: [0; BITMAP_HEIGHT] };

    /// Create a glyph from raw row data. Bits above the 5 pixel columns are dropped.
    #[inline]
    pub const fn from_rows(rows: [u8; BITMAP_HEIGHT]) -> Self {
        let mut masked = [0u8; BITMAP_HEIGHT];
        let mut y = 0;
        while y < BITMAP_HEIGHT {
            masked[y] = rows[y] & ROW_MASK;
            y += 1;
        }
        Self { rows: masked }
    }

    /// Get a pixel value at the given position.
    ///
    /// Returns `false` if coordinates are out of bounds.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        if x >= BITMAP_WIDTH || y >= BITMAP_HEIGHT {
            return false;
        }
        (self.rows[y] & (LEFTMOST_BIT >> x)) != 0
    }

    /// Get a row as a byte (bit 4 = leftmost pixel).
    #[inline]
    pub fn row(&self, y: usize) -> u8 {
        if y >= BITMAP_HEIGHT {
            return 0;
        }
        self.rows[y]
    }

    /// Iterate rows top to bottom, each row as its pixel values left to right.
    pub fn rows(&self) -> impl Iterator<Item = [bool; BITMAP_WIDTH]> + '_ {
        self.rows.iter().map(|&row| std::array::from_fn(|x| row & (LEFTMOST_BIT >> x) != 0))
    }

    /// Check if the glyph is blank (all pixels off).
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|&b| b == 0)
    }
}

impl Display for Bitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for lit in row {
                write!(f, "{}", if lit { '#' } else { '-' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[rustfmt::skip]
const GLYPHS: [(char, [u8; BITMAP_HEIGHT]); 42] = [
    ('A', [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
    ('B', [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110]),
    ('C', [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110]),
    ('D', [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110]),
    ('E', [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111]),
    ('F', [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000]),
    ('G', [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110]),
    ('H', [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
    ('I', [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111]),
    ('J', [0b11111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100]),
    ('K', [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001]),
    ('L', [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111]),
    ('M', [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001]),
    ('N', [0b10001, 0b11001, 0b10101, 0b10101, 0b10011, 0b10001, 0b10001]),
    ('O', [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
    ('P', [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000]),
    ('Q', [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101]),
    ('R', [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001]),
    ('S', [0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110]),
    ('T', [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100]),
    ('U', [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
    ('V', [0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b01010, 0b00100]),
    ('W', [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001]),
    ('X', [0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b01010, 0b10001]),
    ('Y', [0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100]),
    ('Z', [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111]),
    (' ', [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000]),
    ('0', [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110]),
    ('1', [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111]),
    ('2', [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111]),
    ('3', [0b11111, 0b00010, 0b00100, 0b00110, 0b00010, 0b10001, 0b01110]),
    ('4', [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010]),
    ('5', [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110]),
    ('6', [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110]),
    ('7', [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000]),
    ('8', [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110]),
    ('9', [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100]),
    ('你', [0b01001, 0b01010, 0b11111, 0b01010, 0b01110, 0b10101, 0b00100]),
    ('我', [0b00100, 0b01110, 0b10101, 0b01110, 0b00100, 0b11111, 0b10101]),
    ('爱', [0b01010, 0b11111, 0b01010, 0b11111, 0b10101, 0b11111, 0b10001]),
    ('心', [0b01010, 0b01010, 0b01010, 0b00100, 0b01110, 0b10101, 0b00100]),
    ('好', [0b11001, 0b01010, 0b01010, 0b11111, 0b01010, 0b01010, 0b11011]),
];

static ATLAS: Lazy<Atlas> = Lazy::new(|| Atlas {
    glyphs: GLYPHS.iter().map(|&(ch, rows)| (ch, Bitmap::from_rows(rows))).collect(),
});

/// Fixed character to bitmap mapping: A-Z, 0-9, space and a few CJK ideographs.
pub struct Atlas {
    glyphs: HashMap<char, Bitmap>,
}

impl Atlas {
    /// The built-in atlas.
    pub fn builtin() -> &'static Atlas {
        &ATLAS
    }

    /// Look up the bitmap for `ch`.
    ///
    /// The upper-cased form is tried first so latin letters match regardless of
    /// case, then the character itself (digits, space, CJK).
    pub fn lookup(&self, ch: char) -> Option<&Bitmap> {
        let mut upper = ch.to_uppercase();
        if let (Some(u), None) = (upper.next(), upper.next()) {
            if let Some(bitmap) = self.glyphs.get(&u) {
                return Some(bitmap);
            }
        }
        self.glyphs.get(&ch)
    }

    /// Look up the bitmap for a user perceived character.
    /// Clusters made of more than one code point (emoji sequences, combining marks) never match.
    pub fn lookup_grapheme(&self, grapheme: &str) -> Option<&Bitmap> {
        let mut chars = grapheme.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => self.lookup(ch),
            _ => None,
        }
    }

    pub fn contains(&self, ch: char) -> bool {
        self.lookup(ch).is_some()
    }
}
