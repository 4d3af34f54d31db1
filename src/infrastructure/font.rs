//! Minimal 5x7 bitmap font covering the canonical configuration alphabet.

pub const GLYPH_COLUMNS: u32 = 5;
pub const GLYPH_ROWS: u32 = 7;
/// Blank columns between consecutive glyphs.
pub const GLYPH_SPACING: u32 = 1;

type Glyph = [u8; GLYPH_ROWS as usize];

const CIRCLE: Glyph = [
    0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110,
];
const OPEN: Glyph = [
    0b01110, 0b01000, 0b01000, 0b01000, 0b01000, 0b01000, 0b01110,
];
const CLOSE: Glyph = [
    0b01110, 0b00010, 0b00010, 0b00010, 0b00010, 0b00010, 0b01110,
];
const COMMA: Glyph = [0, 0, 0, 0, 0b01100, 0b00100, 0b01000];
const BLANK: Glyph = [0; GLYPH_ROWS as usize];
const UNKNOWN: Glyph = [
    0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111,
];

pub fn glyph(c: char) -> &'static Glyph {
    match c {
        'C' => &CIRCLE,
        '[' => &OPEN,
        ']' => &CLOSE,
        ',' => &COMMA,
        ' ' => &BLANK,
        _ => &UNKNOWN,
    }
}

/// Set pixels of `c` as (column, row) offsets within its cell.
pub fn pixels(c: char) -> impl Iterator<Item = (u32, u32)> {
    let rows = glyph(c);
    (0..GLYPH_ROWS).flat_map(move |row| {
        (0..GLYPH_COLUMNS)
            .filter(move |col| rows[row as usize] & (1 << (GLYPH_COLUMNS - 1 - col)) != 0)
            .map(move |col| (col, row))
    })
}
