//! Font descriptors.
//!
//! A font is a flat bitmap of fixed size glyphs. Each glyph is `height_pages` rows of
//! `width` column bytes, stored page row after page row, so the bytes of glyph `code` start
//! at `(code - first) * width * height_pages`. A column byte is a vertical line of 8 pixels
//! with the least significant bit at the top, which is exactly the display RAM layout.

/// Immutable font resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font<'a> {
    /// glyph bitmaps, see module documentation for the layout
    pub bitmap: &'a [u8],
    /// columns per glyph
    pub width: u8,
    /// pages (8 pixel rows) per glyph
    pub height_pages: u8,
    /// first character code in the bitmap
    pub first: u8,
    /// last character code in the bitmap
    pub last: u8,
}

impl<'a> Font<'a> {
    pub const fn new(bitmap: &'a [u8], width: u8, height_pages: u8, first: u8, last: u8) -> Font<'a> {
        Font {
            bitmap,
            width,
            height_pages,
            first,
            last,
        }
    }

    pub fn contains(&self, code: u8) -> bool {
        (self.first..=self.last).contains(&code)
    }

    /// Number of bitmap bytes per glyph.
    pub fn glyph_len(&self) -> usize {
        usize::from(self.width) * usize::from(self.height_pages)
    }

    /// Bitmap bytes of `code`, or `None` for codes outside `first..=last` and glyphs the
    /// bitmap is too short for.
    pub fn glyph(&self, code: u8) -> Option<&'a [u8]> {
        if !self.contains(code) {
            return None;
        }
        let start = usize::from(code - self.first) * self.glyph_len();
        self.bitmap.get(start..start + self.glyph_len())
    }
}

/// 6x8 ASCII font, codes 0x20 to 0x7E. Five glyph columns and one blank spacing column.
pub const FONT_6X8: Font<'static> = Font::new(&FONT_6X8_BITMAP, 6, 1, 0x20, 0x7E);

#[rustfmt::skip]
const FONT_6X8_BITMAP: [u8; 95 * 6] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x20 space
    0x00, 0x00, 0x5f, 0x00, 0x00, 0x00, // 0x21 !
    0x00, 0x07, 0x00, 0x07, 0x00, 0x00, // 0x22 "
    0x14, 0x7f, 0x14, 0x7f, 0x14, 0x00, // 0x23 #
    0x24, 0x2a, 0x7f, 0x2a, 0x12, 0x00, // 0x24 $
    0x23, 0x13, 0x08, 0x64, 0x62, 0x00, // 0x25 %
    0x36, 0x49, 0x55, 0x22, 0x50, 0x00, // 0x26 &
    0x00, 0x05, 0x03, 0x00, 0x00, 0x00, // 0x27 '
    0x00, 0x1c, 0x22, 0x41, 0x00, 0x00, // 0x28 (
    0x00, 0x41, 0x22, 0x1c, 0x00, 0x00, // 0x29 )
    0x14, 0x08, 0x3e, 0x08, 0x14, 0x00, // 0x2A *
    0x08, 0x08, 0x3e, 0x08, 0x08, 0x00, // 0x2B +
    0x00, 0x50, 0x30, 0x00, 0x00, 0x00, // 0x2C ,
    0x08, 0x08, 0x08, 0x08, 0x08, 0x00, // 0x2D -
    0x00, 0x60, 0x60, 0x00, 0x00, 0x00, // 0x2E .
    0x20, 0x10, 0x08, 0x04, 0x02, 0x00, // 0x2F /
    0x3e, 0x51, 0x49, 0x45, 0x3e, 0x00, // 0x30 0
    0x00, 0x42, 0x7f, 0x40, 0x00, 0x00, // 0x31 1
    0x42, 0x61, 0x51, 0x49, 0x46, 0x00, // 0x32 2
    0x21, 0x41, 0x45, 0x4b, 0x31, 0x00, // 0x33 3
    0x18, 0x14, 0x12, 0x7f, 0x10, 0x00, // 0x34 4
    0x27, 0x45, 0x45, 0x45, 0x39, 0x00, // 0x35 5
    0x3c, 0x4a, 0x49, 0x49, 0x30, 0x00, // 0x36 6
    0x01, 0x71, 0x09, 0x05, 0x03, 0x00, // 0x37 7
    0x36, 0x49, 0x49, 0x49, 0x36, 0x00, // 0x38 8
    0x06, 0x49, 0x49, 0x29, 0x1e, 0x00, // 0x39 9
    0x00, 0x36, 0x36, 0x00, 0x00, 0x00, // 0x3A :
    0x00, 0x56, 0x36, 0x00, 0x00, 0x00, // 0x3B ;
    0x08, 0x14, 0x22, 0x41, 0x00, 0x00, // 0x3C <
    0x14, 0x14, 0x14, 0x14, 0x14, 0x00, // 0x3D =
    0x00, 0x41, 0x22, 0x14, 0x08, 0x00, // 0x3E >
    0x02, 0x01, 0x51, 0x09, 0x06, 0x00, // 0x3F ?
    0x32, 0x49, 0x79, 0x41, 0x3e, 0x00, // 0x40 @
    0x7e, 0x11, 0x11, 0x11, 0x7e, 0x00, // 0x41 A
    0x7f, 0x49, 0x49, 0x49, 0x36, 0x00, // 0x42 B
    0x3e, 0x41, 0x41, 0x41, 0x22, 0x00, // 0x43 C
    0x7f, 0x41, 0x41, 0x22, 0x1c, 0x00, // 0x44 D
    0x7f, 0x49, 0x49, 0x49, 0x41, 0x00, // 0x45 E
    0x7f, 0x09, 0x09, 0x09, 0x01, 0x00, // 0x46 F
    0x3e, 0x41, 0x49, 0x49, 0x7a, 0x00, // 0x47 G
    0x7f, 0x08, 0x08, 0x08, 0x7f, 0x00, // 0x48 H
    0x00, 0x41, 0x7f, 0x41, 0x00, 0x00, // 0x49 I
    0x20, 0x40, 0x41, 0x3f, 0x01, 0x00, // 0x4A J
    0x7f, 0x08, 0x14, 0x22, 0x41, 0x00, // 0x4B K
    0x7f, 0x40, 0x40, 0x40, 0x40, 0x00, // 0x4C L
    0x7f, 0x02, 0x0c, 0x02, 0x7f, 0x00, // 0x4D M
    0x7f, 0x04, 0x08, 0x10, 0x7f, 0x00, // 0x4E N
    0x3e, 0x41, 0x41, 0x41, 0x3e, 0x00, // 0x4F O
    0x7f, 0x09, 0x09, 0x09, 0x06, 0x00, // 0x50 P
    0x3e, 0x41, 0x51, 0x21, 0x5e, 0x00, // 0x51 Q
    0x7f, 0x09, 0x19, 0x29, 0x46, 0x00, // 0x52 R
    0x46, 0x49, 0x49, 0x49, 0x31, 0x00, // 0x53 S
    0x01, 0x01, 0x7f, 0x01, 0x01, 0x00, // 0x54 T
    0x3f, 0x40, 0x40, 0x40, 0x3f, 0x00, // 0x55 U
    0x1f, 0x20, 0x40, 0x20, 0x1f, 0x00, // 0x56 V
    0x3f, 0x40, 0x38, 0x40, 0x3f, 0x00, // 0x57 W
    0x63, 0x14, 0x08, 0x14, 0x63, 0x00, // 0x58 X
    0x07, 0x08, 0x70, 0x08, 0x07, 0x00, // 0x59 Y
    0x61, 0x51, 0x49, 0x45, 0x43, 0x00, // 0x5A Z
    0x00, 0x7f, 0x41, 0x41, 0x00, 0x00, // 0x5B [
    0x02, 0x04, 0x08, 0x10, 0x20, 0x00, // 0x5C \
    0x00, 0x41, 0x41, 0x7f, 0x00, 0x00, // 0x5D ]
    0x04, 0x02, 0x01, 0x02, 0x04, 0x00, // 0x5E ^
    0x40, 0x40, 0x40, 0x40, 0x40, 0x00, // 0x5F _
    0x00, 0x01, 0x02, 0x04, 0x00, 0x00, // 0x60 `
    0x20, 0x54, 0x54, 0x54, 0x78, 0x00, // 0x61 a
    0x7f, 0x48, 0x44, 0x44, 0x38, 0x00, // 0x62 b
    0x38, 0x44, 0x44, 0x44, 0x20, 0x00, // 0x63 c
    0x38, 0x44, 0x44, 0x48, 0x7f, 0x00, // 0x64 d
    0x38, 0x54, 0x54, 0x54, 0x18, 0x00, // 0x65 e
    0x08, 0x7e, 0x09, 0x01, 0x02, 0x00, // 0x66 f
    0x0c, 0x52, 0x52, 0x52, 0x3e, 0x00, // 0x67 g
    0x7f, 0x08, 0x04, 0x04, 0x78, 0x00, // 0x68 h
    0x00, 0x44, 0x7d, 0x40, 0x00, 0x00, // 0x69 i
    0x20, 0x40, 0x44, 0x3d, 0x00, 0x00, // 0x6A j
    0x7f, 0x10, 0x28, 0x44, 0x00, 0x00, // 0x6B k
    0x00, 0x41, 0x7f, 0x40, 0x00, 0x00, // 0x6C l
    0x7c, 0x04, 0x18, 0x04, 0x78, 0x00, // 0x6D m
    0x7c, 0x08, 0x04, 0x04, 0x78, 0x00, // 0x6E n
    0x38, 0x44, 0x44, 0x44, 0x38, 0x00, // 0x6F o
    0x7c, 0x14, 0x14, 0x14, 0x08, 0x00, // 0x70 p
    0x08, 0x14, 0x14, 0x18, 0x7c, 0x00, // 0x71 q
    0x7c, 0x08, 0x04, 0x04, 0x08, 0x00, // 0x72 r
    0x48, 0x54, 0x54, 0x54, 0x20, 0x00, // 0x73 s
    0x04, 0x3f, 0x44, 0x40, 0x20, 0x00, // 0x74 t
    0x3c, 0x40, 0x40, 0x20, 0x7c, 0x00, // 0x75 u
    0x1c, 0x20, 0x40, 0x20, 0x1c, 0x00, // 0x76 v
    0x3c, 0x40, 0x30, 0x40, 0x3c, 0x00, // 0x77 w
    0x44, 0x28, 0x10, 0x28, 0x44, 0x00, // 0x78 x
    0x0c, 0x50, 0x50, 0x50, 0x3c, 0x00, // 0x79 y
    0x44, 0x64, 0x54, 0x4c, 0x44, 0x00, // 0x7A z
    0x00, 0x08, 0x36, 0x41, 0x00, 0x00, // 0x7B {
    0x00, 0x00, 0x7f, 0x00, 0x00, 0x00, // 0x7C |
    0x00, 0x41, 0x36, 0x08, 0x00, 0x00, // 0x7D }
    0x10, 0x08, 0x08, 0x10, 0x08, 0x00, // 0x7E ~
];

/// 8x16 ASCII font, codes 0x20 to 0x7E, two pages tall.
///
/// The 6x8 glyphs stretched to double height, with one blank column on the left and two
/// on the right.
pub const FONT_8X16: Font<'static> = Font::new(&FONT_8X16_BITMAP, 8, 2, 0x20, 0x7E);

const FONT_8X16_BITMAP: [u8; 95 * 16] = stretch_6x8(&FONT_6X8_BITMAP);

// every pixel row of a column byte becomes two rows: bit n moves to bits 2n and 2n+1
const fn double_rows(column: u8) -> u16 {
    let mut wide = 0u16;
    let mut bit = 0;
    while bit < 8 {
        if column & (1 << bit) != 0 {
            wide |= 0b11 << (2 * bit);
        }
        bit += 1;
    }
    wide
}

const fn stretch_6x8(narrow: &[u8; 95 * 6]) -> [u8; 95 * 16] {
    let mut tall = [0u8; 95 * 16];
    let mut glyph = 0;
    while glyph < 95 {
        let mut column = 0;
        while column < 5 {
            let wide = double_rows(narrow[glyph * 6 + column]);
            // top page row first, then the bottom one
            tall[glyph * 16 + 1 + column] = wide as u8;
            tall[glyph * 16 + 8 + 1 + column] = (wide >> 8) as u8;
            column += 1;
        }
        glyph += 1;
    }
    tall
}
