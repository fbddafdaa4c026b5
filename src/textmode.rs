//! # Text output for the SSD1306 driver
//!
//! Characters are copied straight from the font bitmap into display RAM, there is no
//! frame buffer. The text cursor moves like on a teletype:
//!
//! - `'\r'` is ignored
//! - `'\n'` moves to the start of the next line (the bottom line is reused once reached)
//! - `'\t'` clears from the cursor to the end of the line, over the full font height, and
//!   leaves the cursor where it was
//! - a character that does not fit on the rest of the line starts a new line first
//!
//! Fonts taller than one page are drawn one page row at a time, top to bottom. After the
//! last row the cursor goes back to the glyph's top row, right of the glyph.
//!
//! The driver implements `core::fmt::Write` so `write!()` and `writeln!()` "just work".
use core::fmt::Error as FmtError;
use core::fmt::Result as FmtResult;
use core::fmt::Write;

use crate::{
    backend::{Backend, TransactionKind},
    display::{Cursor, Ssd1306},
    error::Error,
    font::Font,
};

/// Byte drawn for every column of a character the font has no glyph for.
const MISSING_GLYPH: u8 = 0xFF;

impl<B> Ssd1306<B>
where
    B: Backend,
{
    /// Write one character code at the cursor.
    ///
    /// Does nothing when no font is set. Codes outside the font's range are drawn as a
    /// solid block.
    pub fn write_byte(&mut self, c: u8) -> Result<(), Error<B::Error>> {
        let font = match self.font {
            Some(font) => font,
            None => return Ok(()),
        };
        match c {
            b'\r' => Ok(()),
            b'\n' => self.advance_line(font.height_pages),
            b'\t' => self.clear_glyph_rows(font.height_pages),
            _ => self.draw_glyph(&font, font.glyph(c)),
        }
    }

    /// Write every byte of `text`, see [`write_byte()`](Self::write_byte).
    pub fn print(&mut self, text: &[u8]) -> Result<(), Error<B::Error>> {
        for &c in text {
            self.write_byte(c)?;
        }
        Ok(())
    }

    // clear to the end of the line on every page row of the font, keep the cursor
    fn clear_glyph_rows(&mut self, height_pages: u8) -> Result<(), Error<B::Error>> {
        let Cursor { column, page } = self.cursor;
        for row in 0..height_pages {
            self.set_cursor(column, page.wrapping_add(row))?;
            self.clear_to_end_of_line()?;
        }
        self.set_cursor(column, page)
    }

    fn draw_glyph(&mut self, font: &Font<'static>, glyph: Option<&'static [u8]>) -> Result<(), Error<B::Error>> {
        let width = font.width;
        let height = font.height_pages;

        if self.cursor.column > self.profile.physical_width.saturating_sub(width) {
            self.advance_line(height)?;
        }

        for row in 0..height {
            let start = usize::from(row) * usize::from(width);
            self.bus.transaction(TransactionKind::Data, |bus| {
                for i in 0..usize::from(width) {
                    let byte = glyph
                        .and_then(|g| g.get(start + i))
                        .copied()
                        .unwrap_or(MISSING_GLYPH);
                    bus.send_byte(byte)?;
                }
                Ok(())
            })?;

            let Cursor { column, page } = self.cursor;
            if height == 1 {
                // the controller auto-increments within the page, no need to re-address
                self.cursor.column = column.wrapping_add(width);
            } else if row + 1 < height {
                self.set_cursor(column, page.wrapping_add(1))?;
            } else {
                self.set_cursor(column.wrapping_add(width), page.wrapping_sub(height - 1))?;
            }
        }
        Ok(())
    }
}

impl<B> Write for Ssd1306<B>
where
    B: Backend,
{
    // Characters beyond 0xFF have no code in a byte indexed font and are drawn as the
    // missing glyph block.
    fn write_str(&mut self, s: &str) -> FmtResult {
        for c in s.chars() {
            let result = match u8::try_from(c) {
                Ok(code) => self.write_byte(code),
                Err(_) => match self.font {
                    Some(font) => self.draw_glyph(&font, None),
                    None => Ok(()),
                },
            };
            result.map_err(|_| FmtError)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::font::{FONT_6X8, FONT_8X16};
    use crate::profile::PanelProfile;
    use crate::testing::{Recorder, Sent};
    use std::vec;
    use std::vec::Vec;

    // two glyphs, 3 columns by 2 pages: '0' is 0x0n, '1' is 0x1n
    const TALL_BITMAP: [u8; 12] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, //
        0x10, 0x11, 0x12, 0x13, 0x14, 0x15, //
    ];
    const TALL: Font<'static> = Font::new(&TALL_BITMAP, 3, 2, b'0', b'1');

    fn text_display(font: Font<'static>) -> Ssd1306<Recorder> {
        let mut disp = Ssd1306::new(Recorder::new(), PanelProfile::SSD1306_128X64);
        disp.set_font(font);
        disp
    }

    fn cursor(column: u8, page: u8) -> Cursor {
        Cursor { column, page }
    }

    #[test]
    fn no_font_swallows_everything() {
        let mut disp = Ssd1306::new(Recorder::new(), PanelProfile::SSD1306_128X64);
        write!(disp, "hello\n\tworld").unwrap();
        assert!(disp.backend().sent().is_empty());
        assert_eq!(disp.cursor(), cursor(0, 0));
    }

    #[test]
    fn single_page_glyph_is_one_data_transaction() {
        let mut disp = text_display(FONT_6X8);
        disp.write_byte(b'A').unwrap();
        assert_eq!(
            disp.backend().sent(),
            &[Sent::Data(vec![0x7e, 0x11, 0x11, 0x11, 0x7e, 0x00])]
        );
        assert_eq!(disp.cursor(), cursor(6, 0));
    }

    #[test]
    fn hello_newline() {
        let mut disp = text_display(FONT_6X8);
        write!(disp, "HELLO").unwrap();
        assert_eq!(disp.cursor(), cursor(30, 0));
        write!(disp, "\n").unwrap();
        assert_eq!(disp.cursor(), cursor(0, 1));
    }

    #[test]
    fn carriage_return_is_ignored() {
        let mut disp = text_display(FONT_6X8);
        write!(disp, "AB\r").unwrap();
        assert_eq!(disp.cursor(), cursor(12, 0));
        assert_eq!(disp.backend().sent().len(), 2);
    }

    #[test]
    fn wraps_before_overflowing_the_line() {
        let mut disp = text_display(FONT_6X8);
        for _ in 0..21 {
            disp.write_byte(b'x').unwrap();
        }
        assert_eq!(disp.cursor(), cursor(126, 0));
        assert!(disp.backend().controls().is_empty());

        disp.write_byte(b'x').unwrap();
        // exactly one automatic line advance, then the 22nd glyph at (0, 1)
        assert_eq!(disp.backend().controls(), vec![vec![0xB1, 0x10, 0x00]]);
        assert_eq!(disp.cursor(), cursor(6, 1));
    }

    #[test]
    fn long_runs_never_leave_the_panel() {
        let mut disp = text_display(FONT_6X8);
        for _ in 0..200 {
            disp.write_byte(b'#').unwrap();
            assert!(disp.cursor().column <= 126);
            assert!(disp.cursor().page < 8);
        }
        // 200 glyphs at 21 per line fill 9.5 lines; the bottom line is reused
        assert_eq!(disp.cursor().page, 7);
        assert_eq!(disp.backend().controls().len(), 9);
    }

    #[test]
    fn multi_page_glyph_goes_top_to_bottom() {
        let mut disp = text_display(TALL);
        disp.set_cursor(10, 2).unwrap();
        disp.backend_mut().clear();

        disp.write_byte(b'1').unwrap();
        assert_eq!(
            disp.backend().sent(),
            &[
                Sent::Data(vec![0x10, 0x11, 0x12]),
                Sent::Control(vec![0xB3, 0x10, 0x0A]),
                Sent::Data(vec![0x13, 0x14, 0x15]),
                Sent::Control(vec![0xB2, 0x10, 0x0D]),
            ]
        );
        assert_eq!(disp.cursor(), cursor(13, 2));
    }

    #[test]
    fn tall_font_wraps_by_its_height() {
        let mut disp = text_display(TALL);
        disp.set_cursor(126, 0).unwrap();
        disp.write_byte(b'0').unwrap();
        assert_eq!(disp.cursor(), cursor(3, 2));
        disp.write_byte(b'\n').unwrap();
        assert_eq!(disp.cursor(), cursor(0, 4));
    }

    #[test]
    fn sixteen_tall_glyphs_fill_a_line() {
        let mut disp = text_display(FONT_8X16);
        disp.print(&[b'x'; 16]).unwrap();
        assert_eq!(disp.cursor(), cursor(128, 0));
        disp.write_byte(b'x').unwrap();
        assert_eq!(disp.cursor(), cursor(8, 2));
        // two DATA rows per glyph
        assert_eq!(disp.backend().data_bytes().len(), 17 * 16);
    }

    #[test]
    fn tab_clears_every_font_row_and_keeps_cursor() {
        let mut disp = text_display(TALL);
        disp.set_cursor(40, 2).unwrap();
        disp.backend_mut().clear();

        disp.write_byte(b'\t').unwrap();
        assert_eq!(
            disp.backend().sent(),
            &[
                Sent::Control(vec![0xB2, 0x12, 0x08]),
                Sent::Data(vec![0x00; 88]),
                Sent::Control(vec![0xB3, 0x12, 0x08]),
                Sent::Data(vec![0x00; 88]),
                Sent::Control(vec![0xB2, 0x12, 0x08]),
            ]
        );
        assert_eq!(disp.cursor(), cursor(40, 2));
    }

    #[test]
    fn unknown_codes_draw_a_block() {
        let mut disp = text_display(FONT_6X8);
        disp.write_byte(0x7F).unwrap();
        write!(disp, "é").unwrap();
        write!(disp, "€").unwrap();
        assert_eq!(disp.backend().data_bytes(), vec![0xFF; 18]);
        assert_eq!(disp.cursor(), cursor(18, 0));
    }

    #[test]
    fn print_bytes() {
        let mut disp = text_display(FONT_6X8);
        disp.print(b"ab").unwrap();
        let expected: Vec<u8> = [FONT_6X8.glyph(b'a').unwrap(), FONT_6X8.glyph(b'b').unwrap()].concat();
        assert_eq!(disp.backend().data_bytes(), expected);
    }
}
