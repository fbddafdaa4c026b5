//! Bulk fills and raw bitmaps.
//!
//! These bypass the font path and stream bytes straight into display RAM, one DATA
//! transaction per page row. A byte is a vertical strip of 8 pixels, least significant bit
//! on top, so `0xFF` lights a full 8 pixel column and `0x00` clears it.
use crate::{
    backend::{Backend, TransactionKind},
    display::Ssd1306,
    error::Error,
};

impl<B> Ssd1306<B>
where
    B: Backend,
{
    /// Write `length` copies of `value` at the current RAM address and move the cursor
    /// right by `length`. A zero length writes nothing.
    pub fn fill_length(&mut self, value: u8, length: u8) -> Result<(), Error<B::Error>> {
        if length == 0 {
            return Ok(());
        }
        self.bus
            .send_repeated(TransactionKind::Data, value, usize::from(length))?;
        self.cursor.column = self.cursor.column.wrapping_add(length);
        Ok(())
    }

    /// Fill from the cursor to the right edge of the panel on the current page.
    ///
    /// Afterwards the cursor column equals the panel width.
    pub fn fill_to_end_of_line(&mut self, value: u8) -> Result<(), Error<B::Error>> {
        let length = self.profile.physical_width.saturating_sub(self.cursor.column);
        self.fill_length(value, length)
    }

    pub fn clear_to_end_of_line(&mut self) -> Result<(), Error<B::Error>> {
        self.fill_to_end_of_line(0x00)
    }

    /// Clear from the cursor to the end of its line and every line below it.
    ///
    /// The cursor is left where it was.
    pub fn clear_to_end_of_screen(&mut self) -> Result<(), Error<B::Error>> {
        let saved = self.cursor;
        for page in saved.page..self.profile.page_count {
            let column = if page == saved.page { saved.column } else { 0 };
            self.set_cursor(column, page)?;
            self.clear_to_end_of_line()?;
        }
        self.set_cursor(saved.column, saved.page)
    }

    /// Fill one whole page row. The cursor ends at the end of that row.
    pub fn fill_line(&mut self, page: u8, value: u8) -> Result<(), Error<B::Error>> {
        self.set_cursor(0, page)?;
        self.fill_to_end_of_line(value)
    }

    /// Fill the entire visible screen and move the cursor to (0, 0).
    pub fn fill_entire_screen(&mut self, value: u8) -> Result<(), Error<B::Error>> {
        for page in 0..self.profile.page_count {
            self.fill_line(page, value)?;
        }
        self.set_cursor(0, 0)
    }

    /// Clear the screen and move the cursor to (0, 0).
    pub fn clear(&mut self) -> Result<(), Error<B::Error>> {
        self.fill_entire_screen(0x00)
    }

    /// Fill the columns `x0..x1` of the pages `y0..y1` with `value`.
    ///
    /// The cursor is moved to (0, 0) afterwards.
    pub fn fill_region(&mut self, value: u8, x0: u8, y0: u8, x1: u8, y1: u8) -> Result<(), Error<B::Error>> {
        let width = usize::from(x1.saturating_sub(x0));
        for page in y0..y1 {
            self.set_cursor(x0, page)?;
            self.bus.send_repeated(TransactionKind::Data, value, width)?;
        }
        self.set_cursor(0, 0)
    }

    /// Copy a bitmap into the columns `x0..x1` of the pages `y0..y1`.
    ///
    /// `bitmap` holds `x1 - x0` bytes per page row, rows top to bottom. Bytes missing at
    /// the end of a short bitmap are written as 0. The cursor is moved to (0, 0) afterwards.
    pub fn draw_bitmap(
        &mut self,
        x0: u8,
        y0: u8,
        x1: u8,
        y1: u8,
        bitmap: &[u8],
    ) -> Result<(), Error<B::Error>> {
        let width = usize::from(x1.saturating_sub(x0));
        let mut rows = bitmap.chunks(width.max(1));
        for page in y0..y1 {
            self.set_cursor(x0, page)?;
            let row = rows.next().unwrap_or(&[]);
            self.bus.transaction(TransactionKind::Data, |bus| {
                for i in 0..width {
                    bus.send_byte(row.get(i).copied().unwrap_or(0x00))?;
                }
                Ok(())
            })?;
        }
        self.set_cursor(0, 0)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::display::Cursor;
    use crate::profile::PanelProfile;
    use crate::testing::{Recorder, Sent};
    use std::vec;

    fn display() -> Ssd1306<Recorder> {
        Ssd1306::new(Recorder::new(), PanelProfile::SSD1306_128X64)
    }

    #[test]
    fn fill_to_end_of_line_writes_the_rest_of_the_row() {
        let mut disp = display();
        disp.set_cursor(100, 4).unwrap();
        disp.backend_mut().clear();

        disp.fill_to_end_of_line(0xAA).unwrap();
        assert_eq!(disp.backend().sent(), &[Sent::Data(vec![0xAA; 28])]);
        assert_eq!(disp.cursor(), Cursor { column: 128, page: 4 });

        // nothing left on the line
        disp.fill_to_end_of_line(0xAA).unwrap();
        assert_eq!(disp.backend().sent().len(), 1);
    }

    #[test]
    fn fill_length_advances_cursor() {
        let mut disp = display();
        disp.fill_length(0x0F, 5).unwrap();
        disp.fill_length(0x0F, 0).unwrap();
        assert_eq!(disp.backend().sent(), &[Sent::Data(vec![0x0F; 5])]);
        assert_eq!(disp.cursor().column, 5);
    }

    #[test]
    fn clear_to_end_of_screen_restores_cursor() {
        let mut disp = display();
        disp.set_cursor(120, 6).unwrap();
        disp.backend_mut().clear();

        disp.clear_to_end_of_screen().unwrap();
        assert_eq!(
            disp.backend().sent(),
            &[
                Sent::Control(vec![0xB6, 0x17, 0x08]),
                Sent::Data(vec![0x00; 8]),
                Sent::Control(vec![0xB7, 0x10, 0x00]),
                Sent::Data(vec![0x00; 128]),
                Sent::Control(vec![0xB6, 0x17, 0x08]),
            ]
        );
        assert_eq!(disp.cursor(), Cursor { column: 120, page: 6 });
    }

    #[test]
    fn fill_entire_screen_covers_every_page() {
        let mut disp = display();
        disp.set_cursor(17, 3).unwrap();
        disp.backend_mut().clear();

        disp.fill_entire_screen(0xFF).unwrap();
        let sent = disp.backend().sent();
        assert_eq!(sent.len(), 17);
        for page in 0..8u8 {
            assert_eq!(sent[2 * page as usize], Sent::Control(vec![0xB0 | page, 0x10, 0x00]));
            assert_eq!(sent[2 * page as usize + 1], Sent::Data(vec![0xFF; 128]));
        }
        assert_eq!(sent[16], Sent::Control(vec![0xB0, 0x10, 0x00]));
        assert_eq!(disp.cursor(), Cursor { column: 0, page: 0 });
    }

    #[test]
    fn second_fill_is_independent_of_the_first() {
        let mut disp = display();
        disp.fill_entire_screen(0xFF).unwrap();
        let first = disp.backend().sent().len();
        disp.clear().unwrap();
        let sent = &disp.backend().sent()[first..];

        let mut fresh = display();
        fresh.clear().unwrap();
        assert_eq!(sent, fresh.backend().sent());
        assert_eq!(disp.cursor(), Cursor { column: 0, page: 0 });
    }

    #[test]
    fn fill_region_per_page_row() {
        let mut disp = display();
        disp.fill_region(0x3C, 8, 1, 12, 3).unwrap();
        assert_eq!(
            disp.backend().sent(),
            &[
                Sent::Control(vec![0xB1, 0x10, 0x08]),
                Sent::Data(vec![0x3C; 4]),
                Sent::Control(vec![0xB2, 0x10, 0x08]),
                Sent::Data(vec![0x3C; 4]),
                Sent::Control(vec![0xB0, 0x10, 0x00]),
            ]
        );
        assert_eq!(disp.cursor(), Cursor { column: 0, page: 0 });
    }

    #[test]
    fn bitmap_rows_and_short_data() {
        let mut disp = display();
        disp.draw_bitmap(2, 0, 5, 2, &[1, 2, 3, 4]).unwrap();
        assert_eq!(
            disp.backend().sent(),
            &[
                Sent::Control(vec![0xB0, 0x10, 0x02]),
                Sent::Data(vec![1, 2, 3]),
                Sent::Control(vec![0xB1, 0x10, 0x02]),
                Sent::Data(vec![4, 0, 0]),
                Sent::Control(vec![0xB0, 0x10, 0x00]),
            ]
        );
    }

    #[test]
    fn fills_apply_the_column_offset() {
        let mut disp = Ssd1306::new(Recorder::new(), PanelProfile::SSD1306_64X48);
        disp.fill_line(0, 0xFF).unwrap();
        assert_eq!(
            disp.backend().sent(),
            &[Sent::Control(vec![0xB2, 0x12, 0x00]), Sent::Data(vec![0xFF; 64])]
        );
        assert_eq!(disp.cursor(), Cursor { column: 64, page: 0 });
    }
}
