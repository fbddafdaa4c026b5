//! embedded-graphics glue for the SSD1306 driver
//!
//! This module is behind a feature flag. Enable it in your Cargo.toml with feature flag
//! "graphics".
//!
//! The driver has no frame buffer and the controller RAM cannot be read back over I²C, so
//! single pixels cannot be set without disturbing their 7 neighbours in the same page byte.
//! What does work without a buffer is filling whole page rows, which is what
//! [`fill_area()`](Ssd1306::fill_area) does: the rectangle is widened vertically to page
//! boundaries and every covered column byte is set or cleared.
//!
//! For real drawing, render into an embedded-graphics frame buffer of your own and copy it
//! with [`draw_bitmap()`](Ssd1306::draw_bitmap).
use embedded_graphics_core::{
    geometry::{OriginDimensions, Size},
    pixelcolor::BinaryColor,
    primitives::Rectangle,
};

use crate::{backend::Backend, display::Ssd1306, error::Error};

/// RAM byte lighting (On) or clearing (Off) a full 8 pixel column.
pub fn fill_byte(color: BinaryColor) -> u8 {
    match color {
        BinaryColor::On => 0xFF,
        BinaryColor::Off => 0x00,
    }
}

impl<B> Ssd1306<B>
where
    B: Backend,
{
    /// Fill the page rows covering `area` with `color`, clipped to the panel.
    ///
    /// The cursor is moved to (0, 0) afterwards, unless the clipped area is empty.
    pub fn fill_area(&mut self, area: &Rectangle, color: BinaryColor) -> Result<(), Error<B::Error>> {
        let bottom_right = match area.bottom_right() {
            Some(point) => point,
            None => return Ok(()),
        };
        let width = i32::from(self.profile.physical_width);
        let pages = i32::from(self.profile.page_count);

        let x0 = area.top_left.x.clamp(0, width);
        let x1 = bottom_right.x.saturating_add(1).clamp(0, width);
        let p0 = area.top_left.y.clamp(0, pages * 8) / 8;
        let p1 = (bottom_right.y.saturating_add(8).clamp(0, pages * 8)) / 8;
        if x0 >= x1 || p0 >= p1 {
            return Ok(());
        }

        // all four values were clamped into u8 range above
        self.fill_region(fill_byte(color), x0 as u8, p0 as u8, x1 as u8, p1 as u8)
    }

    /// Fill the whole panel with `color`, see [`fill_entire_screen()`](Self::fill_entire_screen).
    pub fn fill_screen(&mut self, color: BinaryColor) -> Result<(), Error<B::Error>> {
        self.fill_entire_screen(fill_byte(color))
    }
}

impl<B> OriginDimensions for Ssd1306<B>
where
    B: Backend,
{
    // return the size of the visible window in pixels, so embedded_graphics layouts know
    // how to place things on it.
    fn size(&self) -> Size {
        Size::new(u32::from(self.profile.physical_width), u32::from(self.profile.height()))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::profile::PanelProfile;
    use crate::testing::{Recorder, Sent};
    use embedded_graphics_core::geometry::{Dimensions, Point};
    use std::vec;

    #[test]
    fn size_of_visible_window() {
        let disp = Ssd1306::new(Recorder::new(), PanelProfile::SSD1306_64X48);
        assert_eq!(disp.size(), Size::new(64, 48));
        assert_eq!(disp.bounding_box(), Rectangle::new(Point::zero(), Size::new(64, 48)));
    }

    #[test]
    fn area_snaps_to_pages() {
        let mut disp = Ssd1306::new(Recorder::new(), PanelProfile::SSD1306_128X64);
        // rows 6..=9 touch pages 0 and 1
        let area = Rectangle::new(Point::new(4, 6), Size::new(2, 4));
        disp.fill_area(&area, BinaryColor::On).unwrap();
        assert_eq!(
            disp.backend().sent(),
            &[
                Sent::Control(vec![0xB0, 0x10, 0x04]),
                Sent::Data(vec![0xFF; 2]),
                Sent::Control(vec![0xB1, 0x10, 0x04]),
                Sent::Data(vec![0xFF; 2]),
                Sent::Control(vec![0xB0, 0x10, 0x00]),
            ]
        );
    }

    #[test]
    fn area_is_clipped() {
        let mut disp = Ssd1306::new(Recorder::new(), PanelProfile::SSD1306_128X32);
        let area = Rectangle::new(Point::new(120, 24), Size::new(20, 20));
        disp.fill_area(&area, BinaryColor::Off).unwrap();
        assert_eq!(
            disp.backend().sent(),
            &[
                Sent::Control(vec![0xB3, 0x17, 0x08]),
                Sent::Data(vec![0x00; 8]),
                Sent::Control(vec![0xB0, 0x10, 0x00]),
            ]
        );

        let outside = Rectangle::new(Point::new(-10, -10), Size::new(5, 5));
        disp.backend_mut().clear();
        disp.fill_area(&outside, BinaryColor::On).unwrap();
        assert!(disp.backend().sent().is_empty());
    }
}
