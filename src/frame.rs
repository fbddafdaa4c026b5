//! Double buffering on panels that show half of the controller RAM.
//!
//! A 128x32 module scans only 4 of the 8 pages. The other 4 pages can be drawn into while
//! the visible ones are shown, and then be brought into view by moving the display start
//! line. Two independent parity bits keep track of this:
//!
//! - the render frame decides which half `set_cursor()` addresses
//! - the display frame decides which half the controller scans out
//!
//! The usual loop is: draw, [`switch_frame()`](Ssd1306::switch_frame), draw, switch, ...
//! On single frame panels all of this does nothing and both frames always read as 0.
use crate::{
    backend::Backend,
    display::Ssd1306,
    error::Error,
    instructions::Instruction,
    profile::FrameMode,
};

impl<B> Ssd1306<B>
where
    B: Backend,
{
    /// First controller page the render frame starts at.
    pub(crate) fn render_page_base(&self) -> u8 {
        match self.profile.frame_mode {
            FrameMode::Dual if self.render_frame => {
                self.profile.page_offset.wrapping_add(self.profile.page_count)
            }
            _ => self.profile.page_offset,
        }
    }

    /// Direct subsequent drawing to the other half of the RAM. Nothing is sent.
    pub fn switch_render_frame(&mut self) {
        if self.profile.frame_mode == FrameMode::Dual {
            self.render_frame = !self.render_frame;
            trace!("render frame {=bool}", self.render_frame);
        }
    }

    /// Show the other half of the RAM. Addressing is not affected.
    pub fn switch_display_frame(&mut self) -> Result<(), Error<B::Error>> {
        if self.profile.frame_mode != FrameMode::Dual {
            return Ok(());
        }
        let display_frame = !self.display_frame;
        let start_line = if display_frame {
            self.profile.page_count.wrapping_mul(8)
        } else {
            0
        };
        self.write_command(Instruction::DisplayStartLine(start_line))?;
        self.display_frame = display_frame;
        trace!("display frame {=bool}", self.display_frame);
        Ok(())
    }

    /// Show the frame that was just drawn and start drawing into the other one.
    pub fn switch_frame(&mut self) -> Result<(), Error<B::Error>> {
        self.switch_display_frame()?;
        self.switch_render_frame();
        Ok(())
    }

    /// The frame drawn into, 0 or 1.
    pub fn current_render_frame(&self) -> u8 {
        self.render_frame as u8
    }

    /// The frame shown, 0 or 1.
    pub fn current_display_frame(&self) -> u8 {
        self.display_frame as u8
    }
}
