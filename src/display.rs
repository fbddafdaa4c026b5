//! # Main driver for the SSD1306
//!
//! This holds the driver instance and everything that keeps the display state: the panel
//! profile, the active font, the text cursor and the frame parity bits. The text renderer,
//! the fill operations and the frame switching live in their own modules but all work on
//! the [`Ssd1306`] struct defined here.
//!
//! The controller is always driven in page addressing mode. Every write is preceded by an
//! explicit column and page address, because the auto increment of the controller wraps at
//! column 127 of the full RAM, not at the edge of the visible window of narrow panels.
//!
//! Typically you want to look into the following functions:
//!  - `Ssd1306::new()` and `Ssd1306::begin()` to create and initialize a driver instance
//!  - `Ssd1306::on()` to switch the display on after init
//!  - `Ssd1306::set_font()`, then `write!()` to print text
//!  - `Ssd1306::set_contrast()` to change the brightness
//! The other configuration functions are pass-throughs to the controller command set and
//! are only needed for special effects like scrolling or for unusual modules.
use crate::{
    backend::{Backend, TransactionKind},
    error::Error,
    font::Font,
    instructions::prelude::*,
    profile::PanelProfile,
    transaction::Bus,
};

/// Opcode selecting the page in page addressing mode, OR'ed with the page number.
const PAGE_SELECT: u8 = 0xB0;

/// Opcode setting the high nibble of the column address.
const COLUMN_HIGH: u8 = 0x10;

/// Position of the text cursor in visible panel coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    /// column, 0..physical_width (equal to physical_width right after a fill to end of line)
    pub column: u8,
    /// page, 0..page_count
    pub page: u8,
}

/// Driver state for one SSD1306 module.
#[derive(Debug)]
pub struct Ssd1306<B> {
    pub(crate) bus: Bus<B>,
    pub(crate) profile: PanelProfile,
    pub(crate) font: Option<Font<'static>>,
    pub(crate) cursor: Cursor,
    pub(crate) render_frame: bool,
    pub(crate) display_frame: bool,
}

impl<B> Ssd1306<B>
where
    B: Backend,
{
    /// Create a new driver instance.
    ///
    /// Arguments:
    ///
    /// - backend: the transport the module is connected to, e.g. an
    ///   [`I2cBackend`](crate::backend::I2cBackend)
    /// - profile: geometry and init sequence of the module, see [`PanelProfile`]
    ///
    /// Nothing is sent to the module yet, call [`begin()`](Self::begin) for that.
    pub fn new(backend: B, profile: PanelProfile) -> Ssd1306<B> {
        Ssd1306 {
            bus: Bus::new(backend),
            profile,
            font: None,
            cursor: Cursor::default(),
            render_frame: false,
            display_frame: false,
        }
    }

    /// Send the init sequence of the panel profile.
    ///
    /// The display stays off; switch it on with [`on()`](Self::on) once the RAM holds
    /// something worth showing.
    pub fn begin(&mut self) -> Result<(), Error<B::Error>> {
        let sequence = self.profile.init_sequence;
        self.begin_with(sequence)
    }

    /// Send a custom init sequence verbatim as one CONTROL transaction.
    ///
    /// Long sequences are split over several transactions by the transport layer as needed.
    pub fn begin_with(&mut self, init_sequence: &[u8]) -> Result<(), Error<B::Error>> {
        debug!("sending init sequence of {=usize} bytes", init_sequence.len());
        self.bus.send(TransactionKind::Control, init_sequence)
    }

    /// Give back the transport.
    pub fn release(self) -> B {
        self.bus.release()
    }

    /// access the transport, e.g. to inspect a test double
    pub fn backend(&self) -> &B {
        self.bus.backend()
    }

    pub fn backend_mut(&mut self) -> &mut B {
        self.bus.backend_mut()
    }

    pub fn profile(&self) -> &PanelProfile {
        &self.profile
    }

    /// Current text cursor position.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Select the font used by the text functions.
    ///
    /// Without a font every character write is silently ignored.
    pub fn set_font(&mut self, font: Font<'static>) {
        self.font = Some(font);
    }

    pub fn font(&self) -> Option<&Font<'static>> {
        self.font.as_ref()
    }

    /// Move the cursor to column `x` and page `y` of the visible window.
    ///
    /// `x` should be in `0..physical_width` and `y` in `0..page_count`. Nothing is checked:
    /// like the controller itself, out of range values wrap through the address bit masks.
    /// The panel's column and page offsets and the current render frame are applied here.
    pub fn set_cursor(&mut self, x: u8, y: u8) -> Result<(), Error<B::Error>> {
        let column = x.wrapping_add(self.profile.column_offset);
        let page = self.render_page_base().wrapping_add(y);
        self.bus.send(
            TransactionKind::Control,
            &[
                PAGE_SELECT | (page & 0x07),
                COLUMN_HIGH | ((column >> 4) & 0x0F),
                column & 0x0F,
            ],
        )?;
        self.cursor = Cursor { column: x, page: y };
        Ok(())
    }

    /// Move the cursor to the start of the next line of `height_pages` tall text.
    ///
    /// The last line that fits stays the last line: the page never goes beyond
    /// `page_count - height_pages`, so repeated calls at the bottom keep overwriting it.
    pub fn advance_line(&mut self, height_pages: u8) -> Result<(), Error<B::Error>> {
        let last = self.profile.page_count.saturating_sub(height_pages);
        let page = self.cursor.page.saturating_add(height_pages).min(last);
        self.set_cursor(0, page)
    }

    /// Move the cursor to the start of the next line of the active font.
    pub fn new_line(&mut self) -> Result<(), Error<B::Error>> {
        let height = self.font.map_or(1, |font| font.height_pages);
        self.advance_line(height)
    }

    /// Send a single command to the SSD1306 chip, as one CONTROL transaction.
    pub fn write_command(&mut self, instruction: Instruction) -> Result<(), Error<B::Error>> {
        self.bus.send(TransactionKind::Control, &instruction.bytes())
    }

    // 1. fundamental commands

    /// Set the contrast, 0..=255. The reset value is 0x7F.
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), Error<B::Error>> {
        self.write_command(SetContrast(contrast))
    }

    /// Light every pixel (true) or show the RAM content (false).
    pub fn set_entire_display_on(&mut self, enable: bool) -> Result<(), Error<B::Error>> {
        self.write_command(EntireDisplayOn(enable))
    }

    /// Inverse video: a 0 bit in RAM lights the pixel.
    pub fn set_inverse(&mut self, enable: bool) -> Result<(), Error<B::Error>> {
        self.write_command(Inverse(enable))
    }

    /// Switch the display on.
    pub fn on(&mut self) -> Result<(), Error<B::Error>> {
        self.write_command(DisplayOn(true))
    }

    /// Switch the display off (sleep mode). RAM content is kept.
    pub fn off(&mut self) -> Result<(), Error<B::Error>> {
        self.write_command(DisplayOn(false))
    }

    // 2. scrolling

    /// Set up a continuous right scroll of pages `start_page..=end_page`.
    ///
    /// Call [`deactivate_scroll()`](Self::deactivate_scroll) before and
    /// [`activate_scroll()`](Self::activate_scroll) after setting up a scroll.
    pub fn scroll_right(
        &mut self,
        start_page: u8,
        interval: ScrollInterval,
        end_page: u8,
    ) -> Result<(), Error<B::Error>> {
        self.write_command(ScrollRight {
            start_page,
            interval,
            end_page,
        })
    }

    /// Set up a continuous left scroll of pages `start_page..=end_page`.
    pub fn scroll_left(
        &mut self,
        start_page: u8,
        interval: ScrollInterval,
        end_page: u8,
    ) -> Result<(), Error<B::Error>> {
        self.write_command(ScrollLeft {
            start_page,
            interval,
            end_page,
        })
    }

    /// Set up a diagonal scroll: right, and `offset` rows up per step.
    pub fn scroll_right_offset(
        &mut self,
        start_page: u8,
        interval: ScrollInterval,
        end_page: u8,
        offset: u8,
    ) -> Result<(), Error<B::Error>> {
        self.write_command(ScrollRightOffset {
            start_page,
            interval,
            end_page,
            offset,
        })
    }

    /// Set up a diagonal scroll: left, and `offset` rows up per step.
    pub fn scroll_left_offset(
        &mut self,
        start_page: u8,
        interval: ScrollInterval,
        end_page: u8,
        offset: u8,
    ) -> Result<(), Error<B::Error>> {
        self.write_command(ScrollLeftOffset {
            start_page,
            interval,
            end_page,
            offset,
        })
    }

    pub fn deactivate_scroll(&mut self) -> Result<(), Error<B::Error>> {
        self.write_command(DeactivateScroll)
    }

    pub fn activate_scroll(&mut self) -> Result<(), Error<B::Error>> {
        self.write_command(ActivateScroll)
    }

    /// Limit vertical scrolling to `rows` rows starting at row `top`.
    pub fn set_vertical_scroll_area(&mut self, top: u8, rows: u8) -> Result<(), Error<B::Error>> {
        self.write_command(VerticalScrollArea { top, rows })
    }

    // 3. addressing

    /// Set the column address for the next data write, in controller column space.
    ///
    /// Does not move the text cursor; prefer [`set_cursor()`](Self::set_cursor).
    pub fn set_column_start_address(&mut self, column: u8) -> Result<(), Error<B::Error>> {
        self.write_command(ColumnStartAddress(column))
    }

    /// Change the memory addressing mode.
    ///
    /// The text and fill functions of this driver rely on page addressing mode; switch back
    /// to [`AddressingMode::Page`] before using them again.
    pub fn set_memory_addressing_mode(&mut self, mode: AddressingMode) -> Result<(), Error<B::Error>> {
        self.write_command(MemoryAddressingMode(mode))
    }

    /// Set the column window for horizontal and vertical addressing mode.
    pub fn set_column_address(&mut self, start: u8, end: u8) -> Result<(), Error<B::Error>> {
        self.write_command(ColumnAddress { start, end })
    }

    /// Set the page window for horizontal and vertical addressing mode.
    pub fn set_page_address(&mut self, start: u8, end: u8) -> Result<(), Error<B::Error>> {
        self.write_command(PageAddress { start, end })
    }

    /// Select the page for the next data write, in controller page space.
    pub fn set_page_start_address(&mut self, page: u8) -> Result<(), Error<B::Error>> {
        self.write_command(PageStartAddress(page))
    }

    // 4. hardware configuration

    pub fn set_display_start_line(&mut self, line: u8) -> Result<(), Error<B::Error>> {
        self.write_command(DisplayStartLine(line))
    }

    pub fn set_segment_remap(&mut self, remap: bool) -> Result<(), Error<B::Error>> {
        self.write_command(SegmentRemap(remap))
    }

    /// Number of COM lines in use, 16..=64.
    pub fn set_multiplex_ratio(&mut self, ratio: u8) -> Result<(), Error<B::Error>> {
        self.write_command(MultiplexRatio(ratio))
    }

    /// Scan COM lines in reverse order (true), i.e. flip the display vertically.
    pub fn set_com_output_direction(&mut self, remapped: bool) -> Result<(), Error<B::Error>> {
        self.write_command(ComOutputDirection(remapped))
    }

    pub fn set_display_offset(&mut self, offset: u8) -> Result<(), Error<B::Error>> {
        self.write_command(DisplayOffset(offset))
    }

    pub fn set_com_pins_configuration(
        &mut self,
        alternative: bool,
        left_right_remap: bool,
    ) -> Result<(), Error<B::Error>> {
        self.write_command(ComPinsConfiguration {
            alternative,
            left_right_remap,
        })
    }

    // 5. timing and driving scheme

    /// Divide ratio 1..=16 and oscillator frequency setting 0..=15 (reset: 1 and 8).
    pub fn set_display_clock(
        &mut self,
        divide_ratio: u8,
        oscillator_frequency: u8,
    ) -> Result<(), Error<B::Error>> {
        self.write_command(DisplayClock {
            divide_ratio,
            oscillator_frequency,
        })
    }

    pub fn set_precharge_period(&mut self, phase_one: u8, phase_two: u8) -> Result<(), Error<B::Error>> {
        self.write_command(PrechargePeriod {
            phase_one,
            phase_two,
        })
    }

    pub fn set_vcomh_deselect_level(&mut self, level: u8) -> Result<(), Error<B::Error>> {
        self.write_command(VcomhDeselectLevel(level))
    }

    pub fn nop(&mut self) -> Result<(), Error<B::Error>> {
        self.write_command(Nop)
    }

    // 6. advanced graphics

    pub fn fade_out(&mut self, interval: u8) -> Result<(), Error<B::Error>> {
        self.write_command(FadeOut(interval))
    }

    pub fn blink(&mut self, interval: u8) -> Result<(), Error<B::Error>> {
        self.write_command(Blink(interval))
    }

    pub fn disable_fade_out_and_blinking(&mut self) -> Result<(), Error<B::Error>> {
        self.write_command(DisableFadeOutAndBlinking)
    }

    pub fn set_zoom_in(&mut self, enable: bool) -> Result<(), Error<B::Error>> {
        self.write_command(ZoomIn(enable))
    }

    // charge pump

    pub fn set_charge_pump(&mut self, enable: bool) -> Result<(), Error<B::Error>> {
        self.write_command(ChargePump(enable))
    }
}
