//! # Module defining the instruction set of the SSD1306
//!
//! Every command is an [`Instruction`] variant and encodes to the exact opcode and parameter
//! bytes the controller expects in one CONTROL transaction. The grouping follows the
//! command tables of the data sheet:
//!
//! 1. Fundamental commands: contrast, entire display on, inverse, on/off.
//! 2. Scrolling: continuous horizontal scroll, diagonal scroll with vertical offset, the
//!    vertical scroll area, activate/deactivate.
//! 3. Addressing: column/page start for page addressing mode, the memory addressing mode
//!    and column/page windows for horizontal and vertical mode.
//! 4. Hardware configuration: start line, segment remap, multiplex ratio, COM direction,
//!    display offset, COM pins layout.
//! 5. Timing and driving scheme: clock divider, pre-charge periods, VCOMH level, NOP.
//! 6. Advanced graphics (SSD1306B): fade out, blink, zoom.
//!
//! plus the charge pump switch that nearly every module needs at startup.
//!
//! Arguments are masked to the width of their bit field rather than checked, so a wild
//! value still produces a well formed command.
//!
//! ## Scrolling
//! Horizontal scrolls move the pages `start_page..=end_page` by one column every
//! `interval` frames (see [`ScrollInterval`]). The offset variants additionally shift the
//! rows inside the vertical scroll area by `offset` rows per step, which gives a diagonal
//! movement. Scroll parameters must be set while scrolling is deactivated.
//!
//! ## Multiplex ratio
//! The ratio is the number of COM lines in use, 16 to 64. It is sent as `ratio - 1`.
use heapless::Vec;

/// Longest encoded instruction: opcode plus six parameter bytes.
pub const MAX_INSTRUCTION_LEN: usize = 7;

/// Encoded opcode and parameter bytes of one instruction.
pub type InstructionBytes = Vec<u8, MAX_INSTRUCTION_LEN>;

/// Frame interval between horizontal scroll steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ScrollInterval {
    Frames5 = 0b000,
    Frames64 = 0b001,
    Frames128 = 0b010,
    Frames256 = 0b011,
    Frames3 = 0b100,
    Frames4 = 0b101,
    Frames25 = 0b110,
    Frames2 = 0b111,
}

/// How the column and page addresses advance after each data byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AddressingMode {
    /// column wraps to the start of the next page at the end of the column window
    Horizontal = 0b00,
    /// page advances first, then the column
    Vertical = 0b01,
    /// column advances within the current page only (the reset default, used by this driver)
    Page = 0b10,
}

/// SSD1306 instruction set, see data sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Instruction {
    /// contrast 0..=255, higher is brighter
    // translates to: 0x81, contrast
    SetContrast(u8),

    /// light every pixel regardless of RAM content (true) or follow RAM (false)
    // translates to: 0xA5 / 0xA4
    EntireDisplayOn(bool),

    /// inverse video: RAM bit 0 lights the pixel
    // translates to: 0xA7 / 0xA6
    Inverse(bool),

    /// display on (true) or sleep mode (false)
    // translates to: 0xAF / 0xAE
    DisplayOn(bool),

    /// continuous horizontal scroll to the right
    // translates to: 0x26, 0x00, start, interval, end, 0x00, 0xFF
    ScrollRight {
        start_page: u8,
        interval: ScrollInterval,
        end_page: u8,
    },

    /// continuous horizontal scroll to the left
    // translates to: 0x27, 0x00, start, interval, end, 0x00, 0xFF
    ScrollLeft {
        start_page: u8,
        interval: ScrollInterval,
        end_page: u8,
    },

    /// vertical and right horizontal scroll, `offset` rows per step
    // translates to: 0x29, 0x00, start, interval, end, offset
    ScrollRightOffset {
        start_page: u8,
        interval: ScrollInterval,
        end_page: u8,
        offset: u8,
    },

    /// vertical and left horizontal scroll, `offset` rows per step
    // translates to: 0x2A, 0x00, start, interval, end, offset
    ScrollLeftOffset {
        start_page: u8,
        interval: ScrollInterval,
        end_page: u8,
        offset: u8,
    },

    // translates to: 0x2E
    DeactivateScroll,

    // translates to: 0x2F
    ActivateScroll,

    /// rows `top..top + rows` take part in vertical scrolling
    // translates to: 0xA3, top, rows
    VerticalScrollArea { top: u8, rows: u8 },

    /// column start address for page addressing mode, 0..=127
    // translates to: 0x00 | low nibble, 0x10 | high nibble
    ColumnStartAddress(u8),

    // translates to: 0x20, mode
    MemoryAddressingMode(AddressingMode),

    /// column window for horizontal and vertical addressing mode
    // translates to: 0x21, start, end
    ColumnAddress { start: u8, end: u8 },

    /// page window for horizontal and vertical addressing mode
    // translates to: 0x22, start, end
    PageAddress { start: u8, end: u8 },

    /// page start address for page addressing mode, 0..=7
    // translates to: 0xB0 | page
    PageStartAddress(u8),

    /// RAM row shown on the first COM line, 0..=63
    // translates to: 0x40 | line
    DisplayStartLine(u8),

    /// mirror the columns: column 127 is mapped to SEG0
    // translates to: 0xA0 | remap
    SegmentRemap(bool),

    /// number of COM lines in use, 16..=64
    // translates to: 0xA8, (ratio - 1) & 0x3F
    MultiplexRatio(u8),

    /// scan COM lines from COM[N-1] to COM0 (true) instead of COM0 to COM[N-1]
    // translates to: 0xC0 | remapped << 3
    ComOutputDirection(bool),

    /// vertical shift of the mapping from COM lines to RAM rows
    // translates to: 0xD3, offset & 0x3F
    DisplayOffset(u8),

    /// COM pins layout: alternative (interleaved) pins and left/right remap
    // translates to: 0xDA, 0x02 | alternative << 4 | left_right_remap << 5
    ComPinsConfiguration {
        alternative: bool,
        left_right_remap: bool,
    },

    /// display clock divide ratio 1..=16 and oscillator frequency setting 0..=15
    // translates to: 0xD5, frequency << 4 | (ratio - 1)
    DisplayClock {
        divide_ratio: u8,
        oscillator_frequency: u8,
    },

    /// pre-charge phase lengths in DCLK periods, 1..=15 each
    // translates to: 0xD9, phase_two << 4 | phase_one
    PrechargePeriod { phase_one: u8, phase_two: u8 },

    /// VCOMH deselect level, 0..=7 (0 = 0.65, 2 = 0.77, 3 = 0.83 x Vcc)
    // translates to: 0xDB, level << 4
    VcomhDeselectLevel(u8),

    // translates to: 0xE3
    Nop,

    /// fade out with the given interval, 0..=15 (8 frames per step)
    // translates to: 0x23, 0x20 | interval
    FadeOut(u8),

    /// blink with the given interval, 0..=15
    // translates to: 0x23, 0x30 | interval
    Blink(u8),

    // translates to: 0x23, 0x00
    DisableFadeOutAndBlinking,

    /// double each row (zoom in)
    // translates to: 0xD6, enable
    ZoomIn(bool),

    /// internal charge pump; required for modules without an external VCC supply
    // translates to: 0x8D, 0x14 / 0x10
    ChargePump(bool),
}

use Instruction::*;

fn bytes(raw: &[u8]) -> InstructionBytes {
    raw.iter().copied().collect()
}

impl Instruction {
    /// Returns the opcode and its parameter bytes, ready to go into one CONTROL transaction.
    pub fn bytes(self) -> InstructionBytes {
        match self {
            SetContrast(contrast) => bytes(&[0x81, contrast]),
            EntireDisplayOn(on) => bytes(&[0xA4 | on as u8]),
            Inverse(inverse) => bytes(&[0xA6 | inverse as u8]),
            DisplayOn(on) => bytes(&[0xAE | on as u8]),
            ScrollRight {
                start_page,
                interval,
                end_page,
            } => bytes(&[0x26, 0x00, start_page, interval as u8, end_page, 0x00, 0xFF]),
            ScrollLeft {
                start_page,
                interval,
                end_page,
            } => bytes(&[0x27, 0x00, start_page, interval as u8, end_page, 0x00, 0xFF]),
            ScrollRightOffset {
                start_page,
                interval,
                end_page,
                offset,
            } => bytes(&[0x29, 0x00, start_page, interval as u8, end_page, offset]),
            ScrollLeftOffset {
                start_page,
                interval,
                end_page,
                offset,
            } => bytes(&[0x2A, 0x00, start_page, interval as u8, end_page, offset]),
            DeactivateScroll => bytes(&[0x2E]),
            ActivateScroll => bytes(&[0x2F]),
            VerticalScrollArea { top, rows } => bytes(&[0xA3, top, rows]),
            ColumnStartAddress(column) => bytes(&[column & 0x0F, 0x10 | ((column >> 4) & 0x0F)]),
            MemoryAddressingMode(mode) => bytes(&[0x20, mode as u8 & 0x03]),
            ColumnAddress { start, end } => bytes(&[0x21, start & 0x7F, end & 0x7F]),
            PageAddress { start, end } => bytes(&[0x22, start & 0x07, end & 0x07]),
            PageStartAddress(page) => bytes(&[0xB0 | (page & 0x07)]),
            DisplayStartLine(line) => bytes(&[0x40 | (line & 0x3F)]),
            SegmentRemap(remap) => bytes(&[0xA0 | remap as u8]),
            MultiplexRatio(ratio) => bytes(&[0xA8, ratio.wrapping_sub(1) & 0x3F]),
            ComOutputDirection(remapped) => bytes(&[0xC0 | ((remapped as u8) << 3)]),
            DisplayOffset(offset) => bytes(&[0xD3, offset & 0x3F]),
            ComPinsConfiguration {
                alternative,
                left_right_remap,
            } => bytes(&[
                0xDA,
                ((left_right_remap as u8) << 5) | ((alternative as u8) << 4) | 0x02,
            ]),
            DisplayClock {
                divide_ratio,
                oscillator_frequency,
            } => bytes(&[
                0xD5,
                ((oscillator_frequency & 0x0F) << 4) | (divide_ratio.wrapping_sub(1) & 0x0F),
            ]),
            PrechargePeriod {
                phase_one,
                phase_two,
            } => bytes(&[0xD9, ((phase_two & 0x0F) << 4) | (phase_one & 0x0F)]),
            VcomhDeselectLevel(level) => bytes(&[0xDB, (level & 0x07) << 4]),
            Nop => bytes(&[0xE3]),
            FadeOut(interval) => bytes(&[0x23, 0x20 | (interval & 0x0F)]),
            Blink(interval) => bytes(&[0x23, 0x30 | (interval & 0x0F)]),
            DisableFadeOutAndBlinking => bytes(&[0x23, 0x00]),
            ZoomIn(enable) => bytes(&[0xD6, enable as u8]),
            ChargePump(enable) => bytes(&[0x8D, if enable { 0x14 } else { 0x10 }]),
        }
    }
}

/// A prelude for convenience, it pulls all enums into scope.
pub mod prelude {
    pub use super::{
        AddressingMode, Instruction, Instruction::*, ScrollInterval, ScrollInterval::*,
    };
}
