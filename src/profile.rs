//! Panel geometry and startup configuration.
//!
//! The SSD1306 always has 128 columns by 8 pages of display RAM. Modules wire only part of
//! it to the glass: a 128x32 module scans 4 pages, a 64x48 module uses columns 32..96 and
//! pages 2..8. A [`PanelProfile`] describes where the visible window sits, whether the spare
//! RAM can be used as a second frame, and which init bytes bring the module up.

/// Frame-switch strategy of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameMode {
    /// all visible RAM is in use, frame switching does nothing
    Single,
    /// the panel shows half of the controller RAM; the other half is a second frame
    Dual,
}

/// Immutable description of one module variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelProfile {
    /// height in 8-row pages
    pub page_count: u8,
    /// visible width in columns
    pub physical_width: u8,
    /// first visible column in controller column space
    pub column_offset: u8,
    /// first visible page in controller page space
    pub page_offset: u8,
    pub frame_mode: FrameMode,
    /// sent verbatim as one CONTROL transaction by `begin()`
    pub init_sequence: &'static [u8],
}

// Only the settings that differ from the controller reset state are sent; the display is
// switched on separately with `on()`.
const INIT_128X64: &[u8] = &[
    0xC8, // COM scan direction remapped
    0xA1, // segment remap, column 127 mapped to SEG0
    0xDA, 0x12, // alternative COM pins
    0x8D, 0x14, // charge pump on
];

const INIT_128X32: &[u8] = &[
    0xC8, // COM scan direction remapped
    0xA1, // segment remap, column 127 mapped to SEG0
    0xA8, 0x1F, // multiplex ratio 32
    0xDA, 0x02, // sequential COM pins
    0x8D, 0x14, // charge pump on
];

const INIT_64X48: &[u8] = &[
    0xC8, // COM scan direction remapped
    0xA1, // segment remap, column 127 mapped to SEG0
    0xA8, 0x2F, // multiplex ratio 48
    0xDA, 0x12, // alternative COM pins
    0x8D, 0x14, // charge pump on
];

impl PanelProfile {
    /// 128x64 module, the full controller RAM is visible.
    pub const SSD1306_128X64: PanelProfile = PanelProfile {
        page_count: 8,
        physical_width: 128,
        column_offset: 0,
        page_offset: 0,
        frame_mode: FrameMode::Single,
        init_sequence: INIT_128X64,
    };

    /// 128x32 module, pages 4..8 hold a second frame.
    pub const SSD1306_128X32: PanelProfile = PanelProfile {
        page_count: 4,
        physical_width: 128,
        column_offset: 0,
        page_offset: 0,
        frame_mode: FrameMode::Dual,
        init_sequence: INIT_128X32,
    };

    /// 64x48 module, visible RAM starts at column 32, page 2.
    pub const SSD1306_64X48: PanelProfile = PanelProfile {
        page_count: 6,
        physical_width: 64,
        column_offset: 32,
        page_offset: 2,
        frame_mode: FrameMode::Single,
        init_sequence: INIT_64X48,
    };

    /// The same geometry with a different init sequence.
    pub const fn with_init_sequence(self, init_sequence: &'static [u8]) -> PanelProfile {
        PanelProfile {
            init_sequence,
            ..self
        }
    }

    pub fn supports_dual_frame(&self) -> bool {
        self.frame_mode == FrameMode::Dual
    }

    /// Height in pixel rows.
    pub fn height(&self) -> u16 {
        u16::from(self.page_count) * 8
    }
}

impl Default for PanelProfile {
    fn default() -> Self {
        PanelProfile::SSD1306_128X64
    }
}
