//! # SSD1306 text and bitmap driver
//!
//! A small driver for SSD1306 OLED modules (128x64, 128x32, 64x48) on a two-wire bus,
//! built on `embedded_hal`. It writes straight into the controller RAM in page addressing
//! mode and keeps no frame buffer, so it fits MCUs with very little memory.
//!
//! What it does:
//!  - text output with fixed size fonts of one or more pages height, as `core::fmt::Write`
//!  - fills of lines, regions and the whole screen, and raw bitmap copies
//!  - double buffering on 128x32 modules, by drawing into the invisible half of the RAM
//!  - the controller command set (contrast, scrolling, fading, ...)
//!
//! ```rust,no_run
//! # use core::fmt::Write;
//! # use embedded_hal::i2c::{ErrorType, I2c, Operation};
//! # struct Bus;
//! # impl ErrorType for Bus { type Error = core::convert::Infallible; }
//! # impl I2c for Bus {
//! #     fn transaction(&mut self, _: u8, _: &mut [Operation<'_>]) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # let i2c = Bus;
//! use ssd1306_tiny::{font::FONT_6X8, I2cBackend, PanelProfile, Ssd1306};
//!
//! let backend: I2cBackend<_> = I2cBackend::new(i2c);
//! let mut oled = Ssd1306::new(backend, PanelProfile::SSD1306_128X32);
//! oled.begin().unwrap();
//! oled.clear().unwrap();
//! oled.on().unwrap();
//! oled.set_font(FONT_6X8);
//! writeln!(oled, "Hello World").unwrap();
//! ```
//!
//! Features:
//!  - `graphics`: size reporting and area fills for `embedded-graphics`
//!  - `defmt`: log through `defmt` and derive `defmt::Format` on public types
#![no_std]

// must come first, the logging macros are used by the modules below
mod fmt;

pub mod backend;
pub mod display;
pub mod error;
mod fill;
pub mod font;
mod frame;
#[cfg(feature = "graphics")]
pub mod graphics;
pub mod instructions;
pub mod profile;
mod textmode;
pub mod transaction;

#[cfg(test)]
mod testing;

pub use backend::{Backend, I2cBackend, TransactionKind, ALTERNATE_ADDRESS, DEFAULT_ADDRESS};
pub use display::{Cursor, Ssd1306};
pub use error::Error;
pub use font::Font;
pub use instructions::{AddressingMode, Instruction, ScrollInterval};
pub use profile::{FrameMode, PanelProfile};
