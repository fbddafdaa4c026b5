use embedded_hal::i2c::{ErrorType, I2c, Operation};
use ssd1306_tiny::{font::FONT_6X8, I2cBackend, PanelProfile, Ssd1306};
use std::convert::Infallible;
use std::fmt::Write;

/// Bus that accepts every transfer and prints it.
pub struct PrintingI2c;

impl ErrorType for PrintingI2c {
    type Error = Infallible;
}

impl I2c for PrintingI2c {
    fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Infallible> {
        for op in operations {
            if let Operation::Write(bytes) = op {
                println!("{:#04x} <- {:02x?}", address, bytes);
            }
        }
        Ok(())
    }
}

fn main() {
    let backend: I2cBackend<_, 16> = I2cBackend::new(PrintingI2c);
    let mut display = Ssd1306::new(backend, PanelProfile::SSD1306_128X32);

    display.begin().expect("Infallible cannot fail");
    display.clear().expect("Infallible cannot fail");
    display.on().expect("Infallible cannot fail");

    display.set_font(FONT_6X8);
    writeln!(display, "Hello World").unwrap();
    display.switch_frame().expect("Infallible cannot fail");
}
