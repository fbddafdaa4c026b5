//! # Bus transport for the SSD1306
//!
//! The controller takes two kinds of framed transfers: CONTROL transactions carrying
//! opcodes and their parameters, and DATA transactions carrying pixel columns for the
//! display RAM. On I²C the kind is announced by a control byte right after the address.
//!
//! [`Backend`] is the seam between the driver and whatever moves the bytes. It mirrors how
//! small MCU bus stacks work: a transaction is opened, bytes are queued into a fixed size
//! transmit buffer one by one, and the transfer happens when it is closed. A full buffer is
//! reported by accepting zero bytes; the [`transaction`](crate::transaction) layer then
//! closes and reopens the transaction so callers never notice.
use embedded_hal::i2c::I2c;
use heapless::Vec;

/// Default 7-bit bus address of SSD1306 modules (SA0 low).
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Alternative 7-bit bus address (SA0 high).
pub const ALTERNATE_ADDRESS: u8 = 0x3D;

/// Control byte that opens a stream of command bytes.
const CONTROL_STREAM: u8 = 0x00;

/// Control byte that opens a stream of display RAM bytes.
const DATA_STREAM: u8 = 0x40;

/// What the bytes of a transaction are for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransactionKind {
    /// opcode and parameter bytes, they end up in the controller registers
    Control,
    /// pixel column bytes, they end up in display RAM at the current address
    Data,
}

impl TransactionKind {
    /// The I²C control byte announcing this kind of transfer.
    pub fn control_byte(self) -> u8 {
        match self {
            TransactionKind::Control => CONTROL_STREAM,
            TransactionKind::Data => DATA_STREAM,
        }
    }
}

/// Transport that frames bytes into transactions.
pub trait Backend {
    type Error;

    /// Open a transaction of the given kind.
    fn begin(&mut self, kind: TransactionKind) -> Result<(), Self::Error>;

    /// Queue one byte into the open transaction.
    ///
    /// Returns the number of bytes accepted: 1, or 0 when the transaction buffer is full.
    fn write(&mut self, byte: u8) -> Result<usize, Self::Error>;

    /// Close the open transaction, pushing everything queued onto the bus.
    fn end(&mut self) -> Result<(), Self::Error>;
}

impl<B: Backend + ?Sized> Backend for &mut B {
    type Error = B::Error;

    fn begin(&mut self, kind: TransactionKind) -> Result<(), B::Error> {
        (**self).begin(kind)
    }

    fn write(&mut self, byte: u8) -> Result<usize, B::Error> {
        (**self).write(byte)
    }

    fn end(&mut self) -> Result<(), B::Error> {
        (**self).end()
    }
}

/// I²C transport with an `N` byte transmit buffer (control byte included).
///
/// Every transaction becomes one `I2c::write` to the device address when it is closed.
/// `N` must be at least 2 to carry any payload at all; 32 matches the common Wire buffer.
#[derive(Debug)]
pub struct I2cBackend<I2C, const N: usize = 32> {
    i2c: I2C,
    address: u8,
    buffer: Vec<u8, N>,
}

impl<I2C, const N: usize> I2cBackend<I2C, N>
where
    I2C: I2c,
{
    /// Create a backend talking to a module at [`DEFAULT_ADDRESS`].
    pub fn new(i2c: I2C) -> I2cBackend<I2C, N> {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    /// Create a backend talking to a module at the given 7-bit address.
    pub fn with_address(i2c: I2C, address: u8) -> I2cBackend<I2C, N> {
        I2cBackend {
            i2c,
            address,
            buffer: Vec::new(),
        }
    }

    /// the 7-bit address this backend writes to
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give back the bus, e.g. to share it with other devices.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, const N: usize> Backend for I2cBackend<I2C, N>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn begin(&mut self, kind: TransactionKind) -> Result<(), I2C::Error> {
        self.buffer.clear();
        // with N == 0 nothing can be framed at all; write() then refuses every byte
        let _ = self.buffer.push(kind.control_byte());
        Ok(())
    }

    fn write(&mut self, byte: u8) -> Result<usize, I2C::Error> {
        match self.buffer.push(byte) {
            Ok(()) => Ok(1),
            Err(_) => Ok(0),
        }
    }

    fn end(&mut self) -> Result<(), I2C::Error> {
        let result = if self.buffer.len() > 1 {
            self.i2c.write(self.address, &self.buffer)
        } else {
            // nothing but the control byte was queued
            Ok(())
        };
        self.buffer.clear();
        result
    }
}
