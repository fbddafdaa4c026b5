//! Framing of byte streams into bus transactions.
//!
//! [`Bus`] wraps a [`Backend`] and adds the one piece of protocol logic the driver needs:
//! when the transport's transmit buffer is full, the open transaction is closed, a new one
//! of the same kind is opened and the refused byte is sent again as its first byte. A byte
//! that is refused even then is reported as [`Error::BufferFull`].
//!
//! Transactions opened through [`Bus::transaction`] are always closed, also when the body
//! fails, so the bus is ready for the next transfer whatever happened.
use crate::backend::{Backend, TransactionKind};
use crate::error::Error;

/// A backend plus the kind of the transaction currently open on it.
#[derive(Debug)]
pub struct Bus<B> {
    backend: B,
    open: Option<TransactionKind>,
}

impl<B> Bus<B>
where
    B: Backend,
{
    pub fn new(backend: B) -> Bus<B> {
        Bus {
            backend,
            open: None,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn release(self) -> B {
        self.backend
    }

    /// Open a transaction of the given kind.
    pub fn begin(&mut self, kind: TransactionKind) -> Result<(), Error<B::Error>> {
        self.backend.begin(kind)?;
        self.open = Some(kind);
        Ok(())
    }

    /// Append a byte to the open transaction, reopening it once if the buffer is full.
    ///
    /// Without an open transaction a CONTROL transaction is assumed.
    pub fn send_byte(&mut self, byte: u8) -> Result<(), Error<B::Error>> {
        if self.backend.write(byte)? > 0 {
            return Ok(());
        }

        let kind = self.open.unwrap_or(TransactionKind::Control);
        trace!("transmit buffer full, reopening {} transaction", kind);
        self.end()?;
        self.begin(kind)?;

        if self.backend.write(byte)? > 0 {
            Ok(())
        } else {
            warn!("byte {=u8:#x} refused after reopening", byte);
            Err(Error::BufferFull)
        }
    }

    /// Close the open transaction. Does nothing when none is open.
    pub fn end(&mut self) -> Result<(), Error<B::Error>> {
        if self.open.take().is_none() {
            return Ok(());
        }
        self.backend.end()?;
        Ok(())
    }

    /// Run `body` inside a transaction of the given kind.
    ///
    /// The transaction is closed on every exit path. If both `body` and the close fail,
    /// the error of `body` is returned.
    pub fn transaction<T, F>(&mut self, kind: TransactionKind, body: F) -> Result<T, Error<B::Error>>
    where
        F: FnOnce(&mut Self) -> Result<T, Error<B::Error>>,
    {
        self.begin(kind)?;
        match body(self) {
            Ok(value) => {
                self.end()?;
                Ok(value)
            }
            Err(err) => {
                let _ = self.end();
                Err(err)
            }
        }
    }

    /// Send all `bytes` as one transaction of the given kind.
    pub fn send(&mut self, kind: TransactionKind, bytes: &[u8]) -> Result<(), Error<B::Error>> {
        self.transaction(kind, |bus| {
            for &byte in bytes {
                bus.send_byte(byte)?;
            }
            Ok(())
        })
    }

    /// Send `count` copies of `value` as one transaction of the given kind.
    pub fn send_repeated(
        &mut self,
        kind: TransactionKind,
        value: u8,
        count: usize,
    ) -> Result<(), Error<B::Error>> {
        self.transaction(kind, |bus| {
            for _ in 0..count {
                bus.send_byte(value)?;
            }
            Ok(())
        })
    }
}
