//! Recording backend for the unit tests.
extern crate std;

use std::vec::Vec;

use crate::backend::{Backend, TransactionKind};

/// One closed transaction as seen by the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Control(Vec<u8>),
    Data(Vec<u8>),
}

impl Sent {
    pub fn bytes(&self) -> &[u8] {
        match self {
            Sent::Control(bytes) | Sent::Data(bytes) => bytes,
        }
    }
}

/// Error the recorder raises once its write budget is used up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

/// Backend logging every transaction, with an optional transmit buffer limit and an
/// optional hard failure after a number of written bytes.
#[derive(Debug, Default)]
pub struct Recorder {
    sent: Vec<Sent>,
    open: Option<(TransactionKind, Vec<u8>)>,
    capacity: Option<usize>,
    writes_left: Option<usize>,
    begins_left: Option<usize>,
}

impl Recorder {
    pub fn new() -> Recorder {
        Recorder::default()
    }

    /// A recorder accepting at most `capacity` payload bytes per transaction.
    pub fn with_capacity(capacity: usize) -> Recorder {
        Recorder {
            capacity: Some(capacity),
            ..Recorder::default()
        }
    }

    /// Fail every write after `count` more successful ones.
    pub fn fail_after(&mut self, count: usize) {
        self.writes_left = Some(count);
    }

    /// Fail every transaction open after `count` more successful ones.
    pub fn fail_begins_after(&mut self, count: usize) {
        self.begins_left = Some(count);
    }

    pub fn sent(&self) -> &[Sent] {
        &self.sent
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.sent.clear();
    }

    /// All DATA payload bytes, in order.
    pub fn data_bytes(&self) -> Vec<u8> {
        self.sent
            .iter()
            .filter_map(|sent| match sent {
                Sent::Data(bytes) => Some(bytes.iter().copied()),
                Sent::Control(_) => None,
            })
            .flatten()
            .collect()
    }

    /// Every CONTROL transaction's payload, in order.
    pub fn controls(&self) -> Vec<Vec<u8>> {
        self.sent
            .iter()
            .filter_map(|sent| match sent {
                Sent::Control(bytes) => Some(bytes.clone()),
                Sent::Data(_) => None,
            })
            .collect()
    }
}

impl Backend for Recorder {
    type Error = BusFault;

    fn begin(&mut self, kind: TransactionKind) -> Result<(), BusFault> {
        assert!(self.open.is_none(), "transaction opened twice");
        if let Some(left) = self.begins_left.as_mut() {
            if *left == 0 {
                return Err(BusFault);
            }
            *left -= 1;
        }
        self.open = Some((kind, Vec::new()));
        Ok(())
    }

    fn write(&mut self, byte: u8) -> Result<usize, BusFault> {
        if let Some(left) = self.writes_left.as_mut() {
            if *left == 0 {
                return Err(BusFault);
            }
            *left -= 1;
        }
        let capacity = self.capacity;
        let (_, bytes) = self.open.as_mut().expect("write outside of a transaction");
        if capacity.map_or(false, |cap| bytes.len() >= cap) {
            return Ok(0);
        }
        bytes.push(byte);
        Ok(1)
    }

    fn end(&mut self) -> Result<(), BusFault> {
        let (kind, bytes) = self.open.take().expect("close without open transaction");
        if !bytes.is_empty() {
            self.sent.push(match kind {
                TransactionKind::Control => Sent::Control(bytes),
                TransactionKind::Data => Sent::Data(bytes),
            });
        }
        Ok(())
    }
}
