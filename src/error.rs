//! Error type shared by every driver operation.
//!
//! Only transport problems are errors. Out of range coordinates and character codes are
//! masked or substituted on the way to the controller and never reported.

/// Failure while talking to the controller.
///
/// `E` is the error type of the [`Backend`](crate::backend::Backend) in use, e.g. the
/// `embedded_hal` I²C error of the MCU's bus peripheral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The bus reported a failure (device absent, NACK, arbitration lost).
    #[error("bus transport failure")]
    Bus(E),

    /// The transport refused a byte even at the start of a freshly opened transaction.
    #[error("transport buffer refused a byte after reopening the transaction")]
    BufferFull,
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Error::Bus(err)
    }
}
