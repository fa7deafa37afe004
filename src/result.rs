use core::fmt::Debug;

/// Error type
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E: Sized + Debug> {
    /// Response checksum mismatch (computed, received)
    CrcMismatch(u8, u8),
    BusError(E),
}

impl<E: Sized + Debug> From<E> for Error<E> {
    fn from(e: E) -> Self {
        Error::BusError(e)
    }
}
