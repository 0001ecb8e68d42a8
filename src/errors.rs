use thiserror::Error;

#[cfg(feature = "clients")]
use crate::clients::TransportError;

/// A simple type alias so as to DRY.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned when encoding or decoding a DNS message.
#[derive(Error, Debug)]
pub enum Error {
    /// A read or write would run past the end of the buffer.
    #[error("buffer out of range: {needed} byte(s) at offset {offset} for buffer of length {len}")]
    OutOfBounds {
        offset: usize,
        needed: usize,
        len: usize,
    },

    /// A label on the wire could not be turned into text.
    #[error("invalid label at offset {offset}: {reason}")]
    MalformedLabel { offset: usize, reason: String },

    /// Compression pointers kept pointing at each other.
    #[error("compression pointer chain exceeded {hops} hops")]
    CompressionCycle { hops: usize },

    #[error("label '{0}' longer than 63 bytes")]
    LabelTooLong(String),

    #[error("domain name encodes to {0} bytes, more than 255")]
    NameTooLong(usize),

    #[error("empty label in domain name '{0}'")]
    EmptyLabel(String),

    #[error("{0} questions do not fit in a message")]
    TooManyQuestions(usize),

    /// The network exchange failed. Opaque to the codec.
    #[cfg(feature = "clients")]
    #[error(transparent)]
    Transport(#[from] TransportError),
}
