// nfcbeam/src/error.rs

use thiserror::Error;

/// Boxed underlying cause attached to transport failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Sub-kind of a transport failure, derived from the reader status word
/// or from the channel itself.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    #[error("wrong checksum in response (63 27)")]
    Checksum,
    #[error("invalid or unsupported PN53x command (63 7f)")]
    UnsupportedCommand,
    #[error("unexpected status word {sw1:02x} {sw2:02x}")]
    Status { sw1: u8, sw2: u8 },
    #[error("channel failure")]
    Channel,
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("initialization failed: {0}")]
    Initialization(String),

    #[error("transport error: {kind}")]
    Transport {
        kind: TransportErrorKind,
        #[source]
        source: Option<BoxError>,
    },

    #[error("timed out after {timeout_ms} ms waiting for a beam target")]
    Timeout { timeout_ms: u64 },

    #[error("beamed message is too large: {size} bytes, max_allowed_size {max}")]
    SizeLimit { size: usize, max: usize },

    #[error("ndef format error: {0}")]
    Format(String),

    #[error("protocol error: {0}")]
    Protocol(String),

    #[error("interrupted while waiting for a beam target")]
    Interrupted,
}

/// Flat tag for [`Error`], convenient for matching without destructuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Initialization,
    Transport,
    Timeout,
    SizeLimit,
    Format,
    Protocol,
    Interrupted,
}

impl Error {
    /// Transport error without an underlying cause (status word failures).
    pub fn transport(kind: TransportErrorKind) -> Self {
        Self::Transport { kind, source: None }
    }

    /// Channel-level transport error wrapping the cause reported by the
    /// channel implementation.
    pub fn channel<E>(cause: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Transport {
            kind: TransportErrorKind::Channel,
            source: Some(cause.into()),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Initialization(_) => ErrorKind::Initialization,
            Self::Transport { .. } => ErrorKind::Transport,
            Self::Timeout { .. } => ErrorKind::Timeout,
            Self::SizeLimit { .. } => ErrorKind::SizeLimit,
            Self::Format(_) => ErrorKind::Format,
            Self::Protocol(_) => ErrorKind::Protocol,
            Self::Interrupted => ErrorKind::Interrupted,
        }
    }

    /// Sub-kind of a transport error, `None` for every other kind.
    pub fn transport_kind(&self) -> Option<TransportErrorKind> {
        match self {
            Self::Transport { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

#[cfg(feature = "pcsc")]
impl From<pcsc::Error> for Error {
    fn from(e: pcsc::Error) -> Self {
        Error::channel(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
