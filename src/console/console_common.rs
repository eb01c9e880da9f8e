use std::fmt;
use std::io;

use crate::console::mode::StdStream;

#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("console modes are only available on windows")]
    PlatformMismatch,
    #[error("failed to resolve standard handle {code}: {source}")]
    HandleResolution {
        code: i32,
        #[source]
        source: io::Error,
    },
    #[error("failed to resolve {symbol}: {source}")]
    Linkage {
        symbol: &'static str,
        #[source]
        source: io::Error,
    },
    #[error("GetConsoleMode failed: {0}")]
    GetMode(#[source] io::Error),
    #[error("SetConsoleMode failed: {0}")]
    SetMode(#[source] io::Error),
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum ConsoleErrorKind {
    PlatformMismatch,
    HandleResolution,
    Linkage,
    ModeOperation,
}

impl ConsoleError {
    pub fn kind(&self) -> ConsoleErrorKind {
        match self {
            ConsoleError::PlatformMismatch => ConsoleErrorKind::PlatformMismatch,
            ConsoleError::HandleResolution { .. } => ConsoleErrorKind::HandleResolution,
            ConsoleError::Linkage { .. } => ConsoleErrorKind::Linkage,
            ConsoleError::GetMode(_) | ConsoleError::SetMode(_) => ConsoleErrorKind::ModeOperation,
        }
    }

    pub(crate) fn unknown_stream(code: i32) -> Self {
        ConsoleError::HandleResolution {
            code,
            source: io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a standard stream identifier",
            ),
        }
    }
}

// Handles are never closed here. Dropping a session releases whatever it loaded.
pub trait ConsoleHost {
    type Handle: Copy + fmt::Debug;
    type Session: ConsoleSession<Handle = Self::Handle>;

    fn std_handle(&self, stream: StdStream) -> Result<Self::Handle, ConsoleError>;

    fn open(&self) -> Result<Self::Session, ConsoleError>;
}

pub trait ConsoleSession {
    type Handle: Copy;

    fn get_mode(&self, handle: Self::Handle) -> Result<u32, ConsoleError>;

    fn set_mode(&self, handle: Self::Handle, mode: u32) -> Result<(), ConsoleError>;
}
