use crate::console::console_common::{ConsoleError, ConsoleHost, ConsoleSession};
use crate::console::mode::StdStream;

#[derive(Debug, Default, Copy, Clone)]
pub struct NopConsole;

/// Never constructed, `NopConsole::open` always fails.
#[derive(Debug)]
pub enum NopSession {}

impl ConsoleSession for NopSession {
    type Handle = ();

    fn get_mode(&self, _handle: ()) -> Result<u32, ConsoleError> {
        match *self {}
    }

    fn set_mode(&self, _handle: (), _mode: u32) -> Result<(), ConsoleError> {
        match *self {}
    }
}

impl ConsoleHost for NopConsole {
    type Handle = ();
    type Session = NopSession;

    fn std_handle(&self, _stream: StdStream) -> Result<(), ConsoleError> {
        Err(ConsoleError::PlatformMismatch)
    }

    fn open(&self) -> Result<NopSession, ConsoleError> {
        Err(ConsoleError::PlatformMismatch)
    }
}
