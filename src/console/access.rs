use crate::console::console_common::{ConsoleError, ConsoleHost, ConsoleSession};
use crate::console::mode::StdStream;
use crate::console::ConsoleImpl;

pub fn get_console_mode(stream: StdStream) -> Result<u32, ConsoleError> {
    get_console_mode_with(&ConsoleImpl::default(), stream)
}

pub fn set_console_mode(mode: u32, stream: StdStream) -> Result<(), ConsoleError> {
    set_console_mode_with(&ConsoleImpl::default(), mode, stream)
}

pub fn get_console_mode_with<C: ConsoleHost>(
    host: &C,
    stream: StdStream,
) -> Result<u32, ConsoleError> {
    let handle = host.std_handle(stream)?;
    let session = host.open()?;

    session.get_mode(handle)
}

pub fn set_console_mode_with<C: ConsoleHost>(
    host: &C,
    mode: u32,
    stream: StdStream,
) -> Result<(), ConsoleError> {
    let handle = host.std_handle(stream)?;
    let session = host.open()?;

    session.set_mode(handle, mode)
}
