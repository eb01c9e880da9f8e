use tracing::debug;

use crate::console::console_common::{ConsoleError, ConsoleHost, ConsoleSession};
use crate::console::mode::{with_quick_edit, StdStream};
use crate::console::ConsoleImpl;

pub fn disable_console_quick_edit_mode() {
    disable_console_quick_edit_mode_with(&ConsoleImpl::default());
}

// Called unconditionally at startup, so every failure is dropped.
pub fn disable_console_quick_edit_mode_with<C: ConsoleHost>(host: &C) {
    let handle = match host.std_handle(StdStream::Input) {
        Ok(handle) => handle,
        Err(err) => {
            debug!("quick edit mode left alone: {}", err);
            return;
        }
    };

    if let Err(err) = set_console_quick_edit_mode(host, handle, false) {
        debug!("failed to disable quick edit mode: {}", err);
    }
}

pub(crate) fn set_console_quick_edit_mode<C: ConsoleHost>(
    host: &C,
    handle: C::Handle,
    enable: bool,
) -> Result<(), ConsoleError> {
    let session = host.open()?;

    // Nothing is written if the read fails.
    let mode = session.get_mode(handle)?;

    session.set_mode(handle, with_quick_edit(mode, enable))
}
