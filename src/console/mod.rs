mod access;
mod console_common;
mod quick_edit;

pub mod mode;

#[cfg(test)]
mod fake;

pub use access::*;
pub use console_common::*;
pub use quick_edit::{disable_console_quick_edit_mode, disable_console_quick_edit_mode_with};

#[cfg(windows)]
mod console_win32;

mod console_nop;

#[cfg(windows)]
pub use crate::console::console_win32::{Kernel32Session, Win32Console};

pub use crate::console::console_nop::{NopConsole, NopSession};

#[cfg(windows)]
pub use crate::console::console_win32::Win32Console as ConsoleImpl;

#[cfg(not(windows))]
pub use crate::console::console_nop::NopConsole as ConsoleImpl;
