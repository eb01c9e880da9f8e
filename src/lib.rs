pub mod console;

pub use console::mode::StdStream;
pub use console::{
    disable_console_quick_edit_mode, get_console_mode, set_console_mode, ConsoleError,
    ConsoleErrorKind,
};
