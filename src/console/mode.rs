use crate::console::console_common::ConsoleError;

// STD INPUT flags
pub const ENABLE_PROCESSED_INPUT: u32 = 0x0001;
pub const ENABLE_LINE_INPUT: u32 = 0x0002;
pub const ENABLE_ECHO_INPUT: u32 = 0x0004;
pub const ENABLE_WINDOW_INPUT: u32 = 0x0008;
pub const ENABLE_MOUSE_INPUT: u32 = 0x0010;
pub const ENABLE_INSERT_MODE: u32 = 0x0020;
pub const ENABLE_QUICK_EDIT_MODE: u32 = 0x0040;
/// Has to be set for writes to `ENABLE_QUICK_EDIT_MODE` and
/// `ENABLE_INSERT_MODE` to be honored.
pub const ENABLE_EXTENDED_FLAGS: u32 = 0x0080;
pub const ENABLE_VIRTUAL_TERMINAL_INPUT: u32 = 0x0200;

// STD OUTPUT flags
pub const ENABLE_PROCESSED_OUTPUT: u32 = 0x0001;
pub const ENABLE_WRAP_AT_EOL_OUTPUT: u32 = 0x0002;
pub const ENABLE_VIRTUAL_TERMINAL_PROCESSING: u32 = 0x0004;
pub const DISABLE_NEWLINE_AUTO_RETURN: u32 = 0x0008;
pub const ENABLE_LVB_GRID_WORLDWIDE: u32 = 0x0010;

pub const STD_INPUT_HANDLE: i32 = -10;
pub const STD_OUTPUT_HANDLE: i32 = -11;
pub const STD_ERROR_HANDLE: i32 = -12;

// Readability alias, not a bit
pub const STD_INPUT_NO_QUICK_MODE: u32 = 0;

pub const INPUT_MODE_FLAGS: &[(&str, u32)] = &[
    ("ENABLE_PROCESSED_INPUT", ENABLE_PROCESSED_INPUT),
    ("ENABLE_LINE_INPUT", ENABLE_LINE_INPUT),
    ("ENABLE_ECHO_INPUT", ENABLE_ECHO_INPUT),
    ("ENABLE_WINDOW_INPUT", ENABLE_WINDOW_INPUT),
    ("ENABLE_MOUSE_INPUT", ENABLE_MOUSE_INPUT),
    ("ENABLE_INSERT_MODE", ENABLE_INSERT_MODE),
    ("ENABLE_QUICK_EDIT_MODE", ENABLE_QUICK_EDIT_MODE),
    ("ENABLE_EXTENDED_FLAGS", ENABLE_EXTENDED_FLAGS),
    ("ENABLE_VIRTUAL_TERMINAL_INPUT", ENABLE_VIRTUAL_TERMINAL_INPUT),
];

pub const OUTPUT_MODE_FLAGS: &[(&str, u32)] = &[
    ("ENABLE_PROCESSED_OUTPUT", ENABLE_PROCESSED_OUTPUT),
    ("ENABLE_WRAP_AT_EOL_OUTPUT", ENABLE_WRAP_AT_EOL_OUTPUT),
    (
        "ENABLE_VIRTUAL_TERMINAL_PROCESSING",
        ENABLE_VIRTUAL_TERMINAL_PROCESSING,
    ),
    ("DISABLE_NEWLINE_AUTO_RETURN", DISABLE_NEWLINE_AUTO_RETURN),
    ("ENABLE_LVB_GRID_WORLDWIDE", ENABLE_LVB_GRID_WORLDWIDE),
];

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum StdStream {
    Input,
    Output,
    Error,
}

impl StdStream {
    pub const ALL: [StdStream; 3] = [StdStream::Input, StdStream::Output, StdStream::Error];

    pub fn code(self) -> i32 {
        match self {
            StdStream::Input => STD_INPUT_HANDLE,
            StdStream::Output => STD_OUTPUT_HANDLE,
            StdStream::Error => STD_ERROR_HANDLE,
        }
    }

    pub fn flag_table(self) -> &'static [(&'static str, u32)] {
        match self {
            StdStream::Input => INPUT_MODE_FLAGS,
            StdStream::Output | StdStream::Error => OUTPUT_MODE_FLAGS,
        }
    }
}

impl TryFrom<i32> for StdStream {
    type Error = ConsoleError;

    fn try_from(code: i32) -> Result<Self, ConsoleError> {
        match code {
            STD_INPUT_HANDLE => Ok(StdStream::Input),
            STD_OUTPUT_HANDLE => Ok(StdStream::Output),
            STD_ERROR_HANDLE => Ok(StdStream::Error),
            _ => Err(ConsoleError::unknown_stream(code)),
        }
    }
}

pub fn with_quick_edit(mode: u32, enable: bool) -> u32 {
    let mode = mode | ENABLE_EXTENDED_FLAGS;

    if enable {
        mode | ENABLE_QUICK_EDIT_MODE
    } else {
        mode & !ENABLE_QUICK_EDIT_MODE
    }
}

pub fn flag_names(mode: u32, table: &[(&'static str, u32)]) -> Vec<String> {
    let mut names = Vec::new();
    let mut known = 0;

    for &(name, bit) in table {
        known |= bit;
        if mode & bit != 0 {
            names.push(name.to_string());
        }
    }

    let rest = mode & !known;
    if rest != 0 {
        names.push(format!("{:#06x}", rest));
    }

    names
}
