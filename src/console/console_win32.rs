extern crate winapi;

use std::ffi::CStr;
use std::io;

use tracing::debug;
use winapi::shared::minwindef::{BOOL, DWORD, FARPROC, HMODULE};
use winapi::um::handleapi::INVALID_HANDLE_VALUE;
use winapi::um::libloaderapi::{FreeLibrary, GetProcAddress, LoadLibraryA};
use winapi::um::processenv::GetStdHandle;
use winapi::um::winnt::HANDLE;

use crate::console::console_common::{ConsoleError, ConsoleHost, ConsoleSession};
use crate::console::mode::StdStream;

type GetConsoleModeFn = unsafe extern "system" fn(HANDLE, *mut DWORD) -> BOOL;
type SetConsoleModeFn = unsafe extern "system" fn(HANDLE, DWORD) -> BOOL;

const KERNEL32: &CStr = c"kernel32.dll";

struct Library(HMODULE);

impl Library {
    fn load(name: &'static CStr, symbol: &'static str) -> Result<Self, ConsoleError> {
        let module = unsafe { LoadLibraryA(name.as_ptr()) };

        if module.is_null() {
            return Err(ConsoleError::Linkage {
                symbol,
                source: io::Error::last_os_error(),
            });
        }

        Ok(Library(module))
    }

    fn resolve(&self, name: &'static CStr, symbol: &'static str) -> Result<FARPROC, ConsoleError> {
        let address = unsafe { GetProcAddress(self.0, name.as_ptr()) };

        if address.is_null() {
            return Err(ConsoleError::Linkage {
                symbol,
                source: io::Error::last_os_error(),
            });
        }

        Ok(address)
    }
}

impl Drop for Library {
    fn drop(&mut self) {
        unsafe {
            FreeLibrary(self.0);
        }
    }
}

pub struct Kernel32Session {
    get_console_mode: GetConsoleModeFn,
    set_console_mode: SetConsoleModeFn,
    _library: Library,
}

impl ConsoleSession for Kernel32Session {
    type Handle = HANDLE;

    fn get_mode(&self, handle: HANDLE) -> Result<u32, ConsoleError> {
        let mut mode: DWORD = 0;

        if unsafe { (self.get_console_mode)(handle, &mut mode) } == 0 {
            return Err(ConsoleError::GetMode(io::Error::last_os_error()));
        }

        debug!("GetConsoleMode({:?}) -> {:#06x}", handle, mode);

        Ok(mode)
    }

    fn set_mode(&self, handle: HANDLE, mode: u32) -> Result<(), ConsoleError> {
        if unsafe { (self.set_console_mode)(handle, mode) } == 0 {
            return Err(ConsoleError::SetMode(io::Error::last_os_error()));
        }

        debug!("SetConsoleMode({:?}, {:#06x})", handle, mode);

        Ok(())
    }
}

#[derive(Debug, Default, Copy, Clone)]
pub struct Win32Console;

impl ConsoleHost for Win32Console {
    type Handle = HANDLE;
    type Session = Kernel32Session;

    fn std_handle(&self, stream: StdStream) -> Result<HANDLE, ConsoleError> {
        let handle = unsafe { GetStdHandle(stream.code() as DWORD) };

        if handle == INVALID_HANDLE_VALUE {
            return Err(ConsoleError::HandleResolution {
                code: stream.code(),
                source: io::Error::last_os_error(),
            });
        }

        // No handle attached, e.g. a GUI process without a console.
        if handle.is_null() {
            return Err(ConsoleError::HandleResolution {
                code: stream.code(),
                source: io::Error::new(io::ErrorKind::NotFound, "no handle attached"),
            });
        }

        Ok(handle)
    }

    fn open(&self) -> Result<Kernel32Session, ConsoleError> {
        let library = Library::load(KERNEL32, "kernel32.dll")?;

        let get_console_mode = library.resolve(c"GetConsoleMode", "GetConsoleMode")?;
        let set_console_mode = library.resolve(c"SetConsoleMode", "SetConsoleMode")?;

        unsafe {
            Ok(Kernel32Session {
                get_console_mode: std::mem::transmute::<FARPROC, GetConsoleModeFn>(
                    get_console_mode,
                ),
                set_console_mode: std::mem::transmute::<FARPROC, SetConsoleModeFn>(
                    set_console_mode,
                ),
                _library: library,
            })
        }
    }
}
