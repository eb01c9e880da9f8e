// In-memory console host for tests.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use crate::console::console_common::{ConsoleError, ConsoleHost, ConsoleSession};
use crate::console::mode::StdStream;

#[derive(Debug, Default)]
struct FakeState {
    modes: [Option<u32>; 3],
    fail_open: bool,
    fail_get: bool,
    fail_set: bool,
    opened: usize,
    released: usize,
    writes: usize,
}

fn slot(stream: StdStream) -> usize {
    match stream {
        StdStream::Input => 0,
        StdStream::Output => 1,
        StdStream::Error => 2,
    }
}

#[derive(Debug, Default, Clone)]
pub struct FakeConsole(Rc<RefCell<FakeState>>);

impl FakeConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&self, stream: StdStream, mode: u32) {
        self.0.borrow_mut().modes[slot(stream)] = Some(mode);
    }

    pub fn mode(&self, stream: StdStream) -> Option<u32> {
        self.0.borrow().modes[slot(stream)]
    }

    pub fn fail_open(&self) {
        self.0.borrow_mut().fail_open = true;
    }

    pub fn fail_get(&self) {
        self.0.borrow_mut().fail_get = true;
    }

    pub fn fail_set(&self) {
        self.0.borrow_mut().fail_set = true;
    }

    pub fn opened(&self) -> usize {
        self.0.borrow().opened
    }

    pub fn released(&self) -> usize {
        self.0.borrow().released
    }

    pub fn writes(&self) -> usize {
        self.0.borrow().writes
    }
}

#[derive(Debug)]
pub struct FakeSession(Rc<RefCell<FakeState>>);

impl Drop for FakeSession {
    fn drop(&mut self) {
        self.0.borrow_mut().released += 1;
    }
}

impl ConsoleSession for FakeSession {
    type Handle = StdStream;

    fn get_mode(&self, handle: StdStream) -> Result<u32, ConsoleError> {
        let state = self.0.borrow();

        match state.modes[slot(handle)] {
            Some(mode) if !state.fail_get => Ok(mode),
            _ => Err(ConsoleError::GetMode(io::Error::from(io::ErrorKind::Other))),
        }
    }

    fn set_mode(&self, handle: StdStream, mode: u32) -> Result<(), ConsoleError> {
        let mut state = self.0.borrow_mut();

        if state.fail_set || state.modes[slot(handle)].is_none() {
            return Err(ConsoleError::SetMode(io::Error::from(io::ErrorKind::Other)));
        }

        state.modes[slot(handle)] = Some(mode);
        state.writes += 1;

        Ok(())
    }
}

impl ConsoleHost for FakeConsole {
    type Handle = StdStream;
    type Session = FakeSession;

    fn std_handle(&self, stream: StdStream) -> Result<StdStream, ConsoleError> {
        match self.mode(stream) {
            Some(_) => Ok(stream),
            None => Err(ConsoleError::HandleResolution {
                code: stream.code(),
                source: io::Error::from(io::ErrorKind::NotFound),
            }),
        }
    }

    fn open(&self) -> Result<FakeSession, ConsoleError> {
        let mut state = self.0.borrow_mut();

        if state.fail_open {
            return Err(ConsoleError::Linkage {
                symbol: "GetConsoleMode",
                source: io::Error::from(io::ErrorKind::NotFound),
            });
        }

        state.opened += 1;

        Ok(FakeSession(Rc::clone(&self.0)))
    }
}
