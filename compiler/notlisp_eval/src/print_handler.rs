//! Where interpreter output goes.
//!
//! The REPL writes prompts and results through a print handler so tests can
//! capture the exact transcript. Dispatch is a plain enum match.

use std::io::Write as _;
use std::sync::Arc;

use parking_lot::Mutex;

/// Writes to the process's standard output.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn println(&self, msg: &str) {
        println!("{msg}");
    }

    /// Print without a newline and flush, so prompts appear before input.
    pub fn print(&self, msg: &str) {
        let mut out = std::io::stdout().lock();
        // A closed stdout has nowhere to report to.
        let _ = out.write_all(msg.as_bytes()).and_then(|()| out.flush());
    }
}

/// Accumulates output in memory.
#[derive(Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    pub fn print(&self, msg: &str) {
        self.buffer.lock().push_str(msg);
    }

    /// Everything written so far.
    pub fn output(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Return everything written so far and empty the buffer.
    pub fn take_output(&self) -> String {
        std::mem::take(&mut *self.buffer.lock())
    }
}

pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
    /// Discards everything.
    Silent,
}

impl PrintHandlerImpl {
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
            Self::Silent => {}
        }
    }

    pub fn print(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.print(msg),
            Self::Buffer(h) => h.print(msg),
            Self::Silent => {}
        }
    }

    /// Captured output; empty for handlers that do not capture.
    pub fn output(&self) -> String {
        match self {
            Self::Buffer(h) => h.output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    /// Drain captured output; empty for handlers that do not capture.
    pub fn take_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.take_output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }
}

pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

/// Handler for running a file where only failures matter.
pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}
