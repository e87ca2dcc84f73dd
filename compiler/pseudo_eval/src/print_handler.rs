//! Captured program output.
//!
//! Scripts never write to the host's stdout. Everything `print` produces
//! lands in a buffer that is returned with the run's result.

/// Print handler that captures output to a buffer.
#[derive(Debug, Default)]
pub struct BufferPrintHandler {
    buffer: String,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        BufferPrintHandler::default()
    }

    /// Print a line (with newline).
    pub fn println(&mut self, msg: &str) {
        self.buffer.push_str(msg);
        self.buffer.push('\n');
    }

    /// Print without newline.
    pub fn print(&mut self, msg: &str) {
        self.buffer.push_str(msg);
    }

    /// Bytes captured so far.
    pub(crate) fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn into_output(self) -> String {
        self.buffer
    }
}
