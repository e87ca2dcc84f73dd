//! Input sources for `input`.
//!
//! The engine never reads the host's stdin on its own. A caller hands it an
//! [`InputProvider`]: queued lines for tests and services, or any
//! [`BufRead`] stream for the command line.

use std::collections::VecDeque;
use std::io::BufRead;

/// A source of input lines.
pub trait InputProvider {
    /// The next line without its line terminator, or `None` once exhausted.
    fn read_line(&mut self) -> Option<String>;
}

impl<P: InputProvider + ?Sized> InputProvider for Box<P> {
    fn read_line(&mut self) -> Option<String> {
        (**self).read_line()
    }
}

/// Lines held in memory.
#[derive(Clone, Debug, Default)]
pub struct QueuedInput {
    lines: VecDeque<String>,
}

impl QueuedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        QueuedInput {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// One queued line per line of `text`.
    pub fn from_text(text: &str) -> Self {
        QueuedInput::new(text.lines())
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputProvider for QueuedInput {
    fn read_line(&mut self) -> Option<String> {
        self.lines.pop_front()
    }
}

/// Lines read on demand from a byte stream.
#[derive(Debug)]
pub struct StreamInput<R> {
    reader: R,
}

impl<R: BufRead> StreamInput<R> {
    pub fn new(reader: R) -> Self {
        StreamInput { reader }
    }
}

impl<R: BufRead> InputProvider for StreamInput<R> {
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                let trimmed = line.trim_end_matches(['\n', '\r']).len();
                line.truncate(trimmed);
                Some(line)
            }
            Err(err) => {
                tracing::warn!(%err, "input stream failed");
                None
            }
        }
    }
}

/// Convert one input line to a value: numeric text becomes a number,
/// anything else stays text.
pub(crate) fn parse_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('+'))
        .unwrap_or(trimmed);
    let mut seen_digit = false;
    let mut seen_dot = false;
    for ch in digits.chars() {
        match ch {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => return None,
        }
    }
    if !seen_digit {
        return None;
    }
    trimmed.parse().ok()
}
