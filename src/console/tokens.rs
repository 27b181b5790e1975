use std::collections::VecDeque;
use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Whitespace-separated tokens read lazily from a line source.
///
/// A request for a token reads further lines only when the current line is
/// used up, so answers may share one line or span several.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
    line: Vec<u8>,
}

impl<R: AsyncBufRead + Unpin> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: Vec::new(),
        }
    }

    /// Returns `None` once the source is exhausted.
    ///
    /// A line that is not valid UTF-8 is consumed whole and reported as
    /// `InvalidData`; the following line can still be read.
    pub async fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line).await? == 0 {
                return Ok(None);
            }
            let line = std::str::from_utf8(&self.line).map_err(|_| {
                io::Error::new(io::ErrorKind::InvalidData, "input line is not valid UTF-8")
            })?;
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }

    /// Drops whatever is left of the current line.
    pub fn discard_line(&mut self) {
        self.pending.clear();
    }
}
