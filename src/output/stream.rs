use std::io::{self, Write};

use anstream::{AutoStream, ColorChoice};

use super::traits::OutputHandler;

/// Output handler over a data stream and a message stream.
pub struct StreamOutput<O: Write, E: Write> {
    out: O,
    err: E,
}

impl<O: Write, E: Write> StreamOutput<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl StreamOutput<AutoStream<io::Stdout>, AutoStream<io::Stderr>> {
    /// stdout/stderr, stripping ANSI codes from stdout unless `data_color`
    /// allows them. Messages on stderr follow terminal detection.
    pub fn stdio(data_color: ColorChoice) -> Self {
        Self::new(
            AutoStream::new(io::stdout(), data_color),
            AutoStream::auto(io::stderr()),
        )
    }
}

impl<O: Write, E: Write> OutputHandler for StreamOutput<O, E> {
    fn write_message_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.err, "{line}")
    }

    fn write_data(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }
}
