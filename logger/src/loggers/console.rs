use std::io::{self, Stderr, Stdout, Write};

use crate::Emitter;

/// Emitter writing to standard output.
pub type ConsoleEmitter = StreamEmitter<Stdout>;

/// Writes each message on its own line to a stream.
///
/// Messages are written verbatim, followed by `\n`, and the stream is
/// flushed after every message.
#[derive(Debug)]
pub struct StreamEmitter<W> {
    stream: W,
}

impl<W: Write> Emitter for StreamEmitter<W> {
    type Error = io::Error;

    fn emit(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.stream, "{message}")?;
        self.stream.flush()
    }
}

impl<W: Write> StreamEmitter<W> {
    pub fn new(stream: W) -> Self {
        Self { stream }
    }

    pub fn get_ref(&self) -> &W {
        &self.stream
    }

    pub fn into_inner(self) -> W {
        self.stream
    }
}

impl StreamEmitter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl StreamEmitter<Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl Default for StreamEmitter<Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader went away"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_one_line_per_message() {
        let mut emitter = StreamEmitter::new(Vec::<u8>::new());
        emitter.emit("first").unwrap();
        emitter.emit("second line").unwrap();
        assert_eq!(emitter.into_inner(), b"first\nsecond line\n");
    }

    #[test]
    fn message_is_not_reformatted() {
        let mut emitter = StreamEmitter::new(Vec::<u8>::new());
        emitter.emit("  INFO:\ttabs and spaces  ").unwrap();
        assert_eq!(emitter.get_ref().as_slice(), b"  INFO:\ttabs and spaces  \n");
    }

    #[test]
    fn write_failure_is_returned() {
        let mut emitter = StreamEmitter::new(ClosedPipe);
        let err = emitter.emit("lost").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
