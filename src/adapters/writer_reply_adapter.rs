//! Reply sink over any `io::Write`.

use std::io::Write;

use crate::domain::chunk::MAX_MESSAGE_LEN;
use crate::domain::error::LeofiError;
use crate::ports::reply_port::ReplyPort;

/// Writes every message on its own line. The CLI wraps stdout in one of these.
pub struct WriterReplyAdapter<W: Write> {
    writer: W,
    max_message_len: usize,
}

impl<W: Write> WriterReplyAdapter<W> {
    pub fn new(writer: W) -> Self {
        Self::with_max_len(writer, MAX_MESSAGE_LEN)
    }

    pub fn with_max_len(writer: W, max_message_len: usize) -> Self {
        Self {
            writer,
            max_message_len,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReplyPort for WriterReplyAdapter<W> {
    fn send(&mut self, message: &str) -> Result<(), LeofiError> {
        writeln!(self.writer, "{message}")?;
        self.writer.flush()?;
        Ok(())
    }

    fn max_message_len(&self) -> usize {
        self.max_message_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_writes_one_line_per_message() {
        let mut reply = WriterReplyAdapter::new(Vec::new());
        reply.send("hello").unwrap();
        reply.send("world").unwrap();
        assert_eq!(String::from_utf8(reply.into_inner()).unwrap(), "hello\nworld\n");
    }

    #[test]
    fn send_chunked_respects_max_len() {
        let mut reply = WriterReplyAdapter::with_max_len(Vec::new(), 4);
        let sent = reply.send_chunked("abcdefghij").unwrap();
        assert_eq!(sent, 3);
        assert_eq!(
            String::from_utf8(reply.into_inner()).unwrap(),
            "abcd\nefgh\nij\n"
        );
    }

    #[test]
    fn default_limit_is_chat_limit() {
        let reply = WriterReplyAdapter::new(Vec::new());
        assert_eq!(reply.max_message_len(), 4096);
    }

    #[test]
    fn zero_limit_fails_without_writing() {
        let mut reply = WriterReplyAdapter::with_max_len(Vec::new(), 0);
        assert!(reply.send_chunked("abc").is_err());
        assert!(reply.into_inner().is_empty());
    }
}
