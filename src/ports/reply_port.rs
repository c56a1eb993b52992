//! Reply sink port trait.

use crate::domain::chunk::{MAX_MESSAGE_LEN, split_message};
use crate::domain::error::LeofiError;

/// A channel that accepts text messages of bounded length.
pub trait ReplyPort {
    fn send(&mut self, message: &str) -> Result<(), LeofiError>;

    fn max_message_len(&self) -> usize {
        MAX_MESSAGE_LEN
    }

    /// Splits `text` at `max_message_len` boundaries and sends every piece in
    /// order. Returns the number of messages sent.
    fn send_chunked(&mut self, text: &str) -> Result<usize, LeofiError> {
        let chunks = split_message(text, self.max_message_len())?;
        for chunk in &chunks {
            self.send(chunk)?;
        }
        tracing::debug!(chunks = chunks.len(), chars = text.chars().count(), "reply sent");
        Ok(chunks.len())
    }
}
