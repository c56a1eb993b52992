//! Fixed-size message splitting for length-limited reply channels.

use crate::domain::error::LeofiError;

/// Largest message a chat reply channel accepts.
pub const MAX_MESSAGE_LEN: usize = 4096;

/// Splits `text` into consecutive pieces of exactly `max_len` characters
/// (the last piece may be shorter), ignoring word and line boundaries.
///
/// Lengths count Unicode scalar values, not bytes or UTF-16 code units: `📈`
/// is one character here where a UTF-16 splitter counts two, so a report
/// heavy in emoji packs more visible text into each piece. A multi-byte
/// character is never cut in half. Empty input yields no pieces.
pub fn split_message(text: &str, max_len: usize) -> Result<Vec<&str>, LeofiError> {
    if max_len == 0 {
        return Err(LeofiError::invalid_input("max message length must be positive"));
    }

    let mut chunks = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let cut = rest
            .char_indices()
            .nth(max_len)
            .map(|(idx, _)| idx)
            .unwrap_or(rest.len());
        let (head, tail) = rest.split_at(cut);
        chunks.push(head);
        rest = tail;
    }
    Ok(chunks)
}
