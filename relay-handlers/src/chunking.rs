/// Telegram's maximum length of one text message, in characters.
pub const TELEGRAM_MAX_MESSAGE_LEN: usize = 4096;

/// Splits `text` into consecutive chunks of at most `max_chars` characters.
///
/// Chunks are cut on char boundaries only, so concatenating them gives back `text` exactly and
/// there are `ceil(chars / max_chars)` of them. Text within the limit comes back as one chunk;
/// `max_chars == 0` means no limit.
pub fn split_reply(text: &str, max_chars: usize) -> Vec<String> {
    if max_chars == 0 || byte_index_after_n_chars(text, max_chars) == text.len() {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut remaining = text;
    while !remaining.is_empty() {
        let boundary = byte_index_after_n_chars(remaining, max_chars);
        chunks.push(remaining[..boundary].to_string());
        remaining = &remaining[boundary..];
    }
    chunks
}

fn byte_index_after_n_chars(text: &str, n: usize) -> usize {
    text.char_indices()
        .nth(n)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}
