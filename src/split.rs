/// Split `text` at every `delim`.
///
/// k delimiters give k+1 segments. Empty segments (leading, trailing, adjacent
/// delimiters) are kept and nothing is trimmed.
pub fn split(text: &str, delim: char) -> Vec<&str> {
    text.split(delim).collect()
}

/// Byte version of [`split`] for lines that are not known to be UTF-8.
pub fn split_bytes(bytes: &[u8], delim: u8) -> Vec<&[u8]> {
    bytes.split(|&b| b == delim).collect()
}
