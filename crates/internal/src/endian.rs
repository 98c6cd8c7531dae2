//! Endianness utility functions

use tbvec_api::Word;

/// Split big-endian bytes into words, least-significant word first.
///
/// The last four bytes become word 0 and the first four bytes become the
/// last word. A leading chunk shorter than four bytes is zero-extended.
pub fn words_from_be_bytes(bytes: &[u8]) -> Vec<Word> {
    bytes
        .rchunks(4)
        .map(|chunk| {
            let mut word = [0u8; 4];
            word[4 - chunk.len()..].copy_from_slice(chunk);
            Word::from_be_bytes(word)
        })
        .collect()
}
