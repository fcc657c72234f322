//! Deterministic character windowing for classifier input.

/// Split text into contiguous chunks of at most `chunk_size` characters.
///
/// Chunks are cut at raw character offsets, never at sentence or token
/// boundaries: the classifier tolerates mid-word cuts and exact-offset
/// slicing keeps the partition reproducible. Concatenating the output in
/// order yields the input unchanged; only the final chunk may be shorter.
/// Empty input yields no chunks.
pub fn chunk_text(text: &str, chunk_size: usize) -> Vec<String> {
    if chunk_size == 0 {
        return Vec::new();
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0;
    for ch in text.chars() {
        current.push(ch);
        current_chars += 1;
        if current_chars == chunk_size {
            chunks.push(std::mem::take(&mut current));
            current_chars = 0;
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Borrow at most the first `max_chars` characters of `text`.
///
/// The truncation windows for summarization and entity recognition count
/// characters, so the cut has to land on a char boundary even for
/// multi-byte text.
pub fn char_prefix(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}


#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn chunks_cover_input_exactly(text in ".*", size in 1usize..64) {
            let chunks = chunk_text(&text, size);
            prop_assert_eq!(chunks.concat(), text);
        }

        #[test]
        fn no_chunk_exceeds_size(text in ".*", size in 1usize..64) {
            for chunk in chunk_text(&text, size) {
                prop_assert!(chunk.chars().count() <= size);
            }
        }
    }
}
