//! Word-boundary "read more" chunker.
//!
//! Splits response text into an always-visible initial chunk followed by
//! fixed-size expandable chunks, counted in words.
//!
//! # Algorithm
//!
//! 1. Find the byte offset where every word starts.
//! 2. The initial chunk runs from byte 0 to the start of word
//!    `initial_words` (or to the end of the text).
//! 3. Each following chunk starts at a word start and spans
//!    `chunk_words` words, up to the start of the next chunk.
//! 4. The last chunk runs to the end of the text.
//!
//! Chunk boundaries always fall on word starts, so whitespace between
//! words stays with the preceding chunk.
//!
//! # Example
//!
//! ```rust
//! use krishi_advisor_core::format::chunk::chunk_text;
//!
//! let chunks = chunk_text("one two three four five", 2, 2);
//! assert_eq!(chunks.len(), 3);
//! assert_eq!(chunks[0].content, "one two ");
//! assert_eq!(chunks[2].content, "five");
//! ```

use serde::Serialize;

use crate::models::word_count;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkKind {
    Initial,
    Expandable,
}

/// One slice of a response for progressive disclosure.
#[derive(Debug, Clone, Serialize)]
pub struct ContentChunk {
    /// `chunk-<index>`.
    pub id: String,
    pub index: usize,
    pub content: String,
    pub word_count: usize,
    pub kind: ChunkKind,
    /// Only the initial chunk is visible before "read more".
    pub visible: bool,
    /// Whether more chunks follow this one.
    pub has_more: bool,
}

/// Split `text` into an initial chunk of `initial_words` words followed by
/// chunks of `chunk_words` words.
///
/// # Guarantees
///
/// - At least one chunk is always returned (even for empty text).
/// - Indices are contiguous: `0, 1, 2, …, N-1`.
/// - Concatenating every chunk's `content` in order reproduces `text`
///   exactly.
///
/// Sizes of zero are treated as one.
pub fn chunk_text(text: &str, initial_words: usize, chunk_words: usize) -> Vec<ContentChunk> {
    let initial_words = initial_words.max(1);
    let chunk_words = chunk_words.max(1);
    let starts = word_starts(text);

    let mut bounds = vec![0];
    let mut next = initial_words;
    while next < starts.len() {
        bounds.push(starts[next]);
        next += chunk_words;
    }
    bounds.push(text.len());

    let total = bounds.len() - 1;
    bounds
        .windows(2)
        .enumerate()
        .map(|(index, w)| {
            let content = &text[w[0]..w[1]];
            ContentChunk {
                id: format!("chunk-{index}"),
                index,
                content: content.to_string(),
                word_count: word_count(content),
                kind: if index == 0 {
                    ChunkKind::Initial
                } else {
                    ChunkKind::Expandable
                },
                visible: index == 0,
                has_more: index + 1 < total,
            }
        })
        .collect()
}

/// Byte offsets at which each whitespace-separated word begins.
fn word_starts(text: &str) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut prev_space = true;
    for (i, c) in text.char_indices() {
        let space = c.is_whitespace();
        if prev_space && !space {
            starts.push(i);
        }
        prev_space = space;
    }
    starts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rebuild(chunks: &[ContentChunk]) -> String {
        chunks.iter().map(|c| c.content.as_str()).collect()
    }

    #[test]
    fn test_empty_text_single_chunk() {
        let chunks = chunk_text("", 500, 800);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].content, "");
        assert_eq!(chunks[0].kind, ChunkKind::Initial);
        assert!(!chunks[0].has_more);
    }

    #[test]
    fn test_short_text_single_chunk() {
        let chunks = chunk_text("Hello farmer.\n\nSecond paragraph.", 500, 800);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].word_count, 4);
        assert!(chunks[0].visible);
    }

    #[test]
    fn test_chunk_sizes() {
        let text = (0..2000).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
        let chunks = chunk_text(&text, 500, 800);
        let sizes: Vec<usize> = chunks.iter().map(|c| c.word_count).collect();
        assert_eq!(sizes, vec![500, 800, 700]);
        assert!(chunks[1].has_more);
        assert!(!chunks[2].has_more);
        assert!(!chunks[1].visible);
        assert_eq!(chunks[2].kind, ChunkKind::Expandable);
    }

    #[test]
    fn test_contiguous_indices() {
        let text = "a b c d e f g h i j";
        let chunks = chunk_text(text, 3, 2);
        for (i, c) in chunks.iter().enumerate() {
            assert_eq!(c.index, i);
            assert_eq!(c.id, format!("chunk-{i}"));
        }
    }

    #[test]
    fn test_roundtrip_preserves_whitespace_and_unicode() {
        let text = "  # 🌾 गेहूं guide\n\n- one\t two  \n\n| a | b |\n  trailing  ";
        for (initial, size) in [(1, 1), (2, 3), (500, 800), (0, 0)] {
            let chunks = chunk_text(text, initial, size);
            assert_eq!(rebuild(&chunks), text);
        }
    }

    #[test]
    fn test_word_starts() {
        assert_eq!(word_starts(" ab  c"), vec![1, 5]);
        assert!(word_starts("   ").is_empty());
    }
}
