//! Parsers for the free-text replies of the language model.
//!
//! Model output is treated as untrusted, loosely structured text. Each parser
//! keeps the blocks it can read and counts the ones it had to drop, so callers
//! can log how much of a reply was lost.

pub mod diagram;
pub mod flashcards;
pub mod language;
pub mod quiz;
pub mod video_id;

pub use diagram::{clean_diagram, normalize_diagram, strip_code_fence, DiagramDefect};
pub use flashcards::{parse_flashcards, ParsedCard};
pub use language::{detect_language, Language};
pub use quiz::{parse_quiz_batch, parse_single_quiz, ParsedQuizQuestion};
pub use video_id::extract_video_id;

/// Records read from one model reply plus the number of blocks discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome<T> {
    pub records: Vec<T>,
    pub rejected_blocks: usize,
}

impl<T> ParseOutcome<T> {
    pub fn accepted(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
