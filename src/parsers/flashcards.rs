use once_cell::sync::Lazy;
use regex::Regex;

use super::ParseOutcome;

static BLANK_LINE_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("BLANK_LINE_SPLIT is a valid regex pattern"));

static NUMBERED_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.").expect("NUMBERED_LABEL is a valid regex pattern"));

const QUESTION_LABELS: [&str; 2] = ["Question:", "Q:"];
const ANSWER_LABELS: [&str; 2] = ["Answer:", "A:"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCard {
    pub question: String,
    pub answer: String,
}

/// Removes one leading question label (`Question:`, `Q:` or `N.`). Case-sensitive.
pub fn strip_question_label(line: &str) -> &str {
    let line = line.trim();
    for label in QUESTION_LABELS {
        if let Some(rest) = line.strip_prefix(label) {
            return rest.trim();
        }
    }
    match NUMBERED_LABEL.find(line) {
        Some(m) => line[m.end()..].trim(),
        None => line,
    }
}

/// Removes one leading answer label (`Answer:` or `A:`). Case-sensitive.
pub fn strip_answer_label(line: &str) -> &str {
    let line = line.trim();
    for label in ANSWER_LABELS {
        if let Some(rest) = line.strip_prefix(label) {
            return rest.trim();
        }
    }
    line
}

/// Splits a reply into blank-line separated blocks and reads one card per block.
///
/// The first non-empty line of a block is the question and the second the answer.
/// Lines after the second are dropped. Blocks with fewer than two lines, or whose
/// question or answer is empty once labels are removed, are rejected.
pub fn parse_flashcards(reply: &str) -> ParseOutcome<ParsedCard> {
    let mut records = Vec::new();
    let mut rejected_blocks = 0;

    for block in BLANK_LINE_SPLIT.split(reply) {
        let lines: Vec<&str> = block
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if lines.is_empty() {
            continue;
        }
        if lines.len() < 2 {
            rejected_blocks += 1;
            continue;
        }
        if lines.len() > 2 {
            log::debug!(
                "Flashcard block carried {} extra line(s); keeping the first two",
                lines.len() - 2
            );
        }

        let question = strip_question_label(lines[0]);
        let answer = strip_answer_label(lines[1]);
        if question.is_empty() || answer.is_empty() {
            rejected_blocks += 1;
            continue;
        }

        records.push(ParsedCard {
            question: question.to_string(),
            answer: answer.to_string(),
        });
    }

    ParseOutcome {
        records,
        rejected_blocks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(question: &str, answer: &str) -> ParsedCard {
        ParsedCard {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }

    #[test]
    fn two_blocks_yield_two_cards() {
        let outcome = parse_flashcards("Q1\nA1\n\nQ2\nA2");

        assert_eq!(outcome.records, vec![card("Q1", "A1"), card("Q2", "A2")]);
        assert_eq!(outcome.rejected_blocks, 0);
    }

    #[test]
    fn single_line_block_is_dropped() {
        let outcome = parse_flashcards("Lonely question?\n\nQ2\nA2");

        assert_eq!(outcome.records, vec![card("Q2", "A2")]);
        assert_eq!(outcome.rejected_blocks, 1);
    }

    #[test]
    fn labels_are_stripped() {
        let outcome = parse_flashcards("Question: What is X?\nA: 42\n\nQ: Who?\nAnswer: Me\n\n3. Why?\nBecause.");

        assert_eq!(
            outcome.records,
            vec![
                card("What is X?", "42"),
                card("Who?", "Me"),
                card("Why?", "Because."),
            ]
        );
    }

    #[test]
    fn label_matching_is_case_sensitive() {
        assert_eq!(strip_question_label("question: lower"), "question: lower");
        assert_eq!(strip_answer_label("a: lower"), "a: lower");
        assert_eq!(strip_question_label("12. Twelve"), "Twelve");
    }

    #[test]
    fn several_blank_lines_and_whitespace_only_lines_separate_blocks() {
        let reply = "  What is an iPhone?  \n  A smartphone by Apple.\n\n\n   \nWho unveiled it?\nSteve Jobs.\n";
        let outcome = parse_flashcards(reply);

        assert_eq!(
            outcome.records,
            vec![
                card("What is an iPhone?", "A smartphone by Apple."),
                card("Who unveiled it?", "Steve Jobs."),
            ]
        );
    }

    #[test]
    fn extra_lines_in_a_block_are_discarded() {
        let outcome = parse_flashcards("Q\nA\nleftover detail");

        assert_eq!(outcome.records, vec![card("Q", "A")]);
        assert_eq!(outcome.rejected_blocks, 0);
    }

    #[test]
    fn empty_reply_yields_nothing() {
        let outcome = parse_flashcards("");

        assert!(outcome.is_empty());
        assert_eq!(outcome.rejected_blocks, 0);
    }

    #[test]
    fn label_only_lines_are_rejected() {
        let outcome = parse_flashcards("Q:\nA: something");

        assert!(outcome.is_empty());
        assert_eq!(outcome.rejected_blocks, 1);
    }

    #[test]
    fn windows_line_endings_are_handled() {
        let outcome = parse_flashcards("Q1\r\nA1\r\n\r\nQ2\r\nA2\r\n");

        assert_eq!(outcome.records, vec![card("Q1", "A1"), card("Q2", "A2")]);
    }
}
