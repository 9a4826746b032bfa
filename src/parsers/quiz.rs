use once_cell::sync::Lazy;
use regex::Regex;

use super::ParseOutcome;

const QUESTION_MARKER: &str = "Question:";
pub const ANSWERS_PER_QUESTION: usize = 4;

static OPTION_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-d]\)\s*(.*)$").expect("OPTION_LABEL is a valid regex pattern"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuizQuestion {
    pub question: String,
    pub answers: [String; ANSWERS_PER_QUESTION],
}

/// Text after an `a)`..`d)` label. A label with nothing after it is not an option.
fn option_text(line: &str) -> Option<&str> {
    OPTION_LABEL
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|text| !text.is_empty())
}

/// Removes an option label if present; a bare label leaves nothing.
fn strip_option_label(line: &str) -> &str {
    if OPTION_LABEL.is_match(line) {
        option_text(line).unwrap_or("")
    } else {
        line
    }
}

fn into_answers(answers: Vec<String>) -> Option<[String; ANSWERS_PER_QUESTION]> {
    answers.try_into().ok()
}

/// Reads every `Question:` block of a multi-question reply.
///
/// Text before the first marker is ignored. A block is kept only when it has a
/// question and exactly four `a)`..`d)` option lines; any other block is counted
/// as rejected.
pub fn parse_quiz_batch(reply: &str) -> ParseOutcome<ParsedQuizQuestion> {
    let mut blocks: Vec<Vec<&str>> = Vec::new();

    for line in reply.lines().map(str::trim) {
        if line.starts_with(QUESTION_MARKER) {
            blocks.push(vec![line]);
        } else if let Some(block) = blocks.last_mut() {
            block.push(line);
        }
    }

    let mut records = Vec::new();
    let mut rejected_blocks = 0;

    for block in blocks {
        let question = block[0].trim_start_matches(QUESTION_MARKER).trim();
        let answers: Vec<String> = block[1..]
            .iter()
            .filter_map(|line| option_text(line))
            .map(str::to_string)
            .collect();

        if question.is_empty() || answers.len() != ANSWERS_PER_QUESTION {
            log::debug!(
                "Rejected quiz block with {} option line(s): {:?}",
                answers.len(),
                question
            );
            rejected_blocks += 1;
            continue;
        }

        match into_answers(answers) {
            Some(answers) => records.push(ParsedQuizQuestion {
                question: question.to_string(),
                answers,
            }),
            None => rejected_blocks += 1,
        }
    }

    ParseOutcome {
        records,
        rejected_blocks,
    }
}

/// Reads a single-question reply: the first non-empty line is the question and
/// the next four non-empty lines are the answers, in the order the model gave.
///
/// Option labels and a `Question:` prefix are tolerated. Returns `None` when
/// fewer than four answers follow the question; extra lines are ignored.
pub fn parse_single_quiz(reply: &str) -> Option<ParsedQuizQuestion> {
    let mut lines = reply.lines().map(str::trim).filter(|line| !line.is_empty());

    let question = lines.next()?.trim_start_matches(QUESTION_MARKER).trim();
    if question.is_empty() {
        return None;
    }

    let answers: Vec<String> = lines
        .map(|line| strip_option_label(line).to_string())
        .filter(|answer| !answer.is_empty())
        .take(ANSWERS_PER_QUESTION)
        .collect();

    into_answers(answers).map(|answers| ParsedQuizQuestion {
        question: question.to_string(),
        answers,
    })
}
