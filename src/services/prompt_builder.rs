//! Selects and fills the instruction templates sent to the language model.
//!
//! Rendering is two-step: options are interpolated first, producing a
//! [`PromptTemplate`] that still carries the `{input_text}` placeholder, and the
//! caller's text is inserted right before the request goes out. Text supplied by
//! a caller is therefore never scanned for option placeholders.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::{
    constants::{prompts, quiz_prompt},
    models::dto::request::PromptOptionsInput,
    parsers::{DiagramDefect, Language},
};

const INPUT_PLACEHOLDER: &str = "{input_text}";

pub const DEFAULT_MIN_CARDS: u32 = 3;
pub const DEFAULT_MAX_CARDS: u32 = 20;
pub const DEFAULT_QUESTION_COUNT: u32 = 5;
const DEFAULT_QUESTION_FORMAT: &str = "ultra-concise questions of 5-7 words";
const DEFAULT_ANSWER_LENGTH: &str = "one short sentence of 10-15 words";
const DEFAULT_SPECIAL_FOCUS: &str = "the most important concepts, facts, and topics";
const DEFAULT_SPECIAL_INSTRUCTIONS: &str = "none";
const UNKNOWN_DEFECT: &str = "a well-formed Mermaid flowchart";

static OPTION_PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{([a-z_]+)\}").expect("OPTION_PLACEHOLDER is a valid regex pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Flashcards,
    SingleQuiz,
    QuizBatch,
    Diagram,
    StrictDiagram(Option<DiagramDefect>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptOptions {
    pub min_cards: u32,
    pub max_cards: u32,
    pub question_format: String,
    pub answer_length: String,
    pub special_focus: String,
    pub special_instructions: String,
    pub question_count: u32,
}

impl Default for PromptOptions {
    fn default() -> Self {
        PromptOptions {
            min_cards: DEFAULT_MIN_CARDS,
            max_cards: DEFAULT_MAX_CARDS,
            question_format: DEFAULT_QUESTION_FORMAT.to_string(),
            answer_length: DEFAULT_ANSWER_LENGTH.to_string(),
            special_focus: DEFAULT_SPECIAL_FOCUS.to_string(),
            special_instructions: DEFAULT_SPECIAL_INSTRUCTIONS.to_string(),
            question_count: DEFAULT_QUESTION_COUNT,
        }
    }
}

impl PromptOptions {
    /// Overlays the keys a caller set on top of the defaults. A maximum below
    /// the minimum is raised to the minimum.
    pub fn from_input(input: Option<&PromptOptionsInput>) -> Self {
        let mut options = PromptOptions::default();
        let Some(input) = input else {
            return options;
        };

        if let Some(min_cards) = input.min_cards {
            options.min_cards = min_cards;
        }
        if let Some(max_cards) = input.max_cards {
            options.max_cards = max_cards;
        }
        options.max_cards = options.max_cards.max(options.min_cards);

        let overrides = [
            (&input.question_format, &mut options.question_format),
            (&input.answer_length, &mut options.answer_length),
            (&input.special_focus, &mut options.special_focus),
            (&input.special_instructions, &mut options.special_instructions),
        ];
        for (value, slot) in overrides {
            if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                *slot = value.to_string();
            }
        }

        options
    }

    pub fn with_question_count(mut self, question_count: Option<u32>) -> Self {
        if let Some(count) = question_count {
            self.question_count = count;
        }
        self
    }
}

/// An instruction with every option filled in and the input slot still open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    text: String,
    input_at: Option<usize>,
}

impl PromptTemplate {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Inserts the caller's text at the template's own input slot, even when an
    /// option value also spells out the placeholder.
    pub fn fill(&self, input_text: &str) -> String {
        match self.input_at {
            Some(at) => {
                let mut prompt = String::with_capacity(self.text.len() + input_text.len());
                prompt.push_str(&self.text[..at]);
                prompt.push_str(input_text);
                prompt.push_str(&self.text[at + INPUT_PLACEHOLDER.len()..]);
                prompt
            }
            None => self.text.clone(),
        }
    }
}

/// Raw template for a kind and language; languages without a variant get English.
pub fn template_for(kind: PromptKind, language: Language) -> &'static str {
    match (kind, language) {
        (PromptKind::Flashcards, Language::Arabic) => prompts::FLASHCARDS_PROMPT_AR,
        (PromptKind::Flashcards, Language::Chinese) => prompts::FLASHCARDS_PROMPT_ZH,
        (PromptKind::Flashcards, _) => prompts::FLASHCARDS_PROMPT_EN,
        (PromptKind::Diagram, Language::Arabic) => prompts::DIAGRAM_PROMPT_AR,
        (PromptKind::Diagram, Language::Chinese) => prompts::DIAGRAM_PROMPT_ZH,
        (PromptKind::Diagram, _) => prompts::DIAGRAM_PROMPT_EN,
        (PromptKind::StrictDiagram(_), Language::Arabic) => prompts::STRICT_DIAGRAM_PROMPT_AR,
        (PromptKind::StrictDiagram(_), Language::Chinese) => prompts::STRICT_DIAGRAM_PROMPT_ZH,
        (PromptKind::StrictDiagram(_), _) => prompts::STRICT_DIAGRAM_PROMPT_EN,
        (PromptKind::SingleQuiz, _) => quiz_prompt::SINGLE_QUIZ_PROMPT,
        (PromptKind::QuizBatch, _) => quiz_prompt::QUIZ_BATCH_PROMPT,
    }
}

/// What the strict retry prompt says was missing, in the prompt's language.
fn defect_description(defect: Option<DiagramDefect>, language: Language) -> &'static str {
    match (defect, language) {
        (Some(DiagramDefect::MissingGraph), Language::Arabic) => {
            "سطر graph مع اتجاه (TD أو TB أو BT أو LR أو RL)"
        }
        (Some(DiagramDefect::MissingNodes), Language::Arabic) => {
            "عقد بتسميات بين أقواس مثل A[تسمية]"
        }
        (Some(DiagramDefect::MissingConnections), Language::Arabic) => {
            "اتصالات بين العقد مثل A --> B"
        }
        (None, Language::Arabic) => "مخطط Mermaid صحيح البنية",
        (Some(DiagramDefect::MissingGraph), Language::Chinese) => {
            "带方向（TD、TB、BT、LR 或 RL）的 graph 声明"
        }
        (Some(DiagramDefect::MissingNodes), Language::Chinese) => "带方括号标签的节点，例如 A[标签]",
        (Some(DiagramDefect::MissingConnections), Language::Chinese) => {
            "节点之间的连接，例如 A --> B"
        }
        (None, Language::Chinese) => "结构完整的 Mermaid 流程图",
        (Some(defect), _) => defect.description(),
        (None, _) => UNKNOWN_DEFECT,
    }
}

/// Fills every option placeholder in one pass over the template, so option
/// values are inserted verbatim and never expanded themselves. `{input_text}`
/// is left for [`PromptTemplate::fill`].
pub fn render(kind: PromptKind, language: Language, options: &PromptOptions) -> PromptTemplate {
    let defect = match kind {
        PromptKind::StrictDiagram(defect) => defect_description(defect, language),
        _ => UNKNOWN_DEFECT,
    };

    let interpolate = |text: &str| {
        OPTION_PLACEHOLDER
            .replace_all(text, |caps: &Captures| {
                option_value(&caps[1], options, defect).unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    };

    let template = template_for(kind, language);
    match template.split_once(INPUT_PLACEHOLDER) {
        Some((head, tail)) => {
            let head = interpolate(head);
            let input_at = Some(head.len());
            PromptTemplate {
                text: format!("{}{}{}", head, INPUT_PLACEHOLDER, interpolate(tail)),
                input_at,
            }
        }
        None => PromptTemplate {
            text: interpolate(template),
            input_at: None,
        },
    }
}

fn option_value(key: &str, options: &PromptOptions, defect: &str) -> Option<String> {
    let value = match key {
        "min_cards" => options.min_cards.to_string(),
        "max_cards" => options.max_cards.to_string(),
        "question_format" => options.question_format.clone(),
        "answer_length" => options.answer_length.clone(),
        "special_focus" => options.special_focus.clone(),
        "special_instructions" => options.special_instructions.clone(),
        "question_count" => options.question_count.to_string(),
        "defect" => defect.to_string(),
        _ => return None,
    };
    Some(value)
}
