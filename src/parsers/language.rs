use async_graphql::Enum;
use serde::{Deserialize, Serialize};

/// Language tag used to pick a prompt template.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize, Enum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Arabic,
    Chinese,
    #[default]
    English,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Arabic => "arabic",
            Language::Chinese => "chinese",
            Language::English => "english",
        }
    }

    /// Unknown tags map to English.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "arabic" | "ar" => Language::Arabic,
            "chinese" | "zh" => Language::Chinese,
            _ => Language::English,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_arabic(ch: char) -> bool {
    matches!(ch as u32, 0x0600..=0x06FF)
}

fn is_cjk(ch: char) -> bool {
    matches!(ch as u32, 0x4E00..=0x9FFF)
}

/// Classifies text by Unicode block. Arabic wins over Chinese when both appear.
pub fn detect_language(text: &str) -> Language {
    if text.chars().any(is_arabic) {
        Language::Arabic
    } else if text.chars().any(is_cjk) {
        Language::Chinese
    } else {
        Language::English
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arabic_text_is_detected() {
        assert_eq!(detect_language("ما هي عاصمة السعودية"), Language::Arabic);
    }

    #[test]
    fn chinese_text_is_detected() {
        assert_eq!(detect_language("光合作用是什么"), Language::Chinese);
    }

    #[test]
    fn ascii_text_defaults_to_english() {
        assert_eq!(detect_language("What is photosynthesis?"), Language::English);
        assert_eq!(detect_language(""), Language::English);
    }

    #[test]
    fn arabic_is_checked_before_chinese() {
        assert_eq!(detect_language("中文 and عربي"), Language::Arabic);
    }

    #[test]
    fn block_boundaries_are_inclusive() {
        assert_eq!(detect_language("\u{0600}"), Language::Arabic);
        assert_eq!(detect_language("\u{06FF}"), Language::Arabic);
        assert_eq!(detect_language("\u{4E00}"), Language::Chinese);
        assert_eq!(detect_language("\u{9FFF}"), Language::Chinese);
        assert_eq!(detect_language("\u{0700}"), Language::English);
    }

    #[test]
    fn unknown_tags_fall_back_to_english() {
        assert_eq!(Language::from_tag("ar"), Language::Arabic);
        assert_eq!(Language::from_tag("Chinese"), Language::Chinese);
        assert_eq!(Language::from_tag("klingon"), Language::English);
    }

    #[test]
    fn language_serializes_lowercase() {
        let json = serde_json::to_string(&Language::Chinese).expect("language should serialize");
        assert_eq!(json, "\"chinese\"");
    }
}
