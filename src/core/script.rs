//! Target script detection.
//!
//! A fragment is translatable only if it contains at least one character of
//! the configured script. Everything else (ASCII labels, numbers, symbols) is
//! left untouched.

use std::ops::RangeInclusive;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Script whose presence marks a text fragment as translatable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TargetScript {
    /// CJK Unified Ideographs (U+4E00..=U+9FFF).
    #[default]
    Han,
    /// Hiragana and Katakana (U+3040..=U+30FF).
    Kana,
    /// Hangul Syllables (U+AC00..=U+D7AF).
    Hangul,
}

impl TargetScript {
    /// Unicode block of the script.
    pub fn block(self) -> RangeInclusive<char> {
        match self {
            Self::Han => '\u{4E00}'..='\u{9FFF}',
            Self::Kana => '\u{3040}'..='\u{30FF}',
            Self::Hangul => '\u{AC00}'..='\u{D7AF}',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Han => "han",
            Self::Kana => "kana",
            Self::Hangul => "hangul",
        }
    }
}

/// Checks if the text contains at least one character of the target script.
///
/// Returns false for empty or absent text.
///
/// # Examples
///
/// ```
/// use glot_extract::core::script::{TargetScript, contains_script};
///
/// assert!(contains_script(Some("你好"), TargetScript::Han));
/// assert!(contains_script(Some("OK 确认"), TargetScript::Han));
/// assert!(!contains_script(Some("OK"), TargetScript::Han));
/// assert!(!contains_script(Some(""), TargetScript::Han));
/// assert!(!contains_script(None, TargetScript::Han));
/// ```
pub fn contains_script(text: Option<&str>, script: TargetScript) -> bool {
    let block = script.block();
    text.is_some_and(|text| text.chars().any(|c| block.contains(&c)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_han() {
        assert!(contains_script(Some("你好"), TargetScript::Han));
        assert!(contains_script(Some("  标题  "), TargetScript::Han));
        assert!(contains_script(Some("Hello 世界"), TargetScript::Han));
        assert!(contains_script(Some("你好，{placeholder1}！"), TargetScript::Han));

        assert!(!contains_script(Some("Hello"), TargetScript::Han));
        assert!(!contains_script(Some("123"), TargetScript::Han));
        // Fullwidth punctuation alone is not Han
        assert!(!contains_script(Some("，！"), TargetScript::Han));
        assert!(!contains_script(Some("   "), TargetScript::Han));
        assert!(!contains_script(Some(""), TargetScript::Han));
        assert!(!contains_script(None, TargetScript::Han));
    }

    #[test]
    fn test_scripts_are_distinct() {
        assert!(contains_script(Some("こんにちは"), TargetScript::Kana));
        assert!(!contains_script(Some("こんにちは"), TargetScript::Han));
        assert!(contains_script(Some("안녕하세요"), TargetScript::Hangul));
        assert!(!contains_script(Some("안녕하세요"), TargetScript::Kana));
    }

    #[test]
    fn test_serde_names() {
        let script: TargetScript = serde_json::from_str(r#""kana""#).unwrap();
        assert_eq!(script, TargetScript::Kana);
        assert_eq!(serde_json::to_string(&TargetScript::Han).unwrap(), r#""han""#);
        assert_eq!(TargetScript::Hangul.as_str(), "hangul");
    }
}
