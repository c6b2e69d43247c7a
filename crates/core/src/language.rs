//! Language definitions for the languages covered by the medical glossary
//!
//! English is the canonical language: every glossary term and department is
//! keyed by its English form, and all other languages are projections of it.

use serde::{Deserialize, Serialize};

/// Supported languages (ISO 639-1 codes on the wire)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "bn")]
    Bengali,
    #[serde(rename = "zh")]
    Chinese,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "nl")]
    Dutch,
    #[serde(rename = "tr")]
    Turkish,
    #[serde(rename = "pl")]
    Polish,
    #[serde(rename = "sv")]
    Swedish,
}

impl Language {
    /// The canonical language all tables are keyed by
    pub const BASE: Language = Language::English;

    /// Get ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
            Self::Spanish => "es",
            Self::German => "de",
            Self::French => "fr",
            Self::Arabic => "ar",
            Self::Bengali => "bn",
            Self::Chinese => "zh",
            Self::Japanese => "ja",
            Self::Korean => "ko",
            Self::Russian => "ru",
            Self::Portuguese => "pt",
            Self::Italian => "it",
            Self::Dutch => "nl",
            Self::Turkish => "tr",
            Self::Polish => "pl",
            Self::Swedish => "sv",
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
            Self::Spanish => "Spanish",
            Self::German => "German",
            Self::French => "French",
            Self::Arabic => "Arabic",
            Self::Bengali => "Bengali",
            Self::Chinese => "Chinese",
            Self::Japanese => "Japanese",
            Self::Korean => "Korean",
            Self::Russian => "Russian",
            Self::Portuguese => "Portuguese",
            Self::Italian => "Italian",
            Self::Dutch => "Dutch",
            Self::Turkish => "Turkish",
            Self::Polish => "Polish",
            Self::Swedish => "Swedish",
        }
    }

    /// Get script used by this language
    pub fn script(&self) -> Script {
        match self {
            Self::Hindi => Script::Devanagari,
            Self::Bengali => Script::Bengali,
            Self::Arabic => Script::Arabic,
            Self::Chinese => Script::Han,
            Self::Japanese => Script::Kana,
            Self::Korean => Script::Hangul,
            Self::Russian => Script::Cyrillic,
            Self::English
            | Self::Spanish
            | Self::German
            | Self::French
            | Self::Portuguese
            | Self::Italian
            | Self::Dutch
            | Self::Turkish
            | Self::Polish
            | Self::Swedish => Script::Latin,
        }
    }

    /// Check if this language uses right-to-left script
    pub fn is_rtl(&self) -> bool {
        matches!(self.script(), Script::Arabic)
    }

    /// Parse from an ISO code or English name (case-insensitive)
    pub fn from_str_loose(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "en" | "eng" | "english" => Some(Self::English),
            "hi" | "hin" | "hindi" => Some(Self::Hindi),
            "es" | "spa" | "spanish" | "español" => Some(Self::Spanish),
            "de" | "deu" | "ger" | "german" | "deutsch" => Some(Self::German),
            "fr" | "fra" | "fre" | "french" | "français" => Some(Self::French),
            "ar" | "ara" | "arabic" => Some(Self::Arabic),
            "bn" | "ben" | "bengali" | "bangla" => Some(Self::Bengali),
            "zh" | "zho" | "chi" | "chinese" | "zh-cn" | "zh-hans" => Some(Self::Chinese),
            "ja" | "jpn" | "japanese" => Some(Self::Japanese),
            "ko" | "kor" | "korean" => Some(Self::Korean),
            "ru" | "rus" | "russian" => Some(Self::Russian),
            "pt" | "por" | "portuguese" | "pt-br" => Some(Self::Portuguese),
            "it" | "ita" | "italian" => Some(Self::Italian),
            "nl" | "nld" | "dut" | "dutch" => Some(Self::Dutch),
            "tr" | "tur" | "turkish" => Some(Self::Turkish),
            "pl" | "pol" | "polish" => Some(Self::Polish),
            "sv" | "swe" | "swedish" => Some(Self::Swedish),
            _ => None,
        }
    }

    /// Get all supported languages
    pub fn all() -> &'static [Language] {
        &[
            Self::English,
            Self::Hindi,
            Self::Spanish,
            Self::German,
            Self::French,
            Self::Arabic,
            Self::Bengali,
            Self::Chinese,
            Self::Japanese,
            Self::Korean,
            Self::Russian,
            Self::Portuguese,
            Self::Italian,
            Self::Dutch,
            Self::Turkish,
            Self::Polish,
            Self::Swedish,
        ]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Language {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_loose(s).ok_or_else(|| crate::Error::UnsupportedLanguage(s.to_string()))
    }
}

/// Writing systems of the supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Script {
    Latin,
    Devanagari,
    Bengali,
    Arabic,
    Cyrillic,
    Han,
    /// Hiragana and Katakana
    Kana,
    Hangul,
}

impl Script {
    /// Unicode blocks covered by this script
    pub fn unicode_ranges(&self) -> &'static [(u32, u32)] {
        match self {
            // Basic Latin letters through Latin Extended-B
            Self::Latin => &[(0x0041, 0x005A), (0x0061, 0x007A), (0x00C0, 0x024F)],
            Self::Devanagari => &[(0x0900, 0x097F)],
            Self::Bengali => &[(0x0980, 0x09FF)],
            Self::Arabic => &[(0x0600, 0x06FF), (0x0750, 0x077F)],
            Self::Cyrillic => &[(0x0400, 0x04FF)],
            Self::Han => &[(0x3400, 0x4DBF), (0x4E00, 0x9FFF)],
            Self::Kana => &[(0x3040, 0x309F), (0x30A0, 0x30FF)],
            Self::Hangul => &[(0x1100, 0x11FF), (0x3130, 0x318F), (0xAC00, 0xD7AF)],
        }
    }

    /// Check if a character belongs to this script
    pub fn contains_char(&self, c: char) -> bool {
        let code = c as u32;
        self.unicode_ranges()
            .iter()
            .any(|&(start, end)| code >= start && code <= end)
    }

    /// Whether words in this script are separated by spaces.
    ///
    /// Chinese and Japanese text runs words together, so glossary matching
    /// cannot rely on whitespace boundaries there.
    pub fn uses_word_spacing(&self) -> bool {
        !matches!(self, Self::Han | Self::Kana)
    }

    /// Scripts in detection order
    pub fn all() -> &'static [Script] {
        &[
            Self::Devanagari,
            Self::Bengali,
            Self::Arabic,
            Self::Cyrillic,
            Self::Kana,
            Self::Han,
            Self::Hangul,
            Self::Latin,
        ]
    }

    /// Script of a single character, if it belongs to a known one
    pub fn of_char(c: char) -> Option<Self> {
        Self::all().iter().copied().find(|s| s.contains_char(c))
    }
}
