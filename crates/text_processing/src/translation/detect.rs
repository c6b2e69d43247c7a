//! Script-based language detection
//!
//! Counts letters per Unicode script and maps the dominant script to its
//! most likely language. Latin text is reported as English: the heuristic
//! cannot tell Latin-script languages apart.

use medlingo_core::{Language, LanguageDetection, Script};

#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptDetector;

impl ScriptDetector {
    pub fn new() -> Self {
        Self
    }

    /// Dominant language with confidence = share of letters in its script
    ///
    /// `None` when the text has no letters of a known script.
    pub fn detect(&self, text: &str) -> Option<LanguageDetection> {
        let mut counts = [0usize; 8];
        let scripts = Script::all();
        let mut letters = 0usize;

        for c in text.chars() {
            if let Some(idx) = scripts.iter().position(|s| s.contains_char(c)) {
                counts[idx] += 1;
                letters += 1;
            }
        }

        if letters == 0 {
            return None;
        }

        let count_of = |script: Script| {
            scripts
                .iter()
                .position(|s| *s == script)
                .map(|idx| counts[idx])
                .unwrap_or(0)
        };

        // Japanese mixes kana with Han characters
        let kana = count_of(Script::Kana);
        if kana > 0 {
            let japanese = kana + count_of(Script::Han);
            if japanese * 2 >= letters {
                return Some(LanguageDetection::new(
                    Language::Japanese,
                    share(japanese, letters),
                ));
            }
        }

        let mut best = 0;
        for idx in 1..scripts.len() {
            if counts[idx] > counts[best] {
                best = idx;
            }
        }

        Some(LanguageDetection::new(
            language_for(scripts[best]),
            share(counts[best], letters),
        ))
    }
}

fn share(count: usize, total: usize) -> f32 {
    count as f32 * 100.0 / total as f32
}

fn language_for(script: Script) -> Language {
    match script {
        Script::Latin => Language::English,
        Script::Devanagari => Language::Hindi,
        Script::Bengali => Language::Bengali,
        Script::Arabic => Language::Arabic,
        Script::Cyrillic => Language::Russian,
        Script::Han => Language::Chinese,
        Script::Kana => Language::Japanese,
        Script::Hangul => Language::Korean,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(text: &str) -> Option<Language> {
        ScriptDetector::new().detect(text).map(|d| d.language)
    }

    #[test]
    fn test_detect_scripts() {
        assert_eq!(detect("I have a fever"), Some(Language::English));
        assert_eq!(detect("मुझे बुखार है"), Some(Language::Hindi));
        assert_eq!(detect("আমার জ্বর"), Some(Language::Bengali));
        assert_eq!(detect("عندي حمى"), Some(Language::Arabic));
        assert_eq!(detect("у меня лихорадка"), Some(Language::Russian));
        assert_eq!(detect("我发烧了"), Some(Language::Chinese));
        assert_eq!(detect("熱があります"), Some(Language::Japanese));
        assert_eq!(detect("열이 나요"), Some(Language::Korean));
    }

    #[test]
    fn test_confidence_is_letter_share() {
        let detection = ScriptDetector::new().detect("fever बुखार").unwrap();
        // 5 Latin letters vs 5 Devanagari code points; Devanagari comes first on ties
        assert_eq!(detection.language, Language::Hindi);
        assert_eq!(detection.confidence, 50.0);

        let detection = ScriptDetector::new().detect("fever!!! 38.5").unwrap();
        assert_eq!(detection.confidence, 100.0);
    }

    #[test]
    fn test_no_letters() {
        assert_eq!(detect(""), None);
        assert_eq!(detect("12 - 34 ?"), None);
    }
}
