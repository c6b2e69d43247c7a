//! Glossary term detection in free text
//!
//! Candidates are tried longest first. Every occurrence of a matched surface
//! is cut out of the working text before shorter candidates are tried, so
//! "heart attack" is never also reported as a bare "heart".

use medlingo_core::{Language, Term};
use std::collections::BTreeSet;
use unicode_normalization::UnicodeNormalization;

use crate::GlossaryStore;

/// Normalize text for matching
///
/// NFC, lowercase, punctuation to spaces, whitespace collapsed to single
/// spaces, trimmed. Glossary surfaces go through the same function.
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .nfc()
        .flat_map(char::to_lowercase)
        .map(|c| if is_separator(c) { ' ' } else { c })
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_separator(c: char) -> bool {
    c.is_whitespace()
        || c.is_control()
        || c.is_ascii_punctuation()
        || matches!(
            c,
            '\u{00A1}' | '\u{00AB}' | '\u{00BB}' | '\u{00BF}'
            // Zero-width space, general punctuation (dashes, quotes, ellipsis)
            | '\u{200B}' | '\u{2010}'..='\u{205E}'
            // Arabic comma, semicolon, question mark
            | '\u{060C}' | '\u{061B}' | '\u{061F}'
            // Devanagari danda
            | '\u{0964}' | '\u{0965}'
            // CJK symbols and punctuation
            | '\u{3000}'..='\u{303F}'
            // Fullwidth punctuation
            | '\u{FF01}'..='\u{FF0F}' | '\u{FF1A}'..='\u{FF20}'
            | '\u{FF3B}'..='\u{FF40}' | '\u{FF5B}'..='\u{FF65}'
        )
}

/// Finds glossary terms in text written in a given language
pub struct TermMatcher<'a> {
    glossary: &'a GlossaryStore,
}

impl<'a> TermMatcher<'a> {
    pub fn new(glossary: &'a GlossaryStore) -> Self {
        Self { glossary }
    }

    /// Canonical terms present in `text`
    ///
    /// Never fails: empty text, or text in a language the glossary does not
    /// cover, yields an empty set.
    pub fn find_terms(&self, text: &str, language: Language) -> BTreeSet<Term> {
        let mut found = BTreeSet::new();

        let normalized = normalize(text);
        if normalized.is_empty() {
            return found;
        }

        // Scripts without inter-word spaces match as plain substrings
        let bounded = language.script().uses_word_spacing();
        let mut remaining = if bounded {
            format!(" {} ", normalized)
        } else {
            normalized
        };

        for candidate in self.glossary.candidates(language) {
            let needle = if bounded {
                format!(" {} ", candidate.surface)
            } else {
                candidate.surface.clone()
            };

            if !remaining.contains(&needle) {
                continue;
            }

            // Adjacent occurrences share a boundary space, so one pass of
            // `replace` can leave the second one behind.
            while remaining.contains(&needle) {
                remaining = remaining.replace(&needle, " ");
            }

            found.extend(candidate.terms.iter().cloned());
        }

        tracing::debug!(
            language = language.code(),
            matches = found.len(),
            "Glossary terms matched"
        );

        found
    }
}
