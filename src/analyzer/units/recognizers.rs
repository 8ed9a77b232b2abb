use crate::analyzer::{MethodFrame, Parse, RecognizerKind};
use crate::morph::grammemes::{Grammem, ParteSpeech};

/// Builds the single-parse, paradigm-free result shared by every recognizer
/// unit, producing a single parse with a synthetic tag.
fn single_parse(word: &str, pos: ParteSpeech, kind: RecognizerKind) -> Vec<Parse> {
    vec![Parse {
        word: word.to_string(),
        tag: [Grammem::ParteSpeech(pos)].into(),
        normal_form: word.to_string(),
        score: 1.0,
        methods_stack: [MethodFrame::Recognizer(kind)].into(),
    }]
}

/// Recognizes a token made up only of decimal digits (optionally signed),
/// tagging it `NUMB`.
#[derive(Debug, Clone, Default)]
pub struct NumberAnalyzer;

impl NumberAnalyzer {
    pub fn parse(&self, word_lower: &str) -> Vec<Parse> {
        let digits = word_lower.strip_prefix(['+', '-']).unwrap_or(word_lower);
        if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
            single_parse(word_lower, ParteSpeech::NumberToken, RecognizerKind::Number)
        } else {
            Vec::new()
        }
    }
}

/// Recognizes a token made of only Roman numeral letters (`IVXLCDM`),
/// tagging it `ROMN`.
#[derive(Debug, Clone, Default)]
pub struct RomanNumberAnalyzer;

impl RomanNumberAnalyzer {
    pub fn parse(&self, word_lower: &str) -> Vec<Parse> {
        let upper: String = word_lower.chars().map(|c| c.to_ascii_uppercase()).collect();
        if is_roman_numeral(&upper) {
            single_parse(word_lower, ParteSpeech::RomanNumberToken, RecognizerKind::RomanNumber)
        } else {
            Vec::new()
        }
    }
}

fn is_roman_numeral(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| matches!(c, 'I' | 'V' | 'X' | 'L' | 'C' | 'D' | 'M'))
}

/// Recognizes a token made up only of Latin letters (digits/hyphens
/// allowed inside, as pymorphy2's `LatinAnalyzer` does), tagging it `LATN`.
#[derive(Debug, Clone, Default)]
pub struct LatinAnalyzer;

impl LatinAnalyzer {
    pub fn parse(&self, word_lower: &str) -> Vec<Parse> {
        let has_letter = word_lower.chars().any(|c| c.is_ascii_alphabetic());
        let all_latin = word_lower
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.');
        if has_letter && all_latin {
            single_parse(word_lower, ParteSpeech::LatinToken, RecognizerKind::Latin)
        } else {
            Vec::new()
        }
    }
}

/// Recognizes a token made up only of punctuation characters, tagging it
/// `PNCT`.
#[derive(Debug, Clone, Default)]
pub struct PunctuationAnalyzer;

impl PunctuationAnalyzer {
    pub fn parse(&self, word_lower: &str) -> Vec<Parse> {
        if !word_lower.is_empty() && word_lower.chars().all(|c| c.is_ascii_punctuation()) {
            single_parse(word_lower, ParteSpeech::PunctuationToken, RecognizerKind::Punctuation)
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_analyzer_matches_digits_only() {
        let parses = NumberAnalyzer.parse("123");
        assert_eq!(parses.len(), 1);
        assert_eq!(parses[0].normal_form, "123");
        assert!(parses[0].tag.contains(&Grammem::ParteSpeech(ParteSpeech::NumberToken)));
    }

    #[test]
    fn number_analyzer_rejects_mixed_tokens() {
        assert!(NumberAnalyzer.parse("12a").is_empty());
    }

    #[test]
    fn roman_number_analyzer_matches_numeral_letters() {
        let parses = RomanNumberAnalyzer.parse("xiv");
        assert_eq!(parses.len(), 1);
        assert!(parses[0].tag.contains(&Grammem::ParteSpeech(ParteSpeech::RomanNumberToken)));
    }

    #[test]
    fn latin_analyzer_matches_ascii_word() {
        let parses = LatinAnalyzer.parse("hello");
        assert_eq!(parses.len(), 1);
        assert!(parses[0].tag.contains(&Grammem::ParteSpeech(ParteSpeech::LatinToken)));
    }

    #[test]
    fn latin_analyzer_rejects_cyrillic() {
        assert!(LatinAnalyzer.parse("привет").is_empty());
    }

    #[test]
    fn punctuation_analyzer_matches_punctuation_only() {
        let parses = PunctuationAnalyzer.parse("...");
        assert_eq!(parses.len(), 1);
        assert!(parses[0].tag.contains(&Grammem::ParteSpeech(ParteSpeech::PunctuationToken)));
    }
}
