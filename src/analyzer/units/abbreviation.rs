use crate::analyzer::{MethodFrame, Parse};
use crate::lang::LangProfile;
use crate::morph::grammemes::Grammem;

/// Assigns a fixed tag to a known all-caps abbreviation via a language
/// profile's static rules. The profile's abbreviation table is keyed by the
/// exact uppercase spelling, e.g. `("США", &[NOUN, Abbr, ...])`.
#[derive(Debug, Clone, Default)]
pub struct AbbreviationAnalyzer;

impl AbbreviationAnalyzer {
    pub fn parse(&self, word: &str, profile: &LangProfile) -> Vec<Parse> {
        if !is_all_caps(word) {
            return Vec::new();
        }
        profile
            .abbreviations
            .iter()
            .filter(|(spelling, _)| spelling.eq_ignore_ascii_case(word) || *spelling == word)
            .map(|(_, grammemes)| Parse {
                word: word.to_string(),
                tag: grammemes.iter().copied().collect(),
                normal_form: word.to_string(),
                score: 1.0,
                methods_stack: [MethodFrame::Abbreviation].into(),
            })
            .collect()
    }
}

fn is_all_caps(word: &str) -> bool {
    let has_alpha = word.chars().any(char::is_alphabetic);
    has_alpha && word.chars().filter(|c| c.is_alphabetic()).all(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::russian;

    #[test]
    fn parses_known_abbreviation() {
        let profile = russian::profile();
        let parses = AbbreviationAnalyzer.parse("США", &profile);
        assert_eq!(parses.len(), 1);
        assert!(parses[0].tag.iter().any(|g| matches!(g, Grammem::Other(_))));
    }

    #[test]
    fn ignores_lowercase_tokens() {
        let profile = russian::profile();
        assert!(AbbreviationAnalyzer.parse("сша", &profile).is_empty());
    }

    #[test]
    fn ignores_unknown_all_caps_tokens() {
        let profile = russian::profile();
        assert!(AbbreviationAnalyzer.parse("ГБФЫВ", &profile).is_empty());
    }
}
