use crate::analyzer::{MethodFrame, Parse};
use crate::morph::grammemes::{Animacy, Case, Gender, Grammem, Number, Other, ParteSpeech};

/// Reinterprets a single-letter token (optionally followed by `.`) as the
/// initial of a given name, patronymic, or surname. Emits one
/// candidate per interpretation; callers disambiguate via context the
/// engine does not see, so all three are returned with an even score.
#[derive(Debug, Clone, Default)]
pub struct InitialFormAnalyzer;

const INITIAL_KINDS: [Other; 3] = [Other::Name, Other::Surname, Other::Patronymic];

impl InitialFormAnalyzer {
    pub fn parse(&self, word_lower: &str) -> Vec<Parse> {
        let letter = word_lower.strip_suffix('.').unwrap_or(word_lower);
        if letter.chars().count() != 1 || !letter.chars().next().unwrap().is_alphabetic() {
            return Vec::new();
        }

        let normal_form = word_lower.to_string();
        INITIAL_KINDS
            .iter()
            .map(|&kind| Parse {
                word: word_lower.to_string(),
                tag: [
                    Grammem::ParteSpeech(ParteSpeech::Noun),
                    Grammem::Animacy(Animacy::Animate),
                    Grammem::Gender(Gender::Masculine),
                    Grammem::Number(Number::Singular),
                    Grammem::Case(Case::Nominativus),
                    Grammem::Other(kind),
                ]
                .into(),
                normal_form: normal_form.clone(),
                score: 1.0 / INITIAL_KINDS.len() as f64,
                methods_stack: [MethodFrame::InitialForm].into(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_letter_with_dot_as_initial() {
        let parses = InitialFormAnalyzer.parse("и.");
        assert_eq!(parses.len(), 3);
        assert!(parses.iter().all(|p| p.score > 0.0));
    }

    #[test]
    fn rejects_multi_letter_tokens() {
        assert!(InitialFormAnalyzer.parse("ив.").is_empty());
    }
}
