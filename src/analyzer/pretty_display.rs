//! `Display` impls for the result types returned by [`MorphAnalyzer`]
//! (spec "Features Supplemented" item 4): ambient ergonomics, not a feature
//! any Non-goal excludes.

use crate::analyzer::{MethodFrame, Parse};
use crate::morph::tag::cyr2lat;

impl std::fmt::Display for MethodFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MethodFrame::DictHit { .. } => write!(f, "DictHit"),
            MethodFrame::KnownPrefix { prefix, .. } => write!(f, "KnownPrefix({prefix})"),
            MethodFrame::UnknownPrefix { prefix, .. } => write!(f, "UnknownPrefix({prefix})"),
            MethodFrame::SuffixPredict { .. } => write!(f, "SuffixPredict"),
            MethodFrame::HyphenAdverb => write!(f, "HyphenAdverb"),
            MethodFrame::HyphenatedWords { left, .. } => write!(f, "HyphenatedWords({left}-)"),
            MethodFrame::HyphenParticle { particle, .. } => write!(f, "HyphenParticle(-{particle})"),
            MethodFrame::Recognizer(kind) => write!(f, "Recognizer({kind:?})"),
            MethodFrame::InitialForm => write!(f, "InitialForm"),
            MethodFrame::Abbreviation => write!(f, "Abbreviation"),
        }
    }
}

impl std::fmt::Display for Parse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Parse(word='{}', tag=[{}], normal_form='{}', score={:.4}, via={})",
            self.word,
            cyr2lat(&self.tag),
            self.normal_form,
            self.score,
            self.terminal_frame(),
        )
    }
}

/// Thin, `Display`-able wrapper around a ranked [`Parse`] list.
#[derive(Debug, Clone, Default)]
pub struct ParsedWords(pub Vec<Parse>);

impl std::fmt::Display for ParsedWords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let len = self.0.len();
        for (i, parse) in self.0.iter().enumerate() {
            if i + 1 == len {
                write!(f, "{parse}")?;
            } else {
                writeln!(f, "{parse},")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morph::grammemes::{Case, Grammem, Number, ParteSpeech};

    fn sample_parse() -> Parse {
        Parse {
            word: "москве".to_string(),
            tag: [
                Grammem::ParteSpeech(ParteSpeech::Noun),
                Grammem::Case(Case::Locativus),
                Grammem::Number(Number::Singular),
            ]
            .into(),
            normal_form: "москва".to_string(),
            score: 0.5,
            methods_stack: [MethodFrame::DictHit {
                paradigm_id: 0,
                form_index: 5,
            }]
            .into(),
        }
    }

    #[test]
    fn displays_single_parse() {
        let parse = sample_parse();
        let rendered = parse.to_string();
        assert!(rendered.contains("word='москве'"));
        assert!(rendered.contains("normal_form='москва'"));
        assert!(rendered.contains("via=DictHit"));
    }

    #[test]
    fn displays_parsed_words_joined_with_commas() {
        let words = ParsedWords(vec![sample_parse(), sample_parse()]);
        let rendered = words.to_string();
        assert_eq!(rendered.lines().count(), 2);
        assert!(rendered.lines().next().unwrap().ends_with(','));
    }
}
