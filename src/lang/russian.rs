//! Russian language profile: unit pipeline order, known-prefix/hyphen word
//! lists, attenuation constants, and the `fix_rare_cases` table.

use crate::analyzer::units::{
    AbbreviationAnalyzer, AnalyzerUnit, DictionaryAnalyzer, HyphenAdverbAnalyzer,
    HyphenSeparatedParticleAnalyzer, HyphenatedWordsAnalyzer, InitialFormAnalyzer,
    KnownPrefixAnalyzer, LatinAnalyzer, NumberAnalyzer, PunctuationAnalyzer, RomanNumberAnalyzer,
    SuffixAnalyzer, UnknownPrefixAnalyzer,
};
use crate::lang::{LangProfile, UnitGroup};
use crate::morph::grammemes::{Case, Grammem};
use crate::morph::tag::RareCaseRule;

/// `Gen2`/`Acc2`/`Loc2` ("second genitive/accusative/locative", e.g.
/// "стакан чаю", "в лесу") are rarely what an inflection request actually
/// wants; collapse them to the primary case before retrying lexeme search
/// (ported from pymorphy2's own rare-case table).
static FIX_RARE_CASES: &[RareCaseRule] = &[
    RareCaseRule {
        from: &[Grammem::Case(Case::Gen2)],
        to: &[Grammem::Case(Case::Genetivus)],
    },
    RareCaseRule {
        from: &[Grammem::Case(Case::Acc2)],
        to: &[Grammem::Case(Case::Accusativus)],
    },
    RareCaseRule {
        from: &[Grammem::Case(Case::Loc2)],
        to: &[Grammem::Case(Case::Locativus)],
    },
];

/// `ё`/`е` are interchangeable in informal written Russian; the compiled
/// dictionary is built from normalized `е` spellings, so queries need this
/// substitution to find `ёж`-shaped words typed as `еж` and vice versa.
static CHAR_SUBSTITUTIONS: &[(char, char)] = &[('ё', 'е'), ('е', 'ё')];

static KNOWN_PREFIXES: &[&str] = &["по", "сверх", "супер", "мега", "ультра"];

static HYPHEN_ADVERB_PREFIXES: &[&str] = &["по-"];
static HYPHEN_ADVERB_SUFFIXES: &[&str] = &["ски", "цки", "ьи"];

static HYPHEN_PARTICLES: &[&str] = &["то", "ка", "таки", "с"];

static ABBREVIATIONS: &[(&str, &[Grammem])] = &[
    (
        "США",
        &[
            Grammem::ParteSpeech(crate::morph::grammemes::ParteSpeech::Noun),
            Grammem::Other(crate::morph::grammemes::Other::Abbreviation),
            Grammem::Other(crate::morph::grammemes::Other::Geography),
        ],
    ),
    (
        "ООН",
        &[
            Grammem::ParteSpeech(crate::morph::grammemes::ParteSpeech::Noun),
            Grammem::Other(crate::morph::grammemes::Other::Abbreviation),
            Grammem::Other(crate::morph::grammemes::Other::Organization),
        ],
    ),
    (
        "РФ",
        &[
            Grammem::ParteSpeech(crate::morph::grammemes::ParteSpeech::Noun),
            Grammem::Other(crate::morph::grammemes::Other::Abbreviation),
            Grammem::Other(crate::morph::grammemes::Other::Geography),
        ],
    ),
];

/// Paradigms predicted from a suffix with fewer than this many observed
/// forms are unproductive noise.
const MIN_PARADIGM_POPULARITY: u64 = 3;

pub fn profile() -> LangProfile {
    LangProfile {
        pipeline: vec![
            UnitGroup {
                units: vec![AnalyzerUnit::Dictionary(DictionaryAnalyzer)],
                terminal: true,
            },
            UnitGroup {
                units: vec![AnalyzerUnit::Punctuation(PunctuationAnalyzer)],
                terminal: true,
            },
            UnitGroup {
                units: vec![AnalyzerUnit::Number(NumberAnalyzer)],
                terminal: true,
            },
            UnitGroup {
                units: vec![AnalyzerUnit::RomanNumber(RomanNumberAnalyzer)],
                terminal: true,
            },
            UnitGroup {
                units: vec![AnalyzerUnit::Latin(LatinAnalyzer)],
                terminal: true,
            },
            UnitGroup {
                units: vec![AnalyzerUnit::Abbreviation(AbbreviationAnalyzer)],
                terminal: true,
            },
            UnitGroup {
                units: vec![
                    AnalyzerUnit::HyphenSeparatedParticle(HyphenSeparatedParticleAnalyzer),
                    AnalyzerUnit::HyphenAdverb(HyphenAdverbAnalyzer),
                    AnalyzerUnit::HyphenatedWords(HyphenatedWordsAnalyzer),
                ],
                terminal: true,
            },
            UnitGroup {
                units: vec![AnalyzerUnit::KnownPrefix(KnownPrefixAnalyzer)],
                terminal: false,
            },
            UnitGroup {
                units: vec![AnalyzerUnit::UnknownPrefix(UnknownPrefixAnalyzer)],
                terminal: false,
            },
            UnitGroup {
                units: vec![AnalyzerUnit::Suffix(SuffixAnalyzer)],
                terminal: true,
            },
            UnitGroup {
                units: vec![AnalyzerUnit::InitialForm(InitialFormAnalyzer)],
                terminal: true,
            },
        ],
        known_prefixes: KNOWN_PREFIXES,
        min_stem_after_known_prefix: 3,
        max_unknown_prefix_len: 5,
        known_prefix_attenuation: 0.7,
        unknown_prefix_attenuation: 0.3,
        hyphen_adverb_prefixes: HYPHEN_ADVERB_PREFIXES,
        hyphen_adverb_suffixes: HYPHEN_ADVERB_SUFFIXES,
        hyphen_particles: HYPHEN_PARTICLES,
        hyphen_particle_attenuation: 0.5,
        char_substitutions: CHAR_SUBSTITUTIONS,
        fix_rare_cases_table: FIX_RARE_CASES,
        min_paradigm_popularity: MIN_PARADIGM_POPULARITY,
        abbreviations: ABBREVIATIONS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_pipeline_has_dictionary_first_and_terminal() {
        let profile = profile();
        let first = &profile.pipeline[0];
        assert!(matches!(first.units[0], AnalyzerUnit::Dictionary(_)));
        assert!(first.terminal);
    }

    #[test]
    fn known_prefix_group_is_not_terminal() {
        let profile = profile();
        let group = profile
            .pipeline
            .iter()
            .find(|g| matches!(g.units[0], AnalyzerUnit::KnownPrefix(_)))
            .unwrap();
        assert!(!group.terminal);
    }
}
