//! Concrete analyzer units and the tagged-variant dispatch that lets the
//! orchestrator hold a flat, monomorphized pipeline instead of paying for
//! dynamic dispatch per query.

pub mod abbreviation;
pub mod dictionary_unit;
pub mod hyphen;
pub mod initial_form;
pub mod prefix;
pub mod recognizers;
pub mod suffix;

pub use abbreviation::AbbreviationAnalyzer;
pub use dictionary_unit::DictionaryAnalyzer;
pub use hyphen::{HyphenAdverbAnalyzer, HyphenSeparatedParticleAnalyzer, HyphenatedWordsAnalyzer};
pub use initial_form::InitialFormAnalyzer;
pub use prefix::{KnownPrefixAnalyzer, UnknownPrefixAnalyzer};
pub use recognizers::{LatinAnalyzer, NumberAnalyzer, PunctuationAnalyzer, RomanNumberAnalyzer};
pub use suffix::SuffixAnalyzer;

use crate::analyzer::dictionary::Dictionary;
use crate::analyzer::{Parse, SeenSet};
use crate::lang::LangProfile;

/// Every concrete unit kind the engine ships, as a tagged variant (spec
/// §4.4). Each unit is cheap to construct (`Default`) and stateless once
/// built: all state it needs (`Dictionary`, substitutes, other units) is
/// passed explicitly per call, matching the design note that prefers
/// explicit parameters over a back-reference to the owning analyzer.
#[derive(Debug, Clone)]
pub enum AnalyzerUnit {
    Dictionary(DictionaryAnalyzer),
    KnownPrefix(KnownPrefixAnalyzer),
    UnknownPrefix(UnknownPrefixAnalyzer),
    Suffix(SuffixAnalyzer),
    HyphenAdverb(HyphenAdverbAnalyzer),
    HyphenatedWords(HyphenatedWordsAnalyzer),
    HyphenSeparatedParticle(HyphenSeparatedParticleAnalyzer),
    Number(NumberAnalyzer),
    RomanNumber(RomanNumberAnalyzer),
    Latin(LatinAnalyzer),
    Punctuation(PunctuationAnalyzer),
    InitialForm(InitialFormAnalyzer),
    Abbreviation(AbbreviationAnalyzer),
}

impl AnalyzerUnit {
    /// Run this unit against the surface `word` (original case, used by
    /// `AbbreviationAnalyzer`'s ALL-CAPS check) and its lowercased form
    /// `word_lower` (used by every other unit).
    pub fn parse(
        &self,
        word: &str,
        word_lower: &str,
        dictionary: &Dictionary,
        profile: &LangProfile,
        seen: &mut SeenSet,
    ) -> Vec<Parse> {
        match self {
            AnalyzerUnit::Dictionary(unit) => {
                unit.parse(word_lower, dictionary, profile.char_substitutions, seen)
            }
            AnalyzerUnit::KnownPrefix(unit) => unit.parse(word_lower, dictionary, profile, seen),
            AnalyzerUnit::UnknownPrefix(unit) => unit.parse(word_lower, dictionary, profile, seen),
            AnalyzerUnit::Suffix(unit) => unit.parse(word_lower, dictionary, profile, seen),
            AnalyzerUnit::HyphenAdverb(unit) => unit.parse(word_lower, profile),
            AnalyzerUnit::HyphenatedWords(unit) => {
                unit.parse(word_lower, dictionary, profile, seen, 0)
            }
            AnalyzerUnit::HyphenSeparatedParticle(unit) => {
                unit.parse(word_lower, dictionary, profile, seen)
            }
            AnalyzerUnit::Number(unit) => unit.parse(word_lower),
            AnalyzerUnit::RomanNumber(unit) => unit.parse(word_lower),
            AnalyzerUnit::Latin(unit) => unit.parse(word_lower),
            AnalyzerUnit::Punctuation(unit) => unit.parse(word_lower),
            AnalyzerUnit::InitialForm(unit) => unit.parse(word_lower),
            AnalyzerUnit::Abbreviation(unit) => unit.parse(word, profile),
        }
    }
}
