//! Per-language profile data: the unit pipeline, known-prefix/hyphen word
//! lists, attenuation constants, and the `fix_rare_cases` rewrite table.
//! Everything engine-generic lives in `analyzer`/`morph`; everything tied to
//! a specific natural language lives here.

pub mod russian;

use crate::analyzer::units::AnalyzerUnit;
use crate::morph::tag::RareCaseRule;
use crate::Language;

/// One entry of the unit pipeline. Only the last unit of a group is
/// *terminal*: if it produces at least one parse, the orchestrator stops
/// ("Unit ordering").
pub struct UnitGroup {
    pub units: Vec<AnalyzerUnit>,
    pub terminal: bool,
}

/// Everything the orchestrator needs that is specific to one natural
/// language.
pub struct LangProfile {
    pub pipeline: Vec<UnitGroup>,
    pub known_prefixes: &'static [&'static str],
    pub min_stem_after_known_prefix: usize,
    pub max_unknown_prefix_len: usize,
    pub known_prefix_attenuation: f64,
    pub unknown_prefix_attenuation: f64,
    pub hyphen_adverb_prefixes: &'static [&'static str],
    pub hyphen_adverb_suffixes: &'static [&'static str],
    pub hyphen_particles: &'static [&'static str],
    pub hyphen_particle_attenuation: f64,
    pub char_substitutions: &'static [(char, char)],
    pub fix_rare_cases_table: &'static [RareCaseRule],
    pub min_paradigm_popularity: u64,
    pub abbreviations: &'static [(&'static str, &'static [crate::morph::grammemes::Grammem])],
}

impl LangProfile {
    pub fn for_language(lang: Language) -> LangProfile {
        match lang {
            Language::Russian => russian::profile(),
        }
    }
}
