use smallstr::SmallString;

use crate::analyzer::dictionary::Dictionary;
use crate::analyzer::units::dictionary_unit::DictionaryAnalyzer;
use crate::analyzer::{MethodFrame, Parse, SeenSet, SMALLLEMMA, SMALLVANGA};
use crate::lang::LangProfile;
use crate::morph::grammemes::{Grammem, ParteSpeech};

/// A whole word matching `{prefix}-` (e.g. `по-` in `по-кошачьи`) is a
/// fixed-tag adverb, no paradigm involved.
#[derive(Debug, Clone, Default)]
pub struct HyphenAdverbAnalyzer;

impl HyphenAdverbAnalyzer {
    pub fn parse(&self, word_lower: &str, profile: &LangProfile) -> Vec<Parse> {
        for &prefix in profile.hyphen_adverb_prefixes {
            let Some(rest) = word_lower.strip_prefix(prefix) else {
                continue;
            };
            let matches_suffix = profile
                .hyphen_adverb_suffixes
                .iter()
                .any(|&suffix| rest.ends_with(suffix) && rest.len() > suffix.len());
            if matches_suffix {
                return vec![Parse {
                    word: word_lower.to_string(),
                    tag: [Grammem::ParteSpeech(ParteSpeech::Adverb)].into(),
                    normal_form: word_lower.to_string(),
                    score: 1.0,
                    methods_stack: [MethodFrame::HyphenAdverb].into(),
                }];
            }
        }
        Vec::new()
    }
}

/// `left-right` where `left` has no dictionary entry of its own and is kept
/// verbatim, while `right` is parsed normally (bounded to avoid
/// runaway recursion on multiply-hyphenated input).
pub const MAX_HYPHEN_DEPTH: u32 = 2;

#[derive(Debug, Clone, Default)]
pub struct HyphenatedWordsAnalyzer;

impl HyphenatedWordsAnalyzer {
    pub fn parse(
        &self,
        word_lower: &str,
        dictionary: &Dictionary,
        profile: &LangProfile,
        seen: &mut SeenSet,
        depth: u32,
    ) -> Vec<Parse> {
        if depth >= MAX_HYPHEN_DEPTH {
            return Vec::new();
        }
        let Some((left, right)) = word_lower.rsplit_once('-') else {
            return Vec::new();
        };
        if left.is_empty() || right.is_empty() {
            return Vec::new();
        }

        let dict_unit = DictionaryAnalyzer;
        let hits = dict_unit.parse(right, dictionary, profile.char_substitutions, seen);
        hits.into_iter()
            .filter_map(|hit| {
                let (paradigm_id, form_index) = hit.terminal_frame().paradigm_ref()?;
                Some(Parse {
                    word: word_lower.to_string(),
                    tag: hit.tag,
                    normal_form: format!("{left}-{}", hit.normal_form),
                    score: hit.score * 0.5,
                    methods_stack: [MethodFrame::HyphenatedWords {
                        left: SmallString::<[u8; SMALLLEMMA]>::from(left),
                        paradigm_id,
                        form_index,
                    }]
                    .into(),
                })
            })
            .collect()
    }
}

/// A trailing particle (`-то`, `-ка`, `-таки`, ...) is stripped before the
/// dictionary lookup and reattached on the surface word.
#[derive(Debug, Clone, Default)]
pub struct HyphenSeparatedParticleAnalyzer;

impl HyphenSeparatedParticleAnalyzer {
    pub fn parse(
        &self,
        word_lower: &str,
        dictionary: &Dictionary,
        profile: &LangProfile,
        seen: &mut SeenSet,
    ) -> Vec<Parse> {
        let mut out = Vec::new();
        for &particle in profile.hyphen_particles {
            let suffix = format!("-{particle}");
            let Some(stem_word) = word_lower.strip_suffix(suffix.as_str()) else {
                continue;
            };
            if stem_word.is_empty() {
                continue;
            }

            let dict_unit = DictionaryAnalyzer;
            let hits = dict_unit.parse(stem_word, dictionary, profile.char_substitutions, seen);
            for hit in hits {
                let Some((paradigm_id, form_index)) = hit.terminal_frame().paradigm_ref() else {
                    continue;
                };
                out.push(Parse {
                    word: word_lower.to_string(),
                    tag: hit.tag,
                    normal_form: hit.normal_form,
                    score: hit.score * profile.hyphen_particle_attenuation,
                    methods_stack: [MethodFrame::HyphenParticle {
                        particle: SmallString::<[u8; SMALLVANGA]>::from(particle),
                        paradigm_id,
                        form_index,
                    }]
                    .into(),
                });
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::russian;
    use crate::test_support::tiny_dictionary;

    #[test]
    fn hyphen_adverb_matches_known_prefix() {
        let profile = russian::profile();
        let unit = HyphenAdverbAnalyzer;
        let parses = unit.parse("по-кошачьи", &profile);
        assert_eq!(parses.len(), 1);
        assert_eq!(parses[0].methods_stack.last().unwrap(), &MethodFrame::HyphenAdverb);
    }

    #[test]
    fn hyphenated_words_keeps_left_verbatim() {
        let dictionary = tiny_dictionary();
        let profile = russian::profile();
        let mut seen = SeenSet::default();
        let unit = HyphenatedWordsAnalyzer;
        let parses = unit.parse("интернет-кот", &dictionary, &profile, &mut seen, 0);
        assert!(parses.iter().all(|p| p.normal_form.starts_with("интернет-")));
    }

    #[test]
    fn hyphen_particle_is_stripped_and_reattached() {
        let dictionary = tiny_dictionary();
        let profile = russian::profile();
        let mut seen = SeenSet::default();
        let unit = HyphenSeparatedParticleAnalyzer;
        let parses = unit.parse("кот-то", &dictionary, &profile, &mut seen);
        assert!(parses.iter().all(|p| matches!(p.terminal_frame(), MethodFrame::HyphenParticle { .. })));
    }
}
