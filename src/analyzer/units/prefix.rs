use smallstr::SmallString;

use crate::analyzer::dictionary::Dictionary;
use crate::analyzer::units::dictionary_unit::DictionaryAnalyzer;
use crate::analyzer::{MethodFrame, Parse, SeenSet, SMALLVANGA};
use crate::lang::LangProfile;

/// Minimum stem length required after stripping a known prefix.
const MIN_STEM_AFTER_KNOWN_PREFIX: usize = 3;

/// Tries each prefix in the language profile's known-prefix list; if the
/// remainder parses via the dictionary, emits a parse with the prefix
/// prepended to the normal form and an attenuated score.
#[derive(Debug, Clone, Default)]
pub struct KnownPrefixAnalyzer;

impl KnownPrefixAnalyzer {
    pub fn parse(
        &self,
        word_lower: &str,
        dictionary: &Dictionary,
        profile: &LangProfile,
        seen: &mut SeenSet,
    ) -> Vec<Parse> {
        let mut out = Vec::new();
        for &prefix in profile.known_prefixes {
            let Some(remainder) = word_lower.strip_prefix(prefix) else {
                continue;
            };
            if remainder.chars().count() < MIN_STEM_AFTER_KNOWN_PREFIX.max(profile.min_stem_after_known_prefix) {
                continue;
            }

            let dict_unit = DictionaryAnalyzer;
            let hits = dict_unit.parse(remainder, dictionary, profile.char_substitutions, seen);
            for hit in hits {
                let Some((paradigm_id, form_index)) = hit.terminal_frame().paradigm_ref() else {
                    continue;
                };
                out.push(Parse {
                    word: word_lower.to_string(),
                    tag: hit.tag,
                    normal_form: format!("{prefix}{}", hit.normal_form),
                    score: profile.known_prefix_attenuation,
                    methods_stack: [MethodFrame::KnownPrefix {
                        prefix: SmallString::<[u8; SMALLVANGA]>::from(prefix),
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

/// The opposite heuristic: treats an unknown leading substring of length
/// `1..=max_unknown_prefix_len` as an arbitrary prefix and looks the
/// remainder up in the dictionary.
#[derive(Debug, Clone, Default)]
pub struct UnknownPrefixAnalyzer;

impl UnknownPrefixAnalyzer {
    pub fn parse(
        &self,
        word_lower: &str,
        dictionary: &Dictionary,
        profile: &LangProfile,
        seen: &mut SeenSet,
    ) -> Vec<Parse> {
        let mut out = Vec::new();
        let char_count = word_lower.chars().count();
        let max_len = profile.max_unknown_prefix_len.min(char_count.saturating_sub(1));

        for prefix_len in 1..=max_len {
            let split_at = word_lower
                .char_indices()
                .nth(prefix_len)
                .map(|(idx, _)| idx)
                .unwrap_or(word_lower.len());
            let (prefix, remainder) = word_lower.split_at(split_at);
            if remainder.is_empty() {
                continue;
            }

            let dict_unit = DictionaryAnalyzer;
            let hits = dict_unit.parse(remainder, dictionary, profile.char_substitutions, seen);
            let attenuation = profile.unknown_prefix_attenuation / prefix_len as f64;
            for hit in hits {
                let Some((paradigm_id, form_index)) = hit.terminal_frame().paradigm_ref() else {
                    continue;
                };
                out.push(Parse {
                    word: word_lower.to_string(),
                    tag: hit.tag,
                    normal_form: format!("{prefix}{}", hit.normal_form),
                    score: attenuation,
                    methods_stack: [MethodFrame::UnknownPrefix {
                        prefix: SmallString::<[u8; SMALLVANGA]>::from(prefix),
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
    fn known_prefix_parses_remainder_and_prepends_prefix() {
        let dictionary = tiny_dictionary();
        let profile = russian::profile();
        let mut seen = SeenSet::default();
        let unit = KnownPrefixAnalyzer;
        let parses = unit.parse("покот", &dictionary, &profile, &mut seen);
        assert!(parses.iter().any(|p| p.normal_form == "покот"));
    }

    #[test]
    fn unknown_prefix_attenuates_score_by_prefix_length() {
        let dictionary = tiny_dictionary();
        let profile = russian::profile();
        let mut seen = SeenSet::default();
        let unit = UnknownPrefixAnalyzer;
        let parses = unit.parse("ккот", &dictionary, &profile, &mut seen);
        assert!(parses.iter().all(|p| p.score > 0.0));
    }
}
