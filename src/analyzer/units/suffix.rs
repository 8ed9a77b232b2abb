use smallstr::SmallString;

use crate::analyzer::dictionary::Dictionary;
use crate::analyzer::{MethodFrame, Parse, SeenSet, SMALLLEMMA};
use crate::lang::LangProfile;

/// Predicts a parse from the word's tail alone, by longest-suffix match
/// against each per-paradigm-group prediction DAWG. Score is the
/// matched paradigm's form count normalized against every other paradigm
/// tied on the same (longest) suffix length, so a suffix shared by many
/// productive paradigms spreads its confidence across them.
#[derive(Debug, Clone, Default)]
pub struct SuffixAnalyzer;

impl SuffixAnalyzer {
    pub fn parse(
        &self,
        word_lower: &str,
        dictionary: &Dictionary,
        profile: &LangProfile,
        seen: &mut SeenSet,
    ) -> Vec<Parse> {
        let mut out = Vec::new();
        for suffix_dawg in &dictionary.prediction_suffixes {
            let Some((_matched_suffix, entries)) = suffix_dawg.longest_suffix_match(word_lower) else {
                continue;
            };

            let popular: Vec<_> = entries
                .iter()
                .filter(|entry| entry.form_count as u64 >= profile.min_paradigm_popularity)
                .collect();
            if popular.is_empty() {
                continue;
            }
            let total: u64 = popular.iter().map(|entry| entry.form_count as u64).sum();
            if total == 0 {
                continue;
            }

            for entry in popular {
                let key = (
                    SmallString::<[u8; SMALLLEMMA]>::from(word_lower),
                    entry.paradigm_id,
                    entry.form_index,
                );
                if !seen.insert(key) {
                    continue;
                }
                let Ok(tag) = dictionary.build_tag_info(entry.paradigm_id, entry.form_index) else {
                    continue;
                };
                let Ok(stem) = dictionary.stem_of(word_lower, entry.paradigm_id, entry.form_index) else {
                    continue;
                };
                let normal_form = dictionary.build_normal_form(stem, entry.paradigm_id, word_lower);
                out.push(Parse {
                    word: word_lower.to_string(),
                    tag,
                    normal_form,
                    score: entry.form_count as f64 / total as f64,
                    methods_stack: [MethodFrame::SuffixPredict {
                        paradigm_id: entry.paradigm_id,
                        form_index: entry.form_index,
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
    fn parse_predicts_from_suffix_when_dictionary_misses() {
        let dictionary = tiny_dictionary();
        let profile = russian::profile();
        let mut seen = SeenSet::default();
        let unit = SuffixAnalyzer;
        let parses = unit.parse("бомбежка", &dictionary, &profile, &mut seen);
        assert!(parses.iter().all(|p| p.score > 0.0 && p.score <= 1.0));
    }

    #[test]
    fn parse_dedupes_against_seen_set() {
        let dictionary = tiny_dictionary();
        let profile = russian::profile();
        let mut seen = SeenSet::default();
        let unit = SuffixAnalyzer;
        let first = unit.parse("бомбежка", &dictionary, &profile, &mut seen);
        let second = unit.parse("бомбежка", &dictionary, &profile, &mut seen);
        if !first.is_empty() {
            assert!(second.is_empty());
        }
    }
}
