use smallstr::SmallString;

use crate::analyzer::dictionary::Dictionary;
use crate::analyzer::{MethodFrame, Parse, SeenSet, SMALLLEMMA};

/// Exact lookup in the words DAWG, honoring configured character
/// substitutions. Score = 1.0.
#[derive(Debug, Clone, Default)]
pub struct DictionaryAnalyzer;

impl DictionaryAnalyzer {
    pub fn parse(
        &self,
        word_lower: &str,
        dictionary: &Dictionary,
        substitutes: &[(char, char)],
        seen: &mut SeenSet,
    ) -> Vec<Parse> {
        let direct = dictionary.words.get_values(word_lower);
        if !direct.is_empty() {
            return emit(word_lower, word_lower, direct, dictionary, seen);
        }
        if substitutes.is_empty() {
            return Vec::new();
        }
        dictionary
            .words
            .similar_items(word_lower, substitutes)
            .into_iter()
            .flat_map(|(spelling, entries)| emit(word_lower, &spelling, &entries, dictionary, seen))
            .collect()
    }
}

/// `original` is what the caller asked to parse (kept on the returned
/// `Parse::word`); `matched` is the spelling actually present in the
/// dictionary (used to reconstruct the stem/normal form), which may differ
/// from `original` under a character substitution.
fn emit(
    original: &str,
    matched: &str,
    entries: &[crate::dawg::WordEntry],
    dictionary: &Dictionary,
    seen: &mut SeenSet,
) -> Vec<Parse> {
    let mut out = Vec::new();
    for entry in entries {
        let key = (
            SmallString::<[u8; SMALLLEMMA]>::from(matched),
            entry.paradigm_id,
            entry.form_index,
        );
        if !seen.insert(key) {
            continue;
        }
        let Ok(tag) = dictionary.build_tag_info(entry.paradigm_id, entry.form_index) else {
            continue;
        };
        let Ok(stem) = dictionary.stem_of(matched, entry.paradigm_id, entry.form_index) else {
            continue;
        };
        let normal_form = dictionary.build_normal_form(stem, entry.paradigm_id, matched);
        out.push(Parse {
            word: original.to_string(),
            tag,
            normal_form,
            score: 1.0,
            methods_stack: [MethodFrame::DictHit {
                paradigm_id: entry.paradigm_id,
                form_index: entry.form_index,
            }]
            .into(),
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::tiny_dictionary;

    #[test]
    fn parse_emits_dict_hit_for_known_word() {
        let dictionary = tiny_dictionary();
        let mut seen = SeenSet::default();
        let unit = DictionaryAnalyzer;
        let parses = unit.parse("кот", &dictionary, &[], &mut seen);
        assert!(!parses.is_empty());
        assert!(parses.iter().all(|p| p.score == 1.0));
        assert!(parses.iter().all(|p| matches!(p.terminal_frame(), MethodFrame::DictHit { .. })));
    }

    #[test]
    fn parse_dedupes_against_seen_set() {
        let dictionary = tiny_dictionary();
        let mut seen = SeenSet::default();
        let unit = DictionaryAnalyzer;
        let first = unit.parse("кот", &dictionary, &[], &mut seen);
        let second = unit.parse("кот", &dictionary, &[], &mut seen);
        assert!(!first.is_empty());
        assert!(second.is_empty());
    }
}
