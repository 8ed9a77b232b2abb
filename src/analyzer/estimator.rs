//! Probability-based re-ranking of a unit's raw parses.
//!
//! When the dictionary bundle carries a `P(t|w)` table, scores are replaced
//! by the stored conditional probability and the result is sorted
//! descending; otherwise the unit scores are kept, only renormalized to sum
//! to one, and the original relative order is preserved.

use std::cmp::Ordering;

use crate::analyzer::dictionary::Dictionary;
use crate::analyzer::Parse;
use crate::morph::tag::{cyr2lat, Tag};

/// Re-scores `parses` in place order.
pub fn rerank(dictionary: &Dictionary, word_lower: &str, mut parses: Vec<Parse>) -> Vec<Parse> {
    let Some(prob_dawg) = &dictionary.prob_dawg else {
        return normalize_by_score(parses);
    };

    let probs: Vec<f64> = parses
        .iter()
        .map(|p| prob_dawg.prob(word_lower, &cyr2lat(&p.tag)).unwrap_or(0.0))
        .collect();
    let total: f64 = probs.iter().sum();

    if total == 0.0 {
        return normalize_by_score(parses);
    }

    for (parse, prob) in parses.iter_mut().zip(probs) {
        parse.score = prob;
    }
    parses.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    parses
}

/// No `P(t|w)` entry matched any candidate: keep scores' relative order,
/// just renormalize them to sum to one. Unit scores are never negative, so
/// the sum is always >= 0.
fn normalize_by_score(mut parses: Vec<Parse>) -> Vec<Parse> {
    let total: f64 = parses.iter().map(|p| p.score).sum();
    if total > 0.0 {
        for parse in &mut parses {
            parse.score /= total;
        }
    }
    parses
}

/// Sorts a plain tag list by `P(t|w)` descending, stable on ties.
pub fn rerank_tags(dictionary: &Dictionary, word_lower: &str, mut tags: Vec<Tag>) -> Vec<Tag> {
    let Some(prob_dawg) = &dictionary.prob_dawg else {
        return tags;
    };
    tags.sort_by(|a, b| {
        let pa = prob_dawg.prob(word_lower, &cyr2lat(a)).unwrap_or(0.0);
        let pb = prob_dawg.prob(word_lower, &cyr2lat(b)).unwrap_or(0.0);
        pb.partial_cmp(&pa).unwrap_or(Ordering::Equal)
    });
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::MethodFrame;
    use crate::morph::grammemes::{Case, Grammem, Number, ParteSpeech};
    use crate::test_support::tiny_dictionary;

    fn parse(tag: Tag, score: f64) -> Parse {
        Parse {
            word: "кот".into(),
            tag,
            normal_form: "кот".into(),
            score,
            methods_stack: [MethodFrame::DictHit {
                paradigm_id: 0,
                form_index: 0,
            }]
            .into(),
        }
    }

    #[test]
    fn falls_back_to_score_normalization_without_prob_dawg() {
        let dictionary = tiny_dictionary();
        let tag1: Tag = [Grammem::ParteSpeech(ParteSpeech::Noun)].into();
        let tag2: Tag = [Grammem::ParteSpeech(ParteSpeech::Verb)].into();
        let parses = vec![parse(tag1, 0.5), parse(tag2, 0.5)];
        let reranked = rerank(&dictionary, "кот", parses);
        let total: f64 = reranked.iter().map(|p| p.score).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn normalize_preserves_order() {
        let tag1: Tag = [
            Grammem::ParteSpeech(ParteSpeech::Noun),
            Grammem::Case(Case::Nominativus),
            Grammem::Number(Number::Singular),
        ]
        .into();
        let tag2: Tag = [Grammem::ParteSpeech(ParteSpeech::Verb)].into();
        let parses = vec![parse(tag1, 0.8), parse(tag2, 0.2)];
        let normalized = normalize_by_score(parses);
        assert!(normalized[0].score > normalized[1].score);
    }
}
