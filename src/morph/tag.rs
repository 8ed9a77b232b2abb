//! Tag set algebra: a `Tag` is an ordered, deduplicated bag of [`Grammem`]s.
//!
//! Mirrors pymorphy2's `OpencorporaTag`: membership/subset tests, the
//! `updated_grammemes`/`fix_rare_cases` rewriting used by `inflect`, and the
//! Russian numeral agreement table used by `make_agree_with_number`.

use smallvec::SmallVec;

use crate::morph::grammemes::{Case, Grammem, GrammemeCategory, Number};

/// Small-buffer size for `Tag`: most Russian tags carry well under this many
/// grammemes, so the common case never spills to the heap.
pub const SMALLTAG: usize = 8;

pub type Tag = SmallVec<[Grammem; SMALLTAG]>;

/// Does `tag` contain `g`.
pub fn contains(tag: &[Grammem], g: Grammem) -> bool {
    tag.contains(&g)
}

/// Is every grammeme in `required` present in `tag`.
pub fn is_superset_of(tag: &[Grammem], required: &[Grammem]) -> bool {
    required.iter().all(|g| tag.contains(g))
}

/// `|tag ∩ other|`.
pub fn intersection_len(tag: &[Grammem], other: &[Grammem]) -> usize {
    tag.iter().filter(|g| other.contains(g)).count()
}

/// `|tag △ other|` (symmetric difference size).
pub fn symmetric_difference_len(tag: &[Grammem], other: &[Grammem]) -> usize {
    let only_tag = tag.iter().filter(|g| !other.contains(g)).count();
    let only_other = other.iter().filter(|g| !tag.contains(g)).count();
    only_tag + only_other
}

/// `similarity = |G ∩ T| − 0.1 · |G △ T|`, used by `get_lexeme`/`inflect` to
/// rank candidate forms.
pub fn similarity(g: &[Grammem], t: &[Grammem]) -> f64 {
    intersection_len(g, t) as f64 - 0.1 * symmetric_difference_len(g, t) as f64
}

/// Replace, within `tag`, any grammeme whose category also appears in
/// `required` with the `required` grammeme from that category; grammemes
/// whose category doesn't appear in `required` are kept as-is. At most one
/// grammeme per category ever survives, since a well-formed tag carries at
/// most one grammeme per category to begin with.
pub fn updated_grammemes(tag: &[Grammem], required: &[Grammem]) -> Tag {
    let mut out: Tag = tag
        .iter()
        .filter(|g| !required.iter().any(|r| r.category() == g.category()))
        .copied()
        .collect();
    out.extend(required.iter().copied());
    out
}

/// Russian numeral agreement table (spec: `|n| mod 100` in 11..=14 is always
/// genitive plural regardless of the last digit; otherwise keyed off `|n|
/// mod 10`).
pub fn numeral_agreement_grammemes(n: i64) -> Tag {
    let n = n.unsigned_abs();
    let mod100 = n % 100;
    let mod10 = n % 10;

    let (number, case) = if (11..=14).contains(&mod100) {
        (Number::Plural, Case::Genetivus)
    } else if mod10 == 1 {
        (Number::Singular, Case::Nominativus)
    } else if (2..=4).contains(&mod10) {
        (Number::Singular, Case::Genetivus)
    } else {
        (Number::Plural, Case::Genetivus)
    };

    Tag::from_iter([Grammem::Number(number), Grammem::Case(case)])
}

/// A single rare-case rewrite: if `from` is a subset of the required
/// grammeme set, replace it with `to` before retrying lexeme search.
pub struct RareCaseRule {
    pub from: &'static [Grammem],
    pub to: &'static [Grammem],
}

/// Apply the first matching rule in `table` to `required`, returning the
/// rewritten grammeme set unchanged if nothing matches.
pub fn fix_rare_cases(required: &[Grammem], table: &[RareCaseRule]) -> Tag {
    for rule in table {
        if rule.from.iter().all(|g| required.contains(g)) {
            let mut out: Tag = required
                .iter()
                .filter(|g| !rule.from.contains(g))
                .copied()
                .collect();
            out.extend(rule.to.iter().copied());
            return out;
        }
    }
    required.iter().copied().collect()
}

/// Convert a tag's grammemes to the pymorphy2/OpenCorpora Latin label form,
/// comma-joined in stored order.
pub fn cyr2lat(tag: &[Grammem]) -> String {
    tag.iter()
        .map(Grammem::latin)
        .collect::<Vec<_>>()
        .join(",")
}

/// Convert a tag's grammemes to their Cyrillic glosses, comma-joined.
pub fn lat2cyr(tag: &[Grammem]) -> String {
    tag.iter()
        .map(Grammem::cyrillic)
        .collect::<Vec<_>>()
        .join(",")
}

pub fn category_of(g: Grammem) -> GrammemeCategory {
    g.category()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morph::grammemes::{Gender, ParteSpeech};
    use test_case::test_case;

    #[test_case(1, Number::Singular, Case::Nominativus)]
    #[test_case(2, Number::Singular, Case::Genetivus)]
    #[test_case(3, Number::Singular, Case::Genetivus)]
    #[test_case(4, Number::Singular, Case::Genetivus)]
    #[test_case(5, Number::Plural, Case::Genetivus)]
    #[test_case(11, Number::Plural, Case::Genetivus)]
    #[test_case(12, Number::Plural, Case::Genetivus)]
    #[test_case(14, Number::Plural, Case::Genetivus)]
    #[test_case(21, Number::Singular, Case::Nominativus)]
    #[test_case(22, Number::Singular, Case::Genetivus)]
    #[test_case(111, Number::Plural, Case::Genetivus)]
    fn numeral_agreement_matches_russian_table(n: i64, number: Number, case: Case) {
        let tag = numeral_agreement_grammemes(n);
        assert!(tag.contains(&Grammem::Number(number)));
        assert!(tag.contains(&Grammem::Case(case)));
    }

    #[test]
    fn updated_grammemes_replaces_one_category_only() {
        let tag: Tag = Tag::from_iter([
            Grammem::ParteSpeech(ParteSpeech::Noun),
            Grammem::Case(Case::Nominativus),
            Grammem::Gender(Gender::Masculine),
        ]);
        let required: Tag = Tag::from_iter([Grammem::Case(Case::Genetivus)]);
        let updated = updated_grammemes(&tag, &required);

        assert!(updated.contains(&Grammem::Case(Case::Genetivus)));
        assert!(!updated.contains(&Grammem::Case(Case::Nominativus)));
        assert!(updated.contains(&Grammem::Gender(Gender::Masculine)));
        assert!(updated.contains(&Grammem::ParteSpeech(ParteSpeech::Noun)));
    }

    #[test]
    fn similarity_rewards_overlap_and_penalizes_difference() {
        let g: Tag = Tag::from_iter([Grammem::Case(Case::Nominativus)]);
        let t: Tag = Tag::from_iter([Grammem::Case(Case::Nominativus), Grammem::Gender(Gender::Masculine)]);
        assert!((similarity(&g, &t) - 0.9).abs() < 1e-9);
    }

    #[test]
    fn fix_rare_cases_falls_through_when_no_rule_matches() {
        let required: Tag = Tag::from_iter([Grammem::Case(Case::Nominativus)]);
        let fixed = fix_rare_cases(&required, &[]);
        assert_eq!(fixed.as_slice(), required.as_slice());
    }
}
