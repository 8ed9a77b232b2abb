//! In-memory dictionary fixture for unit/integration tests. Compiling a
//! bundle from OpenCorpora XML is out of scope for this crate (see
//! DESIGN.md), so every field of [`Dictionary`] is constructed directly
//! rather than round-tripped through the on-disk bundle format; the loader
//! itself (`Dictionary::open`) is exercised separately against hand-built
//! bundle files.

use crate::analyzer::dictionary::{Dictionary, GrammemeMeta, Meta, Paradigm};
use crate::dawg::{ConditionalProbDistDawg, PredictionEntry, PredictionSuffixesDawg, WordEntry, WordsDawg};
use crate::morph::grammemes::{Animacy, Case, Gender, Grammem, Number, ParteSpeech};
use crate::morph::tag::Tag;

/// A tiny Russian bundle: one masculine animate о-stem noun paradigm
/// ("кот", ids 0..=11) covering every case in both numbers, plus one
/// degenerate feminine paradigm (id 12) reachable only through suffix
/// prediction, so `SuffixAnalyzer` has something to find for
/// out-of-vocabulary words ending in `-а`.
pub(crate) fn tiny_dictionary() -> Dictionary {
    let meta = Meta {
        format_version: "2.4".to_string(),
        language_code: "ru".to_string(),
        gramtab_formats: Default::default(),
        paradigm_prefixes: vec!["".to_string(), "по".to_string(), "наи".to_string()],
        has_prob_dawg: false,
    };

    let grammemes: Vec<GrammemeMeta> = Vec::new();

    let masc_tag = |number: Number, case: Case| -> Tag {
        [
            Grammem::ParteSpeech(ParteSpeech::Noun),
            Grammem::Animacy(Animacy::Animate),
            Grammem::Gender(Gender::Masculine),
            Grammem::Number(number),
            Grammem::Case(case),
        ]
        .into()
    };

    let gramtab: Vec<Tag> = vec![
        masc_tag(Number::Singular, Case::Nominativus), // 0
        masc_tag(Number::Singular, Case::Genetivus),   // 1
        masc_tag(Number::Singular, Case::Dativus),     // 2
        masc_tag(Number::Singular, Case::Accusativus), // 3
        masc_tag(Number::Singular, Case::Ablativus),   // 4
        masc_tag(Number::Singular, Case::Locativus),   // 5
        masc_tag(Number::Plural, Case::Nominativus),   // 6
        masc_tag(Number::Plural, Case::Genetivus),     // 7
        masc_tag(Number::Plural, Case::Dativus),       // 8
        masc_tag(Number::Plural, Case::Accusativus),   // 9
        masc_tag(Number::Plural, Case::Ablativus),     // 10
        masc_tag(Number::Plural, Case::Locativus),     // 11
        [
            Grammem::ParteSpeech(ParteSpeech::Noun),
            Grammem::Gender(Gender::Feminine),
            Grammem::Number(Number::Singular),
            Grammem::Case(Case::Nominativus),
        ]
        .into(), // 12
    ];

    // suffixes.json: index 0 = "", 1 = "а", 2 = "у", 3 = "ом", 4 = "е",
    // 5 = "ы", 6 = "ов", 7 = "ам", 8 = "ами", 9 = "ах".
    let suffixes = vec![
        "".to_string(),
        "а".to_string(),
        "у".to_string(),
        "ом".to_string(),
        "е".to_string(),
        "ы".to_string(),
        "ов".to_string(),
        "ам".to_string(),
        "ами".to_string(),
        "ах".to_string(),
    ];

    let kot_paradigm = Paradigm {
        // nomn gent datv accs ablt loct | nomn gent datv accs ablt loct
        suffix_ids: vec![0, 1, 2, 1, 3, 4, 5, 6, 7, 6, 8, 9],
        tag_ids: (0..12).collect(),
        prefix_ids: vec![0; 12],
    };
    let fem_paradigm = Paradigm {
        suffix_ids: vec![1],
        tag_ids: vec![12],
        prefix_ids: vec![0],
    };

    let paradigms = vec![kot_paradigm, fem_paradigm];

    let words = WordsDawg::from_sorted_entries(vec![(
        "кот".to_string(),
        vec![WordEntry {
            paradigm_id: 0,
            form_index: 0,
        }],
    )])
    .expect("tiny words dawg builds");

    let prediction_suffixes = vec![
        PredictionSuffixesDawg::from_sorted_entries(vec![(
            "а".to_string(),
            vec![PredictionEntry {
                form_count: 5,
                paradigm_id: 1,
                form_index: 0,
            }],
        )])
        .expect("tiny prediction dawg builds"),
        PredictionSuffixesDawg::from_sorted_entries(Vec::new()).expect("empty prediction dawg builds"),
        PredictionSuffixesDawg::from_sorted_entries(Vec::new()).expect("empty prediction dawg builds"),
    ];

    let prob_dawg: Option<ConditionalProbDistDawg> = None;

    Dictionary {
        meta,
        grammemes,
        gramtab,
        suffixes,
        paradigms,
        words,
        prediction_suffixes,
        prob_dawg,
    }
}
