//! Morphological analyzer and inflection engine for inflected natural
//! languages (primarily Russian): given a surface word form, returns every
//! plausible morphological parse (lemma, grammatical tag, score) and
//! inflects a parse to a requested set of grammemes.
//!
//! This crate is the parsing/inflection *engine* only: the finite-state
//! dictionary automaton, the paradigm/suffix indirection, the unit
//! pipeline, and the probability re-ranker. Compiling a dictionary bundle
//! from OpenCorpora XML is out of scope; [`MorphAnalyzer::open`] only
//! loads an already-compiled bundle (see `DESIGN.md`).

pub(crate) mod analyzer;
/// Specialized finite-state automata backing the dictionary bundle: words,
/// reversed-suffix predictions, and the `P(t|w)` table.
pub mod dawg;
pub mod errors;
/// Грамматические структуры языка, используемые анализатором: интернированные
/// граммемы, операции над тегами.
pub mod morph;
/// Языковые профили: порядок юнит-пайплайна, списки префиксов/частиц,
/// таблица `fix_rare_cases`.
pub mod lang;

#[cfg(test)]
pub(crate) mod test_support;

use std::env;
use std::path::{Path, PathBuf};

use allocative::Allocative;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub use analyzer::estimator;
pub use analyzer::Dictionary;
pub use analyzer::{MethodFrame, MethodsStack, Parse, RecognizerKind};
pub use analyzer::pretty_display::ParsedWords;
pub use analyzer::units::AnalyzerUnit;
use errors::{ConfigurationError, MopsErr, MopsResult};
use lang::LangProfile;
pub use morph::grammemes::Grammem;
pub use morph::tag::Tag;

/// Name of the environment variable consulted for a default dictionary
/// bundle directory when neither an explicit path nor a language code is
/// supplied to [`MorphAnalyzer::open_with_options`].
pub const DICT_PATH_ENV_VAR: &str = "MORPH_RS_DICT_PATH";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Allocative)]
/// Поддерживаемые словарные языки. Только Russian загружает реальный
/// языковой профиль сегодня; остальные значения зарезервированы.
pub enum Language {
    #[default]
    Russian,
}

impl Language {
    fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "ru" | "rus" | "russian" => Some(Language::Russian),
            _ => None,
        }
    }
}

/// Which re-ranking strategy [`MorphAnalyzer::parse`] applies after the
/// unit pipeline runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EstimatorMode {
    /// Use the bundle's `P(t|w)` table when present, otherwise fall back to
    /// score normalization. This is the default.
    #[default]
    Auto,
    /// Never re-rank; return units' raw scores in pipeline order.
    Disabled,
}

/// Construction-time configuration. All fields are optional; omitted
/// fields fall back to the language's default profile.
#[derive(Default)]
pub struct MorphAnalyzerOptions {
    pub language: Option<Language>,
    pub units: Option<Vec<lang::UnitGroup>>,
    pub char_substitutions: Option<&'static [(char, char)]>,
    pub estimator: EstimatorMode,
}

/// Owns the loaded dictionary bundle, the bound unit pipeline, and the
/// probability re-ranking mode. Safe to share across threads for reads:
/// every field is read-only after construction.
pub struct MorphAnalyzer {
    pub dictionary: Dictionary,
    profile: LangProfile,
    language: Language,
    estimator: EstimatorMode,
}

impl MorphAnalyzer {
    /// Opens a dictionary bundle directory, inferring the language from
    /// `meta.json`.
    pub fn open<P: AsRef<Path>>(path: P) -> MopsResult<Self> {
        Self::open_with_options(Some(path.as_ref().to_path_buf()), MorphAnalyzerOptions::default())
    }

    /// Opens a dictionary bundle with explicit construction options. `path`
    /// is resolved first against the argument, then against
    /// [`DICT_PATH_ENV_VAR`]; a language code alone does not
    /// locate an on-disk bundle beyond that env var (distribution discovery
    /// is out of scope, see DESIGN.md).
    pub fn open_with_options(
        path: Option<PathBuf>,
        options: MorphAnalyzerOptions,
    ) -> MopsResult<Self> {
        let resolved = match path {
            Some(p) => p,
            None => discover_dictionary(options.language)?,
        };

        let dictionary = Dictionary::open(&resolved)?;

        let declared_language = Language::from_code(&dictionary.meta.language_code);
        let language = match (options.language, declared_language) {
            (Some(requested), Some(declared)) if requested != declared => {
                warn!(
                    "requested language {requested:?} disagrees with dictionary language {declared:?}; using the dictionary's"
                );
                declared
            }
            (Some(requested), None) => {
                warn!("dictionary declares no recognizable language; assuming {requested:?}");
                requested
            }
            (None, Some(declared)) => declared,
            (None, None) => {
                warn!("dictionary declares no recognizable language and none was requested; assuming default");
                Language::default()
            }
            (Some(_), Some(declared)) => declared,
        };

        let mut profile = LangProfile::for_language(language);
        if let Some(units) = options.units {
            profile.pipeline = units;
        }
        if let Some(substitutions) = options.char_substitutions {
            profile.char_substitutions = substitutions;
        }

        debug!(language = ?language, words = "loaded", "MorphAnalyzer constructed");

        Ok(MorphAnalyzer {
            dictionary,
            profile,
            language,
            estimator: options.estimator,
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub(crate) fn profile(&self) -> &LangProfile {
        &self.profile
    }

    /// All plausible parses of `word`, ranked.
    pub fn parse(&self, word: &str) -> Vec<Parse> {
        let word_lower = word.to_lowercase();
        let parses = self.run_pipeline(word, &word_lower);
        match self.estimator {
            EstimatorMode::Auto => estimator::rerank(&self.dictionary, &word_lower, parses),
            EstimatorMode::Disabled => parses,
        }
    }

    /// Same as [`Self::parse`], but wrapped in the `Display`-able
    /// [`ParsedWords`] collection.
    pub fn parse_pretty(&self, word: &str) -> ParsedWords {
        ParsedWords(self.parse(word))
    }

    /// Same as [`Self::parse`], but returns each result as a plain tuple
    /// `(word, canonical_tag_string, normal_form, score)` instead of a
    /// [`Parse`], for callers that don't need the methods stack.
    pub fn parse_tuples(&self, word: &str) -> Vec<(String, String, String, f64)> {
        self.parse(word)
            .into_iter()
            .map(|p| (p.word.clone(), morph::tag::cyr2lat(&p.tag), p.normal_form.clone(), p.score))
            .collect()
    }

    /// Every distinct tag reachable for `word`, ranked by `P(t|w)` when
    /// available.
    pub fn tag(&self, word: &str) -> Vec<Tag> {
        let word_lower = word.to_lowercase();
        let mut tags = Vec::new();
        for parse in self.run_pipeline(word, &word_lower) {
            if !tags.contains(&parse.tag) {
                tags.push(parse.tag);
            }
        }
        match self.estimator {
            EstimatorMode::Auto => estimator::rerank_tags(&self.dictionary, &word_lower, tags),
            EstimatorMode::Disabled => tags,
        }
    }

    /// Every distinct normal form reachable for `word`.
    pub fn normal_forms(&self, word: &str) -> Vec<String> {
        let mut forms = Vec::new();
        for parse in self.parse(word) {
            if !forms.contains(&parse.normal_form) {
                forms.push(parse.normal_form);
            }
        }
        forms
    }

    /// Is `word` present in the dictionary?
    /// `strict = true` requires exact membership; `strict = false` (the
    /// usual case) also accepts any spelling reachable through the
    /// configured character substitutions (e.g. `ё`/`е`).
    pub fn word_is_known(&self, word: &str, strict: bool) -> bool {
        let word_lower = word.to_lowercase();
        if strict {
            self.dictionary.words.contains(&word_lower)
        } else {
            self.dictionary
                .word_is_known(&word_lower, Some(self.profile.char_substitutions))
        }
    }

    /// Ascending-order dictionary-rooted parses for every known word
    /// starting with `prefix`.
    pub fn iter_known_word_parses(&self, prefix: &str) -> MopsResult<Vec<Parse>> {
        self.dictionary
            .iter_known_words(prefix)
            .map(|entries| {
                entries
                    .into_iter()
                    .map(|(word, tag, normal_form, paradigm_id, form_index)| Parse {
                        word,
                        tag,
                        normal_form,
                        score: 1.0,
                        methods_stack: [MethodFrame::DictHit {
                            paradigm_id,
                            form_index,
                        }]
                        .into(),
                    })
                    .collect()
            })
    }

    /// Every form of `parse`'s paradigm.
    pub fn get_lexeme(&self, parse: &Parse) -> MopsResult<Vec<Parse>> {
        parse.get_lexeme(&self.dictionary)
    }

    /// Form 0 of `parse`'s paradigm.
    pub fn normalized(&self, parse: &Parse) -> MopsResult<Parse> {
        parse.normalized(&self.dictionary)
    }

    /// Inflects `parse` to `required`:
    /// 1. Enumerate the lexeme.
    /// 2. Keep forms whose tag is a superset of `required`.
    /// 3. If none survive, retry with `fix_rare_cases(required)`.
    /// 4. Among survivors, pick the one maximizing
    ///    `similarity = |G ∩ T| − 0.1·|G △ T|`, `G = updated_grammemes(parse.tag, required)`.
    ///    Ties keep the first (input order).
    pub fn inflect(&self, parse: &Parse, required: &[Grammem]) -> Option<Parse> {
        let lexeme = self.get_lexeme(parse).ok()?;

        let candidates = lexeme
            .iter()
            .filter(|p| morph::tag::is_superset_of(&p.tag, required))
            .collect::<Vec<_>>();

        let (effective_required, candidates) = if candidates.is_empty() {
            let fixed = morph::tag::fix_rare_cases(required, self.profile.fix_rare_cases_table);
            let retry: Vec<_> = lexeme
                .iter()
                .filter(|p| morph::tag::is_superset_of(&p.tag, &fixed))
                .collect();
            (fixed, retry)
        } else {
            (required.iter().copied().collect(), candidates)
        };

        if candidates.is_empty() {
            return None;
        }

        let target_grammemes = morph::tag::updated_grammemes(&parse.tag, &effective_required);

        let mut best: Option<(&Parse, f64)> = None;
        for candidate in candidates {
            let score = morph::tag::similarity(&target_grammemes, &candidate.tag);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((candidate, score)),
            }
        }

        best.map(|(p, _)| p.clone())
    }

    /// Inflects `parse` to agree with the Russian numeral `n`.
    pub fn make_agree_with_number(&self, parse: &Parse, n: i64) -> Option<Parse> {
        let required = morph::tag::numeral_agreement_grammemes(n);
        self.inflect(parse, &required)
    }

    /// Latin grammeme labels for `tag`, comma-joined.
    pub fn cyr2lat(&self, tag: &Tag) -> String {
        morph::tag::cyr2lat(tag)
    }

    /// Cyrillic grammeme glosses for `tag`, comma-joined; despite the name,
    /// both directions read from the same interned [`Grammem`] table, see
    /// DESIGN.md.
    pub fn lat2cyr(&self, tag: &Tag) -> String {
        morph::tag::lat2cyr(tag)
    }

    /// Accessor for tag-level introspection helpers.
    pub fn tag_class(&self) -> TagClass {
        TagClass
    }
}

/// Thin accessor bundling grammeme-introspection helpers that don't need a
/// loaded dictionary. Grammemes are
/// interned at compile time via the [`Grammem`] enum rather than at
/// dictionary-load time (see DESIGN.md Open Question decisions), so this
/// struct carries no state of its own.
#[derive(Debug, Clone, Copy)]
pub struct TagClass;

impl TagClass {
    pub fn category_of(&self, g: Grammem) -> morph::grammemes::GrammemeCategory {
        morph::tag::category_of(g)
    }

    pub fn part_of_speech(&self, tag: &Tag) -> Option<morph::grammemes::ParteSpeech> {
        Grammem::pos_in_tag(tag)
    }
}

/// Resolves the default dictionary bundle directory when the caller
/// supplied neither a path nor one was implied. Full
/// distribution discovery by language code is out of scope; only the
/// environment variable lookup is implemented.
fn discover_dictionary(language: Option<Language>) -> MopsResult<PathBuf> {
    match env::var_os(DICT_PATH_ENV_VAR) {
        Some(path) => Ok(PathBuf::from(path)),
        None => Err(MopsErr::Configuration(
            ConfigurationError::NoDictionaryDiscoverable(language.map(|l| format!("{l:?}"))),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morph::grammemes::{Case, Number};
    use crate::test_support::tiny_dictionary;

    /// A `MorphAnalyzer` bound to the in-memory `tiny_dictionary` fixture,
    /// bypassing `open`/`open_with_options` (no bundle directory on disk).
    fn analyzer() -> MorphAnalyzer {
        MorphAnalyzer {
            dictionary: tiny_dictionary(),
            profile: LangProfile::for_language(Language::Russian),
            language: Language::Russian,
            estimator: EstimatorMode::Auto,
        }
    }

    #[test]
    fn parse_known_word_is_known_with_positive_score() {
        let parses = analyzer().parse("кот");
        assert!(!parses.is_empty());
        assert!(parses[0].is_known());
        assert!(parses[0].score > 0.0);
    }

    #[test]
    fn parse_unknown_word_falls_back_to_suffix_prediction() {
        let parses = analyzer().parse("сковорода");
        assert!(!parses.is_empty());
        assert!(parses.iter().all(|p| !p.is_known()));
    }

    #[test]
    fn word_is_known_strict_requires_exact_spelling() {
        let analyzer = analyzer();
        assert!(analyzer.word_is_known("кот", true));
        assert!(!analyzer.word_is_known("котик", true));
    }

    #[test]
    fn make_agree_with_number_matches_russian_table() {
        let analyzer = analyzer();
        let parse = &analyzer.parse("кот")[0];
        assert_eq!(analyzer.make_agree_with_number(parse, 1).unwrap().word, "кот");
        assert_eq!(analyzer.make_agree_with_number(parse, 2).unwrap().word, "кота");
        assert_eq!(analyzer.make_agree_with_number(parse, 5).unwrap().word, "котов");
    }

    #[test]
    fn inflect_to_plural_genitive() {
        let analyzer = analyzer();
        let parse = &analyzer.parse("кот")[0];
        let required = [Grammem::Number(Number::Plural), Grammem::Case(Case::Genetivus)];
        let inflected = analyzer.inflect(parse, &required).expect("inflection exists");
        assert_eq!(inflected.word, "котов");
    }

    #[test]
    fn inflect_is_idempotent_modulo_score() {
        let analyzer = analyzer();
        let parse = analyzer.parse("кот").into_iter().next().unwrap();
        let required: Vec<Grammem> = parse.tag.iter().copied().collect();
        let inflected = analyzer.inflect(&parse, &required).expect("self-inflection exists");
        assert_eq!(inflected.word, parse.word);
        assert_eq!(inflected.tag, parse.tag);
    }

    #[test]
    fn normalized_round_trips_to_form_zero() {
        let analyzer = analyzer();
        let parse = &analyzer.parse("кот")[0];
        let normalized = analyzer.normalized(parse).unwrap();
        assert_eq!(normalized.normal_form, parse.normal_form);
        assert_eq!(normalized.word, "кот");
    }

    #[test]
    fn get_lexeme_shares_one_paradigm_and_is_stable_from_any_member() {
        let analyzer = analyzer();
        let parse = &analyzer.parse("кот")[0];
        let lexeme = analyzer.get_lexeme(parse).unwrap();
        assert_eq!(lexeme.len(), 12);
        let from_other_member = analyzer.get_lexeme(&lexeme[7]).unwrap();
        let mut a: Vec<_> = lexeme.iter().map(|p| p.word.clone()).collect();
        let mut b: Vec<_> = from_other_member.iter().map(|p| p.word.clone()).collect();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }

    #[test]
    fn normal_forms_deduplicates() {
        let forms = analyzer().normal_forms("кот");
        assert_eq!(forms, vec!["кот".to_string()]);
    }

    #[test]
    fn cyr2lat_and_lat2cyr_read_from_the_same_table() {
        let analyzer = analyzer();
        let parse = &analyzer.parse("кот")[0];
        assert!(analyzer.cyr2lat(&parse.tag).contains("NOUN"));
        assert!(!analyzer.lat2cyr(&parse.tag).is_empty());
    }
}
