//! Loader and owner of the on-disk dictionary bundle: metadata, gramtab,
//! suffix/prefix tables, paradigms, the words DAWG, the per-prefix
//! prediction-suffix DAWGs, and the optional `P(t|w)` DAWG.
//!
//! The *compiler* that produces this bundle from OpenCorpora XML is out of
//! scope; only the loader half survives here.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dawg::{ConditionalProbDistDawg, PredictionSuffixesDawg, WordsDawg};
use crate::errors::{ConfigurationError, CorruptDictionaryError, MopsErr, MopsResult};
use crate::morph::grammemes::{Grammem, Other};
use crate::morph::tag::Tag;

/// Major component of the bundle format this crate was built against.
/// A bundle whose `format_version` major differs is rejected; minor
/// mismatches are accepted.
pub const CURRENT_FORMAT_VERSION: &str = "2.4";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meta {
    pub format_version: String,
    pub language_code: String,
    pub gramtab_formats: HashMap<String, String>,
    pub paradigm_prefixes: Vec<String>,
    #[serde(default)]
    pub has_prob_dawg: bool,
}

impl Meta {
    fn load(path: &Path) -> MopsResult<Self> {
        let raw = read_json::<Vec<(String, serde_json::Value)>>(path)?;
        let mut format_version = None;
        let mut language_code = None;
        let mut gramtab_formats = HashMap::new();
        let mut paradigm_prefixes = Vec::new();
        let mut has_prob_dawg = false;

        for (key, value) in raw {
            match key.as_str() {
                "format_version" => format_version = value.as_str().map(str::to_owned),
                "language_code" => language_code = value.as_str().map(str::to_owned),
                "gramtab_formats" => {
                    gramtab_formats = serde_json::from_value(value).map_err(MopsErr::Serde)?
                }
                "compile_options" => {
                    if let Some(prefixes) = value.get("paradigm_prefixes") {
                        paradigm_prefixes =
                            serde_json::from_value(prefixes.clone()).map_err(MopsErr::Serde)?;
                    }
                }
                "P(t|w)" => has_prob_dawg = value.as_bool().unwrap_or(false),
                _ => {}
            }
        }

        let format_version = format_version.ok_or_else(|| {
            MopsErr::Corrupt(CorruptDictionaryError::LengthMismatch {
                file: "meta.json: format_version".to_string(),
            })
        })?;
        let language_code = language_code.unwrap_or_default();

        let found_major = format_version.split('.').next().unwrap_or("");
        let current_major = CURRENT_FORMAT_VERSION.split('.').next().unwrap_or("");
        if found_major != current_major {
            return Err(MopsErr::Configuration(
                ConfigurationError::IncompatibleFormatVersion {
                    found: format_version,
                    current: CURRENT_FORMAT_VERSION.to_string(),
                },
            ));
        }

        Ok(Meta {
            format_version,
            language_code,
            gramtab_formats,
            paradigm_prefixes,
            has_prob_dawg,
        })
    }
}

/// A single row of `grammemes.json`: `(name, parent, alias_latin, alias_latin_parent)`.
/// Carried forward for bundle introspection/validation; the grammeme set
/// itself is interned at compile time via the [`Grammem`] enum (see
/// DESIGN.md Open Question decisions), so this table is not otherwise
/// consulted at query time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrammemeMeta {
    pub name: String,
    pub parent: Option<String>,
    pub alias_latin: String,
    pub alias_latin_parent: Option<String>,
}

/// One lexeme's inflection template: fixed-length thirds of
/// suffix-ids/tag-ids/prefix-ids, one entry per form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paradigm {
    pub suffix_ids: Vec<u16>,
    pub tag_ids: Vec<u16>,
    pub prefix_ids: Vec<u16>,
}

impl Paradigm {
    pub fn form_count(&self) -> usize {
        self.suffix_ids.len()
    }

    fn from_flat(flat: &[u16]) -> MopsResult<Self> {
        if flat.len() % 3 != 0 {
            return Err(MopsErr::Corrupt(CorruptDictionaryError::BadParadigmLength(
                0,
                flat.len(),
            )));
        }
        let n = flat.len() / 3;
        Ok(Paradigm {
            suffix_ids: flat[0..n].to_vec(),
            tag_ids: flat[n..2 * n].to_vec(),
            prefix_ids: flat[2 * n..3 * n].to_vec(),
        })
    }
}

pub struct Dictionary {
    pub meta: Meta,
    pub grammemes: Vec<GrammemeMeta>,
    pub gramtab: Vec<Tag>,
    pub suffixes: Vec<String>,
    pub paradigms: Vec<Paradigm>,
    pub words: WordsDawg,
    pub prediction_suffixes: Vec<PredictionSuffixesDawg>,
    pub prob_dawg: Option<ConditionalProbDistDawg>,
}

impl Dictionary {
    /// Load every bundle file from `dir`.
    pub fn open<P: AsRef<Path>>(dir: P) -> MopsResult<Self> {
        let dir = dir.as_ref();
        let meta = Meta::load(&dir.join("meta.json"))?;

        let grammemes: Vec<GrammemeMeta> = read_json(&dir.join("grammemes.json"))?;

        let gramtab_file = meta
            .gramtab_formats
            .values()
            .next()
            .cloned()
            .unwrap_or_else(|| "gramtab-opencorpora-int.json".to_string());
        let tag_strings: Vec<String> = read_json(&dir.join(&gramtab_file))?;
        let gramtab = tag_strings
            .iter()
            .map(|s| parse_tag_string(s))
            .collect::<MopsResult<Vec<_>>>()?;

        let suffixes: Vec<String> = read_json(&dir.join("suffixes.json"))?;

        let paradigms = load_paradigms(&dir.join("paradigms.array"))?;

        let words = WordsDawg::open(&dir.join("words.dawg"), &dir.join("word_entries.bin"))?;

        let mut prediction_suffixes = Vec::with_capacity(meta.paradigm_prefixes.len());
        for i in 0..meta.paradigm_prefixes.len() {
            prediction_suffixes.push(PredictionSuffixesDawg::open(
                &dir.join(format!("prediction-suffixes-{i}.dawg")),
                &dir.join(format!("prediction_suffixes-{i}.bin")),
            )?);
        }

        let prob_dawg = if meta.has_prob_dawg {
            Some(ConditionalProbDistDawg::open(&dir.join("p_t_given_w.dawg"))?)
        } else {
            None
        };

        Ok(Dictionary {
            meta,
            grammemes,
            gramtab,
            suffixes,
            paradigms,
            words,
            prediction_suffixes,
            prob_dawg,
        })
    }

    fn paradigm(&self, paradigm_id: u16) -> MopsResult<&Paradigm> {
        self.paradigms.get(paradigm_id as usize).ok_or_else(|| {
            MopsErr::Corrupt(CorruptDictionaryError::ParadigmOutOfRange(
                paradigm_id,
                self.paradigms.len(),
            ))
        })
    }

    fn form(&self, paradigm_id: u16, form_index: u16) -> MopsResult<(u16, u16, u16)> {
        let paradigm = self.paradigm(paradigm_id)?;
        let idx = form_index as usize;
        if idx >= paradigm.form_count() {
            return Err(MopsErr::Corrupt(CorruptDictionaryError::FormOutOfRange(
                form_index,
                paradigm_id,
                paradigm.form_count(),
            )));
        }
        Ok((
            paradigm.suffix_ids[idx],
            paradigm.tag_ids[idx],
            paradigm.prefix_ids[idx],
        ))
    }

    pub fn suffix(&self, id: u16) -> &str {
        self.suffixes.get(id as usize).map(String::as_str).unwrap_or("")
    }

    pub fn prefix(&self, id: u16) -> &str {
        self.meta
            .paradigm_prefixes
            .get(id as usize)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// `gramtab[tag_ids[form_index]]` of the given paradigm.
    pub fn build_tag_info(&self, paradigm_id: u16, form_index: u16) -> MopsResult<Tag> {
        let (_, tag_id, _) = self.form(paradigm_id, form_index)?;
        self.gramtab.get(tag_id as usize).cloned().ok_or_else(|| {
            MopsErr::Corrupt(CorruptDictionaryError::ParadigmOutOfRange(
                tag_id,
                self.gramtab.len(),
            ))
        })
    }

    /// Reconstruct the stem of `word` under `(paradigm_id, form_index)` by
    /// stripping that form's prefix/suffix.
    pub fn stem_of<'w>(&self, word: &'w str, paradigm_id: u16, form_index: u16) -> MopsResult<&'w str> {
        let (suffix_id, _, prefix_id) = self.form(paradigm_id, form_index)?;
        let prefix = self.prefix(prefix_id);
        let suffix = self.suffix(suffix_id);
        let without_prefix = word.strip_prefix(prefix).unwrap_or(word);
        Ok(without_prefix.strip_suffix(suffix).unwrap_or(without_prefix))
    }

    /// Rebuild form 0 (the lemma) of `paradigm_id` given `stem`. Falls back
    /// to `fallback_word` if the paradigm has no forms at all.
    pub fn build_normal_form(&self, stem: &str, paradigm_id: u16, fallback_word: &str) -> String {
        match self.form(paradigm_id, 0) {
            Ok((suffix_id, _, prefix_id)) => {
                format!("{}{}{}", self.prefix(prefix_id), stem, self.suffix(suffix_id))
            }
            Err(_) => fallback_word.to_string(),
        }
    }

    /// `(prefix, tag, suffix)` for every form of `paradigm_id`.
    pub fn build_paradigm_info(&self, paradigm_id: u16) -> MopsResult<Vec<(String, Tag, String)>> {
        let paradigm = self.paradigm(paradigm_id)?;
        (0..paradigm.form_count() as u16)
            .map(|i| {
                let tag = self.build_tag_info(paradigm_id, i)?;
                let (suffix_id, _, prefix_id) = self.form(paradigm_id, i)?;
                Ok((self.prefix(prefix_id).to_string(), tag, self.suffix(suffix_id).to_string()))
            })
            .collect()
    }

    /// Ascending-order `(word, tag, normal_form, paradigm_id, form_index)`
    /// tuples for every known word starting with `prefix`.
    pub fn iter_known_words(
        &self,
        prefix: &str,
    ) -> MopsResult<Vec<(String, Tag, String, u16, u16)>> {
        let mut out = Vec::new();
        for word in self.words.keys(prefix) {
            for entry in self.words.get_values(&word) {
                let tag = self.build_tag_info(entry.paradigm_id, entry.form_index)?;
                let stem = self.stem_of(&word, entry.paradigm_id, entry.form_index)?;
                let normal_form = self.build_normal_form(stem, entry.paradigm_id, &word);
                out.push((word.clone(), tag, normal_form, entry.paradigm_id, entry.form_index));
            }
        }
        Ok(out)
    }

    /// Exact-or-substitution membership test.
    pub fn word_is_known(&self, word: &str, substitutes: Option<&[(char, char)]>) -> bool {
        if self.words.contains(word) {
            return true;
        }
        match substitutes {
            Some(map) => !self.words.similar_items(word, map).is_empty(),
            None => false,
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> MopsResult<T> {
    let bytes = std::fs::read(path).map_err(|error| MopsErr::File {
        file: path.to_path_buf(),
        error,
    })?;
    serde_json::from_slice(&bytes).map_err(MopsErr::Serde)
}

fn load_paradigms(path: &Path) -> MopsResult<Vec<Paradigm>> {
    let bytes = std::fs::read(path).map_err(|error| MopsErr::File {
        file: path.to_path_buf(),
        error,
    })?;
    if bytes.len() < 2 {
        return Ok(Vec::new());
    }
    let count = u16::from_le_bytes([bytes[0], bytes[1]]) as usize;
    let mut pos = 2usize;
    let mut paradigms = Vec::with_capacity(count);
    for _ in 0..count {
        let len = u16::from_le_bytes([bytes[pos], bytes[pos + 1]]) as usize;
        pos += 2;
        let mut flat = Vec::with_capacity(len);
        for _ in 0..len {
            flat.push(u16::from_le_bytes([bytes[pos], bytes[pos + 1]]));
            pos += 2;
        }
        paradigms.push(Paradigm::from_flat(&flat)?);
    }
    Ok(paradigms)
}

/// Parse a comma-separated canonical tag string (e.g. `"NOUN,anim,masc,sing,nomn"`)
/// into an ordered [`Tag`]. Unknown codes are a corrupt-dictionary error.
pub fn parse_tag_string(s: &str) -> MopsResult<Tag> {
    s.split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(|code| {
            grammeme_from_latin(code).ok_or_else(|| {
                MopsErr::Corrupt(CorruptDictionaryError::UnknownGrammeme(code.to_string()))
            })
        })
        .collect()
}

/// `Grammem` is `#[serde(untagged)]` over several enums, and `Other` ends in
/// a `#[serde(other)]` catch-all -- so any string the explicit `rename`
/// aliases don't recognize still deserializes successfully, as
/// `Grammem::Other(Other::Other)`, instead of failing. Reject that case
/// here so a genuinely unknown code surfaces as `UnknownGrammeme` rather
/// than silently becoming a meaningless catch-all grammeme.
fn grammeme_from_latin(code: &str) -> Option<Grammem> {
    let grammeme: Grammem =
        serde_json::from_value(serde_json::Value::String(code.to_string())).ok()?;
    match grammeme {
        Grammem::Other(Other::Other) => None,
        _ => Some(grammeme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morph::grammemes::{Case, Number, ParteSpeech};

    #[test]
    fn parse_tag_string_decodes_known_codes() {
        let tag = parse_tag_string("NOUN,sing,nomn").unwrap();
        assert!(tag.contains(&Grammem::ParteSpeech(ParteSpeech::Noun)));
        assert!(tag.contains(&Grammem::Number(Number::Singular)));
        assert!(tag.contains(&Grammem::Case(Case::Nominativus)));
    }

    #[test]
    fn parse_tag_string_rejects_unknown_code() {
        assert!(parse_tag_string("NOUN,bogus").is_err());
    }

    #[test]
    fn paradigm_from_flat_rejects_non_multiple_of_three() {
        assert!(Paradigm::from_flat(&[1, 2]).is_err());
    }

    #[test]
    fn paradigm_from_flat_splits_into_thirds() {
        let paradigm = Paradigm::from_flat(&[10, 11, 20, 21, 0, 0]).unwrap();
        assert_eq!(paradigm.suffix_ids, vec![10, 11]);
        assert_eq!(paradigm.tag_ids, vec![20, 21]);
        assert_eq!(paradigm.prefix_ids, vec![0, 0]);
    }
}
