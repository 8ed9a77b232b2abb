//! Minimal acyclic deterministic finite-state automata (DAWGs), specialized
//! for the three shapes the dictionary bundle needs: word -> list of
//! `(paradigm_id, form_index)`, reversed-suffix -> list of predicted forms,
//! and word -> `P(tag|word)`.
//!
//! `fst::Map<Vec<u8>>` only stores a single `u64` per key, so each
//! specialization pairs a map (key -> row id) with a side table (row id ->
//! payload).

use std::path::Path;

use fst::automaton::{Automaton, Str};
use fst::{IntoStreamer, Map, Streamer};

use crate::errors::{MopsErr, MopsResult};

fn open_map(path: &Path) -> MopsResult<Map<Vec<u8>>> {
    let buf = std::fs::read(path).map_err(|error| MopsErr::File {
        file: path.to_path_buf(),
        error,
    })?;
    Map::new(buf).map_err(MopsErr::FSTMap)
}

/// `(paradigm_id, form_index)`, the payload of a single dictionary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordEntry {
    pub paradigm_id: u16,
    pub form_index: u16,
}

/// word -> `Vec<WordEntry>`. The fst value is a row id into `rows`, so a
/// single word can carry more than one `(paradigm_id, form_index)` pair.
pub struct WordsDawg {
    map: Map<Vec<u8>>,
    rows: Vec<Vec<WordEntry>>,
}

impl WordsDawg {
    pub fn open(dawg_path: &Path, rows_path: &Path) -> MopsResult<Self> {
        let map = open_map(dawg_path)?;
        let bytes = std::fs::read(rows_path).map_err(|error| MopsErr::File {
            file: rows_path.to_path_buf(),
            error,
        })?;
        Ok(Self {
            map,
            rows: decode_word_rows(&bytes),
        })
    }

    /// Build an in-memory instance from pre-sorted `(word, entries)` pairs,
    /// used by test fixtures and by callers embedding a small bundled
    /// dictionary without going through the on-disk layout.
    pub fn from_sorted_entries(entries: Vec<(String, Vec<WordEntry>)>) -> MopsResult<Self> {
        let mut builder = fst::MapBuilder::memory();
        let mut rows = Vec::with_capacity(entries.len());
        for (row_id, (word, row)) in entries.into_iter().enumerate() {
            builder
                .insert(word.as_bytes(), row_id as u64)
                .map_err(MopsErr::FSTMap)?;
            rows.push(row);
        }
        let bytes = builder.into_inner().map_err(MopsErr::FSTMap)?;
        Ok(Self {
            map: Map::new(bytes).map_err(MopsErr::FSTMap)?,
            rows,
        })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.map.get(word.as_bytes()).is_some()
    }

    /// Every `(paradigm_id, form_index)` pair stored under `word`, empty
    /// if the word is unknown.
    pub fn get_values(&self, word: &str) -> &[WordEntry] {
        match self.map.get(word.as_bytes()) {
            Some(row_id) => self
                .rows
                .get(row_id as usize)
                .map(Vec::as_slice)
                .unwrap_or(&[]),
            None => &[],
        }
    }

    /// Ascending-order iteration over every known word starting with
    /// `prefix` (empty prefix enumerates the whole dictionary).
    pub fn keys(&self, prefix: &str) -> Vec<String> {
        let aut = Str::new(prefix).starts_with();
        let mut stream = self.map.search(aut).into_stream();
        let mut out = Vec::new();
        while let Some((key, _)) = stream.next() {
            out.push(String::from_utf8_lossy(key).into_owned());
        }
        out
    }

    /// Look up `word` under every substitution allowed by `replace_map`
    /// (e.g. `ё` -> `е`), in addition to the literal spelling. Returns
    /// `(matched_spelling, entries)` pairs for every spelling that hits.
    ///
    /// `fst::Map` has no built-in notion of character classes, so rather
    /// than compiling a custom `Automaton` this enumerates the (small)
    /// substitution product directly -- replace maps in this crate never
    /// exceed a handful of letters, so the product stays small.
    pub fn similar_items(
        &self,
        word: &str,
        replace_map: &[(char, char)],
    ) -> Vec<(String, Vec<WordEntry>)> {
        let mut out = Vec::new();
        for candidate in compile_replaces(word, replace_map) {
            let values = self.get_values(&candidate);
            if !values.is_empty() {
                out.push((candidate, values.to_vec()));
            }
        }
        out
    }
}

/// Every spelling reachable from `word` by independently substituting each
/// character present in `replace_map`, including the identity spelling.
pub fn compile_replaces(word: &str, replace_map: &[(char, char)]) -> Vec<String> {
    let mut variants = vec![String::new()];
    for ch in word.chars() {
        let mut next = Vec::with_capacity(variants.len() * 2);
        for variant in &variants {
            next.push(format!("{variant}{ch}"));
        }
        if let Some((_, to)) = replace_map.iter().find(|(from, _)| *from == ch) {
            for variant in &variants {
                next.push(format!("{variant}{to}"));
            }
        }
        variants = next;
    }
    variants.sort();
    variants.dedup();
    variants
}

fn decode_word_rows(bytes: &[u8]) -> Vec<Vec<WordEntry>> {
    let mut rows = Vec::new();
    let mut pos = 0usize;
    while pos + 2 <= bytes.len() {
        let count = u16::from_le_bytes([bytes[pos], bytes[pos + 1]]) as usize;
        pos += 2;
        let mut row = Vec::with_capacity(count);
        for _ in 0..count {
            let paradigm_id = u16::from_le_bytes([bytes[pos], bytes[pos + 1]]);
            let form_index = u16::from_le_bytes([bytes[pos + 2], bytes[pos + 3]]);
            row.push(WordEntry {
                paradigm_id,
                form_index,
            });
            pos += 4;
        }
        rows.push(row);
    }
    rows
}

/// A predicted form reached through suffix analysis: `form_count` is the
/// number of distinct word forms this paradigm produces with the matched
/// suffix (used to normalize prediction confidence).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PredictionEntry {
    pub form_count: u16,
    pub paradigm_id: u16,
    pub form_index: u16,
}

/// reversed(suffix) -> `Vec<PredictionEntry>`, one instance per
/// paradigm-prefix id, keyed by reversed suffix so longest-suffix-match
/// degrades to a shrinking range scan.
pub struct PredictionSuffixesDawg {
    map: Map<Vec<u8>>,
    rows: Vec<Vec<PredictionEntry>>,
}

impl PredictionSuffixesDawg {
    /// Build an in-memory instance from pre-sorted `(reversed_suffix,
    /// entries)` pairs.
    pub fn from_sorted_entries(entries: Vec<(String, Vec<PredictionEntry>)>) -> MopsResult<Self> {
        let mut builder = fst::MapBuilder::memory();
        let mut rows = Vec::with_capacity(entries.len());
        for (row_id, (key, row)) in entries.into_iter().enumerate() {
            builder
                .insert(key.as_bytes(), row_id as u64)
                .map_err(MopsErr::FSTMap)?;
            rows.push(row);
        }
        let bytes = builder.into_inner().map_err(MopsErr::FSTMap)?;
        Ok(Self {
            map: Map::new(bytes).map_err(MopsErr::FSTMap)?,
            rows,
        })
    }

    pub fn open(dawg_path: &Path, rows_path: &Path) -> MopsResult<Self> {
        let map = open_map(dawg_path)?;
        let bytes = std::fs::read(rows_path).map_err(|error| MopsErr::File {
            file: rows_path.to_path_buf(),
            error,
        })?;
        Ok(Self {
            map,
            rows: decode_prediction_rows(&bytes),
        })
    }

    /// Longest suffix of `word_lower` (tried from the full reversed word
    /// down to a single trailing character) present as a key; `None` if no
    /// suffix of any length is known.
    pub fn longest_suffix_match(&self, word_lower: &str) -> Option<(String, &[PredictionEntry])> {
        let reversed: String = word_lower.chars().rev().collect();
        let char_count = reversed.chars().count();
        for take in (1..=char_count).rev() {
            let key: String = reversed.chars().take(take).collect();
            if let Some(row_id) = self.map.get(key.as_bytes()) {
                let suffix: String = key.chars().rev().collect();
                return Some((suffix, &self.rows[row_id as usize]));
            }
        }
        None
    }
}

fn decode_prediction_rows(bytes: &[u8]) -> Vec<Vec<PredictionEntry>> {
    let mut rows = Vec::new();
    let mut pos = 0usize;
    while pos + 2 <= bytes.len() {
        let count = u16::from_le_bytes([bytes[pos], bytes[pos + 1]]) as usize;
        pos += 2;
        let mut row = Vec::with_capacity(count);
        for _ in 0..count {
            let form_count = u16::from_le_bytes([bytes[pos], bytes[pos + 1]]);
            let paradigm_id = u16::from_le_bytes([bytes[pos + 2], bytes[pos + 3]]);
            let form_index = u16::from_le_bytes([bytes[pos + 4], bytes[pos + 5]]);
            row.push(PredictionEntry {
                form_count,
                paradigm_id,
                form_index,
            });
            pos += 6;
        }
        rows.push(row);
    }
    rows
}

/// word_lower -> `P(tag|word)` in millionths, stored directly as the fst
/// value (no side table: a single `u32` fits).
pub struct ConditionalProbDistDawg {
    map: Map<Vec<u8>>,
}

impl ConditionalProbDistDawg {
    pub fn open(dawg_path: &Path) -> MopsResult<Self> {
        Ok(Self {
            map: open_map(dawg_path)?,
        })
    }

    /// Build an in-memory instance from pre-sorted `("word tag", raw_prob)`
    /// pairs, where `raw_prob` is the probability times 1e6.
    pub fn from_sorted_entries(entries: Vec<(String, u32)>) -> MopsResult<Self> {
        let mut builder = fst::MapBuilder::memory();
        for (key, value) in entries {
            builder
                .insert(key.as_bytes(), value as u64)
                .map_err(MopsErr::FSTMap)?;
        }
        let bytes = builder.into_inner().map_err(MopsErr::FSTMap)?;
        Ok(Self {
            map: Map::new(bytes).map_err(MopsErr::FSTMap)?,
        })
    }

    /// `P(tag|word_lower)` for the exact `"{word_lower} {tag}"` key used at
    /// compile time, or `None` if this word/tag pair was never observed.
    pub fn prob(&self, word_lower: &str, tag: &str) -> Option<f64> {
        let key = format!("{word_lower} {tag}");
        self.map.get(key.as_bytes()).map(|v| v as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_replaces_yields_identity_and_substitutions() {
        let variants = compile_replaces("ёж", &[('ё', 'е')]);
        assert!(variants.contains(&"ёж".to_string()));
        assert!(variants.contains(&"еж".to_string()));
        assert_eq!(variants.len(), 2);
    }

    #[test]
    fn compile_replaces_is_identity_without_matches() {
        let variants = compile_replaces("кот", &[('ё', 'е')]);
        assert_eq!(variants, vec!["кот".to_string()]);
    }

    #[test]
    fn decode_word_rows_round_trips_counts() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&2u16.to_le_bytes());
        bytes.extend_from_slice(&7u16.to_le_bytes());
        bytes.extend_from_slice(&0u16.to_le_bytes());
        bytes.extend_from_slice(&9u16.to_le_bytes());
        bytes.extend_from_slice(&3u16.to_le_bytes());

        let rows = decode_word_rows(&bytes);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[0][0].paradigm_id, 7);
        assert_eq!(rows[0][1].form_index, 3);
    }
}
