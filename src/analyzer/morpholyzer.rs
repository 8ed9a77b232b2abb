//! Pipeline-driving helper for [`MorphAnalyzer`]: runs the bound language
//! profile's unit groups in order against a word, threading one shared
//! [`SeenSet`] through every unit so predictors never re-emit a
//! dictionary-confirmed parse.

use crate::analyzer::{Parse, SeenSet};
use crate::MorphAnalyzer;

impl MorphAnalyzer {
    /// Runs every unit group of the bound profile against `word` in order,
    /// accumulating parses. Stops as soon as a *terminal* group has
    /// produced at least one result (dictionary
    /// hits and recognizer tokens short-circuit the rest of the pipeline;
    /// prefix predictors are non-terminal so the suffix predictor still
    /// gets a chance).
    pub(crate) fn run_pipeline(&self, word: &str, word_lower: &str) -> Vec<Parse> {
        let mut seen: SeenSet = SeenSet::default();
        let mut all = Vec::new();
        for group in &self.profile().pipeline {
            for unit in &group.units {
                all.extend(unit.parse(word, word_lower, &self.dictionary, self.profile(), &mut seen));
            }
            if group.terminal && !all.is_empty() {
                break;
            }
        }
        all
    }
}
