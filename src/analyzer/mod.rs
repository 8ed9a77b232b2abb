use std::collections::HashSet;

use allocative::Allocative;
use serde::{Deserialize, Serialize};
use smallstr::SmallString;
use smallvec::SmallVec;

use crate::errors::{MopsErr, MopsResult, ParseErr};
use crate::morph::tag::Tag;

// Значения для Small-хранения префиксов/постфиксов, лемм.
// Нынешние значения вычислены экспериментально и могут меняться при дальнейших экспериментах.

/// Количество байт, которое вмещает в себя большую часть постфиксов/префиксов,
/// чтобы не аллоцировать под небольшой размер данных большое количество места на куче.
pub const SMALLVANGA: usize = 8;
/// Количество байт, которое вмещает в себя большую часть лемм (нормальных форм слова),
/// чтобы не аллоцировать под небольшой размер данных большое количество места на куче.
pub const SMALLLEMMA: usize = 16;

/// Сборка словаря (загрузка бандла с диска).
pub(crate) mod dictionary;
pub use dictionary::Dictionary;

/// Переранжирование разборов по P(t|w).
pub mod estimator;
/// Сборка конкретных юнитов анализатора.
pub mod units;

/// Вспомогательные функции морфологизатора для разборов слов.
pub(crate) mod morpholyzer;

pub mod pretty_display;

/// (word, paradigm_id, form_index) triples already emitted by a previous
/// unit in the pipeline; threaded through so predictors never re-emit a
/// dictionary-confirmed parse.
pub type SeenSet = HashSet<(SmallString<[u8; SMALLLEMMA]>, u16, u16)>;

/// Which concrete kind of recognizer produced a terminal synthetic tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Allocative)]
pub enum RecognizerKind {
    Number,
    RomanNumber,
    Latin,
    Punctuation,
}

/// One frame of a Parse's methods_stack. Frames are appended in pipeline
/// order; the last frame dictates normalization/lexeme behavior.
/// Carrying `paradigm_id`/`form_index` directly on every dictionary-rooted
/// variant (rather than nesting a pointer to the frame it wraps) keeps
/// `get_lexeme`/`normalized` a flat match instead of a recursive walk.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Allocative)]
pub enum MethodFrame {
    /// Exact dictionary hit.
    DictHit { paradigm_id: u16, form_index: u16 },
    /// `KnownPrefixAnalyzer`: `prefix` was stripped and matched against the
    /// language profile's known-prefix list before the dictionary lookup.
    KnownPrefix {
        prefix: SmallString<[u8; SMALLVANGA]>,
        paradigm_id: u16,
        form_index: u16,
    },
    /// `UnknownPrefixAnalyzer`: an arbitrary leading substring was treated
    /// as a prefix.
    UnknownPrefix {
        prefix: SmallString<[u8; SMALLVANGA]>,
        paradigm_id: u16,
        form_index: u16,
    },
    /// `SuffixAnalyzer`: reached via reversed-suffix prediction.
    SuffixPredict { paradigm_id: u16, form_index: u16 },
    /// `HyphenAdverbAnalyzer`: whole word is a fixed adverb tag, no paradigm.
    HyphenAdverb,
    /// `HyphenatedWordsAnalyzer`: `left` is kept verbatim, the right side is
    /// a dictionary-rooted paradigm form.
    HyphenatedWords {
        left: SmallString<[u8; SMALLLEMMA]>,
        paradigm_id: u16,
        form_index: u16,
    },
    /// `HyphenSeparatedParticleAnalyzer`: `particle` (e.g. `-таки`, `-то`)
    /// was stripped from the tail before the dictionary lookup.
    HyphenParticle {
        particle: SmallString<[u8; SMALLVANGA]>,
        paradigm_id: u16,
        form_index: u16,
    },
    /// Terminal single-parse recognizer (`NUMB`, `ROMN`, `LATN`, `PNCT`).
    Recognizer(RecognizerKind),
    /// `InitialFormAnalyzer`.
    InitialForm,
    /// `AbbreviationAnalyzer`.
    Abbreviation,
}

impl MethodFrame {
    /// The `(paradigm_id, form_index)` this frame is rooted on, if any.
    /// Atomic frames (recognizers, hyphen-adverb, initial form, abbreviation)
    /// have no paradigm: they describe exactly one surface form.
    pub fn paradigm_ref(&self) -> Option<(u16, u16)> {
        match self {
            MethodFrame::DictHit {
                paradigm_id,
                form_index,
            }
            | MethodFrame::KnownPrefix {
                paradigm_id,
                form_index,
                ..
            }
            | MethodFrame::UnknownPrefix {
                paradigm_id,
                form_index,
                ..
            }
            | MethodFrame::SuffixPredict {
                paradigm_id,
                form_index,
            }
            | MethodFrame::HyphenatedWords {
                paradigm_id,
                form_index,
                ..
            }
            | MethodFrame::HyphenParticle {
                paradigm_id,
                form_index,
                ..
            } => Some((*paradigm_id, *form_index)),
            MethodFrame::HyphenAdverb
            | MethodFrame::Recognizer(_)
            | MethodFrame::InitialForm
            | MethodFrame::Abbreviation => None,
        }
    }

    /// Reapply this frame's affix wrapping to a dictionary-reconstructed
    /// `built` form, producing the full surface word.
    pub fn wrap(&self, built: &str) -> String {
        match self {
            MethodFrame::KnownPrefix { prefix, .. } | MethodFrame::UnknownPrefix { prefix, .. } => {
                format!("{prefix}{built}")
            }
            MethodFrame::HyphenatedWords { left, .. } => format!("{left}-{built}"),
            MethodFrame::HyphenParticle { particle, .. } => format!("{built}-{particle}"),
            _ => built.to_string(),
        }
    }

    /// Inverse of [`Self::wrap`]: strip this frame's affix back off a full
    /// surface word, recovering the plain substring that was actually
    /// looked up in the dictionary.
    pub fn unwrap<'w>(&self, word: &'w str) -> &'w str {
        match self {
            MethodFrame::KnownPrefix { prefix, .. } | MethodFrame::UnknownPrefix { prefix, .. } => {
                word.strip_prefix(prefix.as_str()).unwrap_or(word)
            }
            MethodFrame::HyphenatedWords { left, .. } => {
                word.strip_prefix(left.as_str()).and_then(|w| w.strip_prefix('-')).unwrap_or(word)
            }
            MethodFrame::HyphenParticle { particle, .. } => {
                let suffix = format!("-{particle}");
                word.strip_suffix(suffix.as_str()).unwrap_or(word)
            }
            _ => word,
        }
    }

    /// Rewrite this frame to point at a sibling `(paradigm_id, form_index)`
    /// of the same paradigm, used while enumerating a lexeme.
    pub fn with_form(&self, paradigm_id: u16, form_index: u16) -> MethodFrame {
        match self {
            MethodFrame::DictHit { .. } => MethodFrame::DictHit {
                paradigm_id,
                form_index,
            },
            MethodFrame::KnownPrefix { prefix, .. } => MethodFrame::KnownPrefix {
                prefix: prefix.clone(),
                paradigm_id,
                form_index,
            },
            MethodFrame::UnknownPrefix { prefix, .. } => MethodFrame::UnknownPrefix {
                prefix: prefix.clone(),
                paradigm_id,
                form_index,
            },
            MethodFrame::SuffixPredict { .. } => MethodFrame::SuffixPredict {
                paradigm_id,
                form_index,
            },
            MethodFrame::HyphenatedWords { left, .. } => MethodFrame::HyphenatedWords {
                left: left.clone(),
                paradigm_id,
                form_index,
            },
            MethodFrame::HyphenParticle { particle, .. } => MethodFrame::HyphenParticle {
                particle: particle.clone(),
                paradigm_id,
                form_index,
            },
            other => other.clone(),
        }
    }
}

/// Non-empty ordered sequence of [`MethodFrame`]s.
pub type MethodsStack = SmallVec<[MethodFrame; 2]>;

/// One parse of a surface word: word, tag, normal form, score,
/// and the pipeline frames that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Allocative)]
pub struct Parse {
    pub word: String,
    pub tag: Tag,
    pub normal_form: String,
    pub score: f64,
    pub methods_stack: MethodsStack,
}

impl Parse {
    /// The terminal frame, the one that "dictates normalization and lexeme
    /// behavior".
    pub fn terminal_frame(&self) -> &MethodFrame {
        self.methods_stack
            .last()
            .expect("methods_stack is never empty")
    }

    pub fn is_known(&self) -> bool {
        matches!(
            self.terminal_frame(),
            MethodFrame::DictHit { .. } | MethodFrame::KnownPrefix { .. }
        )
    }

    /// Every form of the paradigm the terminal frame is rooted on (spec
    /// §4.4 `get_lexeme`). A Parse with no paradigm (a recognizer,
    /// hyphen-adverb, initial form, or abbreviation hit) has itself as its
    /// only lexeme member.
    pub fn get_lexeme(&self, dictionary: &Dictionary) -> MopsResult<Vec<Parse>> {
        let frame = self.terminal_frame().clone();
        let Some((paradigm_id, form_index)) = frame.paradigm_ref() else {
            return Ok(vec![self.clone()]);
        };

        let built_word = frame.unwrap(&self.word);
        let stem = dictionary.stem_of(built_word, paradigm_id, form_index)?;
        let infos = dictionary.build_paradigm_info(paradigm_id)?;

        infos
            .into_iter()
            .enumerate()
            .map(|(i, (prefix, tag, suffix))| {
                let built = format!("{prefix}{stem}{suffix}");
                let word = frame.wrap(&built);
                let normal_form = dictionary.build_normal_form(stem, paradigm_id, built_word);
                let mut methods_stack = self.methods_stack.clone();
                *methods_stack.last_mut().expect("methods_stack is never empty") =
                    frame.with_form(paradigm_id, i as u16);
                Ok(Parse {
                    word,
                    tag,
                    normal_form,
                    score: self.score,
                    methods_stack,
                })
            })
            .collect()
    }

    /// Form 0 of the same paradigm. Atomic parses
    /// (no paradigm) normalize to themselves.
    pub fn normalized(&self, dictionary: &Dictionary) -> MopsResult<Parse> {
        let lexeme = self.get_lexeme(dictionary)?;
        lexeme
            .into_iter()
            .find(|p| matches!(p.terminal_frame().paradigm_ref(), Some((_, 0)) | None))
            .ok_or_else(|| MopsErr::Parse(ParseErr::NotFound(self.word.clone())))
    }
}
