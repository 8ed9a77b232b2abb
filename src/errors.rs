use std::path::PathBuf;
use thiserror::Error;

pub type MopsResult<T, E = MopsErr> = std::result::Result<T, E>;

/// Top-level error taxonomy.
///
/// `LookupMiss` has no variant here by design: a miss is represented by an
/// empty `Vec`/`None`, never an `Err`.
#[derive(Debug, Error)]
pub enum MopsErr {
    #[error("Couldn't open file {file}: {error}")]
    File {
        file: PathBuf,
        error: std::io::Error,
    },

    #[error("IO err -> {0}")]
    IO(#[from] std::io::Error),

    #[error("Serde err -> {0}")]
    Serde(#[from] serde_json::error::Error),

    #[error("Fst map err -> {0}")]
    FSTMap(#[from] fst::Error),

    #[error("Configuration err -> {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Corrupt dictionary -> {0}")]
    Corrupt(#[from] CorruptDictionaryError),

    #[error("Parse err -> {0}")]
    Parse(#[from] ParseErr),
}

/// Construction-time errors: unknown language, no dictionary discoverable,
/// unsupported gramtab format, incompatible format version.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Unknown language code: {0}")]
    UnknownLanguage(String),

    #[error("No dictionary could be discovered for language {0:?}; set MORPH_RS_DICT_PATH")]
    NoDictionaryDiscoverable(Option<String>),

    #[error("Unsupported gramtab format: {0}")]
    UnsupportedGramtabFormat(String),

    #[error("Dictionary format version {found} is incompatible with {current} (major mismatch)")]
    IncompatibleFormatVersion { found: String, current: String },
}

/// Structural corruption found while loading the binary/JSON bundle.
#[derive(Debug, Error)]
pub enum CorruptDictionaryError {
    #[error("{file}: length/checksum mismatch")]
    LengthMismatch { file: String },

    #[error("paradigm {0} has length {1}, not divisible by 3")]
    BadParadigmLength(usize, usize),

    #[error("tag string references unknown grammeme: {0:?}")]
    UnknownGrammeme(String),

    #[error("paradigm index {0} out of range ({1} paradigms loaded)")]
    ParadigmOutOfRange(u16, usize),

    #[error("form index {0} out of range for paradigm {1} ({2} forms)")]
    FormOutOfRange(u16, u16, usize),
}

/// Query-time errors. A unit that hits one of these for a single candidate
/// skips that candidate and continues; it never aborts a whole `parse`/`tag`
/// call ("Query-time errors are confined").
#[derive(Debug, Error)]
pub enum ParseErr {
    #[error("word '{0}' was not found via dictionary lookup, nothing to inflect")]
    NotFound(String),

    #[error("dictionary is corrupt -> {0}")]
    Corrupt(#[from] CorruptDictionaryError),
}
