//! Dataset validation and dictionary construction.
//!
//! Loading runs in two passes over the records:
//!
//! 1. Every valid canonical name is added with its glyph.
//! 2. Every valid synonym is added pointing at its canonical name.
//!
//! Running synonyms second means a synonym can never shadow a real
//! shortcode, whatever order the dataset lists them in. Invalid records and
//! synonyms are skipped with a warning; the load fails only if nothing
//! usable remains.

use std::path::Path;

use emoticode_core::EmojiTrie;
use thiserror::Error;

use crate::{DatasetError, EmojiRecord, Format};

/// Options applied while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Lower-case names and synonyms before inserting.
    ///
    /// The trie matches exactly; completion lower-cases typed prefixes, so
    /// the dictionary must be lowercase for completion to find entries.
    pub lowercase_names: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { lowercase_names: true }
    }
}

/// Counters describing one load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records in the input.
    pub records: usize,
    /// Canonical names inserted.
    pub names: usize,
    /// Synonyms inserted.
    pub synonyms: usize,
    /// Records rejected by validation.
    pub skipped_records: usize,
    /// Synonyms rejected by validation.
    pub skipped_synonyms: usize,
    /// Valid synonyms not inserted because a shortcode has that name.
    pub shadowed_synonyms: usize,
}

/// Why a record or synonym was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The name was empty.
    #[error("empty name")]
    EmptyName,
    /// The glyph was empty.
    #[error("empty glyph")]
    EmptyGlyph,
    /// The name contained a char that can never appear inside `:name:`.
    #[error("name contains {0:?}")]
    InvalidChar(char),
}

/// Check that `name` can be typed between two colons.
pub fn check_name(name: &str) -> Result<(), SkipReason> {
    if name.is_empty() {
        return Err(SkipReason::EmptyName);
    }
    match name.chars().find(|&c| c == ':' || c.is_whitespace()) {
        Some(c) => Err(SkipReason::InvalidChar(c)),
        None => Ok(()),
    }
}

fn normalize(name: &str, options: &LoadOptions) -> String {
    if options.lowercase_names { name.to_lowercase() } else { name.to_owned() }
}

/// Validate `records` and build a dictionary from them.
pub fn build_trie(
    records: &[EmojiRecord],
    options: &LoadOptions,
) -> Result<(EmojiTrie, LoadReport), DatasetError> {
    let mut trie = EmojiTrie::new();
    let mut report = LoadReport { records: records.len(), ..LoadReport::default() };
    let mut accepted = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let name = normalize(&record.name, options);
        let checked = check_name(&name).and_then(|()| {
            if record.code.is_empty() { Err(SkipReason::EmptyGlyph) } else { Ok(()) }
        });
        if let Err(reason) = checked {
            tracing::warn!(index, name = %record.name, %reason, "skipping dataset record");
            report.skipped_records += 1;
            continue;
        }

        trie.add(&name, &record.code)?;
        report.names += 1;
        accepted.push((name, record));
    }

    if report.names == 0 {
        return Err(DatasetError::Empty { skipped: report.skipped_records });
    }

    for (name, record) in &accepted {
        for synonym in &record.synonyms {
            let synonym = normalize(synonym, options);
            if let Err(reason) = check_name(&synonym) {
                tracing::warn!(%name, %synonym, %reason, "skipping synonym");
                report.skipped_synonyms += 1;
                continue;
            }

            if trie.add_synonym(&synonym, name, &record.code)? {
                report.synonyms += 1;
            } else {
                tracing::debug!(%name, %synonym, "synonym shadowed by shortcode");
                report.shadowed_synonyms += 1;
            }
        }
    }

    tracing::info!(
        records = report.records,
        names = report.names,
        synonyms = report.synonyms,
        skipped = report.skipped_records + report.skipped_synonyms,
        "emoji dataset loaded"
    );

    Ok((trie, report))
}

/// Decode `bytes` as `format` and build a dictionary.
pub fn load_bytes(
    bytes: &[u8],
    format: Format,
    options: &LoadOptions,
) -> Result<(EmojiTrie, LoadReport), DatasetError> {
    let records = format.decode(bytes)?;
    build_trie(&records, options)
}

/// Read the records of a `.json` or `.cbor` dataset file.
pub fn read_records(path: &Path) -> Result<Vec<EmojiRecord>, DatasetError> {
    let format = Format::from_path(path)?;
    let bytes = std::fs::read(path)?;
    tracing::debug!(path = %path.display(), ?format, bytes = bytes.len(), "reading emoji dataset");
    format.decode(&bytes)
}

/// Read a `.json` or `.cbor` dataset file and build a dictionary.
pub fn load_path(
    path: &Path,
    options: &LoadOptions,
) -> Result<(EmojiTrie, LoadReport), DatasetError> {
    build_trie(&read_records(path)?, options)
}
