//! Rule file catalog.
//!
//! A catalog is a directory of `*.txt` rules files. Entries are listed sorted
//! by file name and named by their file stem, so `rules/RPS-5.txt` is offered
//! as "RPS-5".

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::CatalogError;

/// File extension of rules files.
pub const RULES_EXTENSION: &str = "txt";

/// One available rule set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleSource {
    /// Display name: the file name without extension.
    pub name: String,
    pub path: PathBuf,
}

/// Sorted listing of the rules files in a directory.
#[derive(Clone, Debug)]
pub struct RuleCatalog {
    dir: PathBuf,
    sources: Vec<RuleSource>,
}

impl RuleCatalog {
    /// List the rules files of `dir`.
    ///
    /// Fails if the directory cannot be read or holds no rules files.
    pub fn scan(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let dir = dir.as_ref().to_path_buf();
        let io_err = |source| CatalogError::Io {
            path: dir.clone(),
            source,
        };

        let mut sources = Vec::new();
        for entry in fs::read_dir(&dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(RULES_EXTENSION) {
                debug!("skipping {}", path.display());
                continue;
            }
            match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => sources.push(RuleSource {
                    name: stem.to_string(),
                    path,
                }),
                None => warn!("skipping rules file with non UTF-8 name: {}", path.display()),
            }
        }

        if sources.is_empty() {
            return Err(CatalogError::Empty(dir));
        }

        sources.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
        debug!("found {} rule sets in {}", sources.len(), dir.display());

        Ok(Self { dir, sources })
    }

    /// The scanned directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Available rule sets, sorted by file name.
    #[must_use]
    pub fn sources(&self) -> &[RuleSource] {
        &self.sources
    }

    /// Display names of the available rule sets.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sources.iter().map(|s| s.name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Find a rule set by name (case-insensitive).
    pub fn find(&self, name: &str) -> Result<&RuleSource, CatalogError> {
        self.sources
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| CatalogError::UnknownRuleSet(name.to_string()))
    }

    /// Read the rules text of `source`.
    pub fn load(&self, source: &RuleSource) -> Result<String, CatalogError> {
        load_rules(&source.path)
    }
}

/// Read a rules file.
///
/// Windows line endings become `\n` and line terminators at the very end of
/// the file are dropped. Nothing else is changed.
pub fn load_rules(path: impl AsRef<Path>) -> Result<String, CatalogError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(normalize_rules(&raw))
}

fn normalize_rules(raw: &str) -> String {
    raw.replace("\r\n", "\n").trim_end_matches('\n').to_string()
}
