use std::path::{Path, PathBuf};

use crate::display_control::{display_message, Level};
use crate::errors::StoreError;

/// Token separating an alias from its destination in the configuration file.
pub const SEPARATOR: &str = "==>";

const COMMENT_MARKER: &str = "//";
const CONFIG_FILE_NAME: &str = ".tpcfg";
const HEADER: &str = "// Saved locations for the tp command line tool\n\n";

/// `AliasMap` is the in-memory form of the configuration file: alias to
/// destination path, in the order the entries appear on disk.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AliasMap {
    entries: Vec<(String, String)>,
}

impl AliasMap {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn get(&self, alias: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.as_str() == alias)
            .map(|(_, path)| path.as_str())
    }

    /// Binds an alias to a path. Rebinding an alias replaces its path but
    /// keeps the entry's position in the file.
    pub fn set(&mut self, alias: &str, path: &str) {
        if let Some(position) = self
            .entries
            .iter()
            .position(|(existing, _)| existing.as_str() == alias)
        {
            self.entries[position].1 = path.to_string();
        } else {
            self.entries.push((alias.to_string(), path.to_string()));
        }
    }

    /// Removes an alias, reporting whether it was present.
    pub fn remove(&mut self, alias: &str) -> bool {
        if let Some(position) = self
            .entries
            .iter()
            .position(|(existing, _)| existing.as_str() == alias)
        {
            self.entries.remove(position);
            true
        } else {
            false
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(alias, path)| (alias.as_str(), path.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// `Store` owns the configuration file holding every saved location.
///
/// The file is the sole source of truth: `read` rebuilds the mapping from
/// scratch and `write` replaces the file contents in full, so the `AliasMap`
/// handed out by `read` is a snapshot, not a live view. Concurrent
/// invocations racing on the file are not coordinated; the last writer wins.
#[derive(Debug)]
pub struct Store {
    config_path: PathBuf,
}

impl Store {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Builds a store over `.tpcfg` in the user's home directory.
    pub fn from_home_directory() -> Result<Self, StoreError> {
        let home_directory: PathBuf =
            dirs::home_dir().ok_or(StoreError::HomeDirectoryUnavailable)?;

        Ok(Self::new(home_directory.join(CONFIG_FILE_NAME)))
    }

    pub fn get_location(&self) -> &Path {
        &self.config_path
    }

    /// Creates the configuration file containing only the header if it does
    /// not exist yet. Calling this on an existing file changes nothing.
    pub fn ensure_exists(&self) -> Result<(), StoreError> {
        if self.config_path.exists() {
            return Ok(());
        }

        self.write(&AliasMap::new())?;
        display_message(
            Level::Logging,
            &format!(
                "Initialized configuration file in {}",
                self.config_path.display()
            ),
        );

        Ok(())
    }

    /// Reads the whole configuration file and folds it into an `AliasMap`.
    ///
    /// Comment lines, blank lines and lines without the separator token are
    /// skipped. The separator is split on its first occurrence only, so a
    /// destination path may itself contain the token. A repeated alias keeps
    /// the last value the file assigns to it.
    pub fn read(&self) -> Result<AliasMap, StoreError> {
        self.ensure_exists()?;

        let contents: String =
            std::fs::read_to_string(&self.config_path).map_err(|source| StoreError::Read {
                path: self.config_path.clone(),
                source,
            })?;

        let mut mapping = AliasMap::new();
        for line in contents.lines() {
            let line = line.trim();
            if line.starts_with(COMMENT_MARKER) {
                continue;
            }

            let (alias, path) = match line.split_once(SEPARATOR) {
                Some(parts) => parts,
                None => continue,
            };

            // An alias is a non-empty string; a line like "==> /x" binds
            // nothing anyone could look up.
            let alias = alias.trim();
            if alias.is_empty() {
                continue;
            }

            mapping.set(alias, path.trim());
        }

        Ok(mapping)
    }

    /// Replaces the file contents with the header followed by one line per
    /// entry, in the mapping's order. The contents land in a sibling
    /// temporary file first and are renamed over the original.
    ///
    /// Entries are written verbatim, without escaping: an alias or path that
    /// itself contains the separator token or a line break will not survive
    /// a round trip.
    pub fn write(&self, mapping: &AliasMap) -> Result<(), StoreError> {
        let mut contents: String = String::from(HEADER);
        for (alias, path) in mapping.iter() {
            contents.push_str(&format!("{} {} {}\n", alias, SEPARATOR, path));
        }

        let mut temporary_path = self.config_path.clone().into_os_string();
        temporary_path.push(".tmp");
        let temporary_path = PathBuf::from(temporary_path);

        std::fs::write(&temporary_path, contents).map_err(|source| StoreError::Write {
            path: temporary_path.clone(),
            source,
        })?;
        std::fs::rename(&temporary_path, &self.config_path).map_err(|source| {
            StoreError::Write {
                path: self.config_path.clone(),
                source,
            }
        })?;

        Ok(())
    }
}
