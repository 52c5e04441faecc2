use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::notifier::Notifier;
use crate::storage::{
    entry::Entry,
    validation::{validate_entry, ValidationError},
};

/// On-disk shape: `{"repos": [{"url": ..., "guide": ...}]}`.
#[derive(Serialize, Deserialize, Debug, Default)]
struct RepoFile {
    repos: Vec<Entry>,
}

/// In-memory repository list mirrored to a single JSON file.
///
/// The file is read once by [`RepoStore::open`] and rewritten in full after
/// every mutation. Failures are reported through a [`Notifier`] and never
/// returned to the caller.
#[derive(Debug)]
pub struct RepoStore {
    path: PathBuf,
    repos: Vec<Entry>,
}

impl RepoStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            repos: Vec::new(),
        }
    }

    /// Creates the store and loads whatever the data file holds.
    pub fn open(path: PathBuf, notifier: &dyn Notifier) -> Self {
        let mut store = Self::new(path);
        store.load(notifier);
        store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[Entry] {
        &self.repos
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.repos.get(index)
    }

    pub fn len(&self) -> usize {
        self.repos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }

    fn read_file(path: &Path) -> Result<Option<Vec<Entry>>, anyhow::Error> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let file: RepoFile = serde_json::from_str(&content)
            .with_context(|| format!("{} is not a valid repository list", path.display()))?;
        Ok(Some(file.repos))
    }

    fn write_file(&self) -> Result<(), anyhow::Error> {
        let file = RepoFile {
            repos: self.repos.clone(),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&file)?)
            .with_context(|| format!("cannot write {}", self.path.display()))?;
        Ok(())
    }

    /// Replaces the in-memory list with the file contents.
    ///
    /// A missing file is a first run and leaves the list untouched without a
    /// notice. An unreadable or corrupt file is reported and also leaves the
    /// list untouched. Returns whether the list was replaced.
    pub fn load(&mut self, notifier: &dyn Notifier) -> bool {
        match Self::read_file(&self.path) {
            Ok(Some(repos)) => {
                log::info!("loaded {} repositories from {}", repos.len(), self.path.display());
                self.repos = repos;
                true
            }
            Ok(None) => {
                log::info!("no data file at {}, starting empty", self.path.display());
                false
            }
            Err(e) => {
                notifier.error(&format!("Failed to load data: {e:#}"));
                false
            }
        }
    }

    /// Overwrites the data file with the full list. Returns whether it was written.
    pub fn save(&self, notifier: &dyn Notifier) -> bool {
        match self.write_file() {
            Ok(()) => {
                log::debug!("saved {} repositories to {}", self.repos.len(), self.path.display());
                true
            }
            Err(e) => {
                notifier.error(&format!("Failed to save data: {e:#}"));
                false
            }
        }
    }

    /// Validates and appends an entry, then persists. Invalid input is warned
    /// about and leaves the list unchanged.
    ///
    /// The entry stays in memory even if persisting fails; that failure is
    /// reported separately by [`RepoStore::save`].
    pub fn add(&mut self, url: &str, guide: &str, notifier: &dyn Notifier) -> bool {
        let entry = match validate_entry(url, guide) {
            Ok(entry) => entry,
            Err(e) => {
                notifier.warn(&e.to_string());
                return false;
            }
        };
        log::info!("adding {} with guide {}", entry.url, entry.guide);
        self.repos.push(entry);
        self.save(notifier);
        true
    }

    /// Removes every entry whose URL equals `url` and persists. `None` means
    /// nothing was selected. Returns how many entries were removed.
    pub fn delete(&mut self, url: Option<&str>, notifier: &dyn Notifier) -> usize {
        let Some(url) = url else {
            notifier.warn(&ValidationError::NothingToDelete.to_string());
            return 0;
        };
        let before = self.repos.len();
        self.repos.retain(|repo| repo.url != url);
        let removed = before - self.repos.len();
        log::info!("deleted {removed} entries matching {url}");
        self.save(notifier);
        removed
    }

    /// Removes exactly the entry at `index` and persists. Out-of-range or
    /// `None` is treated as no selection.
    pub fn delete_at(&mut self, index: Option<usize>, notifier: &dyn Notifier) -> Option<Entry> {
        let Some(index) = index.filter(|&i| i < self.repos.len()) else {
            notifier.warn(&ValidationError::NothingToDelete.to_string());
            return None;
        };
        let removed = self.repos.remove(index);
        log::info!("deleted row {index} ({})", removed.url);
        self.save(notifier);
        Some(removed)
    }
}
