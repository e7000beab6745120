use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use fxhash::FxHashMap;
use tracing::{debug, warn};

use crate::constants::{is_myanmar_char, normalize_leading};

/// Where the TSV text of a consonant group comes from.
pub trait GroupSource {
    fn read_group(&self, key: char) -> io::Result<String>;
}

/// One `<key>.tsv` file per group under a root directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// The root is expected to have been validated already.
    pub fn new(root: PathBuf) -> Self {
        DirectorySource { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn group_path(&self, key: char) -> PathBuf {
        self.root.join(format!("{key}.tsv"))
    }
}

impl GroupSource for DirectorySource {
    fn read_group(&self, key: char) -> io::Result<String> {
        fs::read_to_string(self.group_path(key))
    }
}

/// Group texts held in memory, keyed by leading consonant.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    groups: FxHashMap<char, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_group(mut self, key: char, tsv: &str) -> Self {
        self.insert(key, tsv);
        self
    }

    pub fn insert(&mut self, key: char, tsv: &str) {
        self.groups.insert(key, tsv.to_string());
    }
}

impl GroupSource for MemorySource {
    fn read_group(&self, key: char) -> io::Result<String> {
        self.groups
            .get(&key)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no group for {key}")))
    }
}

/// Result of the one load attempt made for a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupState {
    Loaded { entries: usize },
    /// Checked and found nothing usable; never retried.
    Empty,
}

#[derive(Debug, Clone)]
pub struct Dictionary<S> {
    source: S,
    entries: FxHashMap<String, String>, // Burmese -> Latin, across all loaded groups
    groups: FxHashMap<char, GroupState>,
}

impl<S: GroupSource> Dictionary<S> {
    pub fn new(source: S) -> Self {
        Dictionary {
            source,
            entries: FxHashMap::default(),
            groups: FxHashMap::default(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Loads the group for `key` unless it was already attempted.
    pub fn ensure_loaded(&mut self, key: char) -> GroupState {
        if let Some(&state) = self.groups.get(&key) {
            return state;
        }

        let state = match self.source.read_group(key) {
            Ok(text) => {
                let (count, skipped) = self.merge_group(&text);
                debug!(group = %key, entries = count, skipped, "loaded dictionary group");
                if count == 0 {
                    GroupState::Empty
                } else {
                    GroupState::Loaded { entries: count }
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(group = %key, "no dictionary group");
                GroupState::Empty
            }
            Err(e) => {
                warn!(group = %key, error = %e, "unreadable dictionary group, treating as empty");
                GroupState::Empty
            }
        };

        self.groups.insert(key, state);
        state
    }

    /// Loads the group `unit` would be filed under, if it has one.
    pub fn ensure_loaded_for(&mut self, unit: &str) -> Option<GroupState> {
        group_key(unit).map(|key| self.ensure_loaded(key))
    }

    /// Exact match on the trimmed unit among loaded entries.
    pub fn lookup(&self, unit: &str) -> Option<&str> {
        self.entries.get(unit.trim()).map(String::as_str)
    }

    pub fn group_state(&self, key: char) -> Option<GroupState> {
        self.groups.get(&key).copied()
    }

    pub fn loaded_groups(&self) -> Vec<char> {
        let mut keys: Vec<char> = self.groups.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn merge_group(&mut self, text: &str) -> (usize, usize) {
        let mut count = 0;
        let mut skipped = 0;
        for line in text.trim_start_matches('\u{feff}').lines() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_line(line) {
                Some((burmese, latin)) => {
                    self.entries.insert(burmese.to_string(), latin.to_string());
                    count += 1;
                }
                None => skipped += 1,
            }
        }
        (count, skipped)
    }
}

/// `<burmese>\t<latin>[\t...]`, both fields trimmed. `None` for lines with a
/// single field or a blank key.
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    let mut fields = line.split('\t');
    let burmese = fields.next()?.trim();
    let latin = fields.next()?.trim();
    if burmese.is_empty() {
        return None;
    }
    Some((burmese, latin))
}

/// Group a lookup unit is filed under: its first character, with independent
/// vowels folded onto `အ`. Units that do not start with a Myanmar character
/// have no group.
pub fn group_key(unit: &str) -> Option<char> {
    let first = unit.trim().chars().next()?;
    if !is_myanmar_char(first) {
        return None;
    }
    Some(normalize_leading(first))
}
