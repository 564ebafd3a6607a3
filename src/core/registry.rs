//! Message keys collected from a file.
//!
//! `MessageKeyRegistry` is the per-file ordered set of unique trimmed keys.
//! `MessageKeys` is the cross-file accumulator owned by the caller: each
//! file's entries are appended as-is, so the same key extracted from two
//! files appears twice.

use std::collections::HashSet;

use serde::Serialize;

/// One catalog entry. The id is always the key itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageEntry {
    pub key: String,
    pub id: String,
}

impl MessageEntry {
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            id: key.clone(),
            key,
        }
    }
}

#[derive(Debug, Default)]
pub struct MessageKeyRegistry {
    entries: Vec<MessageEntry>,
    seen: HashSet<String>,
}

impl MessageKeyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a trimmed key. Returns false if the key was already present.
    pub fn add(&mut self, key: &str) -> bool {
        if self.seen.contains(key) {
            return false;
        }
        self.seen.insert(key.to_string());
        self.entries.push(MessageEntry::new(key));
        true
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[MessageEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<MessageEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Keys gathered across files, in append order, duplicates kept.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(transparent)]
pub struct MessageKeys(Vec<String>);

impl MessageKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one file's entries. Empty entry lists are a no-op.
    pub fn append(&mut self, entries: &[MessageEntry]) {
        self.0.extend(entries.iter().map(|e| e.key.clone()));
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Unique keys in first-seen order.
    pub fn unique(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.0
            .iter()
            .map(String::as_str)
            .filter(|key| seen.insert(*key))
            .collect()
    }
}
