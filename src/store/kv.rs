// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Undine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Undine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::model::Value;

#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    NonFiniteNumber {
        path: PathBuf,
        key: String,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
            Self::NonFiniteNumber { path, key } => write!(
                f,
                "cannot encode non-finite number under key {key:?} for {path:?}"
            ),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::NonFiniteNumber { .. } => None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteDurability {
    /// Temp file plus atomic rename, no per-file fsync.
    #[default]
    BestEffort,

    /// Additionally flushes file contents and the rename to stable storage where the
    /// platform/filesystem supports it.
    Durable,
}

/// Thread-safe mapping from string keys to dynamically typed values.
///
/// All operations take `&self`. The mapping lives behind a reader/writer lock: reads run
/// concurrently with each other, writes are serialized against everything else.
/// [`save_to_file`](Store::save_to_file) and [`load_from_file`](Store::load_from_file)
/// snapshot/replace the whole mapping as a single JSON object.
#[derive(Debug, Default)]
pub struct Store {
    data: RwLock<BTreeMap<String, Value>>,
    durability: WriteDurability,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn durability(&self) -> WriteDurability {
        self.durability
    }

    /// Loads a store from `path`, or returns an empty one if the file does not exist yet.
    ///
    /// Any error other than the file being absent still surfaces.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let store = Self::new();
        match store.load_from_file(path) {
            Ok(()) => Ok(store),
            Err(StoreError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                Ok(store)
            }
            Err(err) => Err(err),
        }
    }

    /// Inserts `key → value`, silently overwriting any previous value for the key.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) {
        let mut data = self.data.write().expect("store lock poisoned");
        data.insert(key.into(), value.into());
    }

    /// Returns a copy of the value for `key`, or `None` if the key is absent.
    pub fn get(&self, key: &str) -> Option<Value> {
        let data = self.data.read().expect("store lock poisoned");
        data.get(key).cloned()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        let data = self.data.read().expect("store lock poisoned");
        data.contains_key(key)
    }

    /// Removes `key` if present; removing an absent key is a no-op.
    pub fn delete(&self, key: &str) {
        let mut data = self.data.write().expect("store lock poisoned");
        data.remove(key);
    }

    /// Returns the current keys as a point-in-time snapshot.
    ///
    /// Later mutations do not affect an already returned vector. Order is unspecified.
    pub fn keys(&self) -> Vec<String> {
        let data = self.data.read().expect("store lock poisoned");
        data.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        let data = self.data.read().expect("store lock poisoned");
        data.len()
    }

    pub fn is_empty(&self) -> bool {
        let data = self.data.read().expect("store lock poisoned");
        data.is_empty()
    }

    /// Returns a point-in-time copy of the whole mapping.
    pub fn snapshot(&self) -> BTreeMap<String, Value> {
        let data = self.data.read().expect("store lock poisoned");
        data.clone()
    }

    /// Drops every entry.
    pub fn clear(&self) {
        let mut data = self.data.write().expect("store lock poisoned");
        *data = BTreeMap::new();
    }

    /// Serializes the current mapping as a single top-level JSON object and writes it to
    /// `path`, replacing any existing file.
    ///
    /// The read lock is held only while the in-memory data is converted to a JSON tree;
    /// rendering and file I/O happen after it is released. The file is written to a temp
    /// file and renamed into place. The parent directory must already exist.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();

        let root = {
            let data = self.data.read().expect("store lock poisoned");
            let mut root = JsonMap::new();
            for (key, value) in data.iter() {
                root.insert(key.clone(), value_to_json(path, key, value)?);
            }
            JsonValue::Object(root)
        };

        let text = serde_json::to_string_pretty(&root).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        write_atomic(path, format!("{text}\n").as_bytes(), self.durability)
    }

    /// Replaces the whole mapping with the JSON object stored at `path`.
    ///
    /// The file is read and fully decoded before the write lock is taken, so a missing
    /// file, malformed JSON, or a non-object top level leaves the previous contents
    /// untouched.
    ///
    /// JSON numbers carry no integer/float distinction: an entry saved as `30` loads as
    /// `Value::Number(30.0)`.
    pub fn load_from_file(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();

        let text = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let root: JsonMap<String, JsonValue> =
            serde_json::from_str(&text).map_err(|source| StoreError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        let next = root
            .into_iter()
            .map(|(key, json)| (key, value_from_json(json)))
            .collect::<BTreeMap<_, _>>();

        let mut data = self.data.write().expect("store lock poisoned");
        *data = next;
        Ok(())
    }
}

// Extracted JSON-boundary conversion and filesystem helpers for `Store`.
include!("kv/helpers.rs");
