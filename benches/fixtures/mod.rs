// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Undine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Undine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use undine::model::Value;
use undine::store::Store;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(prefix: &str) -> Self {
        let pid = std::process::id();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);

        let mut path = std::env::temp_dir();
        path.push(format!("undine_bench_{prefix}_{pid}_{nanos}_{counter}"));
        std::fs::create_dir_all(&path).expect("create temp dir");

        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

fn ascii_repeat_to_len(prefix: &str, fill: char, target_len: usize) -> String {
    if prefix.len() >= target_len {
        return prefix[..target_len].to_owned();
    }

    let mut out = String::with_capacity(target_len);
    out.push_str(prefix);
    while out.len() < target_len {
        out.push(fill);
    }
    out
}

pub fn checksum_value(value: &Value) -> u64 {
    match value {
        Value::Null => 1,
        Value::Bool(flag) => 2 + u64::from(*flag),
        Value::Number(number) => number.to_bits(),
        Value::String(text) => text.len() as u64,
        Value::Array(values) => values.iter().fold(0u64, |acc, value| {
            acc.wrapping_mul(131).wrapping_add(checksum_value(value))
        }),
        Value::Object(entries) => entries.iter().fold(0u64, |acc, (name, value)| {
            acc.wrapping_mul(131)
                .wrapping_add(name.len() as u64)
                .wrapping_mul(131)
                .wrapping_add(checksum_value(value))
        }),
    }
}

pub mod store {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Params {
        pub entries: usize,
        pub list_len: usize,
        pub text_len: usize,
    }

    impl Params {
        pub const fn new(entries: usize, list_len: usize, text_len: usize) -> Self {
            Self {
                entries,
                list_len,
                text_len,
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        StoreSmall,
        StoreMedium,
        StoreLarge,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::StoreSmall => "store_small",
                Self::StoreMedium => "store_medium",
                Self::StoreLarge => "store_large",
            }
        }

        pub const fn params(self) -> Params {
            match self {
                Self::StoreSmall => Params::new(64, 4, 16),
                Self::StoreMedium => Params::new(1024, 8, 32),
                Self::StoreLarge => Params::new(16384, 8, 64),
            }
        }
    }

    fn entry_key(idx: usize) -> String {
        format!("k{idx:06}")
    }

    /// Deterministic store generator cycling through the value variants.
    pub fn build(params: Params) -> Store {
        let store = Store::new();

        for idx in 0..params.entries {
            let key = entry_key(idx);
            match idx % 4 {
                0 => {
                    let base = format!("v{idx:06}_");
                    store.set(key, ascii_repeat_to_len(&base, 'x', params.text_len));
                }
                1 => store.set(key, idx as f64),
                2 => {
                    let list = (0..params.list_len)
                        .map(|offset| Value::from((idx + offset) as f64))
                        .collect::<Vec<_>>();
                    store.set(key, list);
                }
                _ => {
                    let mut object = BTreeMap::new();
                    object.insert("idx".to_owned(), Value::from(idx as f64));
                    object.insert(
                        "label".to_owned(),
                        Value::from(ascii_repeat_to_len("obj_", 'y', params.text_len)),
                    );
                    store.set(key, object);
                }
            }
        }

        store
    }

    pub fn fixture(case: Case) -> Store {
        build(case.params())
    }
}
