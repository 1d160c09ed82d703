// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Undine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Undine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Kv persistence helpers: value/json boundary conversion and safe filesystem writes.
fn value_to_json(path: &Path, key: &str, value: &Value) -> Result<JsonValue, StoreError> {
    match value {
        Value::Null => Ok(JsonValue::Null),
        Value::Bool(flag) => Ok(JsonValue::Bool(*flag)),
        Value::Number(number) => match serde_json::Number::from_f64(*number) {
            Some(number) => Ok(JsonValue::Number(number)),
            // `key` stays the top-level store key even for nested numbers.
            None => Err(StoreError::NonFiniteNumber {
                path: path.to_path_buf(),
                key: key.to_owned(),
            }),
        },
        Value::String(text) => Ok(JsonValue::String(text.clone())),
        Value::Array(values) => values
            .iter()
            .map(|value| value_to_json(path, key, value))
            .collect::<Result<Vec<_>, StoreError>>()
            .map(JsonValue::Array),
        Value::Object(entries) => {
            let mut object = JsonMap::new();
            for (name, value) in entries {
                object.insert(name.clone(), value_to_json(path, key, value)?);
            }
            Ok(JsonValue::Object(object))
        }
    }
}

fn value_from_json(json: JsonValue) -> Value {
    match json {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(flag) => Value::Bool(flag),
        JsonValue::Number(number) => Value::Number(
            // Total without serde_json's `arbitrary_precision` feature.
            number.as_f64().expect("json number converts to f64"),
        ),
        JsonValue::String(text) => Value::String(text),
        JsonValue::Array(values) => Value::Array(values.into_iter().map(value_from_json).collect()),
        JsonValue::Object(entries) => Value::Object(
            entries
                .into_iter()
                .map(|(name, value)| (name, value_from_json(value)))
                .collect(),
        ),
    }
}

fn rename_overwrite(from: &Path, to: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        match fs::rename(from, to) {
            Ok(()) => Ok(()),
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::AlreadyExists | io::ErrorKind::PermissionDenied
                ) =>
            {
                let _ = fs::remove_file(to);
                fs::rename(from, to)
            }
            Err(err) => Err(err),
        }
    }

    #[cfg(not(windows))]
    {
        fs::rename(from, to)
    }
}

fn write_atomic(path: &Path, contents: &[u8], durability: WriteDurability) -> Result<(), StoreError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        Some(_) => Path::new("."),
        None => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source: io::Error::other("path has no parent directory"),
            });
        }
    };

    let Some(file_name) = path.file_name() else {
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: io::Error::other("path has no file name"),
        });
    };

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp_path = parent.join(format!(
        ".undine.tmp.{}.{}",
        file_name.to_string_lossy(),
        nanos
    ));

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;

    file.write_all(contents).map_err(|source| StoreError::Io {
        path: tmp_path.clone(),
        source,
    })?;

    if durability == WriteDurability::Durable {
        file.sync_all().map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;
    }
    drop(file);

    if let Err(source) = rename_overwrite(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    if durability == WriteDurability::Durable {
        #[cfg(unix)]
        {
            let dir = fs::File::open(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
            dir.sync_all().map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    Ok(())
}
