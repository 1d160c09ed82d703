// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Undine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Undine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Minimal end-to-end tour: set a few values, persist them, load them back.

use std::error::Error;

use undine::model::Value;
use undine::store::Store;

fn main() -> Result<(), Box<dyn Error>> {
    let store = Store::new();

    store.set("name", "John Doe");
    store.set("age", 30);
    store.set("languages", vec!["Rust", "Go", "Python"]);

    if let Some(name) = store.get("name") {
        println!("name: {name:?}");
    }

    let mut keys = store.keys();
    keys.sort();
    println!("all keys: {keys:?}");

    store.save_to_file("data.json")?;

    let restored = Store::new();
    restored.load_from_file("data.json")?;

    // Integers come back as floats after the JSON round trip.
    if let Some(Value::Number(age)) = restored.get("age") {
        println!("age: {age}");
    }

    Ok(())
}
