// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Undine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Undine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence and concurrency control for the key-value data.
//!
//! The kv module owns the shared mapping behind its reader/writer lock and implements the
//! single-JSON-object snapshot format used by `save_to_file`/`load_from_file`.

pub mod kv;

pub use kv::{Store, StoreError, WriteDurability};
