// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Undine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Undine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Values are dynamically typed: the store performs no schema checks and treats them as
//! opaque until they cross the JSON serialization boundary in the store module.

pub mod value;

pub use value::Value;
