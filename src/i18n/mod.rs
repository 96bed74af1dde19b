// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, then system settings
//! - Embedded `.ftl` translations, optionally extended from a directory
//! - Runtime language switching
//! - `MISSING: <key>` placeholder when a key has no translation

pub mod fluent;
