// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Every user-visible label goes through Fluent. Translation files are embedded
//! from `assets/i18n/` at build time.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, or system settings
//! - Fallback to `en-US` when no preferred locale is available
//! - Runtime language switching

pub mod fluent;

pub use fluent::I18n;
