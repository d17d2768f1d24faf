//! Localization layer for the noughts workspace.
//!
//! Provides externalized string storage with key-based lookup, locale
//! fallback chains, CLDR-style plural forms, and `{name}` interpolation.
//! Locale tables load from TOML files.
//!
//! The crate is an opaque `{key, params, count} -> String` capability: it
//! knows nothing about the game or about rendering, so presentation can
//! swap locales without touching game logic, and game logic never embeds
//! user-facing text.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod plural;

pub use catalog::{I18nError, LocaleStrings, StringCatalog, StringEntry};
pub use plural::{PluralCategory, PluralForms, PluralRule};
