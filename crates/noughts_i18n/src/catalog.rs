//! String catalog: per-locale key tables with fallback and interpolation.

use crate::plural::{PluralForms, PluralRule};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Error loading a locale file.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum I18nError {
    /// The locale file is not valid TOML or has the wrong shape.
    #[display("failed to parse locale file: {_0}")]
    Parse(toml::de::Error),
}

/// A single catalog entry: a plain message or a set of plural forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringEntry {
    /// Plain message, possibly with `{name}` placeholders.
    Simple(String),
    /// Plural forms selected by count.
    Plural(PluralForms),
}

/// Key-to-message table for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleStrings {
    entries: BTreeMap<String, StringEntry>,
}

/// On-disk shape of a locale file:
///
/// ```toml
/// [strings]
/// "game.next" = "Next player: {player}"
///
/// [plurals."history.moves"]
/// one = "{count} move played"
/// other = "{count} moves played"
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawLocale {
    strings: BTreeMap<String, String>,
    plurals: BTreeMap<String, PluralForms>,
}

impl LocaleStrings {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a locale table from TOML source.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::Parse`] when the source is not valid TOML or
    /// contains unknown top-level tables.
    pub fn from_toml_str(src: &str) -> Result<Self, I18nError> {
        let raw: RawLocale = toml::from_str(src)?;
        let mut table = Self::new();
        for (key, text) in raw.strings {
            table.insert(key, text);
        }
        for (key, forms) in raw.plurals {
            table.insert_plural(key, forms);
        }
        Ok(table)
    }

    /// Inserts a plain message.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries
            .insert(key.into(), StringEntry::Simple(text.into()));
    }

    /// Inserts a pluralized message.
    pub fn insert_plural(&mut self, key: impl Into<String>, forms: PluralForms) {
        self.entries.insert(key.into(), StringEntry::Plural(forms));
    }

    /// Looks up an entry by key.
    pub fn entry(&self, key: &str) -> Option<&StringEntry> {
        self.entries.get(key)
    }
}

/// Localized message store for all loaded locales.
///
/// Lookup walks a fallback chain: the requested tag, its base language
/// (`fr-CA` → `fr`), then the default locale. Missing keys return `None`,
/// never a panic; rendering a raw key is the caller's last resort.
#[derive(Debug, Clone, Default)]
pub struct StringCatalog {
    locales: BTreeMap<String, LocaleStrings>,
    default_locale: String,
}

impl StringCatalog {
    /// Creates an empty catalog with `en` as the default locale.
    pub fn new() -> Self {
        Self::with_default_locale("en")
    }

    /// Creates an empty catalog with the given default locale.
    pub fn with_default_locale(locale: impl Into<String>) -> Self {
        Self {
            locales: BTreeMap::new(),
            default_locale: locale.into(),
        }
    }

    /// Registers (or replaces) a locale's string table.
    pub fn add_locale(&mut self, locale: impl Into<String>, strings: LocaleStrings) {
        self.locales.insert(locale.into(), strings);
    }

    /// Loaded locale tags, in sorted order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<&StringEntry> {
        let base = locale.split(['-', '_']).next().unwrap_or(locale);
        [locale, base, self.default_locale.as_str()]
            .into_iter()
            .find_map(|tag| self.locales.get(tag)?.entry(key))
    }

    /// Returns the plain message for a key, or `None` for missing keys
    /// and for pluralized entries (use [`StringCatalog::get_plural`]).
    pub fn get(&self, locale: &str, key: &str) -> Option<&str> {
        match self.lookup(locale, key)? {
            StringEntry::Simple(text) => Some(text),
            StringEntry::Plural(_) => None,
        }
    }

    /// Returns the plural form for a key selected by `count` under the
    /// locale's rule.
    pub fn get_plural(&self, locale: &str, key: &str, count: i64) -> Option<&str> {
        match self.lookup(locale, key)? {
            StringEntry::Plural(forms) => {
                let category = PluralRule::for_locale(locale).categorize(count);
                Some(forms.select(category))
            }
            StringEntry::Simple(_) => None,
        }
    }

    /// Looks up a plain message and interpolates `{name}` placeholders.
    ///
    /// Interpolation is a single pass: substituted values are never
    /// re-expanded, and placeholders with no matching argument are left
    /// intact.
    pub fn format(&self, locale: &str, key: &str, args: &[(&str, &str)]) -> Option<String> {
        self.get(locale, key).map(|text| interpolate(text, args))
    }

    /// Looks up a pluralized message, selects the form for `count`, and
    /// interpolates. `{count}` is auto-injected unless the caller
    /// supplies its own `count` argument.
    pub fn format_plural(
        &self,
        locale: &str,
        key: &str,
        count: i64,
        args: &[(&str, &str)],
    ) -> Option<String> {
        let text = self.get_plural(locale, key, count)?;
        let count_value = count.to_string();
        let mut full: Vec<(&str, &str)> = args.to_vec();
        if !args.iter().any(|(name, _)| *name == "count") {
            full.push(("count", &count_value));
        }
        Some(interpolate(text, &full))
    }
}

/// Single-pass `{name}` substitution.
///
/// A `{` with no closing `}` is emitted literally; an unknown name keeps
/// its `{name}` token so missing translations stay visible.
fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                let name = &after[..end];
                match args.iter().find(|(arg, _)| *arg == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> StringCatalog {
        let mut catalog = StringCatalog::new();

        let mut en = LocaleStrings::new();
        en.insert("game.next", "Next player: {player}");
        en.insert_plural(
            "history.moves",
            PluralForms {
                one: "{count} move played".into(),
                other: "{count} moves played".into(),
                ..Default::default()
            },
        );
        catalog.add_locale("en", en);

        let mut fr = LocaleStrings::new();
        fr.insert("game.next", "Prochain joueur : {player}");
        catalog.add_locale("fr", fr);

        catalog
    }

    #[test]
    fn test_format_interpolates() {
        let catalog = catalog();
        assert_eq!(
            catalog.format("en", "game.next", &[("player", "X")]),
            Some("Next player: X".into())
        );
    }

    #[test]
    fn test_missing_arg_keeps_token() {
        let catalog = catalog();
        assert_eq!(
            catalog.format("en", "game.next", &[]),
            Some("Next player: {player}".into())
        );
    }

    #[test]
    fn test_regional_tag_falls_back_to_base_language() {
        let catalog = catalog();
        assert_eq!(
            catalog.format("fr-CA", "game.next", &[("player", "O")]),
            Some("Prochain joueur : O".into())
        );
    }

    #[test]
    fn test_unknown_locale_falls_back_to_default() {
        let catalog = catalog();
        assert_eq!(
            catalog.format("de", "game.next", &[("player", "O")]),
            Some("Next player: O".into())
        );
    }

    #[test]
    fn test_plural_key_not_reachable_via_get() {
        let catalog = catalog();
        assert_eq!(catalog.get("en", "history.moves"), None);
        assert_eq!(catalog.get_plural("en", "game.next", 1), None);
    }

    #[test]
    fn test_format_plural_selects_and_injects_count() {
        let catalog = catalog();
        assert_eq!(
            catalog.format_plural("en", "history.moves", 1, &[]),
            Some("1 move played".into())
        );
        assert_eq!(
            catalog.format_plural("en", "history.moves", 4, &[]),
            Some("4 moves played".into())
        );
        // French pluralizes via the English fallback table but the
        // French rule: 0 is singular.
        assert_eq!(
            catalog.format_plural("fr", "history.moves", 0, &[]),
            Some("0 move played".into())
        );
    }

    #[test]
    fn test_from_toml_str() {
        let table = LocaleStrings::from_toml_str(
            r#"
            [strings]
            "game.title" = "Tic-tac-toe"

            [plurals."history.moves"]
            one = "{count} move played"
            other = "{count} moves played"
            "#,
        )
        .unwrap();
        assert!(matches!(
            table.entry("game.title"),
            Some(StringEntry::Simple(_))
        ));
        assert!(matches!(
            table.entry("history.moves"),
            Some(StringEntry::Plural(_))
        ));
    }

    #[test]
    fn test_from_toml_str_rejects_unknown_tables() {
        assert!(LocaleStrings::from_toml_str("[nonsense]\nkey = \"v\"").is_err());
    }
}
