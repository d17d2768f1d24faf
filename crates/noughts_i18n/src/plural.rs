//! Plural categories, rules, and per-category message forms.
//!
//! Rules follow the CLDR cardinal families for the shipped locales.
//! Counts are categorized by absolute value, so "-1 item" pluralizes like
//! "1 item".

use serde::{Deserialize, Serialize};

/// CLDR-style plural category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    /// Explicit zero form (Arabic).
    Zero,
    /// Singular.
    One,
    /// Dual (Arabic).
    Two,
    /// Paucal (Slavic 2-4, Arabic 3-10).
    Few,
    /// Large-count form (Slavic, Arabic 11-99).
    Many,
    /// Default form; every rule can produce it and every message has it.
    Other,
}

/// Built-in plural rule families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralRule {
    /// One for |n| == 1, Other otherwise.
    English,
    /// One for |n| <= 1, Other otherwise.
    French,
    /// One/Few/Many by the mod-10/mod-100 tables.
    Russian,
    /// Zero/One/Two/Few/Many/Other.
    Arabic,
    /// Like Russian but One is exactly 1.
    Polish,
    /// No plural distinction; always Other.
    CJK,
}

impl PluralRule {
    /// Picks the rule for a locale tag. Unknown languages fall back to
    /// [`PluralRule::English`]; never panics.
    pub fn for_locale(locale: &str) -> Self {
        let lang = locale
            .split(['-', '_'])
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        match lang.as_str() {
            "fr" => PluralRule::French,
            "ru" | "uk" => PluralRule::Russian,
            "pl" => PluralRule::Polish,
            "ar" => PluralRule::Arabic,
            "ja" | "zh" | "ko" | "th" | "vi" => PluralRule::CJK,
            _ => PluralRule::English,
        }
    }

    /// Categorizes a count. Negative counts categorize like their
    /// absolute value.
    pub fn categorize(self, count: i64) -> PluralCategory {
        let n = count.unsigned_abs();
        match self {
            PluralRule::English => {
                if n == 1 {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            PluralRule::French => {
                if n <= 1 {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            PluralRule::CJK => PluralCategory::Other,
            PluralRule::Russian => {
                let (m10, m100) = (n % 10, n % 100);
                if m10 == 1 && m100 != 11 {
                    PluralCategory::One
                } else if (2..=4).contains(&m10) && !(12..=14).contains(&m100) {
                    PluralCategory::Few
                } else {
                    PluralCategory::Many
                }
            }
            PluralRule::Polish => {
                let (m10, m100) = (n % 10, n % 100);
                if n == 1 {
                    PluralCategory::One
                } else if (2..=4).contains(&m10) && !(12..=14).contains(&m100) {
                    PluralCategory::Few
                } else {
                    PluralCategory::Many
                }
            }
            PluralRule::Arabic => match n {
                0 => PluralCategory::Zero,
                1 => PluralCategory::One,
                2 => PluralCategory::Two,
                _ => {
                    let m100 = n % 100;
                    if (3..=10).contains(&m100) {
                        PluralCategory::Few
                    } else if (11..=99).contains(&m100) {
                        PluralCategory::Many
                    } else {
                        PluralCategory::Other
                    }
                }
            },
        }
    }
}

/// Message strings per plural category.
///
/// Only `one` and `other` are required in practice; an empty form falls
/// back to `other` on selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluralForms {
    /// Zero form.
    pub zero: String,
    /// Singular form.
    pub one: String,
    /// Dual form.
    pub two: String,
    /// Paucal form.
    pub few: String,
    /// Large-count form.
    pub many: String,
    /// Default form.
    pub other: String,
}

impl PluralForms {
    /// Selects the message for a category, falling back to `other` when
    /// the category's form is missing.
    pub fn select(&self, category: PluralCategory) -> &str {
        let form = match category {
            PluralCategory::Zero => &self.zero,
            PluralCategory::One => &self.one,
            PluralCategory::Two => &self.two,
            PluralCategory::Few => &self.few,
            PluralCategory::Many => &self.many,
            PluralCategory::Other => &self.other,
        };
        if form.is_empty() { &self.other } else { form }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_rule() {
        assert_eq!(PluralRule::English.categorize(1), PluralCategory::One);
        assert_eq!(PluralRule::English.categorize(-1), PluralCategory::One);
        assert_eq!(PluralRule::English.categorize(0), PluralCategory::Other);
        assert_eq!(PluralRule::English.categorize(7), PluralCategory::Other);
    }

    #[test]
    fn test_french_zero_is_singular() {
        assert_eq!(PluralRule::French.categorize(0), PluralCategory::One);
        assert_eq!(PluralRule::French.categorize(1), PluralCategory::One);
        assert_eq!(PluralRule::French.categorize(2), PluralCategory::Other);
    }

    #[test]
    fn test_russian_tables() {
        assert_eq!(PluralRule::Russian.categorize(1), PluralCategory::One);
        assert_eq!(PluralRule::Russian.categorize(21), PluralCategory::One);
        assert_eq!(PluralRule::Russian.categorize(11), PluralCategory::Many);
        assert_eq!(PluralRule::Russian.categorize(3), PluralCategory::Few);
        assert_eq!(PluralRule::Russian.categorize(14), PluralCategory::Many);
        assert_eq!(PluralRule::Russian.categorize(0), PluralCategory::Many);
    }

    #[test]
    fn test_arabic_small_counts() {
        assert_eq!(PluralRule::Arabic.categorize(0), PluralCategory::Zero);
        assert_eq!(PluralRule::Arabic.categorize(1), PluralCategory::One);
        assert_eq!(PluralRule::Arabic.categorize(2), PluralCategory::Two);
        assert_eq!(PluralRule::Arabic.categorize(5), PluralCategory::Few);
        assert_eq!(PluralRule::Arabic.categorize(15), PluralCategory::Many);
        assert_eq!(PluralRule::Arabic.categorize(100), PluralCategory::Other);
    }

    #[test]
    fn test_for_locale_tags() {
        assert_eq!(PluralRule::for_locale("en"), PluralRule::English);
        assert_eq!(PluralRule::for_locale("en-US"), PluralRule::English);
        assert_eq!(PluralRule::for_locale("fr_CA"), PluralRule::French);
        assert_eq!(PluralRule::for_locale("zh-Hans"), PluralRule::CJK);
        assert_eq!(PluralRule::for_locale(""), PluralRule::English);
        assert_eq!(PluralRule::for_locale("xx-unknown"), PluralRule::English);
    }

    #[test]
    fn test_select_falls_back_to_other() {
        let forms = PluralForms {
            one: "one move".into(),
            other: "many moves".into(),
            ..Default::default()
        };
        assert_eq!(forms.select(PluralCategory::One), "one move");
        assert_eq!(forms.select(PluralCategory::Few), "many moves");
        assert_eq!(forms.select(PluralCategory::Zero), "many moves");
    }
}
