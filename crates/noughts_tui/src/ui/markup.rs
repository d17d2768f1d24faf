//! Minimal `<b>…</b>` markup for localized strings.
//!
//! Translations may emphasize fragments; the catalog hands back plain
//! strings and this module turns them into styled spans.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Splits a string on `<b>`/`</b>` tags into a line of styled spans.
///
/// Tags never nest in our catalogs; an unclosed `<b>` emphasizes the rest
/// of the string.
pub fn styled_line(text: &str, base: Style) -> Line<'static> {
    let bold = base.add_modifier(Modifier::BOLD);
    let mut spans = Vec::new();
    let mut rest = text;
    let mut emphasized = false;
    loop {
        let tag = if emphasized { "</b>" } else { "<b>" };
        let style = if emphasized { bold } else { base };
        match rest.find(tag) {
            Some(pos) => {
                if pos > 0 {
                    spans.push(Span::styled(rest[..pos].to_string(), style));
                }
                rest = &rest[pos + tag.len()..];
                emphasized = !emphasized;
            }
            None => {
                if !rest.is_empty() {
                    spans.push(Span::styled(rest.to_string(), style));
                }
                break;
            }
        }
    }
    Line::from(spans)
}
