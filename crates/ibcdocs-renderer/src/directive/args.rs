//! Directive argument parsing.
//!
//! Parses the `[content]{#id .class key="value"}` part of a directive.

use std::collections::HashMap;

use super::parser::is_name_char;

/// Parsed arguments of a directive.
///
/// ```
/// use ibcdocs_renderer::directive::DirectiveArgs;
///
/// let args = DirectiveArgs::parse("Fee middleware", r#"#fees .wide type="tip""#);
/// assert_eq!(args.content, "Fee middleware");
/// assert_eq!(args.id.as_deref(), Some("fees"));
/// assert_eq!(args.classes, vec!["wide"]);
/// assert_eq!(args.get("type"), Some("tip"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectiveArgs {
    /// Bracket content: `[content]`. Empty when absent.
    pub content: String,
    /// `{#id}`.
    pub id: Option<String>,
    /// `{.class}` entries in order.
    pub classes: Vec<String>,
    /// `{key="value"}` entries.
    pub attrs: HashMap<String, String>,
}

impl DirectiveArgs {
    /// Parse bracket content and the attribute string (without braces).
    ///
    /// Values may be double-quoted, single-quoted or bare. Characters that
    /// start no recognized token are skipped.
    #[must_use]
    pub fn parse(content: &str, attrs_str: &str) -> Self {
        let mut args = Self {
            content: content.to_owned(),
            ..Default::default()
        };

        let mut remaining = attrs_str.trim();
        while !remaining.is_empty() {
            remaining = remaining.trim_start();
            if let Some(rest) = remaining.strip_prefix('#') {
                let (token, rest) = split_selector(rest);
                args.id = Some(token.to_owned());
                remaining = rest;
            } else if let Some(rest) = remaining.strip_prefix('.') {
                let (token, rest) = split_selector(rest);
                if !token.is_empty() {
                    args.classes.push(token.to_owned());
                }
                remaining = rest;
            } else if let Some((key, value, rest)) = parse_key_value(remaining) {
                args.attrs.insert(key.to_owned(), value.to_owned());
                remaining = rest;
            } else {
                let skip = remaining.chars().next().map_or(0, char::len_utf8);
                remaining = &remaining[skip..];
            }
        }

        args
    }

    /// Get an attribute value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// Key-value attributes sorted by key.
    #[must_use]
    pub fn sorted_attrs(&self) -> Vec<(&str, &str)> {
        let mut attrs: Vec<_> = self
            .attrs
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        attrs.sort_unstable();
        attrs
    }
}

/// Split an `#id` or `.class` token from the rest of the attribute string.
fn split_selector(s: &str) -> (&str, &str) {
    let end = s
        .find(|c: char| c.is_whitespace() || c == '.' || c == '#')
        .unwrap_or(s.len());
    s.split_at(end)
}

/// Parse `key="value"`, `key='value'` or `key=value`.
fn parse_key_value(s: &str) -> Option<(&str, &str, &str)> {
    let eq_pos = s.find('=')?;
    let key = s[..eq_pos].trim();
    if key.is_empty() || !key.chars().all(is_name_char) {
        return None;
    }

    let after_eq = &s[eq_pos + 1..];
    for quote in ['"', '\''] {
        if let Some(stripped) = after_eq.strip_prefix(quote) {
            let end = stripped.find(quote)?;
            return Some((key, &stripped[..end], &stripped[end + 1..]));
        }
    }

    let end = after_eq.find(char::is_whitespace).unwrap_or(after_eq.len());
    Some((key, &after_eq[..end], &after_eq[end..]))
}
