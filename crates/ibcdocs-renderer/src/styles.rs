//! Static style tables for highlight boxes and tag badges.
//!
//! Each category key maps to exactly one descriptor. Lookups never fail:
//! an unknown key resolves to the table's default entry and the returned
//! [`Lookup`] records that the fallback was taken.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Key used when a highlight box type is unknown.
pub const DEFAULT_BOX_KEY: &str = "info";

/// Key used when a tag type is unknown.
pub const DEFAULT_TAG_KEY: &str = "ibc-go";

/// Visual descriptor of a highlight box category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoxStyle {
    /// Gradient start color.
    pub color1: &'static str,
    /// Gradient end color.
    pub color2: &'static str,
    /// Icon URL.
    pub icon: &'static str,
    /// Dark gradient: text and icon are rendered light.
    pub dark_mode: bool,
}

/// Visual descriptor of a tag badge category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TagStyle {
    /// Background color.
    pub color: &'static str,
    /// Badge label.
    pub label: &'static str,
    /// Bright background: text is rendered dark.
    pub bright: bool,
}

const fn boxed(
    color1: &'static str,
    color2: &'static str,
    icon: &'static str,
    dark_mode: bool,
) -> BoxStyle {
    BoxStyle {
        color1,
        color2,
        icon,
        dark_mode,
    }
}

const fn tag(color: &'static str, label: &'static str, bright: bool) -> TagStyle {
    TagStyle {
        color,
        label,
        bright,
    }
}

/// Highlight box categories in display order.
pub const BOX_STYLES: &[(&str, BoxStyle)] = &[
    ("tip", boxed("#F46800", "#F24CF4", "/img/icons/hi-tip-icon.svg", true)),
    ("reading", boxed("#7D5CF2", "#C28AFF", "/img/icons/hi-reading-icon.svg", true)),
    ("info", boxed("#336667", "#00B067", "/img/icons/hi-info-icon.svg", true)),
    ("warn", boxed("#FF7A00", "#FFD200", "/img/icons/hi-warn-icon.svg", false)),
    ("warning", boxed("#FF7A00", "#FFD200", "/img/icons/hi-warn-icon.svg", false)),
    ("synopsis", boxed("#2E3148", "#5064FB", "/img/icons/hi-synopsis-icon.svg", true)),
    ("prerequisite", boxed("#D9EAFF", "#B4C6FF", "/img/icons/hi-prerequisite-icon.svg", false)),
    ("learning", boxed("#FFB5DE", "#FFE7C2", "/img/icons/hi-target-icon.svg", false)),
    ("best-practice", boxed("#00B067", "#A3F5A0", "/img/icons/hi-star-icon.svg", false)),
    ("remember", boxed("#FFE7C2", "#FFD200", "/img/icons/hi-pin-icon.svg", false)),
    ("note", boxed("#E6E8F0", "#C7CCE0", "/img/icons/hi-note-icon.svg", false)),
    ("docs", boxed("#2E3148", "#6874BD", "/img/icons/hi-docs-icon.svg", true)),
];

/// Tag badge categories in display order.
pub const TAG_STYLES: &[(&str, TagStyle)] = &[
    ("devops", tag("#54FFE0", "DevOps", true)),
    ("cosmos-sdk", tag("#5064FB", "Cosmos SDK", false)),
    ("ibc-go", tag("#C1E4FF", "IBC-Go", true)),
    ("cosmjs", tag("#6836D0", "CosmJS", false)),
    ("cosmwasm", tag("#05BDFC", "CosmWasm", true)),
    ("cometbft", tag("#00B067", "CometBFT", false)),
    ("cosmos-hub", tag("#2E3148", "Cosmos Hub", false)),
    ("concepts", tag("#AABAFF", "Concept", true)),
    ("tutorial", tag("#F46800", "Tutorial", false)),
    ("guided-coding", tag("#F24CF4", "Guided Coding", false)),
];

static BOX_INDEX: LazyLock<HashMap<&'static str, &'static BoxStyle>> =
    LazyLock::new(|| BOX_STYLES.iter().map(|(k, v)| (*k, v)).collect());

static TAG_INDEX: LazyLock<HashMap<&'static str, &'static TagStyle>> =
    LazyLock::new(|| TAG_STYLES.iter().map(|(k, v)| (*k, v)).collect());

/// Result of a style table lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lookup<T: 'static> {
    /// Key of the descriptor that was used.
    pub key: &'static str,
    /// The descriptor.
    pub style: &'static T,
    /// Whether the requested key was unknown and the default was used.
    pub fallback: bool,
}

/// Look up a highlight box style, falling back to `info`.
///
/// ```
/// use ibcdocs_renderer::styles::box_style;
///
/// let hit = box_style("tip");
/// assert!(!hit.fallback);
///
/// let miss = box_style("Tip");
/// assert!(miss.fallback);
/// assert_eq!(miss.key, "info");
/// ```
#[must_use]
pub fn box_style(key: &str) -> Lookup<BoxStyle> {
    lookup(&BOX_INDEX, key, DEFAULT_BOX_KEY)
}

/// Look up a tag style, falling back to `ibc-go`.
#[must_use]
pub fn tag_style(key: &str) -> Lookup<TagStyle> {
    lookup(&TAG_INDEX, key, DEFAULT_TAG_KEY)
}

fn lookup<T>(
    index: &HashMap<&'static str, &'static T>,
    key: &str,
    default_key: &'static str,
) -> Lookup<T> {
    if let Some((&found_key, &style)) = index.get_key_value(key) {
        return Lookup {
            key: found_key,
            style,
            fallback: false,
        };
    }
    let style = index[default_key];
    Lookup {
        key: default_key,
        style,
        fallback: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_box_keys_unique() {
        let keys: HashSet<_> = BOX_STYLES.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys.len(), BOX_STYLES.len());
        assert_eq!(keys.len(), 12);
    }

    #[test]
    fn test_tag_keys_unique() {
        let keys: HashSet<_> = TAG_STYLES.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys.len(), TAG_STYLES.len());
        assert_eq!(keys.len(), 10);
    }

    #[test]
    fn test_defaults_present() {
        assert!(BOX_STYLES.iter().any(|(k, _)| *k == DEFAULT_BOX_KEY));
        assert!(TAG_STYLES.iter().any(|(k, _)| *k == DEFAULT_TAG_KEY));
    }

    #[test]
    fn test_every_box_key_resolves_to_itself() {
        for (key, style) in BOX_STYLES {
            let found = box_style(key);
            assert!(!found.fallback, "{key} fell back");
            assert_eq!(found.key, *key);
            assert_eq!(found.style, style);
        }
    }

    #[test]
    fn test_every_tag_key_resolves_to_itself() {
        for (key, style) in TAG_STYLES {
            let found = tag_style(key);
            assert!(!found.fallback, "{key} fell back");
            assert_eq!(found.style, style);
        }
    }

    #[test]
    fn test_info_descriptor() {
        let info = box_style("info").style;
        assert_eq!(info.color1, "#336667");
        assert_eq!(info.color2, "#00B067");
        assert!(info.dark_mode);
    }

    #[test]
    fn test_unknown_box_key_falls_back_to_info() {
        let found = box_style("unknown-key");
        assert!(found.fallback);
        assert_eq!(found.key, "info");
        assert_eq!(found.style, box_style("info").style);
    }

    #[test]
    fn test_box_lookup_is_case_sensitive() {
        assert!(box_style("TIP").fallback);
        assert!(box_style("").fallback);
    }

    #[test]
    fn test_concepts_descriptor() {
        let concepts = tag_style("concepts").style;
        assert_eq!(concepts.color, "#AABAFF");
        assert_eq!(concepts.label, "Concept");
        assert!(concepts.bright);
    }

    #[test]
    fn test_unknown_tag_key_falls_back_to_ibc_go() {
        let found = tag_style("rust");
        assert!(found.fallback);
        assert_eq!(found.key, "ibc-go");
        assert_eq!(found.style.label, "IBC-Go");
    }
}
