//! Page front matter.
//!
//! ```yaml
//! ---
//! title: Fee Middleware
//! description: Incentivize relayers
//! tags:
//!   - type: concepts
//!   - type: ibc-go
//!     version: v8
//! ---
//! ```

use serde::{Deserialize, Deserializer};

use crate::components::HIGHLIGHT_TAG_TAG;
use crate::node::{Element, Node};

/// Metadata from the leading YAML block of a page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Tag badges shown at the top of the page.
    pub tags: Vec<PageTag>,
}

/// A tag badge declared in front matter.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PageTag {
    #[serde(rename = "type")]
    pub kind: String,
    /// Accepts strings and numbers (`version: 10`).
    #[serde(default, deserialize_with = "scalar_string")]
    pub version: Option<String>,
}

impl FrontMatter {
    /// Parse front matter YAML. Empty content gives the default.
    ///
    /// # Errors
    ///
    /// Returns the YAML error when the content is malformed.
    pub fn parse(yaml: &str) -> Result<Self, serde_yaml::Error> {
        let trimmed = yaml.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(trimmed)
    }

    /// `div.page-tags` holding one `highlight-tag` element per tag.
    #[must_use]
    pub fn tags_element(&self) -> Option<Element> {
        if self.tags.is_empty() {
            return None;
        }
        let tags = self.tags.iter().map(|tag| {
            let mut el = Element::new(HIGHLIGHT_TAG_TAG).with_attr("type", tag.kind.as_str());
            if let Some(version) = &tag.version {
                el.set_attr("version", version.as_str());
            }
            Node::from(el)
        });
        Some(
            Element::new("div")
                .with_attr("class", "page-tags")
                .with_children(tags),
        )
    }
}

fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_yaml::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_yaml::Value::String(s)) => Some(s),
        Some(serde_yaml::Value::Number(n)) => Some(n.to_string()),
        Some(serde_yaml::Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_front_matter() {
        let fm = FrontMatter::parse(
            "title: Fee Middleware\ndescription: Incentivize relayers\ntags:\n  - type: concepts\n  - type: ibc-go\n    version: v8\n",
        )
        .unwrap();
        assert_eq!(fm.title.as_deref(), Some("Fee Middleware"));
        assert_eq!(fm.description.as_deref(), Some("Incentivize relayers"));
        assert_eq!(
            fm.tags,
            vec![
                PageTag { kind: "concepts".to_owned(), version: None },
                PageTag { kind: "ibc-go".to_owned(), version: Some("v8".to_owned()) },
            ]
        );
    }

    #[test]
    fn test_numeric_version() {
        let fm = FrontMatter::parse("tags:\n  - type: cosmwasm\n    version: 2\n").unwrap();
        assert_eq!(fm.tags[0].version.as_deref(), Some("2"));
    }

    #[test]
    fn test_empty_is_default() {
        assert_eq!(FrontMatter::parse("  \n").unwrap(), FrontMatter::default());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let fm = FrontMatter::parse("title: X\nsidebar_position: 3\n").unwrap();
        assert_eq!(fm.title.as_deref(), Some("X"));
    }

    #[test]
    fn test_malformed_is_error() {
        assert!(FrontMatter::parse("tags: [unclosed").is_err());
        assert!(FrontMatter::parse("tags:\n  - version: v1\n").is_err());
    }

    #[test]
    fn test_tags_element() {
        let fm = FrontMatter {
            tags: vec![PageTag {
                kind: "concepts".to_owned(),
                version: Some("v10".to_owned()),
            }],
            ..FrontMatter::default()
        };
        assert_eq!(
            Node::from(fm.tags_element().unwrap()).to_html(),
            r#"<div class="page-tags"><highlight-tag type="concepts" version="v10"></highlight-tag></div>"#
        );
        assert!(FrontMatter::default().tags_element().is_none());
    }
}
