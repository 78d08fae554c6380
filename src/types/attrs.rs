use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Recognized header-cell attributes.
///
/// The named variants are the interactive/accessibility attributes that
/// follow a column when its header is split into two rows. Anything else
/// is carried as [`HeaderAttr::Other`] and never relocated.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HeaderAttr {
    /// `data-name`: the stable field name the column is looked up by
    FieldName,
    /// `title`
    Tooltip,
    /// `data-original-title`: tooltip text stashed by the tooltip widget
    TooltipTemplate,
    /// `aria-sort`
    SortState,
    /// `class`
    CssClass,
    /// Any other attribute, by its markup name
    Other(String),
}

impl HeaderAttr {
    /// Attributes moved from a group cell to its generated child cell.
    pub const RELOCATED: [HeaderAttr; 5] = [
        HeaderAttr::FieldName,
        HeaderAttr::TooltipTemplate,
        HeaderAttr::SortState,
        HeaderAttr::Tooltip,
        HeaderAttr::CssClass,
    ];

    /// Markup attribute name
    pub fn as_str(&self) -> &str {
        match self {
            HeaderAttr::FieldName => "data-name",
            HeaderAttr::Tooltip => "title",
            HeaderAttr::TooltipTemplate => "data-original-title",
            HeaderAttr::SortState => "aria-sort",
            HeaderAttr::CssClass => "class",
            HeaderAttr::Other(name) => name,
        }
    }

    /// Whether the attribute follows a column into the second header row
    pub fn is_relocated(&self) -> bool {
        !matches!(self, HeaderAttr::Other(_))
    }
}

impl From<String> for HeaderAttr {
    fn from(name: String) -> Self {
        match name.as_str() {
            "data-name" => HeaderAttr::FieldName,
            "title" => HeaderAttr::Tooltip,
            "data-original-title" => HeaderAttr::TooltipTemplate,
            "aria-sort" => HeaderAttr::SortState,
            "class" => HeaderAttr::CssClass,
            _ => HeaderAttr::Other(name),
        }
    }
}

impl From<&str> for HeaderAttr {
    fn from(name: &str) -> Self {
        HeaderAttr::from(name.to_string())
    }
}

impl From<HeaderAttr> for String {
    fn from(attr: HeaderAttr) -> Self {
        match attr {
            HeaderAttr::Other(name) => name,
            named => named.as_str().to_string(),
        }
    }
}

/// Attribute bag of a header cell.
///
/// Ordered by key so two bags with the same content compare and serialize
/// identically regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(BTreeMap<HeaderAttr, String>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, attr: &HeaderAttr) -> Option<&str> {
        self.0.get(attr).map(String::as_str)
    }

    pub fn contains(&self, attr: &HeaderAttr) -> bool {
        self.0.contains_key(attr)
    }

    /// Set an attribute, replacing any previous value.
    pub fn set(&mut self, attr: HeaderAttr, value: impl Into<String>) {
        self.0.insert(attr, value.into());
    }

    pub fn remove(&mut self, attr: &HeaderAttr) -> Option<String> {
        self.0.remove(attr)
    }

    /// Builder-style [`Attributes::set`].
    #[must_use]
    pub fn with(mut self, attr: HeaderAttr, value: impl Into<String>) -> Self {
        self.set(attr, value);
        self
    }

    /// Remove every relocatable attribute and return them as a new bag.
    ///
    /// Empty values count as absent, so they are dropped rather than moved.
    pub fn take_relocated(&mut self) -> Attributes {
        let mut moved = Attributes::new();
        for attr in HeaderAttr::RELOCATED {
            if let Some(value) = self.0.remove(&attr) {
                if !value.is_empty() {
                    moved.0.insert(attr, value);
                }
            }
        }
        moved
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&HeaderAttr, &str)> {
        self.0.iter().map(|(k, v)| (k, v.as_str()))
    }
}

impl FromIterator<(HeaderAttr, String)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (HeaderAttr, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_names_round_trip() {
        for attr in HeaderAttr::RELOCATED {
            let name: String = attr.clone().into();
            assert_eq!(HeaderAttr::from(name), attr);
            assert!(attr.is_relocated());
        }
        assert_eq!(
            HeaderAttr::from("data-foo"),
            HeaderAttr::Other("data-foo".to_string())
        );
        assert!(!HeaderAttr::from("data-foo").is_relocated());
    }

    #[test]
    fn test_take_relocated_leaves_other_keys() {
        let mut attrs = Attributes::new()
            .with(HeaderAttr::FieldName, "amount")
            .with(HeaderAttr::SortState, "ascending")
            .with(HeaderAttr::Other("style".into()), "color: red");

        let moved = attrs.take_relocated();

        assert_eq!(moved.get(&HeaderAttr::FieldName), Some("amount"));
        assert_eq!(moved.get(&HeaderAttr::SortState), Some("ascending"));
        assert_eq!(moved.len(), 2);
        assert_eq!(attrs.len(), 1);
        assert!(attrs.contains(&HeaderAttr::Other("style".into())));
    }

    #[test]
    fn test_empty_value_is_not_moved() {
        let mut attrs = Attributes::new().with(HeaderAttr::Tooltip, "");
        let moved = attrs.take_relocated();
        assert!(moved.is_empty());
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_serializes_as_markup_map() {
        let attrs = Attributes::new()
            .with(HeaderAttr::CssClass, "o_column_sortable")
            .with(HeaderAttr::FieldName, "name");
        let json = serde_json::to_value(&attrs).unwrap();
        assert_eq!(json["class"], "o_column_sortable");
        assert_eq!(json["data-name"], "name");

        let back: Attributes = serde_json::from_value(json).unwrap();
        assert_eq!(back, attrs);
    }
}
