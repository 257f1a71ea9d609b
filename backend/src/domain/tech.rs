//! Technology entries attached to a user descriptor.
//!
//! An entry is either a bare technology label or a labelled entry carrying an
//! experience score. JSON decoding distinguishes the two shapes explicitly:
//! a string becomes [`TechEntry::Name`] and an object with `title` and
//! `experience` becomes [`TechEntry::Rated`]. Anything else is rejected by
//! serde rather than coerced.

use serde::{Deserialize, Serialize};

/// A technology label paired with an experience score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RatedTech {
    /// Technology label, e.g. `"Javascript"`.
    pub title: String,
    /// Experience score. The scale is caller-defined.
    pub experience: i64,
}

/// One element of a user's technology list.
///
/// # Examples
/// ```
/// use hello_backend::domain::TechEntry;
///
/// let bare = TechEntry::name("Node.js");
/// let rated = TechEntry::rated("Javascript", 100);
/// assert_eq!(bare.title(), "Node.js");
/// assert_eq!(rated.experience(), Some(100));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TechEntry {
    /// A bare technology name.
    Name(String),
    /// A technology name with an experience score.
    Rated(RatedTech),
}

impl TechEntry {
    /// Build a bare entry.
    pub fn name(title: impl Into<String>) -> Self {
        Self::Name(title.into())
    }

    /// Build an entry carrying an experience score.
    pub fn rated(title: impl Into<String>, experience: i64) -> Self {
        Self::Rated(RatedTech {
            title: title.into(),
            experience,
        })
    }

    /// Technology label regardless of variant.
    pub fn title(&self) -> &str {
        match self {
            Self::Name(title) => title.as_str(),
            Self::Rated(rated) => rated.title.as_str(),
        }
    }

    /// Experience score, present only for rated entries.
    pub fn experience(&self) -> Option<i64> {
        match self {
            Self::Name(_) => None,
            Self::Rated(rated) => Some(rated.experience),
        }
    }
}

impl From<&str> for TechEntry {
    fn from(value: &str) -> Self {
        Self::name(value)
    }
}

impl From<RatedTech> for TechEntry {
    fn from(value: RatedTech) -> Self {
        Self::Rated(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn bare_string_decodes_as_name() {
        let entry: TechEntry = serde_json::from_value(json!("ReactJS")).expect("bare entry");
        assert_eq!(entry, TechEntry::name("ReactJS"));
        assert_eq!(entry.experience(), None);
    }

    #[rstest]
    fn object_decodes_as_rated() {
        let entry: TechEntry =
            serde_json::from_value(json!({ "title": "Javascript", "experience": 100 }))
                .expect("rated entry");
        assert_eq!(entry, TechEntry::rated("Javascript", 100));
        assert_eq!(entry.title(), "Javascript");
    }

    #[rstest]
    #[case(json!(42))]
    #[case(json!({ "title": "Rust" }))]
    #[case(json!({ "title": "Rust", "experience": "lots" }))]
    #[case(json!({ "title": "Rust", "experience": 3, "years": 2 }))]
    fn mismatched_shapes_are_rejected(#[case] value: serde_json::Value) {
        assert!(serde_json::from_value::<TechEntry>(value).is_err());
    }

    #[rstest]
    fn serialises_back_to_the_input_shape() {
        let entries = vec![TechEntry::name("Node.js"), TechEntry::rated("Javascript", 100)];
        let value = serde_json::to_value(&entries).expect("serialise entries");
        assert_eq!(
            value,
            json!(["Node.js", { "title": "Javascript", "experience": 100 }])
        );
    }
}
