//! View criteria: the search text, region/state restriction and sort order
//! chosen by the user for one engine run.

use serde::{Serialize, Serializer};

/// Option value that means "no restriction".
pub const ALL_VALUE: &str = "all";

/// A region or state restriction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterChoice {
    #[default]
    All,
    Only(String),
}

impl FilterChoice {
    /// Interprets an option value; `"all"` (or an empty value) lifts the
    /// restriction.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        if value.is_empty() || value == ALL_VALUE {
            Self::All
        } else {
            Self::Only(value.to_owned())
        }
    }

    /// Exact, case-sensitive match.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(value) => value == candidate,
        }
    }

    #[must_use]
    pub fn as_value(&self) -> &str {
        match self {
            Self::All => ALL_VALUE,
            Self::Only(value) => value,
        }
    }

    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl Serialize for FilterChoice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_value())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    State,
    Region,
    /// Descending by id.
    Recent,
}

impl SortKey {
    /// Parses a sort key. Unknown keys fall back to [`SortKey::Name`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "state" => Self::State,
            "region" => Self::Region,
            "recent" => Self::Recent,
            _ => Self::Name,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::State => "state",
            Self::Region => "region",
            Self::Recent => "recent",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Criteria for a single filter/sort pass. Rebuilt from control state on
/// every interaction; [`ViewCriteria::default`] is the reset state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ViewCriteria {
    pub query: String,
    pub region: FilterChoice,
    pub state: FilterChoice,
    pub sort: SortKey,
}

impl ViewCriteria {
    /// The trimmed, lower-cased query, or `None` when it is blank.
    #[must_use]
    pub fn normalized_query(&self) -> Option<String> {
        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_value_lifts_restriction() {
        assert_eq!(FilterChoice::from_value("all"), FilterChoice::All);
        assert_eq!(FilterChoice::from_value(""), FilterChoice::All);
        assert!(FilterChoice::All.matches("anything"));
    }

    #[test]
    fn only_matches_exactly() {
        let choice = FilterChoice::from_value("New York");
        assert!(choice.matches("New York"));
        assert!(!choice.matches("new york"));
        assert!(!choice.matches("New York "));
    }

    #[test]
    fn sort_key_parses_known_values() {
        assert_eq!(SortKey::parse("state"), SortKey::State);
        assert_eq!(SortKey::parse("Region"), SortKey::Region);
        assert_eq!(SortKey::parse("recent"), SortKey::Recent);
        assert_eq!(SortKey::parse("name"), SortKey::Name);
    }

    #[test]
    fn sort_key_unknown_defaults_to_name() {
        assert_eq!(SortKey::parse("distance"), SortKey::Name);
        assert_eq!(SortKey::parse(""), SortKey::Name);
    }

    #[test]
    fn normalized_query_trims_and_lowercases() {
        let criteria = ViewCriteria {
            query: "  Shop A ".to_owned(),
            ..ViewCriteria::default()
        };
        assert_eq!(criteria.normalized_query().as_deref(), Some("shop a"));
    }

    #[test]
    fn blank_query_is_none() {
        let criteria = ViewCriteria {
            query: "   ".to_owned(),
            ..ViewCriteria::default()
        };
        assert!(criteria.normalized_query().is_none());
    }

    #[test]
    fn reset_state_is_default() {
        let criteria = ViewCriteria::default();
        assert!(criteria.region.is_all());
        assert!(criteria.state.is_all());
        assert_eq!(criteria.sort, SortKey::Name);
        assert!(criteria.query.is_empty());
    }
}
