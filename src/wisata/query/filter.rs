//! Axis filtering.
//!
//! One parameterized filter covers all four axes. [`ConjunctiveFilter`]
//! combines any two of them; [`Selection`] picks between the two forms from
//! whatever the caller supplied.

use crate::error::{Result, WisataError};
use crate::model::{Attraction, Axis};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a stored axis value is compared with the requested one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Case-sensitive byte equality.
    #[default]
    Exact,
    /// Equality after trimming and lowercasing both sides.
    Normalized,
}

impl MatchMode {
    pub fn matches(&self, stored: &str, wanted: &str) -> bool {
        match self {
            MatchMode::Exact => stored == wanted,
            MatchMode::Normalized => stored.trim().to_lowercase() == wanted.trim().to_lowercase(),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Exact => f.write_str("exact"),
            MatchMode::Normalized => f.write_str("normalized"),
        }
    }
}

impl FromStr for MatchMode {
    type Err = WisataError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "exact" => Ok(MatchMode::Exact),
            "normalized" => Ok(MatchMode::Normalized),
            other => Err(WisataError::InvalidInput(format!(
                "Unknown match mode: {} (expected exact or normalized)",
                other
            ))),
        }
    }
}

/// Equality condition on one axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisFilter {
    pub axis: Axis,
    pub value: String,
}

impl AxisFilter {
    pub fn new(axis: Axis, value: impl Into<String>) -> Self {
        Self {
            axis,
            value: value.into(),
        }
    }

    /// Records lacking the field never match.
    pub fn matches(&self, record: &Attraction, mode: MatchMode) -> bool {
        record
            .axis_value(self.axis)
            .is_some_and(|stored| mode.matches(stored, &self.value))
    }

    /// Keep the matching records, in input order.
    pub fn apply<I>(&self, records: I, mode: MatchMode) -> Vec<Attraction>
    where
        I: IntoIterator<Item = Attraction>,
    {
        records
            .into_iter()
            .filter(|r| self.matches(r, mode))
            .collect()
    }
}

impl fmt::Display for AxisFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=\"{}\"", self.axis, self.value)
    }
}

/// Two axis filters that must both match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConjunctiveFilter {
    primary: AxisFilter,
    secondary: AxisFilter,
}

impl ConjunctiveFilter {
    /// Build from caller-supplied filters. Filters with a blank value are
    /// dropped first; exactly two on distinct axes must remain.
    pub fn new(filters: Vec<AxisFilter>) -> Result<Self> {
        let filters = supplied(filters);
        let count = filters.len();
        let mut filters = filters.into_iter();
        let (primary, secondary) = match (filters.next(), filters.next(), filters.next()) {
            (Some(primary), Some(secondary), None) => (primary, secondary),
            _ => {
                return Err(WisataError::InvalidFilterCombination(format!(
                    "expected exactly two axes, got {}",
                    count
                )))
            }
        };
        if primary.axis == secondary.axis {
            return Err(WisataError::InvalidFilterCombination(format!(
                "axis {} given twice",
                primary.axis
            )));
        }
        Ok(Self { primary, secondary })
    }

    pub fn axes(&self) -> (Axis, Axis) {
        (self.primary.axis, self.secondary.axis)
    }

    /// The primary filter drives the pass; the secondary is checked only on
    /// what survives it.
    pub fn apply<I>(&self, records: I, mode: MatchMode) -> Vec<Attraction>
    where
        I: IntoIterator<Item = Attraction>,
    {
        let mut matched = self.primary.apply(records, mode);
        matched.retain(|r| self.secondary.matches(r, mode));
        matched
    }
}

impl fmt::Display for ConjunctiveFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} and {}", self.primary, self.secondary)
    }
}

/// The filter a lookup request resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Single(AxisFilter),
    Pair(ConjunctiveFilter),
}

impl Selection {
    /// One supplied axis selects an exact-match filter, two a conjunctive
    /// one. Anything else is an invalid combination.
    pub fn from_filters(filters: Vec<AxisFilter>) -> Result<Self> {
        let mut filters = supplied(filters);
        match filters.len() {
            1 => Ok(Selection::Single(filters.remove(0))),
            2 => ConjunctiveFilter::new(filters).map(Selection::Pair),
            n => Err(WisataError::InvalidFilterCombination(format!(
                "expected one or two axes, got {}",
                n
            ))),
        }
    }

    pub fn apply<I>(&self, records: I, mode: MatchMode) -> Vec<Attraction>
    where
        I: IntoIterator<Item = Attraction>,
    {
        match self {
            Selection::Single(filter) => filter.apply(records, mode),
            Selection::Pair(filter) => filter.apply(records, mode),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Single(filter) => filter.fmt(f),
            Selection::Pair(filter) => filter.fmt(f),
        }
    }
}

fn supplied(filters: Vec<AxisFilter>) -> Vec<AxisFilter> {
    filters
        .into_iter()
        .filter(|f| !f.value.trim().is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::AttractionStore;

    fn catalog() -> Vec<Attraction> {
        let store = StoreFixture::new().with_sample_catalog().store;
        store.scan().unwrap().collect()
    }

    fn ids(records: &[Attraction]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn single_axis_keeps_scan_order() {
        let filter = AxisFilter::new(Axis::Environment, "coastal");
        let matched = filter.apply(catalog(), MatchMode::Exact);
        assert_eq!(ids(&matched), vec!["r1", "r2"]);
    }

    #[test]
    fn single_axis_no_match_is_empty() {
        let filter = AxisFilter::new(Axis::Scenery, "waterfall");
        assert!(filter.apply(catalog(), MatchMode::Exact).is_empty());
    }

    #[test]
    fn exact_mode_is_case_sensitive() {
        let filter = AxisFilter::new(Axis::Name, "beach x");
        assert!(filter.apply(catalog(), MatchMode::Exact).is_empty());

        let matched = filter.apply(catalog(), MatchMode::Normalized);
        assert_eq!(ids(&matched), vec!["r1"]);
    }

    #[test]
    fn normalized_mode_ignores_surrounding_whitespace() {
        let filter = AxisFilter::new(Axis::Environment, "  Coastal ");
        assert_eq!(filter.apply(catalog(), MatchMode::Normalized).len(), 2);
    }

    #[test]
    fn missing_field_never_matches() {
        let record = Attraction::with_id("x", "Unclassified");
        assert!(!AxisFilter::new(Axis::Category, "").matches(&record, MatchMode::Exact));
    }

    #[test]
    fn conjunctive_matches_both_axes() {
        let filter = ConjunctiveFilter::new(vec![
            AxisFilter::new(Axis::Environment, "coastal"),
            AxisFilter::new(Axis::Category, "nature"),
        ])
        .unwrap();
        assert_eq!(ids(&filter.apply(catalog(), MatchMode::Exact)), vec!["r1", "r2"]);

        let filter = ConjunctiveFilter::new(vec![
            AxisFilter::new(Axis::Environment, "coastal"),
            AxisFilter::new(Axis::Category, "culture"),
        ])
        .unwrap();
        assert!(filter.apply(catalog(), MatchMode::Exact).is_empty());
    }

    #[test]
    fn conjunctive_is_commutative() {
        let pairs = [
            (AxisFilter::new(Axis::Name, "Museum Z"), AxisFilter::new(Axis::Category, "culture")),
            (AxisFilter::new(Axis::Environment, "coastal"), AxisFilter::new(Axis::Name, "Beach Y")),
            (AxisFilter::new(Axis::Environment, "urban"), AxisFilter::new(Axis::Category, "nature")),
        ];

        for (a, b) in pairs {
            let ab = ConjunctiveFilter::new(vec![a.clone(), b.clone()]).unwrap();
            let ba = ConjunctiveFilter::new(vec![b, a]).unwrap();

            let mut left = ids(&ab.apply(catalog(), MatchMode::Exact))
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>();
            let mut right = ids(&ba.apply(catalog(), MatchMode::Exact))
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>();
            left.sort();
            right.sort();
            assert_eq!(left, right);
        }
    }

    #[test]
    fn conjunctive_rejects_wrong_counts() {
        let one = vec![AxisFilter::new(Axis::Name, "Beach X")];
        assert!(matches!(
            ConjunctiveFilter::new(one),
            Err(WisataError::InvalidFilterCombination(_))
        ));

        let three = vec![
            AxisFilter::new(Axis::Name, "Beach X"),
            AxisFilter::new(Axis::Environment, "coastal"),
            AxisFilter::new(Axis::Category, "nature"),
        ];
        assert!(matches!(
            ConjunctiveFilter::new(three),
            Err(WisataError::InvalidFilterCombination(_))
        ));

        assert!(matches!(
            ConjunctiveFilter::new(Vec::new()),
            Err(WisataError::InvalidFilterCombination(_))
        ));
    }

    #[test]
    fn conjunctive_rejects_repeated_axis() {
        let filters = vec![
            AxisFilter::new(Axis::Environment, "coastal"),
            AxisFilter::new(Axis::Environment, "urban"),
        ];
        assert!(matches!(
            ConjunctiveFilter::new(filters),
            Err(WisataError::InvalidFilterCombination(_))
        ));
    }

    #[test]
    fn blank_values_do_not_count_as_supplied() {
        let filters = vec![
            AxisFilter::new(Axis::Environment, "coastal"),
            AxisFilter::new(Axis::Scenery, "  "),
        ];
        assert!(ConjunctiveFilter::new(filters.clone()).is_err());
        assert!(matches!(
            Selection::from_filters(filters).unwrap(),
            Selection::Single(_)
        ));
    }

    #[test]
    fn selection_picks_form_by_count() {
        let pair = Selection::from_filters(vec![
            AxisFilter::new(Axis::Environment, "coastal"),
            AxisFilter::new(Axis::Category, "nature"),
        ])
        .unwrap();
        assert!(matches!(pair, Selection::Pair(_)));
        assert_eq!(pair.apply(catalog(), MatchMode::Exact).len(), 2);

        assert!(matches!(
            Selection::from_filters(Vec::new()),
            Err(WisataError::InvalidFilterCombination(_))
        ));
    }
}
