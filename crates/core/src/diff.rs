//! Three-way comparison of two parameter sets
//!
//! A parameter can be present on both sides with different values, present on
//! one side only, or present on both sides with the same value (no row). A
//! parameter present with no value is a different outcome from a parameter
//! missing from one side.

use crate::parameters::Parameter;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Display marker for a parameter missing from one side of a diff
pub const NOT_SET: &str = "<not-set>";

/// One side of a diff row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffValue {
    /// The parameter does not exist on this side
    NotSet,
    /// The parameter exists, possibly without a value
    Value(Option<String>),
}

impl DiffValue {
    /// Table cell for this side. A present parameter without value is an absent cell.
    pub fn to_cell(&self) -> Option<String> {
        match self {
            DiffValue::NotSet => Some(NOT_SET.to_string()),
            DiffValue::Value(value) => value.clone(),
        }
    }
}

impl fmt::Display for DiffValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffValue::NotSet => f.write_str(NOT_SET),
            DiffValue::Value(Some(value)) => f.write_str(value),
            DiffValue::Value(None) => Ok(()),
        }
    }
}

impl Serialize for DiffValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DiffValue::NotSet => serializer.serialize_str(NOT_SET),
            DiffValue::Value(value) => value.serialize(serializer),
        }
    }
}

/// A parameter whose value differs between side A and side B
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffRow {
    pub name: String,
    pub a: DiffValue,
    pub b: DiffValue,
}

/// Name to value mapping that remembers first-insertion order
///
/// A repeated name keeps its original position and takes the last value seen.
#[derive(Debug, Default)]
struct OrderedValues {
    entries: Vec<(String, Option<String>)>,
    index: HashMap<String, usize>,
}

impl OrderedValues {
    fn from_parameters(params: &[Parameter]) -> Self {
        let mut values = Self::default();
        for param in params {
            match values.index.get(&param.name) {
                Some(&position) => values.entries[position].1 = param.value.clone(),
                None => {
                    values.index.insert(param.name.clone(), values.entries.len());
                    values.entries.push((param.name.clone(), param.value.clone()));
                }
            }
        }
        values
    }
}

/// Compare two parameter sets
///
/// Rows for every name of A whose value differs in B (or that B lacks) come
/// first, in A's order. Names only present in B follow, in B's order. Each
/// name appears at most once and equal values produce no row.
pub fn calculate_diff(params_a: &[Parameter], params_b: &[Parameter]) -> Vec<DiffRow> {
    let a = OrderedValues::from_parameters(params_a);
    let b = OrderedValues::from_parameters(params_b);

    // Remaining B entries, consumed as A is walked
    let mut remaining: Vec<Option<(String, Option<String>)>> =
        b.entries.into_iter().map(Some).collect();

    let mut out = Vec::new();
    for (name, value_a) in a.entries {
        let value_b = match b.index.get(&name) {
            Some(&position) => remaining[position]
                .take()
                .map_or(DiffValue::NotSet, |(_, value)| DiffValue::Value(value)),
            None => DiffValue::NotSet,
        };
        let value_a = DiffValue::Value(value_a);

        if value_a != value_b {
            out.push(DiffRow {
                name,
                a: value_a,
                b: value_b,
            });
        }
    }

    out.extend(remaining.into_iter().flatten().map(|(name, value)| DiffRow {
        name,
        a: DiffValue::NotSet,
        b: DiffValue::Value(value),
    }));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn params(pairs: &[(&str, Option<&str>)]) -> Vec<Parameter> {
        pairs
            .iter()
            .map(|(name, value)| Parameter {
                name: name.to_string(),
                value: value.map(String::from),
                source: Some("user".to_string()),
                ..Default::default()
            })
            .collect()
    }

    fn value(v: &str) -> DiffValue {
        DiffValue::Value(Some(v.to_string()))
    }

    #[test]
    fn test_diff_scenario_changed_and_b_only() {
        let a = params(&[("x", Some("1")), ("y", Some("2"))]);
        let b = params(&[("x", Some("1")), ("y", Some("3")), ("z", Some("4"))]);

        let diff = calculate_diff(&a, &b);

        assert_eq!(
            diff,
            vec![
                DiffRow {
                    name: "y".to_string(),
                    a: value("2"),
                    b: value("3"),
                },
                DiffRow {
                    name: "z".to_string(),
                    a: DiffValue::NotSet,
                    b: value("4"),
                },
            ]
        );
    }

    #[test]
    fn test_diff_a_only_key() {
        let a = params(&[("only_a", Some("1"))]);
        let diff = calculate_diff(&a, &[]);

        assert_eq!(diff.len(), 1);
        assert_eq!(diff[0].a, value("1"));
        assert_eq!(diff[0].b, DiffValue::NotSet);
    }

    #[test]
    fn test_diff_missing_differs_from_present_without_value() {
        let a = params(&[("no_value", None)]);

        let against_missing = calculate_diff(&a, &[]);
        assert_eq!(against_missing.len(), 1);
        assert_eq!(against_missing[0].a, DiffValue::Value(None));
        assert_eq!(against_missing[0].b, DiffValue::NotSet);

        let against_same = calculate_diff(&a, &params(&[("no_value", None)]));
        assert!(against_same.is_empty());
    }

    #[test]
    fn test_diff_of_identical_sets_is_empty() {
        let x = params(&[("a", Some("1")), ("b", None), ("c", Some(""))]);
        assert!(calculate_diff(&x, &x).is_empty());
        assert!(calculate_diff(&[], &[]).is_empty());
    }

    #[test]
    fn test_diff_ordering_a_first_then_b_only() {
        let a = params(&[("m", Some("1")), ("c", Some("1")), ("a_only", Some("1"))]);
        let b = params(&[
            ("b_only_2", Some("2")),
            ("c", Some("2")),
            ("m", Some("2")),
            ("b_only_1", Some("2")),
        ]);

        let names: Vec<String> = calculate_diff(&a, &b)
            .into_iter()
            .map(|row| row.name)
            .collect();

        assert_eq!(names, vec!["m", "c", "a_only", "b_only_2", "b_only_1"]);
    }

    #[test]
    fn test_diff_never_reports_a_key_twice() {
        let a = params(&[("k", Some("1")), ("k", Some("2")), ("j", Some("1"))]);
        let b = params(&[("k", Some("3")), ("j", Some("1")), ("k", Some("4"))]);

        let diff = calculate_diff(&a, &b);
        let names: HashSet<&str> = diff.iter().map(|row| row.name.as_str()).collect();

        assert_eq!(names.len(), diff.len());
    }

    #[test]
    fn test_diff_duplicate_names_last_value_wins() {
        let a = params(&[("k", Some("1")), ("k", Some("2"))]);
        let b = params(&[("k", Some("2"))]);

        assert!(calculate_diff(&a, &b).is_empty());
    }

    #[test]
    fn test_diff_swapping_sides_swaps_values() {
        let a = params(&[("x", Some("1")), ("y", Some("2")), ("a", Some("9"))]);
        let b = params(&[("x", Some("1")), ("y", Some("3")), ("z", Some("4"))]);

        let forward = calculate_diff(&a, &b);
        let backward = calculate_diff(&b, &a);

        let forward_keys: HashSet<&str> = forward.iter().map(|r| r.name.as_str()).collect();
        let backward_keys: HashSet<&str> = backward.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(forward_keys, backward_keys);

        for row in &forward {
            let mirrored = backward
                .iter()
                .find(|r| r.name == row.name)
                .expect("key present in both directions");
            assert_eq!(mirrored.a, row.b);
            assert_eq!(mirrored.b, row.a);
        }
    }

    #[test]
    fn test_diff_value_cells() {
        assert_eq!(DiffValue::NotSet.to_cell().as_deref(), Some(NOT_SET));
        assert_eq!(value("1").to_cell().as_deref(), Some("1"));
        assert_eq!(DiffValue::Value(None).to_cell(), None);
    }

    #[test]
    fn test_diff_row_serializes_not_set_marker() {
        let row = DiffRow {
            name: "z".to_string(),
            a: DiffValue::NotSet,
            b: value("4"),
        };

        let json = serde_json::to_value(&row).unwrap();

        assert_eq!(json["name"], "z");
        assert_eq!(json["a"], "<not-set>");
        assert_eq!(json["b"], "4");
    }
}
