//! Column discovery over schema-less data groups

use serde_json::Value;
use std::collections::HashSet;

/// Ordered, de-duplicated column keys for one table
///
/// Keys keep the order in which they were first seen. A `ColumnSet` is only
/// built by [`extract_columns`] and never changes afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSet {
    keys: Vec<String>,
}

impl ColumnSet {
    /// Number of columns
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True when there is nothing to render
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate keys in column order
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.keys.iter()
    }

    /// Keys in column order
    pub fn as_slice(&self) -> &[String] {
        &self.keys
    }
}

impl<'a> IntoIterator for &'a ColumnSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

/// Collect the union of keys across data groups
///
/// Groups are visited in the given order and each object's keys in the
/// map's own iteration order, which for `serde_json::Map` is sorted by key
/// rather than the order keys appeared in the input. Values that are not
/// objects (including `null` for absent groups) are skipped.
pub fn extract_columns<'a, I>(groups: I) -> ColumnSet
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut seen = HashSet::new();
    let mut keys = Vec::new();

    for map in groups.into_iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if seen.insert(key.as_str()) {
                keys.push(key.clone());
            }
        }
    }

    ColumnSet { keys }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_first_seen_order_across_groups() {
        let individual = json!({ "inNetwork": 500 });
        let family = json!({ "inNetwork": 1000, "outOfNetwork": 3000 });

        let columns = extract_columns([&individual, &family]);
        assert_eq!(columns.as_slice(), ["inNetwork", "outOfNetwork"]);
    }

    #[test]
    fn test_group_order_wins_over_alphabetical() {
        let first = json!({ "zeta": 1 });
        let second = json!({ "alpha": 2 });

        let columns = extract_columns([&first, &second]);
        assert_eq!(columns.as_slice(), ["zeta", "alpha"]);
    }

    #[test]
    fn test_no_duplicates() {
        let a = json!({ "copay": "20", "coinsurance": "10%" });
        let b = json!({ "coinsurance": "20%", "copay": "40" });
        let c = json!({ "copay": "60" });

        let columns = extract_columns([&a, &b, &c]);
        assert_eq!(columns.len(), 2);
    }

    #[test]
    fn test_non_objects_are_skipped() {
        let missing = Value::Null;
        let scalar = json!("n/a");
        let list = json!(["a", "b"]);
        let real = json!({ "network": "100" });

        let columns = extract_columns([&missing, &scalar, &list, &real]);
        assert_eq!(columns.as_slice(), ["network"]);
    }

    #[test]
    fn test_empty_groups() {
        let empty = json!({});
        assert!(extract_columns([&empty, &Value::Null]).is_empty());
        assert!(extract_columns(std::iter::empty::<&Value>()).is_empty());
    }

    #[test]
    fn test_key_insertion_order_does_not_matter() {
        let a: Value = serde_json::from_str(r#"{"outOfNetwork": 2, "inNetwork": 1}"#).unwrap();
        let b: Value = serde_json::from_str(r#"{"inNetwork": 1, "outOfNetwork": 2}"#).unwrap();

        assert_eq!(extract_columns([&a]), extract_columns([&b]));
    }
}
