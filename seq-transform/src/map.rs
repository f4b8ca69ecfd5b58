use std::collections::HashMap;
use std::hash::Hash;

/// Union of two maps over their combined key set.
///
/// Each key maps to the pair of values found in the left and right map,
/// either of which may be absent.
pub fn union<K, V>(
    left: &HashMap<K, V>,
    right: &HashMap<K, V>,
) -> HashMap<K, (Option<V>, Option<V>)>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    let mut result = HashMap::with_capacity(left.len().max(right.len()));
    for key in left.keys().chain(right.keys()) {
        if result.contains_key(key) {
            continue;
        }
        result.insert(
            key.clone(),
            (left.get(key).cloned(), right.get(key).cloned()),
        );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_values_for_keys_present_in_both_maps() {
        let left = HashMap::from([("1", "foo"), ("2", "left")]);
        let right = HashMap::from([("1", "bar"), ("2", "right")]);

        let actual = union(&left, &right);

        assert_eq!(actual.len(), 2);
        assert_eq!(actual["1"], (Some("foo"), Some("bar")));
        assert_eq!(actual["2"], (Some("left"), Some("right")));
    }

    #[test]
    fn leaves_a_side_empty_for_keys_present_in_one_map() {
        let left = HashMap::from([("1", "left")]);
        let right = HashMap::from([("2", "right")]);

        let actual = union(&left, &right);

        assert_eq!(actual.len(), 2);
        assert_eq!(actual["1"], (Some("left"), None));
        assert_eq!(actual["2"], (None, Some("right")));
    }

    #[test]
    fn union_of_empty_maps_is_empty() {
        let left: HashMap<&str, i32> = HashMap::new();
        let right: HashMap<&str, i32> = HashMap::new();

        assert!(union(&left, &right).is_empty());
    }
}
