use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use seq_error::{Result, SeqError};

/// New list holding the elements of `first` followed by those of every
/// slice in `rest`, in order.
pub fn concat<T: Clone>(first: &[T], rest: &[&[T]]) -> Vec<T> {
    let mut result = first.to_vec();
    for part in rest {
        result.extend_from_slice(part);
    }
    result
}

/// New list with `element` appended.
pub fn appended<T>(mut list: Vec<T>, element: T) -> Vec<T> {
    list.push(element);
    list
}

/// Pad `list` to at least `size` with clones of `value`. A list that is
/// already long enough is returned unchanged.
pub fn pad_to<T: Clone>(mut list: Vec<T>, size: usize, value: T) -> Vec<T> {
    while list.len() < size {
        list.push(value.clone());
    }
    list
}

/// Build a map from `items`, deriving each key and value with the given
/// functions. Fails on a duplicate key.
pub fn to_map<T, K, V, FK, FV>(
    items: impl IntoIterator<Item = T>,
    mut key_of: FK,
    mut value_of: FV,
) -> Result<HashMap<K, V>>
where
    K: Eq + Hash + Debug,
    FK: FnMut(&T) -> K,
    FV: FnMut(T) -> V,
{
    let mut map = HashMap::new();
    for item in items {
        let key = key_of(&item);
        if map.contains_key(&key) {
            return Err(SeqError::InvalidArgument(format!(
                "duplicate key: {:?}",
                key
            )));
        }
        map.insert(key, value_of(item));
    }
    Ok(map)
}

/// Like [`to_map`], resolving key collisions with `merge` instead of
/// failing.
pub fn to_map_merged<T, K, V, FK, FV, M>(
    items: impl IntoIterator<Item = T>,
    mut key_of: FK,
    mut value_of: FV,
    mut merge: M,
) -> HashMap<K, V>
where
    K: Eq + Hash,
    FK: FnMut(&T) -> K,
    FV: FnMut(T) -> V,
    M: FnMut(V, V) -> V,
{
    let mut map = HashMap::new();
    for item in items {
        let key = key_of(&item);
        let value = value_of(item);
        let value = match map.remove(&key) {
            Some(previous) => merge(previous, value),
            None => value,
        };
        map.insert(key, value);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn concat_keeps_the_order_of_all_parts() {
        let actual = concat(&["foo"], &[&["bar"], &["bat"]]);

        assert_eq!(actual, vec!["foo", "bar", "bat"]);
    }

    #[rstest]
    #[case::shorter_list_is_padded(4, vec!["foo", "bar", "baz", "baz"])]
    #[case::matching_size_is_unchanged(2, vec!["foo", "bar"])]
    #[case::longer_list_is_unchanged(1, vec!["foo", "bar"])]
    fn pad_to_grows_the_list_when_needed(
        #[case] size: usize,
        #[case] expected: Vec<&str>,
    ) {
        let actual = pad_to(vec!["foo", "bar"], size, "baz");

        assert_eq!(actual, expected);
    }

    #[test]
    fn appended_adds_a_single_element() {
        let actual = appended(vec!["foo"], "bar");

        assert_eq!(actual, vec!["foo", "bar"]);
    }

    #[test]
    fn to_map_derives_keys_and_values() {
        let entries = vec![("foo", 1), ("bar", 2)];

        let actual =
            to_map(entries, |entry| entry.0, |entry| entry.1).unwrap();

        assert_eq!(actual.len(), 2);
        assert_eq!(actual["foo"], 1);
        assert_eq!(actual["bar"], 2);
    }

    #[test]
    fn to_map_rejects_a_duplicate_key() {
        let entries = vec![("foo", 1), ("foo", 2)];

        let result = to_map(entries, |entry| entry.0, |entry| entry.1);

        assert!(matches!(result, Err(SeqError::InvalidArgument(_))));
    }

    #[test]
    fn to_map_merged_resolves_collisions() {
        let entries = vec![("foo", 1), ("foo", 2)];

        let actual = to_map_merged(
            entries,
            |entry| entry.0,
            |entry| entry.1,
            |_previous, next| next,
        );

        assert_eq!(actual.len(), 1);
        assert_eq!(actual["foo"], 2);
    }
}
