//! Collection helpers.

use std::collections::HashSet;
use std::hash::Hash;

/// Remove duplicates, keeping the first occurrence of each item in order.
///
/// # Examples
///
/// ```
/// use reconurl::unique;
///
/// assert_eq!(unique(&["a", "b", "a", "c", "b"]), vec!["a", "b", "c"]);
/// ```
pub fn unique<T>(items: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}
