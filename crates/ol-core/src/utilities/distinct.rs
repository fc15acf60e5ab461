//! De-duplication of a sequence by a derived key.
//!
//! The first element seen for a given key is kept; later elements with the
//! same key are dropped. Encounter order of the survivors is preserved.

use std::collections::HashSet;
use std::hash::Hash;

/// Keep the first element for each key produced by `key`, in encounter order.
///
/// ```
/// use ol_core::distinct_by_key;
///
/// let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
/// let firsts = distinct_by_key(words, |w| w.chars().next());
/// assert_eq!(firsts, vec!["apple", "banana", "cherry"]);
/// ```
pub fn distinct_by_key<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    items.into_iter().distinct_by_key(key).collect()
}

/// Iterator adaptor behind [`distinct_by_key`].
pub trait DistinctByKey: Iterator + Sized {
    /// Lazily filter out elements whose key has already been produced.
    fn distinct_by_key<K, F>(self, key: F) -> DistinctBy<Self, K, F>
    where
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        DistinctBy {
            iter: self,
            seen: HashSet::new(),
            key,
        }
    }
}

impl<I: Iterator> DistinctByKey for I {}

/// Iterator returned by [`DistinctByKey::distinct_by_key`].
#[derive(Debug)]
pub struct DistinctBy<I, K, F> {
    iter: I,
    seen: HashSet<K>,
    key: F,
}

impl<I, K, F> Iterator for DistinctBy<I, K, F>
where
    I: Iterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        for item in self.iter.by_ref() {
            if self.seen.insert((self.key)(&item)) {
                return Some(item);
            }
        }
        None
    }
}
