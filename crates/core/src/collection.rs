//! Generic keyed-collection helpers.
//!
//! Snapshot-style state updates: each helper consumes the current collection
//! and returns the next one, so callers can persist the result before
//! swapping it in. Elements are matched by the key exposed through [`Keyed`].

/// An element that can be looked up by a key within a collection.
pub trait Keyed {
    /// The key type used for matching elements.
    type Key: PartialEq;

    /// The key of this element.
    fn key(&self) -> Self::Key;
}

/// Append a value to the collection, returning the new collection.
#[must_use]
pub fn append<T>(mut state: Vec<T>, value: T) -> Vec<T> {
    state.push(value);
    state
}

/// Replace the first element whose key matches the replacement's key.
///
/// Returns the collection unchanged if no element matches.
#[must_use]
pub fn replace_by_key<T: Keyed>(mut state: Vec<T>, replacement: T) -> Vec<T> {
    let key = replacement.key();
    if let Some(slot) = state.iter_mut().find(|item| item.key() == key) {
        *slot = replacement;
    }
    state
}

/// Remove the first element whose key matches.
///
/// Returns the resulting collection and whether an element was removed.
#[must_use]
pub fn remove_by_key<T: Keyed>(mut state: Vec<T>, key: &T::Key) -> (Vec<T>, bool) {
    match state.iter().position(|item| item.key() == *key) {
        Some(index) => {
            state.remove(index);
            (state, true)
        }
        None => (state, false),
    }
}
