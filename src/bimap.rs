//! The bidirectional lookup table.

use std::collections::HashMap;
use std::iter::FromIterator;

/// Which direction `BidirMap::find_with` tries first when a string
/// could match in both.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Precedence {
    /// Try the key-space, then the value-space.
    KeyFirst,
    /// Try the value-space, then the key-space.
    ValueFirst,
}

/**
 * A lookup table over strings that can be searched in either direction:
 * by key to get the value, or by value to get the key.
 *
 * Keys are unique; inserting an existing key replaces its value. Values
 * are not unique: several keys may map to the same value, and a reverse
 * lookup on a shared value answers with the key written most recently.
 *
 * Only strings are stored. A key and a value may be the same string, or
 * the empty string; neither is special.
 * */
#[derive(Debug, Clone)]
pub struct BidirMap {
    pub(crate) forward: HashMap<String, String>,
    // Every live key a value can be reached from, most recent writer last.
    // Kept exactly in sync with `forward` by `insert`.
    reverse: HashMap<String, Vec<String>>,
}

impl BidirMap {
    /// Creates an empty table.
    pub fn new() -> BidirMap {
        BidirMap {
            forward: HashMap::new(),
            reverse: HashMap::new(),
        }
    }

    /**
     * Inserts a key/value pair, replacing the key's old value if it had
     * one. The old value's reverse slot is unindexed before the new
     * pair lands, so a reverse lookup never answers with a key that no
     * longer maps to the queried value.
     * */
    pub fn insert(&mut self, key: String, value: String) {
        if let Some(old) = self.forward.insert(key.clone(), value.clone()) {
            if old != value {
                self.unindex(&old, &key);
            }
        }
        let keys = self.reverse.entry(value).or_insert_with(Vec::new);
        keys.retain(|k| *k != key);
        keys.push(key);
    }

    /// Returns the value mapped from `key`, if any.
    pub fn find_by_key(&self, key: &str) -> Option<&str> {
        self.forward.get(key).map(String::as_str)
    }

    /**
     * Returns a key mapping to `value`, if any.
     *
     * When several keys map to `value`, the one inserted most recently
     * wins.
     * */
    pub fn find_by_value(&self, value: &str) -> Option<&str> {
        self.reverse
            .get(value)
            .and_then(|keys| keys.last())
            .map(String::as_str)
    }

    /**
     * Searches both directions at once: returns the value if `s` is a
     * key, otherwise the key if `s` is a value, otherwise `None`.
     *
     * The key-space is checked first, unconditionally. If `s` exists as
     * both a key and a value of some other pair, the key-space match
     * wins; use `find_with` to flip that policy.
     * */
    pub fn find(&self, s: &str) -> Option<&str> {
        self.find_with(s, Precedence::KeyFirst)
    }

    /// `find` with an explicit tie-break direction.
    pub fn find_with(&self, s: &str, precedence: Precedence) -> Option<&str> {
        match precedence {
            Precedence::KeyFirst => self.find_by_key(s).or_else(|| self.find_by_value(s)),
            Precedence::ValueFirst => self.find_by_value(s).or_else(|| self.find_by_key(s)),
        }
    }

    /// Number of key/value pairs held.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Drops `key` from `value`'s reverse slot, and the slot itself if
    /// that key was its last occupant.
    fn unindex(&mut self, value: &str, key: &str) {
        let emptied = match self.reverse.get_mut(value) {
            Some(keys) => {
                keys.retain(|k| k != key);
                keys.is_empty()
            }
            None => false,
        };
        if emptied {
            self.reverse.remove(value);
        }
    }
}

impl Default for BidirMap {
    fn default() -> Self {
        BidirMap::new()
    }
}

impl FromIterator<(String, String)> for BidirMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut map = BidirMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl From<HashMap<String, String>> for BidirMap {
    /// Pre-populates from a plain map. `HashMap` iteration order is
    /// unspecified, so if `from` holds several keys sharing one value,
    /// which of them a reverse lookup prefers is unspecified too.
    fn from(from: HashMap<String, String>) -> Self {
        from.into_iter().collect()
    }
}
