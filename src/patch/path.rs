//! Key paths into nested patches.

use std::fmt;

/// Path is the sequence of keys leading from the root of a patch to a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path {
    keys: Vec<String>,
}

impl Path {
    /// Creates the root path.
    pub fn new() -> Self {
        Path { keys: Vec::new() }
    }

    /// Creates a path from a sequence of keys.
    pub fn from_keys<K: Into<String>>(keys: impl IntoIterator<Item = K>) -> Self {
        keys.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true for the root path.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn push(&mut self, key: impl Into<String>) {
        self.keys.push(key.into());
    }

    pub fn pop(&mut self) -> Option<String> {
        self.keys.pop()
    }

    pub fn last(&self) -> Option<&str> {
        self.keys.last().map(String::as_str)
    }

    /// Creates a new path with the given key appended.
    pub fn with(&self, key: impl Into<String>) -> Self {
        let mut new_path = self.clone();
        new_path.push(key);
        new_path
    }

    pub fn as_slice(&self) -> &[String] {
        &self.keys
    }
}

impl<K: Into<String>> FromIterator<K> for Path {
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        Path {
            keys: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for Path {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter()
    }
}

// Keys made of anything but letters, digits, `_` and `-` are quoted.
fn needs_quoting(key: &str) -> bool {
    key.is_empty()
        || !key
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.keys.is_empty() {
            return write!(f, ".");
        }
        for key in &self.keys {
            if needs_quoting(key) {
                write!(f, ".{:?}", key)?;
            } else {
                write!(f, ".{}", key)?;
            }
        }
        Ok(())
    }
}
