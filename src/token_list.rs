use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::TokenListError;
use crate::names::{Names, trimmed};

/// Ordered set of class names, as found in an HTML `class` attribute.
///
/// Tokens are trimmed, non-empty and unique. Order is first-insertion order;
/// adding a token that is already present leaves it where it is.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TokenList(IndexSet<String>);

impl TokenList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from any accepted input shape.
    pub fn from_values<'a>(names: impl Into<Names<'a>>) -> Result<Self, TokenListError> {
        let mut list = Self::new();
        list.add(names)?;
        Ok(list)
    }

    /// Tokens joined with a single space, in order.
    pub fn value(&self) -> String {
        self.to_string()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Token at `index`, or `None` when out of range
    pub fn item(&self, index: usize) -> Option<&str> {
        self.0.get_index(index).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name.trim())
    }

    /// Insert every normalized name that is not already present.
    ///
    /// The input is normalized before the list is touched, so a failed
    /// parse leaves the list unchanged.
    pub fn add<'a>(&mut self, names: impl Into<Names<'a>>) -> Result<&mut Self, TokenListError> {
        let names = names.into().normalize()?;
        let before = self.0.len();
        for name in names {
            self.insert(name);
        }
        trace!(
            added = self.0.len() - before,
            total = self.0.len(),
            "added class names"
        );
        Ok(self)
    }

    pub fn remove<'a>(
        &mut self,
        names: impl Into<Names<'a>>,
    ) -> Result<&mut Self, TokenListError> {
        let names = names.into().normalize()?;
        let before = self.0.len();
        for name in names {
            self.0.shift_remove(name.as_ref());
        }
        trace!(
            removed = before - self.0.len(),
            total = self.0.len(),
            "removed class names"
        );
        Ok(self)
    }

    /// Rename `old` to `new` in place, keeping its position.
    ///
    /// Absent `old` is a no-op. Renaming onto a token that is already present
    /// elsewhere fails with [`TokenListError::Duplicate`] and changes nothing.
    pub fn replace(&mut self, old: &str, new: &str) -> Result<&mut Self, TokenListError> {
        let (old, new) = (old.trim(), new.trim());
        if new.is_empty() {
            return Err(TokenListError::EmptyToken);
        }

        let Some(index) = self.0.get_index_of(old) else {
            return Ok(self);
        };
        if old == new {
            return Ok(self);
        }
        if self.0.contains(new) {
            debug!(old, new, "rejected replacement onto existing class name");
            return Err(TokenListError::Duplicate {
                old: old.to_owned(),
                new: new.to_owned(),
            });
        }

        self.0.shift_remove_index(index);
        self.0.shift_insert(index, new.to_owned());
        Ok(self)
    }

    /// Flip membership of `name`, or force it with `Some(true)` / `Some(false)`.
    ///
    /// Returns whether `name` is present afterwards. A name that trims to
    /// empty is never present, so it always yields `false`, even with
    /// `Some(true)`.
    pub fn toggle(&mut self, name: &str, force: Option<bool>) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }

        let present = force.unwrap_or_else(|| !self.0.contains(name));
        if present {
            self.insert(Cow::Borrowed(name));
        } else {
            self.0.shift_remove(name);
        }
        present
    }

    /// Replace the whole collection with `names`.
    pub fn reset<'a>(&mut self, names: impl Into<Names<'a>>) -> Result<&mut Self, TokenListError> {
        let names = names.into().normalize()?;
        self.0.clear();
        for name in names {
            self.insert(name);
        }
        trace!(total = self.0.len(), "reset class names");
        Ok(self)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Snapshot of the current tokens
    pub fn values(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    fn insert(&mut self, name: Cow<'_, str>) -> bool {
        if self.0.contains(name.as_ref()) {
            return false;
        }
        self.0.insert(name.into_owned())
    }
}

impl fmt::Display for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

// IndexSet equality ignores order; two class lists are only equal in the same order.
impl PartialEq for TokenList {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for TokenList {}

impl FromStr for TokenList {
    type Err = TokenListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_values(s)
    }
}

impl TryFrom<&str> for TokenList {
    type Error = TokenListError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_values(value)
    }
}

impl TryFrom<String> for TokenList {
    type Error = TokenListError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_values(value)
    }
}

impl From<TokenList> for String {
    fn from(list: TokenList) -> Self {
        list.to_string()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a str;
    type IntoIter = std::iter::Map<indexmap::set::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        let as_str: fn(&'a String) -> &'a str = String::as_str;
        self.0.iter().map(as_str)
    }
}

/// Items are treated like a sequence input: trimmed, never split.
impl<S: AsRef<str>> Extend<S> for TokenList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            if let Some(name) = trimmed(Cow::Borrowed(name.as_ref())) {
                self.insert(name);
            }
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for TokenList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}
