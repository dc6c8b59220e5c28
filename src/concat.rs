use core::fmt;
use std::hash::{Hash, Hasher};

use arrayvec::ArrayVec;

/// A concatenation of multiple borrowed strings with fixed size storage.
///
/// Conjugated forms are a verb stem followed by a suffix from the paradigm
/// table, so they can be compared and displayed without allocating.
#[derive(Clone)]
pub struct Concat<'a, const N: usize> {
    storage: ArrayVec<&'a str, N>,
}

impl<const N: usize> Default for Concat<'_, N> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, const N: usize> Concat<'a, N> {
    /// Concatenate the given strings together into a single composite string.
    pub fn new<I>(iter: I) -> Concat<'a, N>
    where
        I: IntoIterator<Item = &'a str>,
    {
        iter.into_iter().collect()
    }

    /// Construct an empty concatenation.
    pub const fn empty() -> Concat<'a, N> {
        Concat {
            storage: ArrayVec::new_const(),
        }
    }

    /// Push the given string onto storage.
    ///
    /// # Panics
    ///
    /// Panics if a non-empty string is pushed when storage is full.
    pub fn push(&mut self, string: &'a str) {
        if !string.is_empty() {
            self.storage.push(string);
        }
    }

    /// The strings making up this concatenation.
    pub fn as_slice(&self) -> &[&'a str] {
        &self.storage
    }

    /// Iterate over characters in the composite word.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.storage.iter().flat_map(|s| s.chars())
    }

    /// Test if concat is empty.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Test if the concatenated string is exactly equal to `other`.
    pub fn is(&self, other: &str) -> bool {
        let mut rest = other;

        for string in &self.storage {
            let Some(tail) = rest.strip_prefix(string) else {
                return false;
            };

            rest = tail;
        }

        rest.is_empty()
    }
}

impl<'a, const N: usize> FromIterator<&'a str> for Concat<'a, N> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut this = Self::empty();

        for string in iter {
            this.push(string);
        }

        this
    }
}

impl<'a, const A: usize, const B: usize> PartialEq<Concat<'a, A>> for Concat<'_, B> {
    fn eq(&self, other: &Concat<'a, A>) -> bool {
        self.chars().eq(other.chars())
    }
}

impl<const N: usize> Eq for Concat<'_, N> {}

impl<const N: usize> PartialEq<str> for Concat<'_, N> {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.is(other)
    }
}

impl<const N: usize> PartialEq<&str> for Concat<'_, N> {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.is(other)
    }
}

impl<const N: usize> Hash for Concat<'_, N> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        for c in self.chars() {
            c.hash(state);
        }
    }
}

impl<const N: usize> fmt::Display for Concat<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for string in &self.storage {
            string.fmt(f)?;
        }

        Ok(())
    }
}

impl<const N: usize> fmt::Debug for Concat<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_string())
    }
}
