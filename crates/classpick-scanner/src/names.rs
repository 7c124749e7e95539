//! Allow-sets of callee and directive names.

use memchr::memmem::Finder;
use rustc_hash::FxHashSet;

/// Function names whose calls carry class lists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameSet {
    names: FxHashSet<String>,
}

impl NameSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().collect()
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for NameSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let names = iter
            .into_iter()
            .map(Into::into)
            .filter(|name: &String| !name.is_empty())
            .collect();
        NameSet { names }
    }
}

/// Directive names, in priority order, each with a prebuilt substring finder.
///
/// Order matters when two names match at the same offset: the first listed
/// name that completes the directive grammar wins.
#[derive(Clone, Debug)]
pub struct DirectiveNames {
    entries: Vec<(String, Finder<'static>)>,
}

impl DirectiveNames {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<(String, Finder<'static>)> = Vec::new();
        for name in names.into_iter().map(Into::into) {
            if name.is_empty() || entries.iter().any(|(known, _)| *known == name) {
                continue;
            }
            let finder = Finder::new(name.as_bytes()).into_owned();
            entries.push((name, finder));
        }
        DirectiveNames { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub(crate) fn name(&self, index: usize) -> &str {
        &self.entries[index].0
    }

    /// Offset of the next occurrence of name `index` at or after `from`.
    pub(crate) fn find_from(&self, index: usize, haystack: &[u8], from: usize) -> Option<usize> {
        let finder = &self.entries[index].1;
        finder.find(haystack.get(from..)?).map(|pos| from + pos)
    }
}

#[cfg(test)]
#[path = "../tests/names_tests.rs"]
mod names_tests;
