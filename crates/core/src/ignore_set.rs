//! Externally supplied property-name suppression list.

use rustc_hash::FxHashSet;
use std::sync::Arc;

/// Property names to suppress for a serialization pass.
///
/// Names match `PropertyDescriptor::name` exactly (case-sensitive). Cloning
/// shares the underlying set.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    names: Arc<FxHashSet<String>>,
}

impl IgnoreSet {
    /// Empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `name` is suppressed
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the set has no names
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate the names (arbitrary order)
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for IgnoreSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: Arc::new(iter.into_iter().map(Into::into).collect()),
        }
    }
}

impl PartialEq for IgnoreSet {
    fn eq(&self, other: &Self) -> bool {
        self.names == other.names
    }
}

impl Eq for IgnoreSet {}
