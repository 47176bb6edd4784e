use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::sets::{RelType, RelationshipType};

/// A set of relationship types keyed by name.
///
/// Only the name strings are stored, so membership works across concrete
/// [`RelationshipType`] implementations: an element inserted as one
/// representation is found, counted, and removed through any other
/// representation with the same name. Every value handed back out of the set
/// is a [`RelType`] materialized from a stored name.
///
/// All operations delegate to the backing hash set and cannot fail.
///
/// # Examples
///
/// ```
/// use reltype::sets::{RelType, RelTypeSet};
///
/// let mut set = RelTypeSet::new();
/// assert!(set.insert(&RelType::with_name("KNOWS")));
/// assert!(!set.insert("KNOWS")); // same name, different representation
/// assert!(set.contains("KNOWS"));
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelTypeSet {
    names: HashSet<String>,
}

impl RelTypeSet {
    /// Creates a new empty set.
    pub fn new() -> Self {
        RelTypeSet {
            names: HashSet::new(),
        }
    }

    /// Inserts a relationship type, storing its name.
    ///
    /// # Returns
    /// `true` if the name was not already present
    pub fn insert<T: RelationshipType + ?Sized>(&mut self, rel_type: &T) -> bool {
        self.names.insert(rel_type.name().to_owned())
    }

    /// Inserts every relationship type yielded by an iterator.
    ///
    /// # Returns
    /// `true` if at least one insertion changed the set
    pub fn insert_all<I>(&mut self, rel_types: I) -> bool
    where
        I: IntoIterator,
        I::Item: RelationshipType,
    {
        let mut modified = false;
        for rel_type in rel_types {
            modified |= self.insert(&rel_type);
        }
        modified
    }

    /// Removes a relationship type by name.
    ///
    /// # Returns
    /// `true` if the name was present
    pub fn remove<T: RelationshipType + ?Sized>(&mut self, rel_type: &T) -> bool {
        self.names.remove(rel_type.name())
    }

    /// Removes every relationship type yielded by an iterator.
    ///
    /// # Returns
    /// `true` if at least one removal changed the set
    pub fn remove_all<I>(&mut self, rel_types: I) -> bool
    where
        I: IntoIterator,
        I::Item: RelationshipType,
    {
        let mut modified = false;
        for rel_type in rel_types {
            modified |= self.remove(&rel_type);
        }
        modified
    }

    /// Returns `true` if a relationship type with the same name is present.
    pub fn contains<T: RelationshipType + ?Sized>(&self, rel_type: &T) -> bool {
        self.names.contains(rel_type.name())
    }

    /// Returns `true` if every relationship type yielded by the iterator is
    /// present. Vacuously `true` for an empty iterator.
    pub fn contains_all<I>(&self, rel_types: I) -> bool
    where
        I: IntoIterator,
        I::Item: RelationshipType,
    {
        rel_types
            .into_iter()
            .all(|rel_type| self.names.contains(rel_type.name()))
    }

    /// Returns `true` if the given name is stored, without going through a
    /// [`RelationshipType`] value.
    pub fn contains_name(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Removes all stored names.
    pub fn clear(&mut self) {
        self.names.clear();
    }

    /// Returns the number of distinct names stored.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if no names are stored.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns a borrowing iterator over the set.
    ///
    /// Each stored name is materialized into a fresh [`RelType`]. Iteration
    /// order is unspecified.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.names.iter(),
        }
    }

    /// Returns an iterator over the raw stored name strings.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Materializes all elements into a vector, in unspecified order.
    pub fn to_vec(&self) -> Vec<RelType> {
        self.iter().collect()
    }

    /// Returns all stored names in lexicographic order.
    pub fn sorted_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.names.iter().cloned().collect();
        names.sort();
        names
    }
}

impl std::fmt::Debug for RelTypeSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelTypeSet")
            .field("names", &self.names)
            .finish()
    }
}

impl<T: RelationshipType> Extend<T> for RelTypeSet {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for rel_type in iter {
            self.insert(&rel_type);
        }
    }
}

impl<T: RelationshipType> FromIterator<T> for RelTypeSet {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = RelTypeSet::new();
        set.extend(iter);
        set
    }
}

/// Borrowing iterator over a [`RelTypeSet`], yielding materialized
/// [`RelType`] values.
pub struct Iter<'a> {
    inner: hashbrown::hash_set::Iter<'a, String>,
}

impl Iterator for Iter<'_> {
    type Item = RelType;

    fn next(&mut self) -> Option<RelType> {
        self.inner.next().map(|name| RelType::with_name(name.clone()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// Consuming iterator over a [`RelTypeSet`].
pub struct IntoIter {
    inner: hashbrown::hash_set::IntoIter<String>,
}

impl Iterator for IntoIter {
    type Item = RelType;

    fn next(&mut self) -> Option<RelType> {
        self.inner.next().map(|name| RelType::with_name(name))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for IntoIter {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl IntoIterator for RelTypeSet {
    type Item = RelType;
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        IntoIter {
            inner: self.names.into_iter(),
        }
    }
}

impl<'a> IntoIterator for &'a RelTypeSet {
    type Item = RelType;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
