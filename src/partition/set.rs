use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Deref;

/// A contiguous, non-empty run of items borrowed from the partitioned sequence
pub struct Partition<'a, T> {
    /// Zero-based position within the owning set
    index: usize,
    /// Position of the first item in the original sequence
    offset: usize,
    items: &'a [T],
}

impl<'a, T> Partition<'a, T> {
    pub(super) fn new(index: usize, offset: usize, items: &'a [T]) -> Self {
        debug_assert!(!items.is_empty());
        Self {
            index,
            offset,
            items,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for partitions produced by a [`super::Partitioner`]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.items.iter()
    }

    pub fn first(&self) -> Option<&'a T> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&'a T> {
        self.items.last()
    }
}

impl<T> Clone for Partition<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Partition<'_, T> {}

impl<T> Deref for Partition<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.items
    }
}

impl<T: PartialEq> PartialEq for Partition<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for Partition<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Partition<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Partition")
            .field("index", &self.index)
            .field("offset", &self.offset)
            .field("items", &self.items)
            .finish()
    }
}

impl<'a, T> IntoIterator for Partition<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Serialize> Serialize for Partition<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items)
    }
}

/// Ordered partitions whose concatenation is exactly the input sequence
pub struct PartitionSet<'a, T> {
    partitions: Vec<Partition<'a, T>>,
}

impl<'a, T> PartitionSet<'a, T> {
    pub(super) fn from_partitions(partitions: Vec<Partition<'a, T>>) -> Self {
        Self { partitions }
    }

    /// Number of partitions
    pub fn len(&self) -> usize {
        self.partitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Partition<'a, T>> {
        self.partitions.get(index)
    }

    pub fn first(&self) -> Option<&Partition<'a, T>> {
        self.partitions.first()
    }

    pub fn last(&self) -> Option<&Partition<'a, T>> {
        self.partitions.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Partition<'a, T>> {
        self.partitions.iter()
    }

    /// Every item across all partitions, in original order
    pub fn items(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.partitions.iter().flat_map(|p| p.items.iter())
    }

    /// Total number of items across all partitions
    pub fn item_count(&self) -> usize {
        self.partitions.iter().map(Partition::len).sum()
    }

    /// Borrowed slices, one per partition
    pub fn as_slices(&self) -> Vec<&'a [T]> {
        self.partitions.iter().map(Partition::as_slice).collect()
    }

    pub fn into_vec(self) -> Vec<Partition<'a, T>> {
        self.partitions
    }
}

impl<T> Clone for PartitionSet<'_, T> {
    fn clone(&self) -> Self {
        Self {
            partitions: self.partitions.clone(),
        }
    }
}

impl<T> Default for PartitionSet<'_, T> {
    fn default() -> Self {
        Self {
            partitions: Vec::new(),
        }
    }
}

impl<T: PartialEq> PartialEq for PartitionSet<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.partitions == other.partitions
    }
}

impl<T: Eq> Eq for PartitionSet<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for PartitionSet<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.partitions.iter()).finish()
    }
}

impl<'a, T> IntoIterator for PartitionSet<'a, T> {
    type Item = Partition<'a, T>;
    type IntoIter = std::vec::IntoIter<Partition<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.partitions.into_iter()
    }
}

impl<'s, 'a, T> IntoIterator for &'s PartitionSet<'a, T> {
    type Item = &'s Partition<'a, T>;
    type IntoIter = std::slice::Iter<'s, Partition<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.partitions.iter()
    }
}

impl<T: Serialize> Serialize for PartitionSet<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.partitions)
    }
}
