use super::{Partition, PartitionError, PartitionSet, PartitionSize};

/// Splits ordered sequences into consecutive groups of at most `size` items.
///
/// The size is validated when the partitioner is built, so [`Partitioner::split`]
/// cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Partitioner {
    size: PartitionSize,
}

impl Partitioner {
    pub fn new(size: PartitionSize) -> Self {
        Self { size }
    }

    /// Build a partitioner from an unchecked size
    pub fn with_size(size: i64) -> Result<Self, PartitionError> {
        PartitionSize::new(size).map(Self::new)
    }

    pub fn size(&self) -> PartitionSize {
        self.size
    }

    /// Partition `items` in a single left-to-right pass.
    ///
    /// Every partition but the last holds exactly `size` items; the last holds
    /// whatever remains. An empty input yields an empty set.
    pub fn split<'a, T>(&self, items: &'a [T]) -> PartitionSet<'a, T> {
        let size = self.size.get();
        let partitions = items
            .chunks(size)
            .enumerate()
            .map(|(index, chunk)| Partition::new(index, index * size, chunk))
            .collect();

        PartitionSet::from_partitions(partitions)
    }

    /// Move the items of `iter` into owned groups, consuming it exactly once
    pub fn split_owned<I>(&self, iter: I) -> Vec<Vec<I::Item>>
    where
        I: IntoIterator,
    {
        let size = self.size.get();
        let mut groups = Vec::new();
        let mut current = Vec::new();

        for item in iter {
            current.push(item);
            if current.len() == size {
                groups.push(std::mem::take(&mut current));
            }
        }

        if !current.is_empty() {
            groups.push(current);
        }

        groups
    }
}

/// Partition `items` into groups of `size`.
///
/// The size is checked before the sequence is looked at, so an invalid size
/// fails even for an empty sequence.
pub fn partition_with<T>(items: &[T], size: i64) -> Result<PartitionSet<'_, T>, PartitionError> {
    let partitioner = Partitioner::with_size(size)?;
    Ok(partitioner.split(items))
}

/// Owned counterpart of [`partition_with`] for arbitrary iterators
pub fn partition_owned<I>(iter: I, size: i64) -> Result<Vec<Vec<I::Item>>, PartitionError>
where
    I: IntoIterator,
{
    let partitioner = Partitioner::with_size(size)?;
    Ok(partitioner.split_owned(iter))
}
