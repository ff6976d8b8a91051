// Public API exports
pub mod config;
pub mod loader;
pub mod page;
pub mod partition;

// Re-export main types for convenience
pub use partition::{
    ParseSizeError, Partition, PartitionError, PartitionSet, PartitionSize, Partitioner,
    partition_owned, partition_with,
};

pub use page::{ContentPath, Page, PageError, Pages, PagesPartition};

pub use loader::ContentLoader;

pub use config::{ConfigError, SiteConfig};
