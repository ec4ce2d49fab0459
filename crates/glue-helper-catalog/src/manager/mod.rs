use std::sync::Arc;

use crate::client::CatalogClient;
use crate::error::{CatalogError, CatalogResult};

pub mod database;
pub mod partition;
pub mod table;

pub use partition::PartitionCopySummary;

/// The maximum number of partitions AWS Glue accepts in one
/// `BatchCreatePartition` request.
pub const BATCH_CREATE_PARTITION_LIMIT: usize = 100;

#[derive(Debug, Clone)]
pub struct CatalogManagerOptions {
    /// The number of partitions submitted in one bulk request.
    pub partition_batch_size: usize,
}

impl Default for CatalogManagerOptions {
    fn default() -> Self {
        Self {
            partition_batch_size: BATCH_CREATE_PARTITION_LIMIT,
        }
    }
}

/// Runs the copy, list, and delete operations against one catalog client.
/// Object references are `database.name` strings parsed with
/// [`crate::QualifiedName::parse`].
pub struct CatalogManager {
    client: Arc<dyn CatalogClient>,
    options: CatalogManagerOptions,
}

impl CatalogManager {
    pub fn try_new(
        client: Arc<dyn CatalogClient>,
        options: CatalogManagerOptions,
    ) -> CatalogResult<Self> {
        let batch_size = options.partition_batch_size;
        if !(1..=BATCH_CREATE_PARTITION_LIMIT).contains(&batch_size) {
            return Err(CatalogError::InvalidArgument(format!(
                "partition batch size must be between 1 and {BATCH_CREATE_PARTITION_LIMIT}, got {batch_size}"
            )));
        }
        Ok(Self { client, options })
    }

    pub fn client(&self) -> &dyn CatalogClient {
        self.client.as_ref()
    }
}
