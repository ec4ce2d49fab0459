use aws_sdk_glue::types::{PartitionError, PartitionInput};
use futures::TryStreamExt;
use log::{debug, info, warn};

use crate::descriptor::{partition_input, PARTITION_STRIPPED_FIELDS};
use crate::error::CatalogResult;
use crate::manager::CatalogManager;
use crate::name::QualifiedName;
use crate::pagination::paginate;

/// The outcome of copying the partitions of one table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionCopySummary {
    /// Partitions read from the source table.
    pub partitions: usize,
    /// Bulk requests issued against the destination table.
    pub batches: usize,
    /// Partitions the service rejected individually, e.g. duplicates.
    pub rejected: usize,
}

impl PartitionCopySummary {
    /// Partitions created in the destination table.
    pub fn created(&self) -> usize {
        self.partitions.saturating_sub(self.rejected)
    }
}

impl CatalogManager {
    /// Copies every partition of `source` into `destination`.
    pub async fn copy_partitions(
        &self,
        source: &str,
        destination: &str,
    ) -> CatalogResult<PartitionCopySummary> {
        let source = QualifiedName::parse(source);
        let destination = QualifiedName::parse(destination);
        self.copy_partitions_between(&source, &destination).await
    }

    /// Streams the partitions of `source` page by page and submits them to
    /// `destination` in order, in batches of the configured size.
    /// The first failing batch ends the copy and later batches are not sent.
    pub(crate) async fn copy_partitions_between(
        &self,
        source: &QualifiedName,
        destination: &QualifiedName,
    ) -> CatalogResult<PartitionCopySummary> {
        let client = self.client();
        let batch_size = self.options.partition_batch_size;
        debug!(
            "Copying partitions of {source} to {destination} without fields {}",
            PARTITION_STRIPPED_FIELDS.join(", ")
        );

        let partitions =
            paginate(|token| client.get_partitions(&source.database, &source.name, token));
        let mut partitions = std::pin::pin!(partitions);
        let mut summary = PartitionCopySummary::default();
        let mut batch = Vec::with_capacity(batch_size);
        while let Some(partition) = partitions.try_next().await? {
            summary.partitions += 1;
            batch.push(partition_input(partition));
            if batch.len() == batch_size {
                let full = std::mem::replace(&mut batch, Vec::with_capacity(batch_size));
                self.submit_partitions(destination, full, &mut summary).await?;
            }
        }
        if !batch.is_empty() {
            self.submit_partitions(destination, batch, &mut summary).await?;
        }

        info!(
            "Copied {} partition(s) of {source} to {destination} in {} batch(es)",
            summary.created(),
            summary.batches
        );
        Ok(summary)
    }

    async fn submit_partitions(
        &self,
        destination: &QualifiedName,
        batch: Vec<PartitionInput>,
        summary: &mut PartitionCopySummary,
    ) -> CatalogResult<()> {
        debug!(
            "Creating {} partition(s) in {destination} (batch {})",
            batch.len(),
            summary.batches + 1
        );
        let errors = self
            .client()
            .batch_create_partition(&destination.database, &destination.name, batch)
            .await?;
        summary.batches += 1;
        summary.rejected += errors.len();
        for error in &errors {
            log_partition_error(destination, error);
        }
        Ok(())
    }
}

fn log_partition_error(destination: &QualifiedName, error: &PartitionError) {
    let values = error.partition_values().join(", ");
    let (code, message) = error
        .error_detail()
        .map(|d| {
            (
                d.error_code().unwrap_or("unknown"),
                d.error_message().unwrap_or_default(),
            )
        })
        .unwrap_or(("unknown", ""));
    warn!("Partition [{values}] was not created in {destination}: {code}: {message}");
}
