pub mod glue;
pub mod memory;

use aws_sdk_glue::types::{
    DatabaseInput, Partition, PartitionError, PartitionInput, Table, TableInput,
};

use crate::error::CatalogResult;
use crate::pagination::Page;

/// A trait that defines the remote calls made against a data catalog.
/// Every method maps to a single request. Listing methods return one page
/// and are driven by [`crate::pagination::paginate`].
#[async_trait::async_trait]
pub trait CatalogClient: Send + Sync {
    /// Gets a table from a database.
    async fn get_table(&self, database: &str, table: &str) -> CatalogResult<Table>;

    /// Gets one page of the tables in a database.
    async fn get_tables(
        &self,
        database: &str,
        next_token: Option<String>,
    ) -> CatalogResult<Page<Table>>;

    /// Creates a table in a database.
    async fn create_table(&self, database: &str, input: TableInput) -> CatalogResult<()>;

    /// Deletes a table from a database.
    async fn delete_table(&self, database: &str, table: &str) -> CatalogResult<()>;

    /// Gets one page of the partitions of a table.
    async fn get_partitions(
        &self,
        database: &str,
        table: &str,
        next_token: Option<String>,
    ) -> CatalogResult<Page<Partition>>;

    /// Creates partitions of a table in a single bulk request.
    /// Partitions rejected individually are reported in the returned list
    /// and do not fail the call.
    async fn batch_create_partition(
        &self,
        database: &str,
        table: &str,
        inputs: Vec<PartitionInput>,
    ) -> CatalogResult<Vec<PartitionError>>;

    /// Creates a database.
    async fn create_database(&self, input: DatabaseInput) -> CatalogResult<()>;
}
