use futures::TryStreamExt;
use log::{debug, info, warn};

use crate::descriptor::{table_input, TABLE_STRIPPED_FIELDS};
use crate::error::CatalogResult;
use crate::manager::{CatalogManager, PartitionCopySummary};
use crate::name::QualifiedName;
use crate::pagination::paginate;

impl CatalogManager {
    /// Copies the definition of `source` to `destination` and then copies
    /// its partitions.
    ///
    /// The table is not rolled back when the partition copy fails, so the
    /// destination table can be left with only part of its partitions.
    pub async fn copy_table(
        &self,
        source: &str,
        destination: &str,
    ) -> CatalogResult<PartitionCopySummary> {
        let source = QualifiedName::parse(source);
        let destination = QualifiedName::parse(destination);

        let table = self
            .client()
            .get_table(&source.database, &source.name)
            .await?;
        debug!(
            "Copying table {source} to {destination} without fields {}",
            TABLE_STRIPPED_FIELDS.join(", ")
        );
        let input = table_input(table, &destination.name)?;
        self.client()
            .create_table(&destination.database, input)
            .await?;
        info!("Created table {destination} from {source}");

        self.copy_partitions_between(&source, &destination)
            .await
            .inspect_err(|e| {
                warn!("Table {destination} was created but its partitions were not fully copied: {e}");
            })
    }

    /// Returns the names of the tables in `database` in catalog order.
    /// The name is used as is, without splitting on `.`.
    pub async fn list_tables(&self, database: &str) -> CatalogResult<Vec<String>> {
        let client = self.client();
        paginate(|token| client.get_tables(database, token))
            .map_ok(|table| table.name)
            .try_collect()
            .await
    }

    /// Deletes a table.
    pub async fn delete_table(&self, table: &str) -> CatalogResult<()> {
        let table = QualifiedName::parse(table);
        self.client()
            .delete_table(&table.database, &table.name)
            .await?;
        info!("Deleted table {table}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use aws_sdk_glue::types::{Column, DatabaseInput, PartitionInput, StorageDescriptor, TableInput};

    use crate::client::memory::{MemoryCatalogClient, MEMORY_CATALOG_PRINCIPAL};
    use crate::client::CatalogClient;
    use crate::error::CatalogError;
    use crate::manager::{CatalogManager, CatalogManagerOptions};
    use crate::name::QualifiedName;

    async fn setup(page_size: usize) -> (Arc<MemoryCatalogClient>, CatalogManager) {
        let client = Arc::new(MemoryCatalogClient::new().with_page_size(page_size));
        for db in ["sales", "archive"] {
            client
                .create_database(DatabaseInput::builder().name(db).build().unwrap())
                .await
                .unwrap();
        }
        let table = TableInput::builder()
            .name("orders")
            .description("Orders placed online")
            .table_type("EXTERNAL_TABLE")
            .storage_descriptor(
                StorageDescriptor::builder()
                    .location("s3://bucket/orders")
                    .columns(Column::builder().name("id").r#type("bigint").build().unwrap())
                    .build(),
            )
            .partition_keys(Column::builder().name("dt").r#type("string").build().unwrap())
            .build()
            .unwrap();
        client.create_table("sales", table).await.unwrap();
        let partitions = ["2024-01-01", "2024-01-02"]
            .into_iter()
            .map(|dt| PartitionInput::builder().values(dt).build())
            .collect();
        client
            .batch_create_partition("sales", "orders", partitions)
            .await
            .unwrap();
        let manager =
            CatalogManager::try_new(client.clone(), CatalogManagerOptions::default()).unwrap();
        (client, manager)
    }

    #[tokio::test]
    async fn test_copy_table() {
        let (client, manager) = setup(100).await;

        let summary = manager
            .copy_table("sales.orders", "archive.orders_2024")
            .await
            .unwrap();
        assert_eq!(summary.partitions, 2);
        assert_eq!(summary.batches, 1);

        let copy = client.get_table("archive", "orders_2024").await.unwrap();
        assert_eq!(copy.name(), "orders_2024");
        assert_eq!(copy.database_name(), Some("archive"));
        assert_eq!(copy.description(), Some("Orders placed online"));
        assert_eq!(copy.table_type(), Some("EXTERNAL_TABLE"));
        assert_eq!(
            copy.storage_descriptor().and_then(|sd| sd.location()),
            Some("s3://bucket/orders")
        );
        assert_eq!(copy.partition_keys().len(), 1);
        assert_eq!(copy.created_by(), Some(MEMORY_CATALOG_PRINCIPAL));
        assert_eq!(client.partitions("archive", "orders_2024").unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_copy_table_missing_source() {
        let (client, manager) = setup(100).await;
        let created = client.created_tables().len();
        let batches = client.batch_calls().len();

        let result = manager.copy_table("sales.missing", "archive.orders").await;

        assert!(matches!(result, Err(CatalogError::NotFound("table", _))));
        assert_eq!(client.created_tables().len(), created);
        assert_eq!(client.batch_calls().len(), batches);
    }

    #[tokio::test]
    async fn test_copy_table_existing_destination() {
        let (client, manager) = setup(100).await;
        let batches = client.batch_calls().len();

        let result = manager.copy_table("sales.orders", "sales.orders").await;

        assert!(matches!(
            result,
            Err(CatalogError::AlreadyExists("table", _))
        ));
        assert_eq!(client.batch_calls().len(), batches);
    }

    #[tokio::test]
    async fn test_copy_table_keeps_table_when_partitions_fail() {
        let (client, manager) = setup(100).await;
        client.fail_batch_after(0);

        let result = manager.copy_table("sales.orders", "archive.orders").await;

        assert!(matches!(result, Err(CatalogError::External(_))));
        assert_eq!(
            client.created_tables().last(),
            Some(&QualifiedName::new("archive", "orders"))
        );
        assert!(client.get_table("archive", "orders").await.is_ok());
        assert!(client.partitions("archive", "orders").unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_tables() {
        let (client, manager) = setup(2).await;
        for name in ["x", "y", "z"] {
            client
                .create_table("archive", TableInput::builder().name(name).build().unwrap())
                .await
                .unwrap();
        }

        assert_eq!(manager.list_tables("archive").await.unwrap(), vec!["x", "y", "z"]);
        assert_eq!(manager.list_tables("sales").await.unwrap(), vec!["orders"]);
        assert!(matches!(
            manager.list_tables("missing").await,
            Err(CatalogError::NotFound("database", _))
        ));
    }

    #[tokio::test]
    async fn test_delete_table() {
        let (client, manager) = setup(100).await;

        manager.delete_table("sales.orders").await.unwrap();

        assert!(matches!(
            client.get_table("sales", "orders").await,
            Err(CatalogError::NotFound("table", _))
        ));
        assert!(matches!(
            manager.delete_table("sales.orders").await,
            Err(CatalogError::NotFound("table", _))
        ));
    }

    #[tokio::test]
    async fn test_bare_names_use_empty_database() {
        let (client, manager) = setup(100).await;
        client
            .create_database(DatabaseInput::builder().name("").build().unwrap())
            .await
            .unwrap();

        manager.copy_table("sales.orders", "orders").await.unwrap();

        assert_eq!(manager.list_tables("").await.unwrap(), vec!["orders"]);
        manager.delete_table("orders").await.unwrap();
        assert!(manager.list_tables("").await.unwrap().is_empty());
    }
}
