use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::SystemTime;

use aws_sdk_glue::primitives::DateTime;
use aws_sdk_glue::types::{
    DatabaseInput, ErrorDetail, Partition, PartitionError, PartitionInput, Table, TableInput,
};

use crate::client::CatalogClient;
use crate::error::{CatalogError, CatalogResult};
use crate::manager::BATCH_CREATE_PARTITION_LIMIT;
use crate::name::QualifiedName;
use crate::pagination::Page;

/// The principal recorded as the creator of tables in the in-memory catalog.
pub const MEMORY_CATALOG_PRINCIPAL: &str = "arn:aws:iam::000000000000:user/memory";

/// A bulk partition request received by [`MemoryCatalogClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchCall {
    pub table: QualifiedName,
    pub size: usize,
}

struct MemoryTable {
    table: Table,
    partitions: Vec<Partition>,
}

struct MemoryDatabase {
    name: String,
    tables: Vec<MemoryTable>,
}

#[derive(Default)]
struct MemoryState {
    databases: Vec<MemoryDatabase>,
    created_tables: Vec<QualifiedName>,
    batch_calls: Vec<BatchCall>,
    successful_batches_before_failure: Option<usize>,
}

impl MemoryState {
    fn database(&self, database: &str) -> CatalogResult<&MemoryDatabase> {
        self.databases
            .iter()
            .find(|db| db.name == database)
            .ok_or_else(|| CatalogError::NotFound("database", database.to_string()))
    }

    fn database_mut(&mut self, database: &str) -> CatalogResult<&mut MemoryDatabase> {
        self.databases
            .iter_mut()
            .find(|db| db.name == database)
            .ok_or_else(|| CatalogError::NotFound("database", database.to_string()))
    }

    fn table(&self, database: &str, table: &str) -> CatalogResult<&MemoryTable> {
        self.database(database)?
            .tables
            .iter()
            .find(|t| t.table.name() == table)
            .ok_or_else(|| CatalogError::NotFound("table", format!("{database}.{table}")))
    }

    fn table_mut(&mut self, database: &str, table: &str) -> CatalogResult<&mut MemoryTable> {
        self.database_mut(database)?
            .tables
            .iter_mut()
            .find(|t| t.table.name() == table)
            .ok_or_else(|| CatalogError::NotFound("table", format!("{database}.{table}")))
    }
}

/// An in-memory catalog that mimics the AWS Glue Data Catalog.
///
/// Objects keep their creation order, listings are paged with a fixed page
/// size, and created objects carry the service-managed fields that Glue
/// reports (creation time, owning database, creator).
pub struct MemoryCatalogClient {
    page_size: usize,
    state: Mutex<MemoryState>,
}

impl Default for MemoryCatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryCatalogClient {
    pub fn new() -> Self {
        Self {
            page_size: BATCH_CREATE_PARTITION_LIMIT,
            state: Mutex::new(MemoryState::default()),
        }
    }

    /// Sets the number of items returned per listing page.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Makes a bulk partition request fail after `successful` further
    /// requests have succeeded.
    pub fn fail_batch_after(&self, successful: usize) {
        self.state().successful_batches_before_failure = Some(successful);
    }

    /// Returns the bulk partition requests received so far, in order.
    pub fn batch_calls(&self) -> Vec<BatchCall> {
        self.state().batch_calls.clone()
    }

    /// Returns the tables created so far, in order.
    pub fn created_tables(&self) -> Vec<QualifiedName> {
        self.state().created_tables.clone()
    }

    /// Returns the stored partitions of a table.
    pub fn partitions(&self, database: &str, table: &str) -> CatalogResult<Vec<Partition>> {
        Ok(self.state().table(database, table)?.partitions.clone())
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn page<T: Clone>(&self, items: &[T], next_token: Option<String>) -> CatalogResult<Page<T>> {
        let start = match next_token {
            Some(token) => token.parse::<usize>().map_err(|_| {
                CatalogError::InvalidArgument(format!("invalid continuation token: {token}"))
            })?,
            None => 0,
        };
        let end = items.len().min(start.saturating_add(self.page_size));
        let page = items.get(start..end).unwrap_or_default().to_vec();
        let next_token = (end < items.len()).then(|| end.to_string());
        Ok(Page::new(page, next_token))
    }
}

fn now() -> DateTime {
    DateTime::from(SystemTime::now())
}

fn table_from_input(database: &str, input: TableInput) -> CatalogResult<Table> {
    let now = now();
    Table::builder()
        .name(input.name)
        .database_name(database)
        .set_description(input.description)
        .set_owner(input.owner)
        .create_time(now)
        .update_time(now)
        .set_last_access_time(input.last_access_time)
        .set_last_analyzed_time(input.last_analyzed_time)
        .retention(input.retention)
        .set_storage_descriptor(input.storage_descriptor)
        .set_partition_keys(input.partition_keys)
        .set_view_original_text(input.view_original_text)
        .set_view_expanded_text(input.view_expanded_text)
        .set_table_type(input.table_type)
        .set_parameters(input.parameters)
        .set_target_table(input.target_table)
        .created_by(MEMORY_CATALOG_PRINCIPAL)
        .is_registered_with_lake_formation(false)
        .build()
        .map_err(|e| CatalogError::InvalidArgument(format!("Failed to build table: {e}")))
}

fn partition_from_input(database: &str, table: &str, input: PartitionInput) -> Partition {
    Partition::builder()
        .set_values(input.values)
        .database_name(database)
        .table_name(table)
        .creation_time(now())
        .set_last_access_time(input.last_access_time)
        .set_storage_descriptor(input.storage_descriptor)
        .set_parameters(input.parameters)
        .set_last_analyzed_time(input.last_analyzed_time)
        .build()
}

#[async_trait::async_trait]
impl CatalogClient for MemoryCatalogClient {
    async fn get_table(&self, database: &str, table: &str) -> CatalogResult<Table> {
        Ok(self.state().table(database, table)?.table.clone())
    }

    async fn get_tables(
        &self,
        database: &str,
        next_token: Option<String>,
    ) -> CatalogResult<Page<Table>> {
        let state = self.state();
        let tables: Vec<Table> = state
            .database(database)?
            .tables
            .iter()
            .map(|t| t.table.clone())
            .collect();
        self.page(&tables, next_token)
    }

    async fn create_table(&self, database: &str, input: TableInput) -> CatalogResult<()> {
        let mut state = self.state();
        let name = QualifiedName::new(database, input.name());
        let db = state.database_mut(database)?;
        if db.tables.iter().any(|t| t.table.name() == name.name) {
            return Err(CatalogError::AlreadyExists("table", name.to_string()));
        }
        db.tables.push(MemoryTable {
            table: table_from_input(database, input)?,
            partitions: vec![],
        });
        state.created_tables.push(name);
        Ok(())
    }

    async fn delete_table(&self, database: &str, table: &str) -> CatalogResult<()> {
        let mut state = self.state();
        let db = state.database_mut(database)?;
        let index = db
            .tables
            .iter()
            .position(|t| t.table.name() == table)
            .ok_or_else(|| CatalogError::NotFound("table", format!("{database}.{table}")))?;
        db.tables.remove(index);
        Ok(())
    }

    async fn get_partitions(
        &self,
        database: &str,
        table: &str,
        next_token: Option<String>,
    ) -> CatalogResult<Page<Partition>> {
        let state = self.state();
        self.page(&state.table(database, table)?.partitions, next_token)
    }

    async fn batch_create_partition(
        &self,
        database: &str,
        table: &str,
        inputs: Vec<PartitionInput>,
    ) -> CatalogResult<Vec<PartitionError>> {
        let mut state = self.state();
        state.batch_calls.push(BatchCall {
            table: QualifiedName::new(database, table),
            size: inputs.len(),
        });
        match state.successful_batches_before_failure {
            Some(0) => {
                state.successful_batches_before_failure = None;
                return Err(CatalogError::External(
                    "Failed to create partitions: injected failure".to_string(),
                ));
            }
            Some(n) => state.successful_batches_before_failure = Some(n - 1),
            None => {}
        }
        if inputs.len() > BATCH_CREATE_PARTITION_LIMIT {
            return Err(CatalogError::InvalidArgument(format!(
                "at most {BATCH_CREATE_PARTITION_LIMIT} partitions can be created in one request, got {}",
                inputs.len()
            )));
        }

        let target = state.table_mut(database, table)?;
        let mut errors = vec![];
        for input in inputs {
            if target
                .partitions
                .iter()
                .any(|p| p.values() == input.values())
            {
                let detail = ErrorDetail::builder()
                    .error_code("AlreadyExistsException")
                    .error_message("Partition already exists.")
                    .build();
                errors.push(
                    PartitionError::builder()
                        .set_partition_values(input.values)
                        .error_detail(detail)
                        .build(),
                );
                continue;
            }
            target
                .partitions
                .push(partition_from_input(database, table, input));
        }
        Ok(errors)
    }

    async fn create_database(&self, input: DatabaseInput) -> CatalogResult<()> {
        let mut state = self.state();
        if state.databases.iter().any(|db| db.name == input.name()) {
            return Err(CatalogError::AlreadyExists("database", input.name));
        }
        state.databases.push(MemoryDatabase {
            name: input.name,
            tables: vec![],
        });
        Ok(())
    }
}
