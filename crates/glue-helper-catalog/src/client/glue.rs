use aws_config::BehaviorVersion;
use aws_sdk_glue::config::Region;
use aws_sdk_glue::types::{
    DatabaseInput, Partition, PartitionError, PartitionInput, Table, TableInput,
};
use aws_sdk_glue::Client;

use crate::client::CatalogClient;
use crate::error::{CatalogError, CatalogResult};
use crate::pagination::Page;

/// Configuration for AWS Glue Data Catalog.
#[derive(Debug, Clone, Default)]
pub struct GlueCatalogConfig {
    /// AWS region (e.g., "us-east-1"). If not set, uses default from credential chain.
    pub region: Option<String>,
    /// Custom endpoint URL (optional). Useful for VPC endpoints or local development.
    pub endpoint_url: Option<String>,
    /// The catalog ID (AWS account ID). If not set, the caller's account is used.
    pub catalog_id: Option<String>,
}

/// A catalog client backed by the AWS Glue Data Catalog.
pub struct GlueCatalogClient {
    catalog_id: Option<String>,
    client: Client,
}

impl GlueCatalogClient {
    /// Resolves the AWS SDK configuration and builds the client.
    /// Credentials come from the SDK default chain.
    pub async fn load(config: GlueCatalogConfig) -> Self {
        let GlueCatalogConfig {
            region,
            endpoint_url,
            catalog_id,
        } = config;

        let mut config_loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(region) = region {
            config_loader = config_loader.region(Region::new(region));
        }

        if let Some(endpoint) = &endpoint_url {
            config_loader = config_loader.endpoint_url(endpoint);
        }

        let sdk_config = config_loader.load().await;
        Self {
            catalog_id,
            client: Client::new(&sdk_config),
        }
    }
}

#[async_trait::async_trait]
impl CatalogClient for GlueCatalogClient {
    async fn get_table(&self, database: &str, table: &str) -> CatalogResult<Table> {
        let result = self
            .client
            .get_table()
            .set_catalog_id(self.catalog_id.clone())
            .database_name(database)
            .name(table)
            .send()
            .await;

        match result {
            Ok(output) => output
                .table
                .ok_or_else(|| CatalogError::External("Table response is empty".to_string())),
            Err(sdk_err) => {
                let service_err = sdk_err.into_service_error();
                if service_err.is_entity_not_found_exception() {
                    Err(CatalogError::NotFound("table", format!("{database}.{table}")))
                } else {
                    Err(CatalogError::External(format!(
                        "Failed to get table: {service_err}"
                    )))
                }
            }
        }
    }

    async fn get_tables(
        &self,
        database: &str,
        next_token: Option<String>,
    ) -> CatalogResult<Page<Table>> {
        let result = self
            .client
            .get_tables()
            .set_catalog_id(self.catalog_id.clone())
            .database_name(database)
            .set_next_token(next_token)
            .send()
            .await;

        match result {
            Ok(output) => Ok(Page::new(
                output.table_list.unwrap_or_default(),
                output.next_token,
            )),
            Err(sdk_err) => {
                let service_err = sdk_err.into_service_error();
                if service_err.is_entity_not_found_exception() {
                    Err(CatalogError::NotFound("database", database.to_string()))
                } else {
                    Err(CatalogError::External(format!(
                        "Failed to list tables: {service_err}"
                    )))
                }
            }
        }
    }

    async fn create_table(&self, database: &str, input: TableInput) -> CatalogResult<()> {
        let table = format!("{database}.{}", input.name());

        let result = self
            .client
            .create_table()
            .set_catalog_id(self.catalog_id.clone())
            .database_name(database)
            .table_input(input)
            .send()
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(sdk_err) => {
                let service_err = sdk_err.into_service_error();
                if service_err.is_already_exists_exception() {
                    Err(CatalogError::AlreadyExists("table", table))
                } else if service_err.is_entity_not_found_exception() {
                    Err(CatalogError::NotFound("database", database.to_string()))
                } else if service_err.is_invalid_input_exception() {
                    Err(CatalogError::InvalidArgument(format!(
                        "Failed to create table {table}: {service_err}"
                    )))
                } else {
                    Err(CatalogError::External(format!(
                        "Failed to create table: {service_err}"
                    )))
                }
            }
        }
    }

    async fn delete_table(&self, database: &str, table: &str) -> CatalogResult<()> {
        let result = self
            .client
            .delete_table()
            .set_catalog_id(self.catalog_id.clone())
            .database_name(database)
            .name(table)
            .send()
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(sdk_err) => {
                let service_err = sdk_err.into_service_error();
                if service_err.is_entity_not_found_exception() {
                    Err(CatalogError::NotFound("table", format!("{database}.{table}")))
                } else {
                    Err(CatalogError::External(format!(
                        "Failed to delete table: {service_err}"
                    )))
                }
            }
        }
    }

    async fn get_partitions(
        &self,
        database: &str,
        table: &str,
        next_token: Option<String>,
    ) -> CatalogResult<Page<Partition>> {
        let result = self
            .client
            .get_partitions()
            .set_catalog_id(self.catalog_id.clone())
            .database_name(database)
            .table_name(table)
            .set_next_token(next_token)
            .send()
            .await;

        match result {
            Ok(output) => Ok(Page::new(
                output.partitions.unwrap_or_default(),
                output.next_token,
            )),
            Err(sdk_err) => {
                let service_err = sdk_err.into_service_error();
                if service_err.is_entity_not_found_exception() {
                    Err(CatalogError::NotFound("table", format!("{database}.{table}")))
                } else {
                    Err(CatalogError::External(format!(
                        "Failed to get partitions: {service_err}"
                    )))
                }
            }
        }
    }

    async fn batch_create_partition(
        &self,
        database: &str,
        table: &str,
        inputs: Vec<PartitionInput>,
    ) -> CatalogResult<Vec<PartitionError>> {
        let result = self
            .client
            .batch_create_partition()
            .set_catalog_id(self.catalog_id.clone())
            .database_name(database)
            .table_name(table)
            .set_partition_input_list(Some(inputs))
            .send()
            .await;

        match result {
            Ok(output) => Ok(output.errors.unwrap_or_default()),
            Err(sdk_err) => {
                let service_err = sdk_err.into_service_error();
                if service_err.is_entity_not_found_exception() {
                    Err(CatalogError::NotFound("table", format!("{database}.{table}")))
                } else if service_err.is_invalid_input_exception() {
                    Err(CatalogError::InvalidArgument(format!(
                        "Failed to create partitions: {service_err}"
                    )))
                } else {
                    Err(CatalogError::External(format!(
                        "Failed to create partitions: {service_err}"
                    )))
                }
            }
        }
    }

    async fn create_database(&self, input: DatabaseInput) -> CatalogResult<()> {
        let db_name = input.name().to_string();

        let result = self
            .client
            .create_database()
            .set_catalog_id(self.catalog_id.clone())
            .database_input(input)
            .send()
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(sdk_err) => {
                let service_err = sdk_err.into_service_error();
                if service_err.is_already_exists_exception() {
                    Err(CatalogError::AlreadyExists("database", db_name))
                } else if service_err.is_invalid_input_exception() {
                    Err(CatalogError::InvalidArgument(format!(
                        "Failed to create database {db_name}: {service_err}"
                    )))
                } else {
                    Err(CatalogError::External(format!(
                        "Failed to create database: {service_err}"
                    )))
                }
            }
        }
    }
}
