// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Shared test utilities for Glue catalog integration tests.

use std::time::Duration;

use aws_sdk_glue::types::{Column, DatabaseInput, PartitionInput, StorageDescriptor, TableInput};
use glue_helper_catalog::{CatalogClient, GlueCatalogClient, GlueCatalogConfig};
use testcontainers::core::{ContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, GenericImage, ImageExt};

/// Sets up a Glue catalog client backed by a Moto container for testing.
/// Returns the client and container.
pub async fn setup_glue_client() -> (GlueCatalogClient, ContainerAsync<GenericImage>) {
    let moto = GenericImage::new("motoserver/moto", "latest")
        .with_wait_for(WaitFor::message_on_stderr("Running on"))
        .with_exposed_port(ContainerPort::Tcp(5000))
        .with_startup_timeout(Duration::from_secs(120))
        .start()
        .await
        .expect("Failed to start Moto");

    let host = moto.get_host().await.expect("get host");
    let port = moto.get_host_port_ipv4(5000).await.expect("get port");
    let endpoint = format!("http://{host}:{port}");

    // Moto accepts any credentials when endpoint_url is set
    std::env::set_var("AWS_ACCESS_KEY_ID", "testing");
    std::env::set_var("AWS_SECRET_ACCESS_KEY", "testing");

    let client = GlueCatalogClient::load(GlueCatalogConfig {
        region: Some("us-east-1".to_string()),
        endpoint_url: Some(endpoint),
        catalog_id: None,
    })
    .await;

    (client, moto)
}

/// Creates a database.
pub async fn create_database(client: &GlueCatalogClient, name: &str) {
    client
        .create_database(DatabaseInput::builder().name(name).build().unwrap())
        .await
        .unwrap();
}

/// Creates a parquet table partitioned by `dt`.
pub async fn create_partitioned_table(client: &GlueCatalogClient, database: &str, name: &str) {
    let input = TableInput::builder()
        .name(name)
        .description("Partitioned test table")
        .table_type("EXTERNAL_TABLE")
        .storage_descriptor(
            StorageDescriptor::builder()
                .location(format!("s3://bucket/{name}"))
                .columns(Column::builder().name("id").r#type("bigint").build().unwrap())
                .build(),
        )
        .partition_keys(Column::builder().name("dt").r#type("string").build().unwrap())
        .parameters("classification", "parquet")
        .build()
        .unwrap();
    client.create_table(database, input).await.unwrap();
}

/// Creates `count` partitions with values `d0000`, `d0001`, and so on.
pub async fn create_partitions(
    client: &GlueCatalogClient,
    database: &str,
    table: &str,
    count: usize,
) {
    let inputs: Vec<PartitionInput> = (0..count)
        .map(|i| {
            PartitionInput::builder()
                .values(format!("d{i:04}"))
                .storage_descriptor(
                    StorageDescriptor::builder()
                        .location(format!("s3://bucket/{table}/dt=d{i:04}"))
                        .build(),
                )
                .build()
        })
        .collect();
    for chunk in inputs.chunks(100) {
        let errors = client
            .batch_create_partition(database, table, chunk.to_vec())
            .await
            .unwrap();
        assert!(errors.is_empty());
    }
}
