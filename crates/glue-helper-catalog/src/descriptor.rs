//! Conversions from catalog descriptors to the inputs of the create calls.
//!
//! The Glue `Table` and `Partition` shapes carry service-managed fields that
//! the create calls reject. Each conversion builds a new input from the
//! transferable fields only, so a field that is absent from the source is
//! simply skipped.

use aws_sdk_glue::types::{Partition, PartitionInput, Table, TableInput};
use log::warn;

use crate::error::{CatalogError, CatalogResult};

/// Table fields that are removed before the table is created elsewhere.
/// Other service-managed fields such as `CatalogId` and `VersionId` have no
/// counterpart in the table input either and are dropped as well.
pub const TABLE_STRIPPED_FIELDS: [&str; 5] = [
    "DatabaseName",
    "CreateTime",
    "UpdateTime",
    "CreatedBy",
    "IsRegisteredWithLakeFormation",
];

/// Partition fields that are removed before the partition is created elsewhere.
pub const PARTITION_STRIPPED_FIELDS: [&str; 3] = ["CreationTime", "DatabaseName", "TableName"];

/// Builds the input that recreates `table` under the name `name`.
pub fn table_input(table: Table, name: &str) -> CatalogResult<TableInput> {
    if table.view_definition.is_some() {
        warn!(
            "The multi-dialect view definition of {} is not copied",
            table.name
        );
    }
    TableInput::builder()
        .name(name)
        .set_description(table.description)
        .set_owner(table.owner)
        .set_last_access_time(table.last_access_time)
        .set_last_analyzed_time(table.last_analyzed_time)
        .retention(table.retention)
        .set_storage_descriptor(table.storage_descriptor)
        .set_partition_keys(table.partition_keys)
        .set_view_original_text(table.view_original_text)
        .set_view_expanded_text(table.view_expanded_text)
        .set_table_type(table.table_type)
        .set_parameters(table.parameters)
        .set_target_table(table.target_table)
        .build()
        .map_err(|e| CatalogError::InvalidArgument(format!("Failed to build table input: {e}")))
}

/// Builds the input that recreates `partition` in another table.
pub fn partition_input(partition: Partition) -> PartitionInput {
    PartitionInput::builder()
        .set_values(partition.values)
        .set_last_access_time(partition.last_access_time)
        .set_storage_descriptor(partition.storage_descriptor)
        .set_parameters(partition.parameters)
        .set_last_analyzed_time(partition.last_analyzed_time)
        .build()
}
