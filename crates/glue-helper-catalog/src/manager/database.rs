use aws_sdk_glue::types::DatabaseInput;
use log::info;

use crate::error::{CatalogError, CatalogResult};
use crate::manager::CatalogManager;

impl CatalogManager {
    /// Creates a database. The name is used as is, without splitting on `.`.
    pub async fn create_database(&self, database: &str) -> CatalogResult<()> {
        let input = DatabaseInput::builder().name(database).build().map_err(|e| {
            CatalogError::InvalidArgument(format!("Failed to build database input: {e}"))
        })?;
        self.client().create_database(input).await?;
        info!("Created database {database}");
        Ok(())
    }
}
