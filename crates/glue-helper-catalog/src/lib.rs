pub mod client;
pub mod descriptor;
pub mod error;
pub mod manager;
pub mod name;
pub mod pagination;

pub use client::glue::{GlueCatalogClient, GlueCatalogConfig};
pub use client::memory::MemoryCatalogClient;
pub use client::CatalogClient;
pub use manager::{CatalogManager, CatalogManagerOptions, PartitionCopySummary};
pub use name::QualifiedName;
