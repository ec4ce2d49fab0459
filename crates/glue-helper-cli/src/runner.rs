use std::io::Write;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use glue_helper_catalog::{
    CatalogManager, CatalogManagerOptions, GlueCatalogClient, GlueCatalogConfig,
};
use glue_helper_common::config::AppConfig;
use glue_helper_common::logging::init_logger;
use log::{debug, info};

use crate::output::write_table_names;

#[derive(Parser)]
#[command(version, name = "glue-helper", about = "Helper to AWS Glue")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Table actions
    Table {
        #[command(subcommand)]
        action: TableAction,
    },
    /// Partition actions
    Partition {
        #[command(subcommand)]
        action: PartitionAction,
    },
    /// Database actions
    Database {
        #[command(subcommand)]
        action: DatabaseAction,
    },
}

#[derive(Subcommand)]
enum TableAction {
    /// Copy a table and its partitions
    #[command(name = "cp")]
    Copy {
        /// The source table, as `database.table` or `table`
        table: String,
        /// The destination table, as `database.table` or `table`
        destination_table: String,
    },
    /// List the tables of a database
    #[command(name = "ls")]
    List { database: String },
    /// Delete a table
    #[command(name = "rm")]
    Remove {
        /// The table, as `database.table` or `table`
        table: String,
    },
}

#[derive(Subcommand)]
enum PartitionAction {
    /// Copy the partitions of a table into another table
    #[command(name = "cp")]
    Copy {
        /// The source table, as `database.table` or `table`
        table: String,
        /// The destination table, as `database.table` or `table`
        destination_table: String,
    },
}

#[derive(Subcommand)]
enum DatabaseAction {
    /// Create a database
    Create { database: String },
}

pub fn main(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_from(args);

    init_logger()?;
    let config = AppConfig::load()?;
    debug!("Loaded configuration: {config:?}");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let client = GlueCatalogClient::load(GlueCatalogConfig {
            region: config.catalog.region,
            endpoint_url: config.catalog.endpoint_url,
            catalog_id: config.catalog.catalog_id,
        })
        .await;
        let manager = CatalogManager::try_new(
            Arc::new(client),
            CatalogManagerOptions {
                partition_batch_size: config.partition.batch_size,
            },
        )?;
        run(&manager, cli.command, &mut std::io::stdout().lock()).await
    })
}

async fn run(
    manager: &CatalogManager,
    command: Command,
    out: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Table { action } => match action {
            TableAction::Copy {
                table,
                destination_table,
            } => {
                let summary = manager.copy_table(&table, &destination_table).await?;
                info!("Copied table {table} to {destination_table}: {summary:?}");
            }
            TableAction::List { database } => {
                let names = manager.list_tables(&database).await?;
                write_table_names(out, &names)?;
            }
            TableAction::Remove { table } => manager.delete_table(&table).await?,
        },
        Command::Partition { action } => match action {
            PartitionAction::Copy {
                table,
                destination_table,
            } => {
                manager.copy_partitions(&table, &destination_table).await?;
            }
        },
        Command::Database { action } => match action {
            DatabaseAction::Create { database } => manager.create_database(&database).await?,
        },
    }
    Ok(())
}
