//! Database seeding for the `partners` and `customers` tables.
//!
//! This crate reads a YAML datasource file, connects to PostgreSQL, and inserts
//! a configurable number of fabricated rows into one of the two tables.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seeder::prelude::*;
//!
//! let datasource = load_datasource("dbconfig.yml", "development")?;
//! let pool = connect(&datasource.datasource).await?;
//!
//! let report = Seeder::new(PgStore::new(pool))
//!     .seed(TableKind::from_name("customers"), 100, &mut rand::thread_rng())
//!     .await?;
//! ```

pub mod cli;
pub mod config;
pub mod db;
pub mod generators;
pub mod progress;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::cli::Args;
    pub use crate::config::{ConfigError, DataSourceConfig, DbConfig, load_datasource};
    pub use crate::db::{PgStore, RecordStore, SeedError, SeedReport, Seeder, TableKind};
    pub use crate::db::{connect, migrate};
    pub use crate::generators::{
        CustomerGenerator, GeneratedCustomer, GeneratedPartner, GenerationError, PartnerGenerator,
    };
    pub use crate::progress::{Progress, calculate_percentage};
}
