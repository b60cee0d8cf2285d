//! Seed loops for the partners and customers tables.

use std::fmt;
use std::time::{Duration, Instant};

use rand::Rng;
use thiserror::Error;
use time::OffsetDateTime;
use tracing::{info, warn};

use super::RecordStore;
use crate::generators::{CustomerGenerator, GenerationError, PartnerGenerator};
use crate::progress::{self, DEFAULT_PROGRESS_INTERVAL, Progress};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to connect to database")]
    Connection(#[source] sqlx::Error),
    #[error("Failed to generate record")]
    Generation(#[from] GenerationError),
    #[error("Failed to insert row {row} into {table}")]
    Insert {
        table: TableKind,
        row: usize,
        #[source]
        source: sqlx::Error,
    },
    #[error("Failed to apply migrations")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// The two tables the seeder knows how to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Partners,
    Customers,
}

impl TableKind {
    /// Maps a table name to a kind.
    ///
    /// Only the exact name `partners` selects partners; every other name,
    /// including unknown ones, selects customers.
    pub fn from_name(name: &str) -> Self {
        match name {
            "partners" => TableKind::Partners,
            "customers" => TableKind::Customers,
            other => {
                warn!("Unknown table name {other:?}, seeding customers");
                TableKind::Customers
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TableKind::Partners => "partners",
            TableKind::Customers => "customers",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a completed seed run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedReport {
    pub table: TableKind,
    pub inserted: usize,
    pub elapsed: Duration,
}

/// Progress callback for customer seeding.
pub type ProgressCallback = Box<dyn Fn(&Progress) + Send + Sync>;

/// Generates records and inserts them one at a time.
pub struct Seeder<S> {
    store: S,
    partners: PartnerGenerator,
    customers: CustomerGenerator,
    on_progress: Option<ProgressCallback>,
}

impl<S: RecordStore> Seeder<S> {
    /// Creates a seeder with default generators writing to `store`.
    pub fn new(store: S) -> Self {
        Self {
            store,
            partners: PartnerGenerator::new(),
            customers: CustomerGenerator::new(),
            on_progress: None,
        }
    }

    /// Routes progress reports to `callback` instead of the log.
    pub fn with_progress(mut self, callback: impl Fn(&Progress) + Send + Sync + 'static) -> Self {
        self.on_progress = Some(Box::new(callback));
        self
    }

    /// Seeds `total` rows into the table selected by `kind`.
    pub async fn seed(
        &self,
        kind: TableKind,
        total: usize,
        rng: &mut impl Rng,
    ) -> Result<SeedReport, SeedError> {
        match kind {
            TableKind::Partners => self.seed_partners(total, rng).await,
            TableKind::Customers => self.seed_customers(total, rng).await,
        }
    }

    /// Inserts `total` generated partners. Stops at the first failure; rows
    /// already inserted stay in place.
    pub async fn seed_partners(
        &self,
        total: usize,
        rng: &mut impl Rng,
    ) -> Result<SeedReport, SeedError> {
        let started = Instant::now();

        for i in 0..total {
            let partner = self.partners.generate(rng)?;

            self.store
                .insert_partner(&partner, OffsetDateTime::now_utc())
                .await
                .map_err(|source| SeedError::Insert {
                    table: TableKind::Partners,
                    row: i + 1,
                    source,
                })?;
        }

        info!("{total} records seeded successfully.");

        Ok(SeedReport {
            table: TableKind::Partners,
            inserted: total,
            elapsed: started.elapsed(),
        })
    }

    /// Inserts `total` generated customers, reporting progress every
    /// [`DEFAULT_PROGRESS_INTERVAL`] rows. Stops at the first failure.
    pub async fn seed_customers(
        &self,
        total: usize,
        rng: &mut impl Rng,
    ) -> Result<SeedReport, SeedError> {
        let started = Instant::now();

        for i in 0..total {
            let customer = self.customers.generate(rng)?;

            self.store
                .insert_customer(&customer, OffsetDateTime::now_utc())
                .await
                .map_err(|source| SeedError::Insert {
                    table: TableKind::Customers,
                    row: i + 1,
                    source,
                })?;

            if let Some(progress) = progress::checkpoint(i + 1, total, DEFAULT_PROGRESS_INTERVAL) {
                self.report(&progress);
            }
        }

        let elapsed = started.elapsed();
        info!(
            "{total} records seeded successfully with duration {:.6} seconds.",
            elapsed.as_secs_f64()
        );

        Ok(SeedReport {
            table: TableKind::Customers,
            inserted: total,
            elapsed,
        })
    }

    fn report(&self, progress: &Progress) {
        match &self.on_progress {
            Some(callback) => callback(progress),
            None => info!("{progress}"),
        }
    }
}
