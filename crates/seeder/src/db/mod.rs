//! Database integration for seeding.
//!
//! [`RecordStore`] is the insert seam: [`PgStore`] writes to PostgreSQL, tests
//! substitute their own. The [`Seeder`] drives generation, inserts and progress
//! reporting on top of any store.

mod seeder;
mod store;

pub use seeder::{ProgressCallback, SeedError, SeedReport, Seeder, TableKind};
pub use store::{PgStore, RecordStore, connect, migrate};
