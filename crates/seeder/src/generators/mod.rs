//! Record generators for seed data.
//!
//! - [`PartnerGenerator`]: rows for the `partners` table
//! - [`CustomerGenerator`]: rows for the `customers` table, each pointing at a partner
//!
//! Generators never fill in the row identity or the registration date; the
//! database assigns the former and the seeder binds the insert time for the latter.

pub mod customer;
pub mod partner;

use thiserror::Error;

pub use customer::{CustomerGenerator, GeneratedCustomer, PARTNER_IDS};
pub use partner::{GeneratedPartner, PartnerGenerator};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("No values to choose from for field `{0}`")]
    EmptyChoice(&'static str),
}
