//! Partner generation.

use fake::{
    Fake,
    faker::{
        internet::en::SafeEmail, lorem::en::Sentence, name::en::Name,
        phone_number::en::PhoneNumber,
    },
};
use rand::Rng;
use time::OffsetDateTime;

use super::GenerationError;

/// Generated partner ready for insertion.
#[derive(Debug, Clone)]
pub struct GeneratedPartner {
    /// Assigned by the database.
    pub id: Option<i32>,
    pub partner_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    /// Bound at insert time by the seeder.
    pub registration_date: Option<OffsetDateTime>,
}

/// Generates partner rows.
#[derive(Debug, Clone, Default)]
pub struct PartnerGenerator;

impl PartnerGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generates a single partner.
    pub fn generate(&self, rng: &mut impl Rng) -> Result<GeneratedPartner, GenerationError> {
        Ok(GeneratedPartner {
            id: None,
            partner_name: Name().fake_with_rng(rng),
            contact_person: Name().fake_with_rng(rng),
            email: SafeEmail().fake_with_rng(rng),
            phone_number: PhoneNumber().fake_with_rng(rng),
            address: Sentence(3..8).fake_with_rng(rng),
            registration_date: None,
        })
    }
}
