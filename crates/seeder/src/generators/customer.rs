//! Customer generation.

use fake::{
    Fake,
    faker::{
        internet::en::SafeEmail, lorem::en::Sentence, name::en::Name,
        phone_number::en::PhoneNumber,
    },
};
use rand::{Rng, seq::SliceRandom};
use time::OffsetDateTime;

use super::GenerationError;

/// Partner ids a generated customer may reference.
pub const PARTNER_IDS: [i32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

/// Generated customer ready for insertion.
#[derive(Debug, Clone)]
pub struct GeneratedCustomer {
    /// Assigned by the database.
    pub id: Option<i32>,
    pub customer_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    /// Bound at insert time by the seeder.
    pub registration_date: Option<OffsetDateTime>,
    pub partner_id: i32,
}

/// Generates customer rows.
#[derive(Debug, Clone)]
pub struct CustomerGenerator {
    partner_ids: Vec<i32>,
}

impl CustomerGenerator {
    /// Creates a generator drawing partner ids from [`PARTNER_IDS`].
    pub fn new() -> Self {
        Self::with_partner_ids(PARTNER_IDS)
    }

    /// Creates a generator drawing partner ids from `ids`.
    pub fn with_partner_ids(ids: impl Into<Vec<i32>>) -> Self {
        Self {
            partner_ids: ids.into(),
        }
    }

    /// Generates a single customer.
    pub fn generate(&self, rng: &mut impl Rng) -> Result<GeneratedCustomer, GenerationError> {
        let partner_id = *self
            .partner_ids
            .choose(rng)
            .ok_or(GenerationError::EmptyChoice("partner_id"))?;

        Ok(GeneratedCustomer {
            id: None,
            customer_name: Name().fake_with_rng(rng),
            email: SafeEmail().fake_with_rng(rng),
            phone_number: PhoneNumber().fake_with_rng(rng),
            address: Sentence(3..8).fake_with_rng(rng),
            registration_date: None,
            partner_id,
        })
    }
}

impl Default for CustomerGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashSet;

    #[test]
    fn test_generate_customer() {
        let mut rng = rand::thread_rng();
        let customer = CustomerGenerator::new().generate(&mut rng).unwrap();

        assert!(!customer.customer_name.is_empty());
        assert!(customer.email.contains('@'));
        assert!(!customer.phone_number.is_empty());
        assert!(!customer.address.is_empty());
        assert!(customer.id.is_none());
        assert!(customer.registration_date.is_none());
    }

    #[test]
    fn test_partner_id_from_fixed_set() {
        let mut rng = StdRng::seed_from_u64(7);
        let generator = CustomerGenerator::new();

        let seen: HashSet<i32> = (0..500)
            .map(|_| generator.generate(&mut rng).unwrap().partner_id)
            .collect();
        assert!(seen.iter().all(|id| (1..=10).contains(id)));
        // 500 uniform draws over 10 values hit every value
        assert_eq!(seen.len(), 10);
    }

    #[test]
    fn test_custom_partner_ids() {
        let mut rng = rand::thread_rng();
        let customer = CustomerGenerator::with_partner_ids([42])
            .generate(&mut rng)
            .unwrap();
        assert_eq!(customer.partner_id, 42);
    }

    #[test]
    fn test_empty_partner_ids_fails() {
        let mut rng = rand::thread_rng();
        let err = CustomerGenerator::with_partner_ids(Vec::new())
            .generate(&mut rng)
            .unwrap_err();
        assert_eq!(err, GenerationError::EmptyChoice("partner_id"));
    }
}
