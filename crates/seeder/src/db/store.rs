//! Row insertion and connection handling.

use std::path::Path;

use async_trait::async_trait;
use sqlx::{Connection, PgPool, migrate::Migrator, postgres::PgPoolOptions};
use time::OffsetDateTime;
use tracing::{debug, info};

use super::SeedError;
use crate::generators::{GeneratedCustomer, GeneratedPartner};

/// Destination for generated rows.
///
/// Every call is a single statement that commits on its own.
#[async_trait]
pub trait RecordStore {
    async fn insert_partner(
        &self,
        partner: &GeneratedPartner,
        registered_at: OffsetDateTime,
    ) -> Result<(), sqlx::Error>;

    async fn insert_customer(
        &self,
        customer: &GeneratedCustomer,
        registered_at: OffsetDateTime,
    ) -> Result<(), sqlx::Error>;
}

/// PostgreSQL-backed store.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgStore {
    async fn insert_partner(
        &self,
        partner: &GeneratedPartner,
        registered_at: OffsetDateTime,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO partners (partner_name, contact_person, email, phone_number, address, registration_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&partner.partner_name)
        .bind(&partner.contact_person)
        .bind(&partner.email)
        .bind(&partner.phone_number)
        .bind(&partner.address)
        .bind(registered_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn insert_customer(
        &self,
        customer: &GeneratedCustomer,
        registered_at: OffsetDateTime,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO customers (customer_name, email, phone_number, address, registration_date, partner_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&customer.customer_name)
        .bind(&customer.email)
        .bind(&customer.phone_number)
        .bind(&customer.address)
        .bind(registered_at)
        .bind(customer.partner_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Opens a single-connection pool to `datasource` and pings it.
pub async fn connect(datasource: &str) -> Result<PgPool, SeedError> {
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(datasource)
        .await
        .map_err(SeedError::Connection)?;

    let mut conn = pool.acquire().await.map_err(SeedError::Connection)?;
    conn.ping().await.map_err(SeedError::Connection)?;
    debug!("Database ping succeeded");

    Ok(pool)
}

/// Applies the SQL migrations found in `dir`.
///
/// Migrations already recorded in the database but missing from `dir` are ignored.
pub async fn migrate(pool: &PgPool, dir: impl AsRef<Path>) -> Result<(), SeedError> {
    let dir = dir.as_ref();
    info!("Applying migrations from {}", dir.display());

    let mut migrator = Migrator::new(dir).await?;
    migrator.set_ignore_missing(true);
    migrator.run(pool).await?;

    Ok(())
}
