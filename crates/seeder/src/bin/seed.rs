//! Seed the partners or customers table with fake rows.
//!
//! Run with:
//! ```
//! cargo run -p seeder --bin seed -- --configFile dbconfig.yml --tableName partners --total 100
//! ```

use std::process::ExitCode;

use rand::{SeedableRng, rngs::StdRng};
use seeder::prelude::*;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run(Args::parse_single_dash()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let config = load_datasource(&args.config_file, &args.env)?;

    info!(
        "Loaded {} section of {} (dialect {:?})",
        args.env,
        args.config_file.display(),
        config.dialect
    );
    if config.dialect != "postgres" {
        warn!(
            "Dialect {:?} is not postgres; connecting with the postgres driver anyway",
            config.dialect
        );
    }

    let pool = connect(&config.datasource).await?;
    info!("Connected to database");

    if args.migrate {
        migrate(&pool, &config.dir).await?;
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let kind = TableKind::from_name(&args.table_name);
    let result = Seeder::new(PgStore::new(pool.clone()))
        .seed(kind, args.total, &mut rng)
        .await;

    pool.close().await;

    result?;
    Ok(())
}
