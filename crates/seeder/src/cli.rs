//! Command-line arguments for the `seed` binary.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use crate::config::DEFAULT_ENVIRONMENT;

#[derive(Clone, Debug, Parser)]
#[command(
    name = "seed",
    version,
    about = "Fill the partners or customers table with fake rows",
    long_about = None
)]
pub struct Args {
    /// Path to the datasource YAML file
    #[arg(long = "configFile", env = "SEED_CONFIG_FILE", default_value = "dbconfig.yml")]
    pub config_file: PathBuf,

    /// Table to seed: "partners", anything else seeds customers
    #[arg(long = "tableName", env = "SEED_TABLE_NAME", default_value = "customers")]
    pub table_name: String,

    /// Number of rows to insert
    #[arg(long, env = "SEED_TOTAL", default_value_t = 10)]
    pub total: usize,

    /// Section of the datasource file to use
    #[arg(long, env = "SEED_ENV", default_value = DEFAULT_ENVIRONMENT)]
    pub env: String,

    /// Apply the migrations in the section's `dir` before seeding
    #[arg(long, env = "SEED_MIGRATE")]
    pub migrate: bool,

    /// Seed for the random generator, for reproducible data
    #[arg(long, env = "SEED_RNG_SEED")]
    pub seed: Option<u64>,
}

impl Args {
    /// Parses the process arguments, also accepting `-name` for every long flag.
    pub fn parse_single_dash() -> Self {
        Self::parse_from(Self::widen_flags(std::env::args_os()))
    }

    pub fn try_parse_single_dash_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(Self::widen_flags(args))
    }

    fn widen_flags<I, T>(args: I) -> Vec<OsString>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let command = Self::command();
        let longs: Vec<&str> = command
            .get_arguments()
            .filter_map(|arg| arg.get_long())
            .chain(["help", "version"])
            .collect();

        widen_single_dash(args, &longs)
    }
}

/// Rewrites `-name` and `-name=value` to `--name` forms when `name` is one of
/// `longs`. Everything after a bare `--` is left alone.
fn widen_single_dash<I, T>(args: I, longs: &[&str]) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut escaped = false;

    args.into_iter()
        .map(Into::into)
        .map(|arg: OsString| {
            if escaped {
                return arg;
            }
            if arg == "--" {
                escaped = true;
                return arg;
            }

            let widened = arg.to_str().and_then(|token| {
                let flag = token.strip_prefix('-').filter(|f| !f.starts_with('-'))?;
                let name = flag.split_once('=').map_or(flag, |(name, _)| name);
                longs
                    .contains(&name)
                    .then(|| OsString::from(format!("-{token}")))
            });

            widened.unwrap_or(arg)
        })
        .collect()
}
