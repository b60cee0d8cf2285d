use std::ffi::OsString;

use clap::Parser;

#[derive(Clone, Debug, Parser)]
#[command(name = "ping", version, about = "Answers GET /ping with Pong!", long_about = None)]
pub struct Config {
    /// Port number to listen on
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,
}

const LONG_FLAGS: [&str; 3] = ["port", "help", "version"];

impl Config {
    /// Parses the process arguments, also accepting `-port` and `-port=N`.
    pub fn parse_single_dash() -> Self {
        Self::parse_from(widen_single_dash(std::env::args_os()))
    }

    pub fn try_parse_single_dash_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(widen_single_dash(args))
    }
}

fn widen_single_dash<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg: OsString| {
            let widened = arg.to_str().and_then(|token| {
                let flag = token.strip_prefix('-').filter(|f| !f.starts_with('-'))?;
                let name = flag.split_once('=').map_or(flag, |(name, _)| name);
                LONG_FLAGS
                    .contains(&name)
                    .then(|| OsString::from(format!("-{token}")))
            });
            widened.unwrap_or(arg)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port() {
        let config = Config::try_parse_from(["ping"]).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_port_flag() {
        let config = Config::try_parse_from(["ping", "--port", "9090"]).unwrap();
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn test_single_dash_port() {
        let config = Config::try_parse_single_dash_from(["ping", "-port", "9091"]).unwrap();
        assert_eq!(config.port, 9091);

        let config = Config::try_parse_single_dash_from(["ping", "-port=9092"]).unwrap();
        assert_eq!(config.port, 9092);
    }

    #[test]
    fn test_port_out_of_range() {
        assert!(Config::try_parse_single_dash_from(["ping", "-port", "70000"]).is_err());
    }
}
