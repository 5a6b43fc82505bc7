//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

use crate::config::{api, credentials, defaults};

/// Mist gateway stats viewer CLI
#[derive(Parser, Debug)]
#[command(name = "gwstats")]
#[command(version)]
#[command(
    about = "Browse Mist sites and view live gateway statistics",
    long_about = "Browse Mist sites and view live gateway statistics.\n\n\
                  Without --site an interactive menu picks a site and a gateway; \
                  after the stats are shown you return to site selection."
)]
pub struct Cli {
    /// Site id; fetch stats for this site without menus
    #[arg(short, long)]
    pub site: Option<String>,

    /// Fetch only this device's stats (requires --site)
    #[arg(short, long, requires = "site")]
    pub device_id: Option<String>,

    /// Output raw JSON instead of a formatted summary
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Maximum number of devices/stats to fetch
    #[arg(long, default_value_t = api::DEFAULT_LIMIT, value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: u32,

    /// Credential file (token, org_id, base_url)
    #[arg(short, long, env = credentials::ENV_VAR)]
    pub credentials: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,
}

impl Cli {
    /// Output format selected by `--json`
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Formatted summary (default)
    Text,
    /// Raw JSON, keys sorted
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Text.to_string(), "text");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["gwstats"]);
        assert!(cli.site.is_none());
        assert!(cli.device_id.is_none());
        assert!(!cli.json);
        assert_eq!(cli.limit, 1000);
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
        assert_eq!(cli.output_format(), OutputFormat::Text);
    }

    #[test]
    fn test_cli_site_and_device() {
        let cli = Cli::parse_from(["gwstats", "-s", "site-1", "-d", "dev-1", "--json"]);
        assert_eq!(cli.site.as_deref(), Some("site-1"));
        assert_eq!(cli.device_id.as_deref(), Some("dev-1"));
        assert_eq!(cli.output_format(), OutputFormat::Json);
    }

    #[test]
    fn test_cli_device_requires_site() {
        let result = Cli::try_parse_from(["gwstats", "--device-id", "dev-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_limit() {
        let cli = Cli::parse_from(["gwstats", "--limit", "25"]);
        assert_eq!(cli.limit, 25);
        assert!(Cli::try_parse_from(["gwstats", "--limit", "0"]).is_err());
        assert!(Cli::try_parse_from(["gwstats", "--limit", "many"]).is_err());
    }

    #[test]
    fn test_cli_all_options() {
        let cli = Cli::parse_from([
            "gwstats",
            "--site",
            "s-9",
            "--limit",
            "5",
            "-c",
            "/etc/mist/creds.txt",
            "-l",
            "debug",
        ]);
        assert_eq!(cli.site.as_deref(), Some("s-9"));
        assert_eq!(cli.limit, 5);
        assert_eq!(cli.credentials, Some(PathBuf::from("/etc/mist/creds.txt")));
        assert_eq!(cli.log_level, "debug");
    }
}
