use clap::{Parser, ValueEnum};
use php_job_links::ScraperConfig;
use php_job_links::error::ScrapeError;
use php_job_links::utils::load_site_list;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "php-job-links")]
#[command(about = "Scans job boards for links related to a keyword (PHP by default)")]
#[command(version)]
pub struct Args {
    /// Site URLs to scan; `https://` is assumed when no scheme is given
    pub sites: Vec<String>,

    /// File listing site URLs, one per line
    #[arg(short = 'f', long)]
    pub sites_file: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Keyword to look for (case-insensitive)
    #[arg(short, long)]
    pub keyword: Option<String>,

    /// Maximum number of links kept per site
    #[arg(long)]
    pub max_results: Option<usize>,

    /// Timeout for each page fetch in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Delay after each site in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Output format for found links
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated title, source and URL
    Table,
    /// One JSON object per line
    Json,
}

impl Args {
    /// Merge the config file, site sources and flag overrides into one configuration
    ///
    /// Sites come from the command line, else the sites file, else the config
    /// file, else the built-in seed list.
    pub fn into_config(self) -> Result<ScraperConfig, ScrapeError> {
        let mut config = match &self.config {
            Some(path) => ScraperConfig::from_file(path)?,
            None => ScraperConfig::default(),
        };

        if !self.sites.is_empty() {
            config.sites = self.sites;
        } else if let Some(path) = &self.sites_file {
            config.sites = load_site_list(path)?;
        }

        if let Some(keyword) = self.keyword {
            config.keyword = keyword;
        }
        if let Some(max_results) = self.max_results {
            config.max_results = max_results;
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.request_timeout_ms = timeout_ms;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.delay_ms = delay_ms;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_to_seed_list() {
        let args = Args::parse_from(["php-job-links"]);
        let config = args.into_config().unwrap();
        assert_eq!(config, ScraperConfig::default());
    }

    #[test]
    fn test_positional_sites_and_overrides() {
        let args = Args::parse_from([
            "php-job-links",
            "example.com/php",
            "https://jobs.test",
            "--keyword",
            "symfony",
            "--delay-ms",
            "0",
            "--format",
            "json",
        ]);
        assert_eq!(args.format, OutputFormat::Json);

        let config = args.into_config().unwrap();
        assert_eq!(config.sites, vec!["example.com/php", "https://jobs.test"]);
        assert_eq!(config.keyword, "symfony");
        assert_eq!(config.delay_ms, 0);
        assert_eq!(config.request_timeout_ms, 12_000);
    }

    #[test]
    fn test_sites_file_replaces_seed_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "a.test\n\nhttps://b.test").unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let args = Args::parse_from(["php-job-links", "--sites-file", path.as_str()]);
        let config = args.into_config().unwrap();
        assert_eq!(config.sites, vec!["a.test", "https://b.test"]);
    }

    #[test]
    fn test_empty_sites_file_yields_empty_list() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap().to_string();
        let args = Args::parse_from(["php-job-links", "-f", path.as_str()]);
        let config = args.into_config().unwrap();
        assert!(config.sites.is_empty());
        assert!(config.validate().is_err());
    }
}
