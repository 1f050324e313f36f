pub mod cli;

use crate::core::credential::DEFAULT_COOKIE_FILE;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use std::path::{Path, PathBuf};

pub const API_URL_ENV: &str = "PYTHEUS_API_URL";
pub const DEFAULT_STEP: &str = "3600";
pub const DEFAULT_ROUTE: &str = "query_range";

#[derive(Debug, Clone, Parser)]
#[command(name = "pytheus")]
#[command(
    about = "Query Prometheus between a start and end date with the given query and step size, \
             and save the result to an output file if provided."
)]
pub struct CliConfig {
    #[arg(long, help = "Start date in YYYY-MM-DD (hh:mm:ss) format UTC")]
    pub start: String,

    #[arg(long, help = "End date in YYYY-MM-DD (hh:mm:ss) format UTC")]
    pub end: String,

    #[arg(long, default_value = DEFAULT_STEP, help = "Step size in seconds")]
    pub step: String,

    #[arg(long, help = "Prometheus query")]
    pub query: String,

    #[arg(
        long,
        default_value = DEFAULT_ROUTE,
        help = "Route to query, either 'query' or 'query_range'"
    )]
    pub route: String,

    #[arg(
        long,
        default_value = DEFAULT_COOKIE_FILE,
        help = "File which contains the Cookie value for the header"
    )]
    pub cookie: PathBuf,

    #[arg(
        long,
        help = "Output file to save the results. Prints to stdout if not provided."
    )]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Suppress output")]
    pub silent: bool,

    #[arg(
        long,
        env = API_URL_ENV,
        hide_env_values = true,
        help = "Base URL of the query API, e.g. https://prometheus.example.com/api/v1"
    )]
    pub api_url: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn start(&self) -> &str {
        &self.start
    }

    fn end(&self) -> &str {
        &self.end
    }

    fn step(&self) -> &str {
        &self.step
    }

    fn query(&self) -> &str {
        &self.query
    }

    fn route(&self) -> &str {
        &self.route
    }

    fn cookie_path(&self) -> &Path {
        &self.cookie
    }

    fn output_path(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    fn api_url(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    fn silent(&self) -> bool {
        self.silent
    }
}

/// Checks that can run before the query starts. The API URL is checked by the
/// pipeline once the credential and route have been accepted.
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(output) = &self.output {
            validate_path("output", &output.to_string_lossy())?;
        }

        Ok(())
    }
}
