pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalStorage, CliConfig};
pub use crate::core::{query::QueryPipeline, transport::HttpTransport};
pub use crate::utils::error::{PytheusError, Result};
