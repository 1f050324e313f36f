use crate::config::API_URL_ENV;
use crate::core::credential::read_credential;
use crate::core::request::{parse_timestamp, QueryUrlBuilder};
use crate::core::sink::{decode_document, ResultSink};
use crate::domain::model::{Delivery, QueryRequest, Route};
use crate::domain::ports::{ConfigProvider, Storage, Transport};
use crate::utils::error::{PytheusError, Result};
use crate::utils::validation::{validate_required_field, validate_url};
use std::io::Write;

/// One query run: load credential, build URL, call the API, deliver the result.
pub struct QueryPipeline<T: Transport, S: Storage, C: ConfigProvider> {
    transport: T,
    sink: ResultSink<S>,
    config: C,
}

impl<T: Transport, S: Storage, C: ConfigProvider> QueryPipeline<T, S, C> {
    pub fn new(transport: T, storage: S, config: C) -> Self {
        let sink = ResultSink::new(
            storage,
            config.output_path().map(|p| p.to_path_buf()),
            config.silent(),
        );
        Self {
            transport,
            sink,
            config,
        }
    }

    /// Runs to completion. Nothing touches the network before the timestamps,
    /// the credential and the route have all been accepted.
    pub async fn run<W: Write + Send>(&self, out: &mut W) -> Result<Delivery> {
        let start = parse_timestamp("start", self.config.start())?;
        let end = parse_timestamp("end", self.config.end())?;

        let credential = read_credential(self.config.cookie_path()).await?;

        let route: Route = self.config.route().parse()?;
        let request = QueryRequest {
            start,
            end,
            step: self.config.step().to_string(),
            query: self.config.query().to_string(),
            route,
        };

        let api_url = self.config.api_url();
        let api_url = validate_required_field(API_URL_ENV, &api_url)?;
        validate_url(API_URL_ENV, api_url)?;
        let url = QueryUrlBuilder::new(*api_url).build_url(&request);
        tracing::debug!(
            "Query request: {}",
            serde_json::to_string(&request).unwrap_or_default()
        );

        let response = self.transport.get(&url, &credential).await?;
        if !response.is_success() {
            tracing::warn!("API answered with status {}", response.status);
            return Err(PytheusError::QueryFailed {
                status: response.status,
            });
        }

        let document = decode_document(&response.body)?;
        self.sink.deliver(&document, out).await
    }
}
