use crate::domain::model::{Credential, TransportResponse};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &Path,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn start(&self) -> &str;
    fn end(&self) -> &str;
    fn step(&self) -> &str;
    fn query(&self) -> &str;
    fn route(&self) -> &str;
    fn cookie_path(&self) -> &Path;
    fn output_path(&self) -> Option<&Path>;
    fn api_url(&self) -> Option<&str>;
    fn silent(&self) -> bool;
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues one GET with the credential attached as the `cookie` header.
    async fn get(&self, url: &str, credential: &Credential) -> Result<TransportResponse>;
}
