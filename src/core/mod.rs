pub mod credential;
pub mod query;
pub mod request;
pub mod sink;
pub mod transport;

pub use crate::domain::model::{Credential, Delivery, QueryRequest, Route, TransportResponse};
pub use crate::domain::ports::{ConfigProvider, Storage, Transport};
pub use crate::utils::error::Result;
