//! Shift Manager Core Library
//!
//! Provides the client-side read model of the Shift Manager console:
//! - Remote resource access (`ApiClient`, `HttpApiClient`)
//! - Keyed query caching with in-flight deduplication and explicit cancellation (`QueryCache`)
//! - Dialog visibility stores (`ModalStore`)
//! - View-model assembly for the schedule template detail dialog and the calendar subscription link
//!
//! This library does not depend on any UI toolkit; hosts render the view models
//! it produces and drive the stores from their own event loop.

pub mod error;
pub mod http_client;
pub mod query;
pub mod services;
pub mod store;
pub mod traits;
pub mod types;
pub mod view_model;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use http_client::{HttpApiClient, HttpClientConfig};
pub use query::{QueryCache, QueryKey, QueryState};
pub use services::{ScheduleTemplateService, ServiceContext, UserService};
pub use store::ModalStore;
pub use traits::ApiClient;
pub use tokio_util::sync::CancellationToken;
