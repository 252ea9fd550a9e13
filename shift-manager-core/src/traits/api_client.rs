//! Remote resource fetcher trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{ScheduleTemplate, UserInfo};

/// Backend REST API
///
/// Implementations unwrap the response envelope and return the payload only.
///
/// Platform implementation:
/// - `HttpApiClient` (reqwest)
/// - `MockApiClient` (tests)
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Get all schedule templates
    async fn list_schedule_templates(&self) -> CoreResult<Vec<ScheduleTemplate>>;

    /// Get schedule template based on ID
    ///
    /// # Arguments
    /// * `id` - Schedule template ID
    async fn get_schedule_template(&self, id: i64) -> CoreResult<ScheduleTemplate>;

    /// Delete schedule template
    ///
    /// # Arguments
    /// * `id` - Schedule template ID
    async fn delete_schedule_template(&self, id: i64) -> CoreResult<()>;

    /// Get the user the session belongs to
    async fn get_my_info(&self) -> CoreResult<UserInfo>;
}
