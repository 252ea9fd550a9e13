//! 业务逻辑服务层

mod schedule_template_service;
mod user_service;

pub use schedule_template_service::ScheduleTemplateService;
pub use user_service::UserService;

use std::sync::Arc;

use crate::query::QueryCache;
use crate::traits::ApiClient;
use crate::types::{ScheduleTemplate, UserInfo};

/// 查询键
pub mod keys {
    use crate::query::QueryKey;

    /// `["schedule-template", id]`
    pub fn schedule_template(id: i64) -> QueryKey {
        QueryKey::new("schedule-template").with(id)
    }

    /// `["schedule-templates"]`
    pub fn schedule_templates() -> QueryKey {
        QueryKey::new("schedule-templates")
    }

    /// `["my-info"]`
    pub fn my_info() -> QueryKey {
        QueryKey::new("my-info")
    }
}

/// 服务上下文 - 持有所有依赖
///
/// 平台层创建一次并在整个会话中共享；查询缓存的生命周期与它相同。
pub struct ServiceContext {
    /// 后端 API
    pub api: Arc<dyn ApiClient>,
    /// 模板详情缓存
    pub templates: QueryCache<ScheduleTemplate>,
    /// 模板列表缓存
    pub template_list: QueryCache<Vec<ScheduleTemplate>>,
    /// 当前用户缓存
    pub my_info: QueryCache<UserInfo>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(api: Arc<dyn ApiClient>) -> Self {
        Self {
            api,
            templates: QueryCache::new(),
            template_list: QueryCache::new(),
            my_info: QueryCache::new(),
        }
    }
}
