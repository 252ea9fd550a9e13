//! 排班模板服务

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::{keys, ServiceContext};
use crate::error::CoreResult;
use crate::types::ScheduleTemplate;

/// 排班模板服务
pub struct ScheduleTemplateService {
    ctx: Arc<ServiceContext>,
}

impl ScheduleTemplateService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 获取模板详情（按 `["schedule-template", id]` 去重缓存）
    pub async fn get_schedule_template(
        &self,
        id: i64,
        cancel: &CancellationToken,
    ) -> CoreResult<Arc<ScheduleTemplate>> {
        let api = Arc::clone(&self.ctx.api);
        self.ctx
            .templates
            .fetch(keys::schedule_template(id), cancel, move || async move {
                api.get_schedule_template(id).await
            })
            .await
    }

    /// 获取模板列表
    pub async fn list_schedule_templates(
        &self,
        cancel: &CancellationToken,
    ) -> CoreResult<Arc<Vec<ScheduleTemplate>>> {
        let api = Arc::clone(&self.ctx.api);
        self.ctx
            .template_list
            .fetch(keys::schedule_templates(), cancel, move || async move {
                api.list_schedule_templates().await
            })
            .await
    }

    /// 丢弃列表缓存，下次拉取时重新请求
    pub fn invalidate_list(&self) {
        self.ctx.template_list.invalidate(&keys::schedule_templates());
    }

    /// 删除模板
    ///
    /// 成功后列表与该模板详情的缓存都会失效。失败时缓存保持不变。
    pub async fn delete_schedule_template(&self, id: i64) -> CoreResult<()> {
        self.ctx.api.delete_schedule_template(id).await?;
        log::info!("schedule template {id} deleted");

        self.ctx.templates.invalidate(&keys::schedule_template(id));
        self.invalidate_list();
        Ok(())
    }
}
