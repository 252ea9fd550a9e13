//! 测试辅助模块
//!
//! 提供可编排的 `MockApiClient` 和常用的测试数据工厂。

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{watch, RwLock};

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::traits::ApiClient;
use crate::types::{DayKey, ScheduleTemplate, ScheduleTemplateMeta, Shift, UserInfo};

// ===== MockApiClient =====

/// 内存中的 API 实现
///
/// - 每个方法各有调用计数
/// - `set_error` 注入下一次（及之后所有）调用的错误
/// - `hold` 让请求挂起，直到 `release`
pub struct MockApiClient {
    templates: RwLock<HashMap<i64, ScheduleTemplate>>,
    my_info: RwLock<Option<UserInfo>>,
    error: RwLock<Option<CoreError>>,
    gate: RwLock<Option<watch::Sender<bool>>>,
    pub list_calls: AtomicUsize,
    pub get_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    pub my_info_calls: AtomicUsize,
}

impl MockApiClient {
    pub fn new() -> Self {
        Self {
            templates: RwLock::new(HashMap::new()),
            my_info: RwLock::new(None),
            error: RwLock::new(None),
            gate: RwLock::new(None),
            list_calls: AtomicUsize::new(0),
            get_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
            my_info_calls: AtomicUsize::new(0),
        }
    }

    pub async fn insert_template(&self, template: ScheduleTemplate) {
        self.templates
            .write()
            .await
            .insert(template.meta.id, template);
    }

    pub async fn set_my_info(&self, info: UserInfo) {
        *self.my_info.write().await = Some(info);
    }

    pub async fn set_error(&self, error: Option<CoreError>) {
        *self.error.write().await = error;
    }

    /// 之后的请求都挂起，直到 `release`
    pub async fn hold(&self) {
        let (tx, _) = watch::channel(false);
        *self.gate.write().await = Some(tx);
    }

    /// 放行所有挂起的请求
    pub async fn release(&self) {
        if let Some(gate) = self.gate.write().await.take() {
            gate.send_replace(true);
        }
    }

    pub fn calls(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }

    async fn enter(&self, counter: &AtomicUsize) -> CoreResult<()> {
        counter.fetch_add(1, Ordering::SeqCst);
        let gate = self.gate.read().await.as_ref().map(watch::Sender::subscribe);
        if let Some(mut gate) = gate {
            let _ = gate.wait_for(|open| *open).await;
        }
        match self.error.read().await.clone() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ApiClient for MockApiClient {
    async fn list_schedule_templates(&self) -> CoreResult<Vec<ScheduleTemplate>> {
        self.enter(&self.list_calls).await?;
        let mut templates: Vec<_> = self.templates.read().await.values().cloned().collect();
        templates.sort_by_key(|t| t.meta.id);
        Ok(templates)
    }

    async fn get_schedule_template(&self, id: i64) -> CoreResult<ScheduleTemplate> {
        self.enter(&self.get_calls).await?;
        self.templates
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| CoreError::Api {
                status: 404,
                message: "排班模板不存在".to_string(),
            })
    }

    async fn delete_schedule_template(&self, id: i64) -> CoreResult<()> {
        self.enter(&self.delete_calls).await?;
        match self.templates.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(CoreError::Api {
                status: 404,
                message: "排班模板不存在".to_string(),
            }),
        }
    }

    async fn get_my_info(&self) -> CoreResult<UserInfo> {
        self.enter(&self.my_info_calls).await?;
        self.my_info
            .read()
            .await
            .clone()
            .ok_or_else(|| CoreError::Api {
                status: 401,
                message: "用户未登录".to_string(),
            })
    }
}

// ===== 工厂方法 =====

/// 创建测试用 ServiceContext，同时返回 mock 以便编排
pub fn create_test_context() -> (Arc<ServiceContext>, Arc<MockApiClient>) {
    let api = Arc::new(MockApiClient::new());
    let ctx = Arc::new(ServiceContext::new(api.clone()));
    (ctx, api)
}

pub fn shift(start: &str, end: &str, required: i32, days: &[u8]) -> Shift {
    Shift {
        id: None,
        start_time: start.to_string(),
        end_time: end.to_string(),
        required_assistant_number: required,
        applicable_days: days
            .iter()
            .filter_map(|d| DayKey::try_from(*d).ok())
            .collect(),
    }
}

pub fn template(id: i64, name: &str, description: Option<&str>, shifts: Vec<Shift>) -> ScheduleTemplate {
    ScheduleTemplate {
        meta: ScheduleTemplateMeta {
            id,
            name: name.to_string(),
            description: description.map(str::to_string),
            created_at: None,
        },
        shifts,
    }
}
