//! 当前用户服务

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::{keys, ServiceContext};
use crate::error::CoreResult;
use crate::types::UserInfo;

/// 当前用户服务
pub struct UserService {
    ctx: Arc<ServiceContext>,
}

impl UserService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 获取当前登录用户（按 `["my-info"]` 缓存）
    pub async fn my_info(&self, cancel: &CancellationToken) -> CoreResult<Arc<UserInfo>> {
        let api = Arc::clone(&self.ctx.api);
        self.ctx
            .my_info
            .fetch(keys::my_info(), cancel, move || async move {
                api.get_my_info().await
            })
            .await
    }

    /// 丢弃用户信息缓存
    pub fn invalidate(&self) {
        self.ctx.my_info.invalidate(&keys::my_info());
    }
}
