//! API 响应相关类型定义

use serde::{Deserialize, Serialize};

/// API 响应包装类型
///
/// 后端所有接口都返回 `{ "message": ..., "data": ... }`。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// 后端提示信息
    #[serde(default)]
    pub message: String,
    /// 响应数据
    pub data: Option<T>,
}

