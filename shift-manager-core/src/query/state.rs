//! 远程资源三态

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};

/// 远程资源的三态：加载中、失败、成功
///
/// 页面与弹窗只从这三种状态渲染，`fold` 强制调用方给出全部三个分支。
#[derive(Debug)]
pub enum QueryState<T> {
    /// 尚未得到第一次结果
    Pending,
    /// 请求失败
    Error(CoreError),
    /// 请求成功
    Success(Arc<T>),
}

impl<T> QueryState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn error(&self) -> Option<&CoreError> {
        match self {
            Self::Error(e) => Some(e),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    /// 按三态分支折叠
    pub fn fold<R>(
        &self,
        pending: impl FnOnce() -> R,
        error: impl FnOnce(&CoreError) -> R,
        success: impl FnOnce(&T) -> R,
    ) -> R {
        match self {
            Self::Pending => pending(),
            Self::Error(e) => error(e),
            Self::Success(data) => success(data),
        }
    }
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self::Pending
    }
}

impl<T> Clone for QueryState<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Pending => Self::Pending,
            Self::Error(e) => Self::Error(e.clone()),
            Self::Success(data) => Self::Success(Arc::clone(data)),
        }
    }
}

/// 取消不是错误：被取消的查询仍视为加载中
impl<T> From<CoreResult<Arc<T>>> for QueryState<T> {
    fn from(result: CoreResult<Arc<T>>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(CoreError::Cancelled) => Self::Pending,
            Err(e) => Self::Error(e),
        }
    }
}
