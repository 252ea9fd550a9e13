//! 查询结果写回三态

use std::sync::Arc;

use shift_manager_core::{CoreError, CoreResult, QueryState};

use crate::model::ToastState;

/// 把一次查询的结果写回状态
///
/// 取消的结果直接丢弃；失败时写入错误并恰好弹出一条 toast。
/// 返回是否写入了新状态。
pub fn apply_query_result<T>(
    state: &mut QueryState<T>,
    toasts: &mut ToastState,
    result: CoreResult<Arc<T>>,
) -> bool {
    match result {
        Err(CoreError::Cancelled) => false,
        Err(e) => {
            toasts.error(e.to_string());
            *state = QueryState::Error(e);
            true
        }
        Ok(data) => {
            *state = QueryState::Success(data);
            true
        }
    }
}
