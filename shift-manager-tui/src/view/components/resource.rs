//! 远程资源的三态渲染
//!
//! 加载中与失败时都不渲染任何内容（失败的 toast 由 Update 层弹出），
//! 只有成功时才调用 `success` 绘制数据。

use ratatui::{layout::Rect, Frame};
use shift_manager_core::QueryState;

/// 按三态渲染
pub fn render<T>(
    state: &QueryState<T>,
    frame: &mut Frame,
    area: Rect,
    success: impl FnOnce(&T, &mut Frame, Rect),
) {
    state.fold(|| (), |_| (), |data| success(data, frame, area));
}
