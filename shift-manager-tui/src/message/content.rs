//! 内容面板消息
//!
//! 处理内容面板中的操作，如列表选择、打开弹窗等

/// 内容面板消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 确认选择（打开详情弹窗）
    Confirm,

    // ========== 操作 ==========
    /// 删除当前选中项
    Delete,
}
