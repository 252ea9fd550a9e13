//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,

    /// 确认 / 提交
    Confirm,

    /// 上一个标签页
    PrevTab,

    /// 下一个标签页
    NextTab,

    /// 在确认删除弹窗中切换焦点
    ToggleDeleteFocus,
}
