//! 应用主消息枚举

use super::{BackendEvent, ContentMessage, ModalMessage, NavigationMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板（左右切换）
    ToggleFocus,

    /// 导航相关消息
    Navigation(NavigationMessage),

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 后台任务完成
    Backend(BackendEvent),

    /// 返回 / 关闭弹窗
    GoBack,

    /// 重新拉取当前页面数据
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 主循环心跳（清理过期 toast）
    Tick,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
