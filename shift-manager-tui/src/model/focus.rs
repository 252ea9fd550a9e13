//! 焦点状态定义

use super::Page;

/// 焦点所在的面板
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 左侧导航
    #[default]
    Navigation,
    /// 右侧页面内容
    Content,
}

impl FocusPanel {
    /// 进入页面后焦点的落点
    ///
    /// 模板页有可选中的列表，焦点直接交给内容区；首页只有说明文字和订阅链接，
    /// 焦点留在导航栏。
    pub fn landing(page: Page) -> Self {
        match page {
            Page::Templates => Self::Content,
            Page::Home => Self::Navigation,
        }
    }

    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Navigation => Self::Content,
            Self::Content => Self::Navigation,
        }
    }

    pub fn is_navigation(self) -> bool {
        self == Self::Navigation
    }

    pub fn is_content(self) -> bool {
        self == Self::Content
    }
}
