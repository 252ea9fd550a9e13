//! 删除模板确认弹窗状态

use shift_manager_core::types::ScheduleTemplateSummary;
use shift_manager_core::ModalStore;

/// 确认弹窗中的焦点按钮
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteFocus {
    #[default]
    Cancel,
    Delete,
}

impl DeleteFocus {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Cancel => Self::Delete,
            Self::Delete => Self::Cancel,
        }
    }
}

/// 删除模板弹窗
#[derive(Debug, Default)]
pub struct DeleteTemplateState {
    pub store: ModalStore<ScheduleTemplateSummary>,
    pub focus: DeleteFocus,
    /// 删除请求已发出，尚未返回
    pub submitting: bool,
}

impl DeleteTemplateState {
    /// 先暂存模板，再打开
    pub fn open(&mut self, template: ScheduleTemplateSummary) {
        self.store.set_entity(template);
        self.store.set_open(true);
        self.focus = DeleteFocus::Cancel;
        self.submitting = false;
    }

    pub fn close(&mut self) {
        self.store.set_open(false);
        self.store.clear_entity();
        self.submitting = false;
    }

    pub fn is_open(&self) -> bool {
        self.store.is_open()
    }

    /// 当前待删除的模板
    pub fn target(&self) -> Option<&ScheduleTemplateSummary> {
        self.store.visible_entity()
    }
}
