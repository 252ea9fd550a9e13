//! 模板详情弹窗状态

use shift_manager_core::types::{ScheduleTemplate, DAY_OF_WEEK};
use shift_manager_core::view_model::TemplateDetailView;
use shift_manager_core::{CancellationToken, ModalStore, QueryState};

use super::Mount;

/// 模板详情弹窗
///
/// `store` 的实体是模板 ID；弹窗只在 `store` 打开且查询成功时渲染。
#[derive(Debug, Default)]
pub struct TemplateDetailState {
    pub store: ModalStore<i64>,
    /// `["schedule-template", id]`
    pub query: QueryState<ScheduleTemplate>,
    /// 当前标签页（对应 `DAY_OF_WEEK` 下标）
    pub selected_tab: usize,
    pub mount: Mount,
}

impl TemplateDetailState {
    /// 打开弹窗并开始新的挂载周期
    pub fn open(&mut self, id: i64) -> CancellationToken {
        self.store.set_entity(id);
        self.store.set_open(true);
        self.query = QueryState::Pending;
        self.selected_tab = TemplateDetailView::DEFAULT_TAB;
        self.mount.begin()
    }

    /// 关闭弹窗，取消尚未完成的请求
    pub fn close(&mut self) {
        self.store.set_open(false);
        self.mount.end();
        self.query = QueryState::Pending;
    }

    pub fn is_open(&self) -> bool {
        self.store.is_open()
    }

    /// 当前展示的模板 ID
    pub fn shown_id(&self) -> Option<i64> {
        self.store.visible_entity().copied()
    }

    pub fn next_tab(&mut self) {
        self.selected_tab = (self.selected_tab + 1) % DAY_OF_WEEK.len();
    }

    pub fn prev_tab(&mut self) {
        self.selected_tab = (self.selected_tab + DAY_OF_WEEK.len() - 1) % DAY_OF_WEEK.len();
    }

    /// 视图模型（仅在查询成功时存在）
    pub fn view(&self) -> Option<TemplateDetailView> {
        self.query.data().map(TemplateDetailView::new)
    }
}
