//! 排班模板列表页状态

use shift_manager_core::types::{ScheduleTemplate, ScheduleTemplateSummary};
use shift_manager_core::QueryState;

use super::Mount;

/// 模板列表页状态
#[derive(Debug, Default)]
pub struct TemplatesState {
    /// `["schedule-templates"]`
    pub list: QueryState<Vec<ScheduleTemplate>>,
    /// 当前选中的索引
    pub selected: usize,
    pub mount: Mount,
}

impl TemplatesState {
    pub fn new() -> Self {
        Self::default()
    }

    fn len(&self) -> usize {
        self.list.data().map_or(0, Vec::len)
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.len() {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        self.selected = self.len().saturating_sub(1);
    }

    /// 列表刷新后把选中项限制在范围内
    pub fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.len().saturating_sub(1));
    }

    /// 当前选中的模板
    pub fn selected_summary(&self) -> Option<ScheduleTemplateSummary> {
        self.list
            .data()
            .and_then(|list| list.get(self.selected))
            .map(ScheduleTemplateSummary::from)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use shift_manager_core::types::ScheduleTemplateMeta;

    use super::*;

    fn template(id: i64) -> ScheduleTemplate {
        ScheduleTemplate {
            meta: ScheduleTemplateMeta {
                id,
                name: format!("模板 {id}"),
                description: None,
                created_at: None,
            },
            shifts: vec![],
        }
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut state = TemplatesState::new();
        state.select_next();
        assert_eq!(state.selected, 0);
        assert!(state.selected_summary().is_none());

        state.list = QueryState::Success(Arc::new(vec![template(1), template(2), template(3)]));
        state.select_last();
        assert_eq!(state.selected, 2);
        state.select_next();
        assert_eq!(state.selected, 2);
        assert_eq!(state.selected_summary().unwrap().id, 3);

        state.list = QueryState::Success(Arc::new(vec![template(1)]));
        state.clamp_selection();
        assert_eq!(state.selected, 0);
    }
}
