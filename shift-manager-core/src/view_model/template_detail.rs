//! 模板详情弹窗的视图模型
//!
//! 固定 7 个星期标签页；每页只包含适用于该天的班次，保持源顺序。

use crate::types::{DayOfWeek, ScheduleTemplate, Shift, DAY_OF_WEEK};

/// 模板详情
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDetailView {
    pub title: String,
    pub description: DescriptionView,
    /// 与 `DAY_OF_WEEK` 一一对应
    pub tabs: Vec<DayTab>,
}

/// 描述区域
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionView {
    /// 原样展示
    Text(String),
    /// 无描述，显示弱化的占位文本
    Placeholder,
}

impl DescriptionView {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }
}

/// 某一天的标签页；`rows` 为空时显示“当天没有班次”
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayTab {
    pub day: DayOfWeek,
    pub rows: Vec<ShiftRow>,
}

impl DayTab {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// 班次行的稳定键
///
/// 同一天可能有相同开始时间的班次，所以带上源下标。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShiftRowKey {
    pub index: usize,
    pub start: String,
    pub end: String,
}

/// 班次行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftRow {
    pub key: ShiftRowKey,
    /// `startTime - endTime`
    pub time_range: String,
    pub required_assistants: i32,
}

impl ShiftRow {
    fn new(index: usize, shift: &Shift) -> Self {
        Self {
            key: ShiftRowKey {
                index,
                start: shift.start_time.clone(),
                end: shift.end_time.clone(),
            },
            time_range: format!("{} - {}", shift.start_time, shift.end_time),
            required_assistants: shift.required_assistant_number,
        }
    }
}

impl TemplateDetailView {
    pub fn new(template: &ScheduleTemplate) -> Self {
        let description = match template.meta.description() {
            "" => DescriptionView::Placeholder,
            text => DescriptionView::Text(text.to_string()),
        };

        let tabs = DAY_OF_WEEK
            .iter()
            .map(|day| DayTab {
                day: *day,
                rows: template
                    .shifts_on(day.key)
                    .map(|(index, shift)| ShiftRow::new(index, shift))
                    .collect(),
            })
            .collect();

        Self {
            title: template.meta.name.clone(),
            description,
            tabs,
        }
    }

    /// 默认选中第一天
    pub const DEFAULT_TAB: usize = 0;
}

impl From<&ScheduleTemplate> for TemplateDetailView {
    fn from(template: &ScheduleTemplate) -> Self {
        Self::new(template)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::test_utils::{shift, template};

    #[test]
    fn always_renders_seven_tabs_in_fixed_order() {
        let view = TemplateDetailView::new(&template(1, "空模板", None, vec![]));
        let labels: Vec<_> = view.tabs.iter().map(|t| t.day.label).collect();
        assert_eq!(labels, ["周一", "周二", "周三", "周四", "周五", "周六", "周日"]);
        assert!(view.tabs.iter().all(DayTab::is_empty));
    }

    #[test]
    fn tabs_hold_applicable_shifts_in_source_order() {
        let view = TemplateDetailView::new(&template(
            1,
            "秋季学期",
            Some("常规值班"),
            vec![
                shift("14:00", "16:00", 1, &[1, 3]),
                shift("08:00", "10:00", 2, &[1]),
                shift("10:00", "12:00", 3, &[2]),
            ],
        ));

        let monday: Vec<_> = view.tabs[0].rows.iter().map(|r| r.time_range.as_str()).collect();
        assert_eq!(monday, ["14:00 - 16:00", "08:00 - 10:00"]);
        assert_eq!(view.tabs[0].rows[1].required_assistants, 2);

        assert_eq!(view.tabs[1].rows.len(), 1);
        assert_eq!(view.tabs[2].rows[0].key.index, 0);
        assert!(view.tabs[3].is_empty());
        assert!(view.tabs[6].is_empty());
    }

    #[test]
    fn duplicate_start_times_get_distinct_keys() {
        let view = TemplateDetailView::new(&template(
            1,
            "重叠班次",
            None,
            vec![
                shift("08:00", "10:00", 1, &[5]),
                shift("08:00", "10:00", 2, &[5]),
                shift("08:00", "12:00", 1, &[5]),
            ],
        ));

        let keys: HashSet<_> = view.tabs[4].rows.iter().map(|r| r.key.clone()).collect();
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn empty_or_missing_description_is_a_placeholder() {
        let none = TemplateDetailView::new(&template(1, "a", None, vec![]));
        let empty = TemplateDetailView::new(&template(1, "a", Some(""), vec![]));
        let text = TemplateDetailView::new(&template(1, "a", Some("寒假值班"), vec![]));

        assert!(none.description.is_placeholder());
        assert!(empty.description.is_placeholder());
        assert_eq!(text.description, DescriptionView::Text("寒假值班".to_string()));
        assert_eq!(text.title, "a");
    }
}
