//! 排班模板相关类型定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DayKey;

/// 排班模板
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleTemplate {
    /// 模板元信息
    pub meta: ScheduleTemplateMeta,
    /// 班次列表（保持后端给出的顺序）
    #[serde(default)]
    pub shifts: Vec<Shift>,
}

impl ScheduleTemplate {
    /// 适用于指定星期的班次，按源顺序给出，附带其在 `shifts` 中的下标
    pub fn shifts_on(&self, day: DayKey) -> impl Iterator<Item = (usize, &Shift)> {
        self.shifts
            .iter()
            .enumerate()
            .filter(move |(_, shift)| shift.applies_to(day))
    }
}

/// 排班模板元信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleTemplateMeta {
    /// 模板 ID（详情接口可能不返回）
    #[serde(default)]
    pub id: i64,
    /// 模板名称
    pub name: String,
    /// 模板描述；`null` 与缺省都视为空
    #[serde(default)]
    pub description: Option<String>,
    /// 创建时间
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ScheduleTemplateMeta {
    /// 描述文本，缺省时为空串
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

/// 班次
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    /// 班次 ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// 开始时间（如 `08:00:00`）
    pub start_time: String,
    /// 结束时间
    pub end_time: String,
    /// 所需助理人数
    pub required_assistant_number: i32,
    /// 适用的星期
    #[serde(default)]
    pub applicable_days: Vec<DayKey>,
}

impl Shift {
    /// 该班次是否在指定星期生效
    pub fn applies_to(&self, day: DayKey) -> bool {
        self.applicable_days.contains(&day)
    }
}

/// 模板列表项（列表页与删除弹窗使用）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleTemplateSummary {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub shift_count: usize,
}

impl From<&ScheduleTemplate> for ScheduleTemplateSummary {
    fn from(template: &ScheduleTemplate) -> Self {
        Self {
            id: template.meta.id,
            name: template.meta.name.clone(),
            description: template.meta.description().to_string(),
            shift_count: template.shifts.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAIL_JSON: &str = r#"{
        "meta": { "id": 3, "name": "2024 秋季学期", "description": null },
        "shifts": [
            { "id": 1, "startTime": "08:00:00", "endTime": "10:00:00", "requiredAssistantNumber": 2, "applicableDays": [1, 2, 3] },
            { "id": 2, "startTime": "10:00:00", "endTime": "12:00:00", "requiredAssistantNumber": 1, "applicableDays": [3] }
        ]
    }"#;

    #[test]
    fn parses_backend_payload() {
        let template: ScheduleTemplate = serde_json::from_str(DETAIL_JSON).unwrap();
        assert_eq!(template.meta.id, 3);
        assert_eq!(template.meta.name, "2024 秋季学期");
        assert_eq!(template.shifts.len(), 2);
        assert_eq!(template.shifts[0].required_assistant_number, 2);
    }

    #[test]
    fn null_and_missing_description_read_as_empty() {
        let with_null: ScheduleTemplateMeta =
            serde_json::from_str(r#"{ "name": "a", "description": null }"#).unwrap();
        let missing: ScheduleTemplateMeta = serde_json::from_str(r#"{ "name": "a" }"#).unwrap();
        assert_eq!(with_null.description(), "");
        assert_eq!(missing.description(), "");
    }

    #[test]
    fn shifts_on_filters_in_source_order() {
        let template: ScheduleTemplate = serde_json::from_str(DETAIL_JSON).unwrap();
        let wednesday = DayKey::try_from(3).unwrap();
        let sunday = DayKey::try_from(7).unwrap();

        let ids: Vec<usize> = template.shifts_on(wednesday).map(|(i, _)| i).collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(template.shifts_on(sunday).count(), 0);
    }

    #[test]
    fn out_of_range_day_fails_the_whole_payload() {
        let bad = DETAIL_JSON.replace("[3]", "[8]");
        assert!(serde_json::from_str::<ScheduleTemplate>(&bad).is_err());
    }

    #[test]
    fn summary_counts_shifts() {
        let template: ScheduleTemplate = serde_json::from_str(DETAIL_JSON).unwrap();
        let summary = ScheduleTemplateSummary::from(&template);
        assert_eq!(summary.id, 3);
        assert_eq!(summary.shift_count, 2);
        assert_eq!(summary.description, "");
    }
}
