//! 类型定义模块

mod day;
mod response;
mod schedule_template;
mod user;

pub use day::{DayKey, DayOfWeek, DAY_OF_WEEK};
pub use response::ApiResponse;
pub use schedule_template::{ScheduleTemplate, ScheduleTemplateMeta, ScheduleTemplateSummary, Shift};
pub use user::{UserId, UserInfo};
