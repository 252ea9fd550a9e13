//! 后台命令与事件

use std::sync::Arc;

use shift_manager_core::types::{ScheduleTemplate, UserInfo};
use shift_manager_core::{CancellationToken, CoreResult};

/// 交给后台执行的命令
///
/// 查询类命令带有挂载周期的取消令牌；页面离开或弹窗关闭时令牌被取消。
#[derive(Debug, Clone)]
pub enum BackendCommand {
    /// 当前用户（`refresh` 时先使缓存失效）
    LoadMyInfo {
        cancel: CancellationToken,
        refresh: bool,
    },
    /// 模板列表
    LoadTemplates {
        cancel: CancellationToken,
        refresh: bool,
    },
    /// 模板详情
    LoadTemplate { id: i64, cancel: CancellationToken },
    /// 删除模板（不可取消）
    DeleteTemplate { id: i64 },
}

/// 后台返回的结果
#[derive(Debug, Clone)]
pub enum BackendEvent {
    MyInfoLoaded(CoreResult<Arc<UserInfo>>),
    TemplatesLoaded(CoreResult<Arc<Vec<ScheduleTemplate>>>),
    TemplateLoaded {
        id: i64,
        result: CoreResult<Arc<ScheduleTemplate>>,
    },
    TemplateDeleted { id: i64, result: CoreResult<()> },
}
