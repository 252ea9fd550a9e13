//! 首页状态

use shift_manager_core::types::UserInfo;
use shift_manager_core::QueryState;

use super::Mount;

/// 首页状态
#[derive(Debug, Default)]
pub struct HomeState {
    /// `["my-info"]`
    pub my_info: QueryState<UserInfo>,
    pub mount: Mount,
}

impl HomeState {
    pub fn new() -> Self {
        Self::default()
    }
}
