//! 挂载周期

use shift_manager_core::CancellationToken;

/// 页面或弹窗的挂载周期
///
/// 同一时刻最多持有一个令牌；重新挂载会先取消旧令牌。
#[derive(Debug, Default)]
pub struct Mount {
    token: Option<CancellationToken>,
}

impl Mount {
    /// 开始新的挂载周期，返回随请求发出的令牌
    pub fn begin(&mut self) -> CancellationToken {
        self.end();
        let token = CancellationToken::new();
        self.token = Some(token.clone());
        token
    }

    /// 结束挂载周期，取消仍在等待的请求
    pub fn end(&mut self) {
        if let Some(token) = self.token.take() {
            token.cancel();
        }
    }

    pub fn is_active(&self) -> bool {
        self.token.is_some()
    }

    /// 当前令牌（未挂载时为 None）
    pub fn token(&self) -> Option<CancellationToken> {
        self.token.clone()
    }
}

impl Drop for Mount {
    fn drop(&mut self) {
        self.end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remount_cancels_previous_token() {
        let mut mount = Mount::default();
        let first = mount.begin();
        let second = mount.begin();

        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());
        assert!(mount.is_active());
    }

    #[test]
    fn end_cancels_and_deactivates() {
        let mut mount = Mount::default();
        let token = mount.begin();
        mount.end();

        assert!(token.is_cancelled());
        assert!(!mount.is_active());
        assert!(mount.token().is_none());
    }
}
