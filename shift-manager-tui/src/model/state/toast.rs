//! 非阻塞通知（toast）
//!
//! 出现在屏幕右上角，数秒后自动消失。

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// 显示时长
const TOAST_TTL: Duration = Duration::from_secs(4);
/// 同时显示的最大数量
const MAX_TOASTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub expires_at: Instant,
}

#[derive(Debug, Default)]
pub struct ToastState {
    items: VecDeque<Toast>,
}

impl ToastState {
    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into(), Instant::now());
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into(), Instant::now());
    }

    fn push(&mut self, kind: ToastKind, message: String, now: Instant) {
        if self.items.len() == MAX_TOASTS {
            self.items.pop_front();
        }
        self.items.push_back(Toast {
            kind,
            message,
            expires_at: now + TOAST_TTL,
        });
    }

    /// 移除过期的 toast
    pub fn prune(&mut self, now: Instant) {
        self.items.retain(|toast| toast.expires_at > now);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire() {
        let mut toasts = ToastState::default();
        let now = Instant::now();
        toasts.push(ToastKind::Error, "用户未登录".into(), now);

        toasts.prune(now + Duration::from_secs(1));
        assert_eq!(toasts.len(), 1);

        toasts.prune(now + TOAST_TTL);
        assert!(toasts.is_empty());
    }

    #[test]
    fn oldest_toast_is_dropped_when_full() {
        let mut toasts = ToastState::default();
        for i in 0..=MAX_TOASTS {
            toasts.error(format!("e{i}"));
        }
        assert_eq!(toasts.len(), MAX_TOASTS);
        assert_eq!(toasts.iter().next().unwrap().message, "e1");
    }
}
