//! 星期常量表
//!
//! 班次的 `applicableDays` 只能引用这里的 7 个键，反序列化时即校验。

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// 星期键（1 = 周一 … 7 = 周日）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayKey(u8);

impl DayKey {
    /// 最小合法键
    pub const MIN: u8 = 1;
    /// 最大合法键
    pub const MAX: u8 = 7;

    /// 原始数值
    pub fn get(self) -> u8 {
        self.0
    }

    /// 在常量表中的位置（0 起）
    pub fn index(self) -> usize {
        usize::from(self.0 - Self::MIN)
    }
}

impl TryFrom<u8> for DayKey {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CoreError::InvalidDayKey(value))
        }
    }
}

impl From<DayKey> for u8 {
    fn from(key: DayKey) -> Self {
        key.0
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 星期常量项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayOfWeek {
    pub key: DayKey,
    pub label: &'static str,
}

/// 固定顺序的 7 天常量表，进程内不可变
pub static DAY_OF_WEEK: [DayOfWeek; 7] = [
    DayOfWeek { key: DayKey(1), label: "周一" },
    DayOfWeek { key: DayKey(2), label: "周二" },
    DayOfWeek { key: DayKey(3), label: "周三" },
    DayOfWeek { key: DayKey(4), label: "周四" },
    DayOfWeek { key: DayKey(5), label: "周五" },
    DayOfWeek { key: DayKey(6), label: "周六" },
    DayOfWeek { key: DayKey(7), label: "周日" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_ordered_and_indexed_by_key() {
        for (i, day) in DAY_OF_WEEK.iter().enumerate() {
            assert_eq!(day.key.index(), i);
        }
        assert_eq!(DAY_OF_WEEK[0].label, "周一");
        assert_eq!(DAY_OF_WEEK[6].label, "周日");
    }

    #[test]
    fn rejects_keys_outside_the_week() {
        assert_eq!(DayKey::try_from(0), Err(CoreError::InvalidDayKey(0)));
        assert_eq!(DayKey::try_from(8), Err(CoreError::InvalidDayKey(8)));
        assert_eq!(DayKey::try_from(7).map(DayKey::get), Ok(7));
    }

    #[test]
    fn deserialization_enforces_the_subset_invariant() {
        let ok: Vec<DayKey> = serde_json::from_str("[1, 3, 7]").unwrap();
        assert_eq!(ok.len(), 3);

        let err = serde_json::from_str::<Vec<DayKey>>("[1, 9]").unwrap_err();
        assert!(err.to_string().contains("Invalid day key: 9"), "{err}");
    }
}
