//! 国际化（i18n）模块
//!
//! 使用纯 Rust 结构体方案，编译期类型检查，零运行时开销。

use std::sync::atomic::{AtomicUsize, Ordering};

mod en_us;
pub mod keys;
mod zh_cn;

pub use keys::*;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 简体中文（中国）
    #[default]
    ZhCn,
    /// 英语（美国）
    EnUs,
}

impl Language {
    /// 获取语言代码（BCP 47 标准）
    pub fn code(self) -> &'static str {
        match self {
            Language::ZhCn => "zh-CN",
            Language::EnUs => "en-US",
        }
    }

    /// 从语言代码解析
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "zh-CN" | "zh" => Some(Language::ZhCn),
            "en-US" | "en" => Some(Language::EnUs),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Language::ZhCn => 0,
            Language::EnUs => 1,
        }
    }
}

/// 当前语言索引（原子操作，线程安全）
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = ZhCn

/// 获取当前语言的翻译
///
/// # Example
///
/// ```ignore
/// let text = t().nav.home; // "主页" or "Home"
/// ```
pub fn t() -> &'static Translations {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => &en_us::TRANSLATIONS,
        _ => &zh_cn::TRANSLATIONS,
    }
}

/// 设置当前语言
pub fn set_language(lang: Language) {
    CURRENT_LANGUAGE.store(lang.index(), Ordering::Relaxed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for lang in [Language::ZhCn, Language::EnUs] {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("ja-JP"), None);
    }

    #[test]
    fn both_tables_name_seven_days() {
        assert_eq!(zh_cn::TRANSLATIONS.days[0], "周一");
        assert_eq!(en_us::TRANSLATIONS.days[6], "Sun");
    }
}
