//! 翻译键定义
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**
//! 3. **页面内容归对应页面**：如 `home.*`, `templates.*`
//! 4. **跨组件复用归 `common.*`**
//! 5. **键盘提示归 `hints.*`**

/// 所有翻译文本的根结构
pub struct Translations {
    pub common: CommonTexts,
    pub hints: HintTexts,
    pub nav: NavTexts,
    pub home: HomeTexts,
    pub templates: TemplatesTexts,
    pub modal: ModalTexts,
    /// 星期标签，与星期常量表按位置对应
    pub days: [&'static str; 7],
}

// ============================================================================
// 通用文本
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub cancel: &'static str,
    pub delete: &'static str,
    pub close: &'static str,
    pub refreshing: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

pub struct HintTexts {
    pub switch_panel: &'static str,
    pub navigate: &'static str,
    pub select: &'static str,
    pub open: &'static str,
    pub view_detail: &'static str,
    pub delete: &'static str,
    pub refresh: &'static str,
    pub switch_day: &'static str,
    pub switch_button: &'static str,
    pub confirm: &'static str,
    pub close: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 导航栏
// ============================================================================

pub struct NavTexts {
    pub title: &'static str,
    pub home: &'static str,
    pub templates: &'static str,
}

// ============================================================================
// 页面
// ============================================================================

pub struct HomeTexts {
    pub title: &'static str,
    pub empty_notice: &'static str,
    pub subscription_intro: &'static str,
    pub subscription_usage: &'static str,
}

pub struct TemplatesTexts {
    pub title: &'static str,
    pub empty: &'static str,
    /// 班次数量后缀，如 `3 个班次`
    pub shift_count_suffix: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

pub struct ModalTexts {
    pub detail: DetailModalTexts,
    pub delete: DeleteModalTexts,
    pub help: HelpTexts,
}

pub struct DetailModalTexts {
    pub no_description: &'static str,
    pub no_shifts: &'static str,
    /// 助理人数后缀，如 `2名助理`
    pub assistants_suffix: &'static str,
    /// 放不下的班次数后缀，如 `+3 个班次未显示`
    pub hidden_shifts_suffix: &'static str,
}

pub struct DeleteModalTexts {
    pub title: &'static str,
    pub prompt: &'static str,
    pub deleting: &'static str,
    /// 成功提示前缀，后接模板名称
    pub deleted: &'static str,
}

pub struct HelpTexts {
    pub title: &'static str,
    pub global: &'static str,
    pub templates: &'static str,
    pub dialogs: &'static str,
    pub close_hint: &'static str,
}
