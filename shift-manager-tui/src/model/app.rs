//! 应用主状态结构

use crate::message::BackendCommand;

use super::{
    DeleteTemplateState, FocusPanel, HomeState, ModalState, NavigationState, Page,
    TemplateDetailState, TemplatesState, ToastState,
};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 订阅链接使用的域名
    pub calendar_domain: String,

    // === 各页面状态 ===
    /// 首页状态
    pub home: HomeState,
    /// 模板列表页状态
    pub templates: TemplatesState,

    // === 弹窗 ===
    /// 模板详情弹窗
    pub template_detail: TemplateDetailState,
    /// 删除模板弹窗
    pub delete_template: DeleteTemplateState,
    /// 帮助弹窗
    pub modal: ModalState,

    /// 通知
    pub toasts: ToastState,

    /// 等待主循环派发的后台命令
    pending_commands: Vec<BackendCommand>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(calendar_domain: String) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::Home,
            status_message: None,
            calendar_domain,
            home: HomeState::new(),
            templates: TemplatesState::new(),
            template_detail: TemplateDetailState::default(),
            delete_template: DeleteTemplateState::default(),
            modal: ModalState::new(),
            toasts: ToastState::default(),
            pending_commands: Vec::new(),
        }
    }

    /// 是否有任意弹窗打开
    pub fn any_dialog_open(&self) -> bool {
        self.modal.is_open() || self.template_detail.is_open() || self.delete_template.is_open()
    }

    /// 排队一个后台命令
    pub fn push_command(&mut self, command: BackendCommand) {
        self.pending_commands.push(command);
    }

    /// 取出所有待派发的命令
    pub fn take_commands(&mut self) -> Vec<BackendCommand> {
        std::mem::take(&mut self.pending_commands)
    }

    /// 结束所有挂载周期
    pub fn unmount_all(&mut self) {
        self.home.mount.end();
        self.templates.mount.end();
        self.template_detail.close();
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
