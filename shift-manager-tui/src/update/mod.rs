//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│   ┌─────────┐          ┌───────────┐          ┌──────────┐                 │
//！│   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │ ── 推入命令 ──┐ │
//！│   │   层    │   翻译    │    层     │   消费    │    层    │               │ │
//！│   └─────────┘          └───────────┘          └────┬─────┘               │ │
//！│                              ▲                     │ 修改                ▼ │
//！│                              │                     ▼              ┌─────────┐
//！│                   BackendEvent                ┌──────────┐        │ Backend │
//！│                              └─────────────── │  Model   │        │   层    │
//！│                                               └──────────┘        └─────────┘
//！└─────────────────────────────────────────────────────────────────────────────┘
//!
//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。它自己从不等待 I/O：
//! 需要请求数据时，只把 BackendCommand 推入 App，由主循环派发给 Backend 层。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 导航子消息处理
//!         mod content;            // 内容面板子消息处理
//!         mod modal;              // 弹窗子消息处理
//!         mod backend;            // 后台结果处理
//!         mod query;              // 查询结果写回三态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 挂载周期
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     进入页面 / 打开详情弹窗时开始一个挂载周期（Mount::begin），
//!     离开页面 / 关闭弹窗时结束（Mount::end）。
//!
//!     结束时取消令牌：
//!         - 如果该请求还没有别的等待者，后台请求会被中止
//!         - 已经送回但属于旧周期的结果会被丢弃
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 弹窗优先级
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     删除确认弹窗 > 模板详情弹窗 > 帮助弹窗
//!
//!     ModalMessage 总是交给最上层的弹窗处理。
//!

mod backend;
mod content;
mod modal;
mod navigation;
mod query;

use crate::i18n::t;
use crate::message::{AppMessage, BackendCommand};
use crate::model::{App, Page};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.any_dialog_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::Backend(event) => {
            backend::update(app, event);
        }

        AppMessage::GoBack => {
            // 由上到下关闭最上层的弹窗
            if app.delete_template.is_open() {
                app.delete_template.close();
            } else if app.template_detail.is_open() {
                app.template_detail.close();
            } else if app.modal.is_open() {
                app.modal.close();
            }
            app.clear_status();
        }

        AppMessage::Refresh => {
            if !app.any_dialog_open() {
                app.set_status(t().common.refreshing);
                mount_page(app, app.current_page, true);
            }
        }

        AppMessage::ShowHelp => {
            if !app.any_dialog_open() {
                app.modal.show_help();
            }
        }

        AppMessage::Tick => {
            app.toasts.prune(std::time::Instant::now());
        }

        AppMessage::Noop => {}
    }
}

/// 启动时挂载首页
pub fn init(app: &mut App) {
    mount_page(app, app.current_page, false);
}

/// 切换页面：结束旧页面的挂载周期，挂载新页面
pub(crate) fn enter_page(app: &mut App, page: Page) {
    if app.current_page != page {
        unmount_page(app, app.current_page);
        app.current_page = page;
    }
    app.clear_status();
    mount_page(app, page, false);
}

fn unmount_page(app: &mut App, page: Page) {
    match page {
        Page::Home => app.home.mount.end(),
        Page::Templates => app.templates.mount.end(),
    }
}

/// 开始新的挂载周期并请求页面数据
///
/// 已有数据保留到新结果到达；上次的错误重置为加载中。
fn mount_page(app: &mut App, page: Page, refresh: bool) {
    let command = match page {
        Page::Home => {
            let cancel = app.home.mount.begin();
            if app.home.my_info.is_error() {
                app.home.my_info = shift_manager_core::QueryState::Pending;
            }
            BackendCommand::LoadMyInfo { cancel, refresh }
        }
        Page::Templates => {
            let cancel = app.templates.mount.begin();
            if app.templates.list.is_error() {
                app.templates.list = shift_manager_core::QueryState::Pending;
            }
            BackendCommand::LoadTemplates { cancel, refresh }
        }
    };
    app.push_command(command);
}
