//! 弹窗更新逻辑

use crate::message::{BackendCommand, ModalMessage};
use crate::model::{App, DeleteFocus};

/// 处理弹窗消息，交给最上层的弹窗
pub fn update(app: &mut App, msg: ModalMessage) {
    if app.delete_template.is_open() {
        handle_delete_template(app, msg);
    } else if app.template_detail.is_open() {
        handle_template_detail(app, msg);
    } else if app.modal.is_open() {
        if matches!(msg, ModalMessage::Close | ModalMessage::Confirm) {
            app.modal.close();
        }
    }
}

/// 模板详情弹窗：左右切换星期，回车或 Esc 关闭
fn handle_template_detail(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close | ModalMessage::Confirm => app.template_detail.close(),
        ModalMessage::PrevTab => app.template_detail.prev_tab(),
        ModalMessage::NextTab => app.template_detail.next_tab(),
        ModalMessage::ToggleDeleteFocus => {}
    }
}

/// 删除确认弹窗
fn handle_delete_template(app: &mut App, msg: ModalMessage) {
    let state = &mut app.delete_template;
    match msg {
        ModalMessage::Close => state.close(),
        ModalMessage::PrevTab | ModalMessage::NextTab | ModalMessage::ToggleDeleteFocus => {
            if !state.submitting {
                state.focus = state.focus.toggle();
            }
        }
        ModalMessage::Confirm => match state.focus {
            DeleteFocus::Cancel => state.close(),
            DeleteFocus::Delete => {
                if state.submitting {
                    return;
                }
                let Some(id) = state.target().map(|t| t.id) else {
                    state.close();
                    return;
                };
                state.submitting = true;
                log::info!("Deleting schedule template {id}");
                app.push_command(BackendCommand::DeleteTemplate { id });
            }
        },
    }
}
