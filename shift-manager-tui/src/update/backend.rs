//! 后台结果处理

use crate::i18n::t;
use crate::message::{BackendCommand, BackendEvent};
use crate::model::App;

use super::query;

/// 处理后台返回的结果
pub fn update(app: &mut App, event: BackendEvent) {
    match event {
        BackendEvent::MyInfoLoaded(result) => {
            // 已离开首页
            if !app.home.mount.is_active() {
                return;
            }
            query::apply_query_result(&mut app.home.my_info, &mut app.toasts, result);
            app.clear_status();
        }

        BackendEvent::TemplatesLoaded(result) => {
            if !app.templates.mount.is_active() {
                return;
            }
            if query::apply_query_result(&mut app.templates.list, &mut app.toasts, result) {
                app.templates.clamp_selection();
            }
            app.clear_status();
        }

        BackendEvent::TemplateLoaded { id, result } => {
            // 弹窗已关闭或已切换到别的模板
            if app.template_detail.shown_id() != Some(id) {
                log::debug!("Discarding stale result for schedule template {id}");
                return;
            }
            query::apply_query_result(&mut app.template_detail.query, &mut app.toasts, result);
            // 失败时弹窗不渲染，也不能继续拦截按键
            if app.template_detail.query.is_error() {
                app.template_detail.close();
            }
        }

        BackendEvent::TemplateDeleted { id, result } => handle_deleted(app, id, result),
    }
}

fn handle_deleted(app: &mut App, id: i64, result: shift_manager_core::CoreResult<()>) {
    let targeted = app.delete_template.target().is_some_and(|t| t.id == id);

    match result {
        Ok(()) => {
            let name = app
                .delete_template
                .target()
                .filter(|t| t.id == id)
                .map(|t| t.name.clone());
            let message = match name {
                Some(name) => format!("{}: {name}", t().modal.delete.deleted),
                None => t().modal.delete.deleted.to_string(),
            };
            app.toasts.success(message);

            if targeted {
                app.delete_template.close();
            }
            if app.template_detail.shown_id() == Some(id) {
                app.template_detail.close();
            }
            // 缓存已失效，重新拉取列表
            if let Some(cancel) = app.templates.mount.token() {
                app.push_command(BackendCommand::LoadTemplates {
                    cancel,
                    refresh: false,
                });
            }
        }
        Err(e) => {
            app.toasts.error(e.to_string());
            if targeted {
                app.delete_template.submitting = false;
            }
        }
    }
}
