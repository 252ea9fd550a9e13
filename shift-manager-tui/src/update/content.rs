//! 内容面板更新逻辑

use crate::message::{BackendCommand, ContentMessage};
use crate::model::{App, Page};

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    // 首页没有可操作的列表
    if app.current_page != Page::Templates {
        return;
    }

    match msg {
        ContentMessage::SelectPrevious => app.templates.select_previous(),
        ContentMessage::SelectNext => app.templates.select_next(),
        ContentMessage::SelectFirst => app.templates.select_first(),
        ContentMessage::SelectLast => app.templates.select_last(),

        ContentMessage::Confirm => {
            if let Some(summary) = app.templates.selected_summary() {
                let cancel = app.template_detail.open(summary.id);
                app.push_command(BackendCommand::LoadTemplate {
                    id: summary.id,
                    cancel,
                });
            }
        }

        ContentMessage::Delete => {
            if let Some(summary) = app.templates.selected_summary() {
                app.delete_template.open(summary);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::update::test_support::{app, template, templates_loaded};

    fn templates_page() -> App {
        let mut app = app();
        app.current_page = Page::Templates;
        templates_loaded(&mut app, vec![template(1, "早班"), template(2, "晚班")]);
        app
    }

    #[test]
    fn confirm_opens_the_detail_for_the_selected_row() {
        let mut app = templates_page();
        update(&mut app, ContentMessage::SelectNext);
        update(&mut app, ContentMessage::Confirm);

        assert_eq!(app.template_detail.shown_id(), Some(2));
        assert!(app.template_detail.query.is_pending());
        assert!(matches!(
            app.take_commands().as_slice(),
            [BackendCommand::LoadTemplate { id: 2, .. }]
        ));
    }

    #[test]
    fn delete_stages_the_selected_template() {
        let mut app = templates_page();
        update(&mut app, ContentMessage::Delete);

        let target = app.delete_template.target().unwrap();
        assert_eq!(target.id, 1);
        assert_eq!(target.name, "早班");
        assert!(app.take_commands().is_empty());
    }

    #[test]
    fn empty_list_opens_nothing() {
        let mut app = app();
        app.current_page = Page::Templates;
        templates_loaded(&mut app, Vec::new());

        update(&mut app, ContentMessage::Confirm);
        update(&mut app, ContentMessage::Delete);
        assert!(!app.any_dialog_open());
    }

    #[test]
    fn home_page_ignores_list_messages() {
        let mut app = app();
        update(&mut app, ContentMessage::Confirm);
        assert!(!app.any_dialog_open());
    }
}
