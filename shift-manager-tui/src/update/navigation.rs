//! 导航更新逻辑

use crate::message::NavigationMessage;
use crate::model::{App, FocusPanel, Page};

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => {
            app.navigation.select_previous();
        }

        NavigationMessage::SelectNext => {
            app.navigation.select_next();
        }

        NavigationMessage::Confirm => {
            if let Some(id) = app.navigation.current_id() {
                let page = Page::from(id);
                super::enter_page(app, page);
                app.focus = FocusPanel::landing(page);
            }
        }

        NavigationMessage::SelectFirst => {
            app.navigation.selected = 0;
        }

        NavigationMessage::SelectLast => {
            let len = app.navigation.items.len();
            if len > 0 {
                app.navigation.selected = len - 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::BackendCommand;
    use crate::update::test_support::app;

    #[test]
    fn confirming_the_current_page_remounts_it() {
        let mut app = app();
        super::super::init(&mut app);
        app.take_commands();

        update(&mut app, NavigationMessage::Confirm);
        assert_eq!(app.current_page, Page::Home);
        assert!(matches!(
            app.take_commands().as_slice(),
            [BackendCommand::LoadMyInfo { refresh: false, .. }]
        ));
    }

    #[test]
    fn entering_templates_moves_focus_to_the_list() {
        let mut app = app();
        update(&mut app, NavigationMessage::SelectLast);
        update(&mut app, NavigationMessage::Confirm);

        assert_eq!(app.current_page, Page::Templates);
        assert!(app.focus.is_content());
        assert!(app.templates.mount.is_active());
        assert!(!app.home.mount.is_active());
    }
}
