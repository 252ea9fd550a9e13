//! 首页：日历订阅链接

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Paragraph, Wrap},
    Frame,
};
use shift_manager_core::types::UserInfo;
use shift_manager_core::view_model::subscription_url;
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::App;
use crate::view::components::hyperlink::Hyperlink;
use crate::view::components::resource;
use crate::view::theme::colors;

/// 渲染首页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    resource::render(&app.home.my_info, frame, area, |info, frame, area| {
        render_subscription(&app.calendar_domain, info, frame, area);
    });
}

fn render_subscription(domain: &str, info: &UserInfo, frame: &mut Frame, area: Rect) {
    let texts = t();
    let url = subscription_url(domain, &info.id);
    let area = area.inner(ratatui::layout::Margin::new(1, 1));

    let paragraphs = [
        texts.home.empty_notice,
        texts.home.subscription_intro,
        texts.home.subscription_usage,
    ];
    let mut constraints: Vec<Constraint> = paragraphs
        .iter()
        .map(|text| Constraint::Length(wrapped_height(text, area.width) + 1))
        .collect();
    constraints.push(Constraint::Length(1)); // 链接
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (text, row) in paragraphs.iter().zip(rows.iter()) {
        frame.render_widget(
            Paragraph::new(*text)
                .style(Style::default().fg(colors().fg))
                .wrap(Wrap { trim: true }),
            *row,
        );
    }
    frame.render_widget(Hyperlink::new(&url), rows[paragraphs.len()]);
}

/// 文本折行后的行数（按显示宽度估算，英文按单词折行时留一行余量）
fn wrapped_height(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let columns = text.width();
    let lines = columns.div_ceil(usize::from(width)).max(1);
    let slack = usize::from(text.contains(' ') && lines > 1);
    u16::try_from(lines + slack).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use shift_manager_core::{CoreError, QueryState};

    use super::*;
    use crate::update::test_support::app;
    use crate::view::layout::test_support::{draw, text};

    #[test]
    fn success_shows_explanations_and_link() {
        let mut app = app();
        app.home.my_info = QueryState::Success(Arc::new(UserInfo::with_id(42)));
        let buffer = draw(&app, 120, 30);
        let screen = text(&buffer);

        assert!(screen.contains("https://example.com/api/42.ics"));
        assert!(screen.contains("目前主页没有任何内容"));

        let linked = buffer
            .content()
            .iter()
            .any(|cell| cell.symbol().starts_with("\x1B]8;;https://example.com/api/42.ics\x07"));
        assert!(linked);
    }

    #[test]
    fn pending_and_error_render_nothing() {
        let mut app = app();
        assert!(!text(&draw(&app, 120, 30)).contains(".ics"));

        app.home.my_info = QueryState::Error(CoreError::Api {
            status: 401,
            message: "用户未登录".to_string(),
        });
        let screen = text(&draw(&app, 120, 30));
        assert!(!screen.contains(".ics"));
        assert!(!screen.contains("目前主页没有任何内容"));
    }

    #[test]
    fn wrapped_height_rounds_up() {
        assert_eq!(wrapped_height("abcd", 2), 2);
        assert_eq!(wrapped_height("值班", 3), 2);
        assert_eq!(wrapped_height("", 10), 1);
        assert_eq!(wrapped_height("a b c d", 3), 4);
    }
}
