//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Page};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在最后
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let h = &t().hints;

    if app.delete_template.is_open() {
        return vec![("Tab", h.switch_button), ("Enter", h.confirm), ("Esc", h.close)];
    }
    if app.template_detail.is_open() {
        return vec![("←→", h.switch_day), ("Enter/Esc", h.close)];
    }
    if app.modal.is_open() {
        return vec![("Esc", h.close)];
    }

    let mut hints = vec![("Tab", h.switch_panel)];

    if app.focus.is_navigation() {
        hints.push(("↑↓", h.navigate));
        hints.push(("Enter", h.open));
    } else if app.current_page == Page::Templates {
        hints.push(("↑↓", h.select));
        hints.push(("Enter", h.view_detail));
        hints.push(("Alt+d", h.delete));
    }

    hints.push(("Alt+r", h.refresh));
    hints.push(("?", h.help));
    hints.push(("q", h.quit));
    hints
}
