//! 排班模板列表页

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};
use shift_manager_core::types::ScheduleTemplate;
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::App;
use crate::view::components::resource;
use crate::view::theme::{colors, Styles};

/// 名称列宽度（显示宽度）
const NAME_WIDTH: usize = 24;

/// 渲染模板列表页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    resource::render(&app.templates.list, frame, area, |list, frame, area| {
        render_list(app, list, frame, area);
    });
}

fn render_list(app: &App, list: &[ScheduleTemplate], frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    if list.is_empty() {
        frame.render_widget(Paragraph::new(texts.templates.empty).style(Styles::muted()), area);
        return;
    }

    let items: Vec<ListItem> = list
        .iter()
        .map(|template| {
            let count = format!(
                "{}{}",
                template.shifts.len(),
                texts.templates.shift_count_suffix
            );
            ListItem::new(Line::from(vec![
                Span::styled(pad(&template.meta.name, NAME_WIDTH), Style::default().fg(c.fg)),
                Span::styled(format!("{count:<12}"), Style::default().fg(c.success)),
                Span::styled(template.meta.description().to_string(), Styles::muted()),
            ]))
        })
        .collect();

    let mut list_widget = List::new(items);
    if app.focus.is_content() {
        list_widget = list_widget.highlight_style(Styles::selected());
    }

    let mut state = ListState::default();
    state.select(Some(app.templates.selected));
    frame.render_stateful_widget(list_widget, area, &mut state);
}

/// 按显示宽度右侧补空格（过长时截断）
fn pad(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(&" ".repeat(width - out.width()));
    out
}
