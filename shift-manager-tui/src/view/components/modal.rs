//! 弹窗组件
//!
//! 层级（后绘制的在上层）：帮助 → 模板详情 → 删除确认

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};
use shift_manager_core::view_model::{DayTab, DescriptionView, TemplateDetailView};

use crate::i18n::t;
use crate::model::{App, DeleteFocus, DeleteTemplateState};
use crate::view::theme::{colors, Styles};

/// 空白标签页的虚线边框
const DASHED: border::Set = border::Set {
    top_left: "┌",
    top_right: "┐",
    bottom_left: "└",
    bottom_right: "┘",
    vertical_left: "╎",
    vertical_right: "╎",
    horizontal_top: "╌",
    horizontal_bottom: "╌",
};

/// 渲染所有打开的弹窗
pub fn render(app: &App, frame: &mut Frame) {
    if app.modal.is_open() {
        render_help(frame);
    }

    // 只有查询成功才渲染详情
    if app.template_detail.is_open() {
        if let Some(view) = app.template_detail.view() {
            render_template_detail(frame, &view, app.template_detail.selected_tab);
        }
    }

    if app.delete_template.is_open() {
        render_delete_template(frame, &app.delete_template);
    }
}

/// 计算居中的弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn dialog_block(title: &str, border_color: ratatui::style::Color) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(colors().bg))
}

// ============================================================================
// 模板详情
// ============================================================================

fn render_template_detail(frame: &mut Frame, view: &TemplateDetailView, selected_tab: usize) {
    let texts = t();
    let c = colors();

    let area = centered_rect(64, 20, frame.area());
    frame.render_widget(Clear, area);
    let block = dialog_block(&view.title, c.border_focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [desc_area, tabs_area, _, body_area, footer_area] = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(1)
        .constraints([
            Constraint::Length(2), // 描述
            Constraint::Length(1), // 星期标签
            Constraint::Length(1),
            Constraint::Min(3),    // 班次
            Constraint::Length(1), // 关闭按钮
        ])
        .areas(inner);

    // 描述
    let description = match &view.description {
        DescriptionView::Text(text) => {
            Paragraph::new(text.as_str()).style(Style::default().fg(c.fg))
        }
        DescriptionView::Placeholder => {
            Paragraph::new(texts.modal.detail.no_description).style(Styles::muted())
        }
    };
    frame.render_widget(description.wrap(Wrap { trim: true }), desc_area);

    // 星期标签
    let labels: Vec<&str> = view.tabs.iter().map(|tab| texts.days[tab.day.key.index()]).collect();
    let tabs = Tabs::new(labels)
        .select(selected_tab)
        .style(Style::default().fg(c.fg))
        .highlight_style(Styles::selected())
        .divider("│");
    frame.render_widget(tabs, tabs_area);

    if let Some(tab) = view.tabs.get(selected_tab) {
        render_day_tab(frame, tab, body_area);
    }

    // 关闭按钮
    let footer = Line::from(vec![
        Span::styled("Enter/Esc ", Styles::muted()),
        Span::styled(format!(" {} ", texts.common.close), Styles::selected()),
    ])
    .alignment(Alignment::Right);
    frame.render_widget(footer, footer_area);
}

fn render_day_tab(frame: &mut Frame, tab: &DayTab, area: Rect) {
    let texts = t();
    let c = colors();

    if tab.is_empty() {
        let placeholder = Paragraph::new(texts.modal.detail.no_shifts)
            .style(Styles::muted())
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_set(DASHED)
                    .border_style(Styles::muted()),
            );
        frame.render_widget(placeholder, area);
        return;
    }

    // 行数超出区域时，最后一行改为提示还有多少班次没显示
    let height = usize::from(area.height);
    let (shown, hidden) = if tab.rows.len() > height {
        let shown = height.saturating_sub(1);
        (shown, tab.rows.len() - shown)
    } else {
        (tab.rows.len(), 0)
    };

    let mut lines: Vec<Line> = tab
        .rows
        .iter()
        .take(shown)
        .map(|row| {
            Line::from(vec![
                Span::styled(row.time_range.clone(), Style::default().fg(c.fg)),
                Span::raw("    "),
                Span::styled(
                    format!(
                        "{}{} 👤",
                        row.required_assistants, texts.modal.detail.assistants_suffix
                    ),
                    Style::default().fg(c.success),
                ),
            ])
        })
        .collect();
    if hidden > 0 {
        lines.push(Line::styled(
            format!("+{hidden}{}", texts.modal.detail.hidden_shifts_suffix),
            Styles::muted(),
        ));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

// ============================================================================
// 删除确认
// ============================================================================

fn render_delete_template(frame: &mut Frame, state: &DeleteTemplateState) {
    let Some(target) = state.target() else {
        return;
    };
    let texts = t();
    let c = colors();

    let area = centered_rect(48, 9, frame.area());
    frame.render_widget(Clear, area);
    let block = dialog_block(texts.modal.delete.title, c.error);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let buttons = if state.submitting {
        Line::styled(format!("  {}", texts.modal.delete.deleting), Styles::muted())
    } else {
        let cancel_style = if state.focus == DeleteFocus::Cancel {
            Styles::selected()
        } else {
            Style::default().fg(c.fg)
        };
        let delete_style = if state.focus == DeleteFocus::Delete {
            Style::default()
                .fg(c.selected_fg)
                .bg(c.error)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.error)
        };
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.common.cancel), cancel_style),
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.common.delete), delete_style),
        ])
    };

    let lines = vec![
        Line::from(""),
        Line::styled(format!("  {}", texts.modal.delete.prompt), Style::default().fg(c.fg)),
        Line::styled(format!("  \"{}\"", target.name), Style::default().fg(c.warning)),
        Line::from(""),
        buttons,
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

// ============================================================================
// 帮助
// ============================================================================

fn render_help(frame: &mut Frame) {
    let texts = t();
    let h = &texts.hints;
    let c = colors();

    let area = centered_rect(56, 22, frame.area());
    frame.render_widget(Clear, area);
    let block = dialog_block(texts.modal.help.title, c.border_focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let section = |title: &'static str| {
        Line::styled(
            title,
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        )
    };
    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<10}"), Styles::hint_key()),
            Span::styled(desc, Style::default().fg(c.fg)),
        ])
    };

    let lines = vec![
        section(texts.modal.help.global),
        entry("Tab", h.switch_panel),
        entry("↑↓ / jk", h.navigate),
        entry("Enter", h.open),
        entry("Alt+r", h.refresh),
        entry("Alt+h / ?", h.help),
        entry("q", h.quit),
        Line::from(""),
        section(texts.modal.help.templates),
        entry("Enter", h.view_detail),
        entry("Alt+d", h.delete),
        Line::from(""),
        section(texts.modal.help.dialogs),
        entry("← →", h.switch_day),
        entry("Tab", h.switch_button),
        entry("Enter", h.confirm),
        entry("Esc", h.close),
        Line::from(""),
        Line::styled(texts.modal.help.close_hint, Styles::muted()),
    ];
    frame.render_widget(Paragraph::new(lines), inner.inner(ratatui::layout::Margin::new(1, 0)));
}
