//! 右上角的通知

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::{App, ToastKind};
use crate::view::theme::colors;

/// 通知的最大宽度（含边框）
const MAX_WIDTH: u16 = 48;
/// 每条通知的高度（含边框）
const HEIGHT: u16 = 3;

/// 渲染所有未过期的通知，自上而下排列
pub fn render(app: &App, frame: &mut Frame) {
    if app.toasts.is_empty() {
        return;
    }
    let area = frame.area();
    let c = colors();
    // 留出标题栏
    let mut y = area.y + 1;

    for toast in app.toasts.iter() {
        if y + HEIGHT > area.bottom() {
            break;
        }
        let text_width = u16::try_from(toast.message.width()).unwrap_or(u16::MAX);
        let width = text_width.saturating_add(4).min(MAX_WIDTH).min(area.width);
        let rect = Rect::new(area.right() - width, y, width, HEIGHT);

        let color = match toast.kind {
            ToastKind::Success => c.success,
            ToastKind::Error => c.error,
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(c.bg));

        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(toast.message.as_str())
                .style(Style::default().fg(c.fg))
                .block(block),
            rect,
        );
        y += HEIGHT;
    }
}
