//! 终端超链接（OSC 8）
//!
//! 先按普通文本渲染，再把文本按两个字符一组改写为 OSC 8 转义序列。
//! ratatui 计算转义序列宽度时只看到两个可见字符，所以每组占两格。
//! 分组只对 ASCII 文本成立；含非 ASCII 字符时（例如文本形式的用户 ID）
//! 只渲染带链接样式的普通文本。

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::view::theme::Styles;

/// 可点击的链接
pub struct Hyperlink<'a> {
    text: &'a str,
    url: &'a str,
}

impl<'a> Hyperlink<'a> {
    /// 显示文本即 URL 本身
    pub fn new(url: &'a str) -> Self {
        Self { text: url, url }
    }
}

impl Widget for Hyperlink<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        Line::from(Span::styled(self.text, Styles::link())).render(area, buf);
        if !self.text.is_ascii() || !self.url.is_ascii() {
            return;
        }

        let chars: Vec<char> = self.text.chars().collect();
        for (i, chunk) in chars.chunks(2).enumerate() {
            let Ok(offset) = u16::try_from(i * 2) else {
                break;
            };
            if offset >= area.width {
                break;
            }
            let room = usize::from(area.width - offset);
            let text: String = chunk.iter().take(room).collect();
            let symbol = format!("\x1B]8;;{}\x07{}\x1B]8;;\x07", self.url, text);
            buf[(area.x + offset, area.y)].set_symbol(&symbol);
        }
    }
}
