use crate::domain::color::parse_hex;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

/// Full-screen projection of one selected color: a solid fill with the
/// literal hex text on top. Renders only; all state stays behind.
pub struct ColorDetail<'a> {
    pub hex: &'a str,
    pub theme: &'a Theme,
}

impl Widget for ColorDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let fill = parse_hex(self.hex).to_color();
        Block::default()
            .style(ratatui::style::Style::default().bg(fill))
            .render(area, buf);

        let text_style = self.theme.detail_text.bg(fill);
        let lines = vec![
            Line::from(Span::styled(self.hex.to_string(), text_style)),
            Line::from(""),
            Line::from(Span::styled("Esc: back", self.theme.dimmed.bg(fill))),
        ];
        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);

        let block_height = 3;
        let centered = Rect {
            x: area.x,
            y: (area.y + area.height / 2).saturating_sub(block_height / 2),
            width: area.width,
            height: (block_height).min(area.height),
        };
        if centered.width > 0 && centered.height > 0 {
            paragraph.render(centered, buf);
        }
    }
}
