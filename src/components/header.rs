use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    pub palette_count: usize,
    pub query: &'a str,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let stats = if self.query.is_empty() {
            String::new()
        } else {
            format!(" {} palettes for \"{}\" ", self.palette_count, self.query)
        };
        let padding = (area.width as usize).saturating_sub(stats.len() + 10);

        let header = Paragraph::new(Line::from(vec![
            Span::styled(" PIGMENT ", self.theme.header_logo),
            Span::raw(" "),
            Span::styled(stats, self.theme.header_item),
            Span::styled(" ".repeat(padding), self.theme.header),
        ]))
        .style(self.theme.header);
        header.render(area, buf);
    }
}
