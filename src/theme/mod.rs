use ratatui::style::{Color, Modifier, Style};

pub mod catppuccin;
pub mod palette;

pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header_logo: Style,
    pub header_item: Style,
    pub header_active: Style,
    pub header: Style,

    pub status_info: Style,
    pub status_error: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer_group_name: Style,
    pub footer: Style,

    pub list_selected: Style,
    pub list_item: Style,
    pub hex_label: Style,
    pub detail_text: Style,
    pub spinner: Style,
    pub dimmed: Style,
}

impl Theme {
    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.blue),

            header_logo: Style::default()
                .bg(p.mauve)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_item: Style::default().bg(p.surface0).fg(p.text),
            header_active: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header: Style::default().bg(p.base).fg(p.text),

            status_info: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_error: Style::default()
                .bg(p.red)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),

            footer_segment_key: Style::default()
                .bg(p.surface0)
                .fg(p.blue)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.crust).fg(p.subtext1),
            footer_group_name: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),
            footer: Style::default().bg(p.crust).fg(p.subtext0),

            list_selected: Style::default().fg(p.blue).add_modifier(Modifier::BOLD),
            list_item: Style::default().fg(p.text),
            hex_label: Style::default().fg(p.text).bg(dim_color(p.blue, 0.25)),
            detail_text: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            spinner: Style::default().fg(p.teal).add_modifier(Modifier::BOLD),
            dimmed: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette(&catppuccin::CATPPUCCIN_MOCHA)
    }
}
