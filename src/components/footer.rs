use crate::app::state::{AppMode, AppState, FetchState};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct FooterItem {
    pub key: &'static str,
    pub desc: &'static str,
}

pub struct FooterGroup {
    pub name: &'static str,
    pub items: Vec<FooterItem>,
}

pub struct Footer<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Footer<'_> {
    fn get_groups(&self) -> Vec<FooterGroup> {
        match self.state.mode {
            AppMode::Search => vec![FooterGroup {
                name: "SEARCH",
                items: vec![
                    FooterItem {
                        key: "Enter",
                        desc: "search",
                    },
                    FooterItem {
                        key: "↑/↓",
                        desc: "recent",
                    },
                    FooterItem {
                        key: "Tab",
                        desc: "results",
                    },
                ],
            }],
            AppMode::Results => vec![
                FooterGroup {
                    name: "NAV",
                    items: vec![
                        FooterItem {
                            key: "j/k",
                            desc: "row",
                        },
                        FooterItem {
                            key: "h/l",
                            desc: "swatch",
                        },
                        FooterItem {
                            key: "/",
                            desc: "search",
                        },
                    ],
                },
                FooterGroup {
                    name: "VIEW",
                    items: vec![
                        FooterItem {
                            key: "Enter",
                            desc: "detail",
                        },
                        FooterItem {
                            key: "?",
                            desc: "help",
                        },
                        FooterItem {
                            key: "q",
                            desc: "quit",
                        },
                    ],
                },
            ],
            AppMode::Detail | AppMode::Help => vec![FooterGroup {
                name: "VIEW",
                items: vec![FooterItem {
                    key: "Esc",
                    desc: "back",
                }],
            }],
        }
    }

    fn left_spans(&self) -> Vec<Span<'_>> {
        if let Some(err) = &self.state.last_error {
            return vec![
                Span::styled(
                    format!(" {} ", err.timestamp.format("%H:%M:%S")),
                    self.theme.status_error,
                ),
                Span::styled(format!(" {} ", err.message), self.theme.footer_segment_val),
                Span::styled(" Esc ", self.theme.footer_segment_key),
                Span::styled(" dismiss", self.theme.footer),
            ];
        }

        let mut spans = Vec::new();
        for group in self.get_groups() {
            spans.push(Span::styled(
                format!(" {} ", group.name),
                self.theme.footer_group_name,
            ));
            for item in group.items {
                spans.push(Span::styled(
                    format!(" {} ", item.key),
                    self.theme.footer_segment_key,
                ));
                spans.push(Span::styled(
                    format!(" {} ", item.desc),
                    self.theme.footer_segment_val,
                ));
            }
        }
        spans
    }

    fn status_spans(&self) -> Vec<Span<'_>> {
        match self.state.fetch {
            FetchState::Fetching { .. } => vec![
                Span::styled(
                    format!(" {} ", self.state.spinner_frame()),
                    self.theme.spinner,
                ),
                Span::styled(" searching… ", self.theme.status_info),
            ],
            FetchState::Loaded => vec![Span::styled(
                format!(" {} palettes ", self.state.palettes.len()),
                self.theme.footer_segment_val,
            )],
            FetchState::Failed if self.state.last_error.is_none() => {
                vec![Span::styled(" last search failed ", self.theme.dimmed)]
            }
            _ => Vec::new(),
        }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let left = self.left_spans();
        let right = self.status_spans();

        let used: usize = left.iter().chain(right.iter()).map(Span::width).sum();
        let padding = (area.width as usize).saturating_sub(used);

        let mut spans = left;
        spans.push(Span::styled(" ".repeat(padding), self.theme.footer));
        spans.extend(right);

        Paragraph::new(Line::from(spans))
            .style(self.theme.footer)
            .render(area, buf);
    }
}
