use crate::app::state::{AppMode, AppState, FetchState};
use crate::components::color_detail::ColorDetail;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::palette_list::PaletteList;
use crate::components::search_bar::SearchBar;
use crate::theme::Theme;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub search: Rect,
    pub results: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Search bar
            Constraint::Min(0),    // Palette list
            Constraint::Length(1), // Footer
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        search: chunks[1],
        results: chunks[2],
        footer: chunks[3],
    }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let theme = app_state.theme.clone();

    if app_state.mode == AppMode::Detail {
        if let Some(hex) = app_state.selected_color.clone() {
            let detail = ColorDetail {
                hex: &hex,
                theme: &theme,
            };
            f.render_widget(detail, f.area());
            return;
        }
    }

    let layout = get_layout(f.area());

    // --- Header ---
    if layout.header.width > 0 && layout.header.height > 0 {
        let header = Header {
            palette_count: app_state.palettes.len(),
            query: &app_state.query,
            theme: &theme,
        };
        f.render_widget(header, layout.header);
    }

    // --- Search Bar ---
    let search_focused = app_state.mode == AppMode::Search;
    app_state.search_input.set_cursor_style(if search_focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    });
    if layout.search.width > 0 && layout.search.height > 0 {
        let bar = SearchBar {
            input: &app_state.search_input,
            focused: search_focused,
            theme: &theme,
        };
        f.render_widget(bar, layout.search);
    }

    // --- Palette List ---
    let (results_border, results_title_style) = if app_state.mode == AppMode::Results {
        (theme.border_focus, theme.header_active)
    } else {
        (theme.border, theme.header_item)
    };
    let results_block = Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled(" PALETTES ", results_title_style),
            Span::raw(" "),
        ]))
        .title_bottom(Line::from(vec![
            Span::raw(" "),
            Span::styled("j/k", theme.footer_segment_key),
            Span::raw(": rows "),
            Span::styled("h/l", theme.footer_segment_key),
            Span::raw(": swatches "),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(results_border);

    if layout.results.width > 0 && layout.results.height > 0 {
        let inner = results_block.inner(layout.results);
        f.render_widget(results_block, layout.results);
        if inner.width > 0 && inner.height > 0 {
            if app_state.palettes.is_empty() {
                draw_empty_state(f, inner, app_state, &theme);
            } else {
                let list = PaletteList {
                    palettes: &app_state.palettes,
                    swatch_index: app_state.results.swatch_index,
                    theme: &theme,
                };
                f.render_stateful_widget(list, inner, &mut app_state.results.table_state);
            }
        }
    }

    // --- Footer ---
    if layout.footer.width > 0 && layout.footer.height > 0 {
        let footer = Footer {
            state: app_state,
            theme: &theme,
        };
        f.render_widget(footer, layout.footer);
    }

    // --- Help Overlay ---
    if app_state.mode == AppMode::Help {
        draw_help(f, &theme);
    }
}

fn draw_empty_state(f: &mut Frame, area: Rect, app_state: &AppState, theme: &Theme) {
    let mut lines: Vec<Line> = Vec::new();

    match app_state.fetch {
        FetchState::Idle => {
            let wordmark = [
                r" _____ _____ _____ _____ _____ _____ _____ ",
                r"|  _  |     |   __|     |   __|   | |_   _|",
                r"|   __|-   -|  |  | | | |   __| | | | | |  ",
                r"|__|  |_____|_____|_|_|_|_____|_|___| |_|  ",
            ];
            for l in wordmark {
                lines.push(Line::from(Span::styled(l, theme.list_selected)));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::raw("Type a word and press "),
                Span::styled(" Enter ", theme.footer_segment_key),
                Span::raw(" to fetch palettes"),
            ]));
        }
        FetchState::Fetching { .. } => {
            lines.push(Line::from(vec![
                Span::styled(app_state.spinner_frame(), theme.spinner),
                Span::raw(format!(" Searching for \"{}\"… ", app_state.query)),
            ]));
        }
        FetchState::Loaded => {
            lines.push(Line::from(Span::styled(
                format!("No palettes found for \"{}\"", app_state.query),
                theme.dimmed,
            )));
        }
        FetchState::Failed => {
            lines.push(Line::from(Span::styled(
                "Search failed — nothing to show",
                theme.dimmed,
            )));
        }
    }

    let height = lines.len() as u16;
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    let centered = Rect {
        x: area.x,
        y: (area.y + area.height / 2).saturating_sub(height / 2),
        width: area.width,
        height: height.min(area.height),
    };
    if centered.width > 0 && centered.height > 0 {
        f.render_widget(paragraph, centered);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(100u16.saturating_sub(percent_y) / 2),
            Constraint::Percentage(percent_y.min(100)),
            Constraint::Percentage(100u16.saturating_sub(percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(100u16.saturating_sub(percent_x) / 2),
            Constraint::Percentage(percent_x.min(100)),
            Constraint::Percentage(100u16.saturating_sub(percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn draw_help(f: &mut Frame, theme: &Theme) {
    let help_area = centered_rect(60, 70, f.area());
    if help_area.width == 0 || help_area.height == 0 {
        return;
    }
    f.render_widget(Clear, help_area);

    let block = Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled(" HELP - KEYBINDINGS ", theme.header_active),
            Span::raw(" "),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_focus);

    use ratatui::widgets::{Cell, Row, Table};

    let key_style = theme.footer_segment_key;
    let desc_style = theme.list_item;
    let category_style = theme.header_item;

    let rows = vec![
        Row::new(vec![
            Cell::from(Span::styled("Search", category_style)),
            Cell::from(""),
        ]),
        Row::new(vec![Cell::from(Span::styled(" Enter", key_style)), Cell::from(Span::styled("Fetch palettes for the typed word", desc_style))]),
        Row::new(vec![Cell::from(Span::styled(" ↑ / ↓", key_style)), Cell::from(Span::styled("Recall recent queries", desc_style))]),
        Row::new(vec![Cell::from(Span::styled(" Tab", key_style)), Cell::from(Span::styled("Jump to the results", desc_style))]),
        Row::new(vec![Cell::from(""), Cell::from("")]),
        Row::new(vec![
            Cell::from(Span::styled("Results", category_style)),
            Cell::from(""),
        ]),
        Row::new(vec![Cell::from(Span::styled(" j / ↓", key_style)), Cell::from(Span::styled("Next palette", desc_style))]),
        Row::new(vec![Cell::from(Span::styled(" k / ↑", key_style)), Cell::from(Span::styled("Previous palette", desc_style))]),
        Row::new(vec![Cell::from(Span::styled(" h / l", key_style)), Cell::from(Span::styled("Move between swatches", desc_style))]),
        Row::new(vec![Cell::from(Span::styled(" Enter", key_style)), Cell::from(Span::styled("Open the color detail view", desc_style))]),
        Row::new(vec![Cell::from(Span::styled(" / or i", key_style)), Cell::from(Span::styled("Back to the search bar", desc_style))]),
        Row::new(vec![Cell::from(""), Cell::from("")]),
        Row::new(vec![
            Cell::from(Span::styled("General", category_style)),
            Cell::from(""),
        ]),
        Row::new(vec![Cell::from(Span::styled(" ?", key_style)), Cell::from(Span::styled("Show this help", desc_style))]),
        Row::new(vec![Cell::from(Span::styled(" Esc", key_style)), Cell::from(Span::styled("Close view / dismiss errors", desc_style))]),
        Row::new(vec![Cell::from(Span::styled(" q", key_style)), Cell::from(Span::styled("Quit", desc_style))]),
    ];

    let table = Table::new(rows, [Constraint::Percentage(30), Constraint::Percentage(70)])
        .block(block);

    f.render_widget(table, help_area);
}
