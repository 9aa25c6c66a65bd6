//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{
        Block, Borders, Cell, Clear, List, ListItem, ListState, Padding, Paragraph, Row,
        Sparkline, Table, TableState, Wrap,
    },
};

use quaver::app::{App, Focus, ViewSource};
use quaver::carousel::SlotTransform;
use quaver::config::{DisplaySetting, UiSettings};
use quaver::filter::{Facet, Selection};
use quaver::library::{Column, row_cells};

const CONTROLS: &[(&str, &str)] = &[
    ("tab", "focus"),
    ("j/k", "up/down"),
    ("enter", "select"),
    ("h/l", "flip covers"),
    ("1-6", "sort column"),
    ("/", "search (tab: field)"),
    ("esc", "back to panels"),
    ("t", "covers/bars"),
    ("v", "bars on/off"),
    ("c", "bar colour"),
    ("r", "rescan"),
    ("o", "open folder"),
    ("q", "quit"),
];

fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{k}] {v}"))
        .collect::<Vec<String>>()
        .join(" | ")
}

fn padded(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding {
            left: 1,
            right: 0,
            top: 0,
            bottom: 0,
        })
}

fn focus_style(app: &App, focus: Focus) -> Style {
    if app.focus == focus {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

/// Render the entire UI into the provided `frame`.
///
/// `carousel_frame` is the last frame the carousel produced; without one the
/// carousel is drawn at rest.
pub fn draw(
    frame: &mut Frame,
    app: &App,
    carousel_frame: Option<&[SlotTransform]>,
    ui_settings: &UiSettings,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(10),
            Constraint::Min(6),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" quaver ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    match app.display {
        DisplaySetting::CoverFlow => draw_carousel(frame, app, carousel_frame, chunks[1]),
        DisplaySetting::Visualizer => draw_bars(frame, app, chunks[1]),
    }

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(chunks[2]);
    draw_panels(frame, app, body[0]);
    draw_table(frame, app, body[1]);

    let status = Paragraph::new(status_text(app))
        .block(padded(" status "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status, chunks[3]);

    let footer = Paragraph::new(controls_text())
        .block(padded(" controls "))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[4]);
}

fn status_text(app: &App) -> String {
    let mut parts: Vec<String> = Vec::new();

    match app.view_source() {
        ViewSource::Panels => {
            let sel = match app.engine().selection() {
                Selection::None => "all tracks".to_string(),
                Selection::Genre(g) => format!("genre: {g}"),
                Selection::Artist(a) => format!("artist: {a}"),
                Selection::Album(a) => format!("album: {a}"),
            };
            parts.push(format!("VIEW: {sel}"));
        }
        ViewSource::Search => {
            parts.push(format!(
                "{}: {}",
                app.search_field().label().to_uppercase(),
                app.search_query()
            ));
        }
    }
    if app.search_mode {
        parts.push("typing".to_string());
    }
    if let Some(input) = &app.path_input {
        parts.push(format!("open: {input}_ (enter: load, esc: cancel)"));
    }

    parts.push(format!("{} rows", app.visible().len()));

    if let Some(sort) = app.table_sort() {
        let arrow = if sort.ascending { "asc" } else { "desc" };
        parts.push(format!("sorted by {} ({arrow})", sort.column.header()));
    }

    let carousel = app.carousel();
    if !carousel.images().is_empty() {
        parts.push(format!(
            "covers {}/{}",
            carousel.current_index() + 1,
            carousel.images().len()
        ));
    }

    let vis = app.visualizer();
    parts.push(format!(
        "bars: {} ({})",
        if vis.is_active() { "on" } else { "off" },
        vis.color().label()
    ));

    if let Some(root) = app.root() {
        parts.push(format!("Dir: {}", root.display()));
    }
    if let Some(msg) = &app.status {
        parts.push(msg.clone());
    }

    parts.join(" • ")
}

fn draw_panels(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for (focus, rect) in [Focus::Genres, Focus::Artists, Focus::Albums]
        .into_iter()
        .zip(rows.iter())
    {
        let Some(facet) = focus.facet() else {
            continue;
        };
        let items: Vec<ListItem> = app
            .engine()
            .facet_list(facet)
            .iter()
            .map(|v| {
                if v.is_empty() {
                    ListItem::new("(none)").style(Style::default().add_modifier(Modifier::DIM))
                } else {
                    ListItem::new(v.as_str())
                }
            })
            .collect();
        let total = items.len();

        let title = match facet {
            Facet::Genre => " genres ",
            Facet::Artist => " artists ",
            Facet::Album => " albums ",
        };
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(focus_style(app, focus)),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        let mut state = ListState::default();
        if total > 0 && app.focus == focus {
            state.select(Some(app.cursor(focus)));
        }
        frame.render_stateful_widget(list, *rect, &mut state);
    }
}

fn draw_table(frame: &mut Frame, app: &App, area: Rect) {
    let sort = app.table_sort();
    let header = Row::new(Column::ALL.map(|c| {
        let mark = match sort {
            Some(s) if s.column == c && s.ascending => " ^",
            Some(s) if s.column == c => " v",
            _ => "",
        };
        Cell::from(format!("{}{mark}", c.header()))
    }))
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .visible_tracks()
        .into_iter()
        .map(|t| Row::new(row_cells(t)))
        .collect();
    let total = rows.len();

    let widths = [
        Constraint::Percentage(26),
        Constraint::Length(5),
        Constraint::Length(6),
        Constraint::Percentage(20),
        Constraint::Percentage(20),
        Constraint::Percentage(14),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" tracks ")
                .border_style(focus_style(app, Focus::Tracks)),
        )
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = TableState::default();
    if total > 0 {
        state.select(Some(app.cursor(Focus::Tracks)));
    }
    frame.render_stateful_widget(table, area, &mut state);
}

/// Draw the cover strip. Cards are laid out by their lateral offset, narrowed
/// as they turn edge-on and drawn in the carousel's paint order so nearer
/// cards cover farther ones.
fn draw_carousel(
    frame: &mut Frame,
    app: &App,
    carousel_frame: Option<&[SlotTransform]>,
    area: Rect,
) {
    let outer = Block::default().borders(Borders::ALL).title(" covers ");
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let carousel = app.carousel();
    if carousel.images().is_empty() || inner.width < 4 || inner.height < 3 {
        return;
    }

    let resting;
    let slots = match carousel_frame {
        Some(slots) => slots,
        None => {
            resting = carousel.transforms();
            resting.as_slice()
        }
    };

    let card_width = app.settings().carousel.card_width.max(0.1);
    let span = carousel.slot_count() as f32 * card_width;
    let cols_per_unit = inner.width as f32 / span;
    let full_cols = (card_width * cols_per_unit).max(3.0);
    let centre = inner.x as f32 + inner.width as f32 / 2.0;

    for slot in slots {
        let facing = slot.rotation_deg.to_radians().cos().abs();
        let width = (full_cols * facing).round().max(1.0);
        let x = centre + slot.lateral * cols_per_unit - width / 2.0;

        let left = x.max(inner.x as f32) as u16;
        let right = (x + width).min((inner.x + inner.width) as f32) as u16;
        if right <= left {
            continue;
        }

        // Nearer cards are taller.
        let shrink = if slot.depth < -0.5 { 0 } else { 1 };
        let rect = Rect {
            x: left,
            y: inner.y + shrink,
            width: right - left,
            height: inner.height.saturating_sub(shrink * 2),
        };

        let label = slot
            .album
            .and_then(|i| app.cover_album(i))
            .map(|a| if a.is_empty() { "(none)" } else { a })
            .unwrap_or("");
        let has_art = slot
            .album
            .and_then(|i| carousel.images().get(i))
            .is_some_and(|img| !img.is_blank());

        let mut style = Style::default();
        if slot.flipped {
            style = style.add_modifier(Modifier::BOLD);
        }
        if !has_art {
            style = style.add_modifier(Modifier::DIM);
        }

        frame.render_widget(Clear, rect);
        let card = Paragraph::new(label)
            .style(style)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).border_style(style));
        frame.render_widget(card, rect);
    }
}

fn draw_bars(frame: &mut Frame, app: &App, area: Rect) {
    let vis = app.visualizer();
    let [_, mid, _] = vis.color().stops();
    let rgb = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    let color = Color::Rgb(rgb(mid[0]), rgb(mid[1]), rgb(mid[2]));

    let data: Vec<u64> = vis
        .heights()
        .iter()
        .map(|h| (h * 100.0).round() as u64)
        .collect();
    let sparkline = Sparkline::default()
        .block(Block::default().borders(Borders::ALL).title(" bars "))
        .data(data)
        .max(150)
        .style(Style::default().fg(color));
    frame.render_widget(sparkline, area);
}
