use crate::range::DATE_FORMAT;
use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_regions, control_fields, layout_regions, modal_rect, tile_rects};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, LINK_TEXT, NASA_RED, POPUP_BORDER, SPACE_BLUE,
    STATUS_ERROR, STATUS_OK,
};
use crate::ui::viewport::Status;
use crate::view::{Detail, DetailVisual, Tile, TileVisual};
use chrono::Datelike;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let snapshot = app.view_snapshot();

    frame.render_widget(Header::new().widget(app.range(), app.fact()), header);

    frame.render_widget(Clear, body);
    let (controls, status, grid) = body_regions(body);
    draw_controls(frame, app, controls);
    draw_status(frame, &snapshot.status, status);
    draw_grid(frame, &snapshot.tiles, app.selection(), grid);

    let year = app.today().year();
    frame.render_widget(
        Footer::new(year).widget(footer, snapshot.modal.is_some()),
        footer,
    );

    if let Some(detail) = &snapshot.modal {
        draw_modal(frame, detail, modal_rect(area));
    }
}

fn draw_controls(frame: &mut Frame<'_>, app: &App, controls: Rect) {
    let (start, end, button) = control_fields(controls);
    let editing = app.focus() == Focus::StartDate;

    let start_border = if editing { NASA_RED } else { GLOBAL_BORDER };
    let start_text = if editing {
        format!("{}▏", app.start_input())
    } else {
        app.range().start_param()
    };
    frame.render_widget(
        Paragraph::new(start_text).style(Style::default().fg(HEADER_TEXT)).block(
            Block::default()
                .title("Start date")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(start_border)),
        ),
        start,
    );

    frame.render_widget(
        Paragraph::new(app.range().end_param())
            .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM))
            .block(
                Block::default()
                    .title("End date")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            ),
        end,
    );

    frame.render_widget(
        Paragraph::new(" Get Images (f)")
            .style(Style::default().fg(HEADER_TEXT).bg(SPACE_BLUE))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            ),
        button,
    );
}

fn draw_status(frame: &mut Frame<'_>, status: &Status, area: Rect) {
    let color = match status {
        Status::Failed(_) => STATUS_ERROR,
        Status::Ready { .. } => STATUS_OK,
        Status::Idle | Status::Loading => HEADER_TEXT,
    };
    frame.render_widget(
        Paragraph::new(format!(" {}", status.text())).style(Style::default().fg(color)),
        area,
    );
}

fn draw_grid(frame: &mut Frame<'_>, tiles: &[Tile], selection: usize, grid: Rect) {
    for (index, rect) in tile_rects(grid, tiles.len(), selection) {
        if let Some(tile) = tiles.get(index) {
            frame.render_widget(tile_widget(tile, index == selection), rect);
        }
    }
}

fn tile_widget(tile: &Tile, selected: bool) -> Paragraph<'static> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let visual = match &tile.visual {
        TileVisual::Thumbnail { src, alt } => {
            let label = if alt.is_empty() { src.clone() } else { alt.clone() };
            Line::from(vec![
                Span::styled("🖼  ", text_style),
                Span::styled(label, Style::default().fg(LINK_TEXT)),
            ])
        }
        TileVisual::VideoPlaceholder { label } => Line::from(Span::styled(
            *label,
            Style::default().fg(NASA_RED).add_modifier(Modifier::BOLD),
        )),
    };
    let lines = vec![
        visual,
        Line::from(""),
        Line::from(Span::styled(
            tile.caption.clone(),
            text_style.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            tile.date.format(DATE_FORMAT).to_string(),
            text_style.add_modifier(Modifier::DIM),
        )),
    ];

    let (border, background) = if selected {
        (NASA_RED, ACTIVE_HIGHLIGHT)
    } else {
        (GLOBAL_BORDER, ratatui::style::Color::Reset)
    };
    Paragraph::new(lines)
        .style(Style::default().bg(background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
}

fn draw_modal(frame: &mut Frame<'_>, detail: &Detail, area: Rect) {
    let text_style = Style::default().fg(HEADER_TEXT);
    let mut lines = vec![
        Line::from(Span::styled(
            detail.date.format(DATE_FORMAT).to_string(),
            text_style.add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
    ];

    match &detail.visual {
        DetailVisual::FullImage { src, alt } => {
            lines.push(Line::from(vec![
                Span::styled("🖼  Image: ", text_style),
                Span::styled(src.clone(), Style::default().fg(LINK_TEXT)),
            ]));
            if !alt.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("    {}", alt),
                    text_style.add_modifier(Modifier::DIM),
                )));
            }
        }
        DetailVisual::EmbeddedVideo { src } => {
            lines.push(Line::from(vec![
                Span::styled(
                    "▶  Play video: ",
                    Style::default().fg(NASA_RED).add_modifier(Modifier::BOLD),
                ),
                Span::styled(src.clone(), Style::default().fg(LINK_TEXT)),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(detail.explanation.clone(), text_style)));

    frame.render_widget(Clear, area);
    let popup = Block::default()
        .title(Span::styled(
            format!(" {} ", detail.title),
            Style::default().fg(NASA_RED).add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(" Esc/x: Close ").right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let widget = Paragraph::new(lines)
        .block(popup)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}
