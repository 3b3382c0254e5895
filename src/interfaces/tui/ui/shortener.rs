//! 缩短表单屏幕：1 到 5 行输入 + 本次会话生成的结果列表

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::interfaces::tui::app::{App, EditingField};
use crate::interfaces::tui::constants::MAX_URL_ENTRIES;
use crate::links::UrlEntry;

use super::common::truncate_url;

pub fn draw_shortener_screen(frame: &mut Frame, app: &App, area: Rect) {
    // 每行 4 格高：3 格输入框 + 1 格错误槽位
    let mut constraints: Vec<Constraint> = app
        .form
        .entries
        .iter()
        .map(|_| Constraint::Length(4))
        .collect();
    constraints.push(Constraint::Min(3)); // 结果列表

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (index, entry) in app.form.entries.iter().enumerate() {
        draw_entry_row(frame, app, entry, index, chunks[index]);
    }

    draw_results(frame, app, chunks[app.form.entries.len()]);
}

fn draw_entry_row(frame: &mut Frame, app: &App, entry: &UrlEntry, index: usize, area: Rect) {
    let row_selected = index == app.form.selected_entry;

    let row_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let field_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55),
            Constraint::Percentage(20),
            Constraint::Percentage(25),
        ])
        .split(row_chunks[0]);

    let fields = [
        (EditingField::Url, &entry.url),
        (EditingField::Validity, &entry.validity),
        (EditingField::CustomCode, &entry.custom_code),
    ];

    for ((field, value), chunk) in fields.iter().zip(field_chunks.iter()) {
        let editing_here = row_selected && app.form.currently_editing == Some(*field);
        let field_style = if editing_here {
            Style::default().fg(Color::Black).bg(Color::Yellow).bold()
        } else if row_selected {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        };

        let title = if row_selected && matches!(field, EditingField::Url) {
            format!("{}. {} *", index + 1, field.display_title())
        } else if matches!(field, EditingField::Url) {
            format!("{}. {}", index + 1, field.display_title())
        } else {
            field.display_title().to_string()
        };

        let widget = Paragraph::new(value.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(title)
                .border_style(field_style),
        );
        frame.render_widget(widget, *chunk);
    }

    // 错误槽位展示：目前没有规则写入，但槽位机制保留
    let errors: Vec<Span> = fields
        .iter()
        .filter_map(|(field, _)| app.form.get_error(*field, index))
        .map(|msg| Span::styled(msg.clone(), Style::default().fg(Color::Red)))
        .collect();
    if !errors.is_empty() {
        frame.render_widget(Paragraph::new(Line::from(errors)), row_chunks[1]);
    }
}

fn draw_results(frame: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "Shortened URLs ({}) — rows {}/{}",
        app.results.len(),
        app.form.entries.len(),
        MAX_URL_ENTRIES
    );

    let items: Vec<ListItem> = app
        .results
        .iter()
        .enumerate()
        .map(|(i, link)| {
            let marker = if i == app.selected_result { "▶ " } else { "  " };
            let style = if i == app.selected_result {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default().fg(Color::Cyan)
            };
            ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::styled(link.short_url.clone(), style),
                Span::styled(
                    format!("  ← {}", truncate_url(&link.original_url)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .border_style(Style::default().fg(Color::Green)),
    );

    frame.render_widget(list, area);
}
