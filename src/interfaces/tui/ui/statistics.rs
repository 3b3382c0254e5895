//! 统计屏幕：只读渲染会话内的短链接记录
//!
//! 点击数和点击记录始终是 0 和空 —— 没有任何机制会产生点击数据。

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::status_text;

use super::common::truncate_url;

pub fn draw_statistics_screen(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title("Statistics")
        .border_style(Style::default().fg(Color::Cyan));

    if app.results.is_empty() {
        let empty = Paragraph::new("No URLs shortened yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block)
            .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for (i, link) in app.results.iter().enumerate() {
        let marker = if i == app.selected_result { "▶ " } else { "  " };
        let status = if link.is_expired() {
            Span::styled(status_text::EXPIRED, Style::default().fg(Color::Red).bold())
        } else {
            Span::styled(status_text::ACTIVE, Style::default().fg(Color::Green).bold())
        };

        lines.push(Line::from(vec![
            Span::raw(marker.to_string()),
            Span::styled(link.short_url.clone(), Style::default().fg(Color::Cyan).bold()),
            Span::raw("  "),
            status,
        ]));
        lines.push(Line::from(vec![
            Span::raw("    Original: "),
            Span::styled(
                truncate_url(&link.original_url),
                Style::default().fg(Color::White),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::raw("    Created: "),
            Span::styled(
                link.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw("   Expires: "),
            Span::styled(
                link.expires_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::raw("    Clicks: "),
            Span::styled(
                link.click_count.to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]));

        if link.clicks.is_empty() {
            lines.push(Line::from(Span::styled(
                "      No clicks recorded.",
                Style::default().fg(Color::DarkGray),
            )));
        } else {
            for click in &link.clicks {
                lines.push(Line::from(Span::styled(
                    format!("      {} — {}", click.timestamp, click.location),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
        lines.push(Line::from(""));
    }

    let stats = Paragraph::new(lines).block(block);
    frame.render_widget(stats, area);
}
