use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::popup;

use super::common::centered_rect;

pub fn draw_help_screen(frame: &mut Frame, _app: &App, area: Rect) {
    let popup_area = centered_rect(popup::HELP.width, popup::HELP.height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title("Help")
        .title_style(Style::default().fg(Color::Blue).bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Blue));
    frame.render_widget(block, popup_area);

    let inner_area = popup_area.inner(Margin::new(2, 1));

    let entry = |key: &str, desc: &str| {
        Line::from(vec![
            Span::styled(format!("  {:<10}", key), Style::default().fg(Color::Cyan).bold()),
            Span::styled(desc.to_string(), Style::default().fg(Color::White)),
        ])
    };

    let lines = vec![
        Line::from(Span::styled(
            "Shortener",
            Style::default().fg(Color::Green).bold(),
        )),
        entry("Up/Down", "Select form row"),
        entry("a / d", "Add / remove a row (1 to 5 rows)"),
        entry("e, Enter", "Edit the selected row"),
        entry("Tab", "Next field while editing (URL, validity, custom code)"),
        entry("s", "Shorten all rows"),
        entry("[ / ]", "Select a shortened URL"),
        entry("y", "Copy selected short URL to clipboard"),
        entry("o", "Open selected short URL in browser (mock, never resolves)"),
        Line::from(""),
        Line::from(Span::styled(
            "Statistics",
            Style::default().fg(Color::Green).bold(),
        )),
        entry("2 / t", "Open statistics"),
        entry("1 / Esc", "Back to shortener"),
        Line::from(""),
        Line::from(Span::styled(
            "General",
            Style::default().fg(Color::Green).bold(),
        )),
        entry("?", "This help"),
        entry("q", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Short URLs are generated locally and never resolve anywhere.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner_area);
}
