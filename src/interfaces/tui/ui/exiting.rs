use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::popup;

use super::common::centered_rect;

pub fn draw_exiting_screen(frame: &mut Frame, _app: &App, area: Rect) {
    let popup_area = centered_rect(popup::EXITING.width, popup::EXITING.height, area);

    frame.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from(""),
        Line::from("Quit Shortly?").style(Style::default().fg(Color::White).bold()),
        Line::from(""),
        Line::from("Session results are in-memory only and will be lost.")
            .style(Style::default().fg(Color::DarkGray)),
        Line::from(""),
        Line::from("[y] Yes   [n] No").style(Style::default().fg(Color::Yellow)),
    ];

    let confirm = Paragraph::new(lines)
        .block(
            Block::default()
                .title("Confirm Exit")
                .title_style(Style::default().fg(Color::Red).bold())
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::Red)),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(confirm, popup_area);
}
