use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::constants::{URL_TRUNCATE_LENGTH, colors};

/// Draw title bar with version and page tabs
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let tab_style = |screen: CurrentScreen| {
        if app.current_screen == screen {
            Style::default().fg(Color::Black).bg(colors::PRIMARY).bold()
        } else {
            Style::default().fg(colors::MUTED)
        }
    };

    let title_text = vec![Line::from(vec![
        Span::styled("Shortly TUI", Style::default().fg(colors::PRIMARY).bold()),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(colors::MUTED),
        ),
        Span::styled("| ", Style::default().fg(colors::MUTED)),
        Span::styled(" 1 Shortener ", tab_style(CurrentScreen::Shortener)),
        Span::raw(" "),
        Span::styled(" 2 Statistics ", tab_style(CurrentScreen::Statistics)),
        Span::styled(" | ", Style::default().fg(colors::MUTED)),
        Span::styled(
            format!("Links: {} ", app.results.len()),
            Style::default().fg(Color::Yellow),
        ),
    ])];

    let title = Paragraph::new(title_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors::PRIMARY)),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (status_text, status_style) = if !app.error_message.is_empty() {
        (
            format!("[ERROR] {}", app.error_message),
            Style::default().fg(Color::White).bg(colors::ERROR).bold(),
        )
    } else if !app.status_message.is_empty() {
        (
            format!("[OK] {}", app.status_message),
            Style::default().fg(Color::Black).bg(colors::SUCCESS).bold(),
        )
    } else {
        ("Ready".to_string(), Style::default().fg(colors::PRIMARY))
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(status, area);
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = match app.current_screen {
        CurrentScreen::Shortener if app.form.currently_editing.is_some() => vec![
            ("Tab", "Switch Field", Color::Cyan),
            ("Up/Down", "Switch Row", Color::Cyan),
            ("Enter", "Shorten", Color::Green),
            ("Esc", "Stop Editing", Color::Red),
        ],
        CurrentScreen::Shortener => vec![
            ("Up/Down", "Select Row", Color::Cyan),
            ("e", "Edit", Color::Yellow),
            ("a", "Add Row", Color::Green),
            ("d", "Remove Row", Color::Red),
            ("s", "Shorten", Color::Green),
            ("[/]", "Select Result", Color::Cyan),
            ("y", "Copy", Color::Magenta),
            ("o", "Open", Color::Magenta),
            ("2", "Statistics", Color::Blue),
            ("?", "Help", Color::Blue),
            ("q", "Quit", Color::Magenta),
        ],
        CurrentScreen::Statistics => vec![
            ("Up/Down", "Navigate", Color::Cyan),
            ("1/Esc", "Shortener", Color::Blue),
            ("?", "Help", Color::Blue),
            ("q", "Quit", Color::Magenta),
        ],
        CurrentScreen::Help => vec![("q/Esc", "Close", Color::Red)],
        CurrentScreen::Exiting => vec![("y", "Yes", Color::Green), ("n", "No", Color::Red)],
    };

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(colors::MUTED)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans))
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(footer, area);
}

/// 按百分比居中的弹窗区域
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// URL 过长时截断展示，按字符而不是字节截断
pub fn truncate_url(url: &str) -> String {
    if url.chars().count() > URL_TRUNCATE_LENGTH {
        let head: String = url.chars().take(URL_TRUNCATE_LENGTH).collect();
        format!("{}...", head)
    } else {
        url.to_string()
    }
}
