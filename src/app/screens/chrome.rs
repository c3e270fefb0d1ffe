//! Header, status line and key help shared by every screen

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Standard screen split: header, body, status, help
pub fn screen_layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Brand and screen title
            Constraint::Min(8),    // Body
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help text
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2], chunks[3])
}

/// Render the STATHLETE brand with the screen title under it
pub fn render_header(f: &mut Frame, area: Rect, title: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(2)])
        .split(area);

    let brand = Paragraph::new("STATHLETE")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(brand, chunks[0]);

    let subtitle = Paragraph::new(title.to_string())
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center);
    f.render_widget(subtitle, chunks[1]);
}

/// Render an error line, or nothing when there is none
pub fn render_status(f: &mut Frame, area: Rect, error: Option<&str>) {
    let Some(message) = error else {
        return;
    };

    let status = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    f.render_widget(status, area);
}

/// Render key hints as `key description` pairs
pub fn render_help(f: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::new();
    for (key, description) in hints {
        spans.push(Span::styled(
            key.to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {}  ", description)));
    }

    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(help, area);
}

/// A `width` x `height` rectangle centered horizontally at the top of `area`
pub fn centered_top(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_top() {
        let area = Rect::new(0, 5, 80, 20);
        assert_eq!(centered_top(area, 40, 10), Rect::new(20, 5, 40, 10));
        // Clamped to the available area
        assert_eq!(centered_top(area, 100, 30), area);
    }
}
