use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

pub(super) fn draw_title(f: &mut Frame) {
    let size = f.area();
    let area = centered_rect(80, 80, size);
    let block = Block::default().title("blackjack").borders(Borders::ALL);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    let inner_all = inner(area);

    // ASCII logo at the top (render left-aligned to preserve spacing)
    let logo = r"
 ____  _        _    ____ _  __   _  _    ____ _  __
| __ )| |      / \  / ___| |/ /  | |/ \  / ___| |/ /
|  _ \| |     / _ \| |   | ' /_  | | _ \| |   | ' /
| |_) | |___ / ___ \ |___| . \| |_| |_) | |___| . \
|____/|_____/_/   \_\____|_|\_\\___/_/ \_\____|_|\_\";

    let logo_lines: Vec<Line> = logo
        .lines()
        .map(|l| {
            Line::from(Span::styled(
                l.to_string(),
                Style::default().fg(Color::Yellow),
            ))
        })
        .collect();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(logo_lines.len() as u16 + 2),
            Constraint::Min(3),
        ])
        .split(inner_all);

    let logo_para = Paragraph::new(logo_lines)
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center);
    f.render_widget(logo_para, rows[0]);

    let hint_lines = vec![
        Line::from("Beat the dealer to 21."),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Deal  [Q] Quit",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    let hints = Paragraph::new(hint_lines)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);
    f.render_widget(hints, rows[1]);
}
