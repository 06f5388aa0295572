use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::card::{Card, Suit};
use crate::game::RoundStatus;
use crate::tui::logger::LogBuffer;
use crate::view::{CardView, TableView};

use super::layout::{centered_rect, inner};

const CARD_WIDTH: u16 = 7;

pub(super) fn draw_table(f: &mut Frame, view: &TableView, messages: &LogBuffer) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // header
            Constraint::Min(5),     // dealer cards
            Constraint::Min(5),     // player cards
            Constraint::Length(4),  // status bar
        ])
        .split(size);

    let header_line = Line::from(vec![
        Span::styled(
            format!("WINS: {}", view.wins),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::raw(format!("Shoe: {} cards", view.shoe_remaining)),
    ]);
    let header = Paragraph::new(header_line)
        .block(Block::default().title("blackjack").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    draw_hand_row(f, chunks[1], "DEALER CARDS", &view.dealer);
    draw_hand_row(f, chunks[2], "YOUR CARDS", &view.player);

    draw_status_bar(f, chunks[3], view, messages);

    if view.status.is_terminal() {
        draw_game_over(f, view);
    }
}

fn draw_hand_row(f: &mut Frame, area: Rect, title: &str, cards: &[CardView]) {
    let block = Block::default().title(title).borders(Borders::ALL);
    let row = inner(area);
    f.render_widget(block, area);

    if cards.is_empty() {
        return;
    }

    let count = cards.len() as u16;
    let total = count * CARD_WIDTH;
    let pad = row.width.saturating_sub(total) / 2;

    let mut constraints = Vec::with_capacity(cards.len() + 1);
    constraints.push(Constraint::Length(pad));
    constraints.extend((0..count).map(|_| Constraint::Length(CARD_WIDTH)));
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(row);

    for (i, card) in cards.iter().enumerate() {
        render_card_widget(f, slots[i + 1], *card);
    }
}

fn draw_status_bar(f: &mut Frame, area: Rect, view: &TableView, messages: &LogBuffer) {
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), area);
    let status_inner = inner(area);

    let playing = view.status == RoundStatus::Playing;
    let action_style = |enabled: bool| {
        if enabled {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        }
    };
    let mut lines = vec![Line::from(vec![
        Span::raw("Actions: "),
        Span::styled("H hit", action_style(playing)),
        Span::raw(" • "),
        Span::styled("S stand", action_style(playing)),
        Span::raw(" • "),
        Span::raw("Q quit"),
    ])];

    if let Ok(buffer) = messages.lock() {
        if let Some(last) = buffer.last() {
            lines.push(Line::from(Span::styled(
                last.clone(),
                Style::default().add_modifier(Modifier::DIM),
            )));
        }
    }

    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(para, status_inner);
}

fn draw_game_over(f: &mut Frame, view: &TableView) {
    let area = centered_rect(60, 60, f.area());
    let block = Block::default().title("Round over").borders(Borders::ALL);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    let overlay = inner(area);

    let banner = match view.status {
        RoundStatus::Blackjack => "BLACKJACK",
        RoundStatus::Busted => "BUSTED",
        RoundStatus::Win => "YOU WIN",
        RoundStatus::Loss => "YOU LOSE",
        RoundStatus::Draw => "DRAW",
        RoundStatus::EmptyShoe => "EMPTY SHOE",
        RoundStatus::Playing => return,
    };

    // The banner slides up from the bottom edge to the middle of the
    // overlay as the offset ticks down.
    let target_y = overlay.y + overlay.height / 2;
    let max_y = overlay.y + overlay.height.saturating_sub(1);
    let banner_y = (target_y + view.banner_offset).min(max_y);
    let banner_area = Rect {
        x: overlay.x,
        y: banner_y,
        width: overlay.width,
        height: 1,
    };
    let banner_para = Paragraph::new(Line::from(Span::styled(
        banner,
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    f.render_widget(banner_para, banner_area);

    let hint_lines = vec![
        Line::from(format!("WINS: {}", view.wins)),
        Line::from(""),
        Line::from(Span::styled(
            "[P] Play again  [T] Title screen",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    let hints = Paragraph::new(hint_lines).alignment(Alignment::Center);
    let hints_area = Rect {
        x: overlay.x,
        y: overlay.y,
        width: overlay.width,
        height: overlay.height.min(3),
    };
    f.render_widget(hints, hints_area);
}

fn suit_glyph_and_style(s: Suit) -> (char, Style) {
    match s {
        Suit::Hearts => ('♥', Style::default().fg(Color::Red)),
        Suit::Diamonds => ('♦', Style::default().fg(Color::Red)),
        Suit::Spades => ('♠', Style::default().fg(Color::White)),
        Suit::Clubs => ('♣', Style::default().fg(Color::White)),
    }
}

fn rank_label(rank: u8) -> String {
    match rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        _ => rank.to_string(),
    }
}

fn render_card_widget(f: &mut Frame, area: Rect, card: CardView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title_alignment(Alignment::Center);
    let content_area = inner(area);
    f.render_widget(block, area);

    let content = match card {
        CardView::FaceUp(Card { suit, rank }) => {
            let (glyph, style) = suit_glyph_and_style(suit);
            Line::from(Span::styled(format!("{}{glyph}", rank_label(rank)), style))
        }
        CardView::FaceDown => Line::from(Span::styled(
            "▒▒",
            Style::default().fg(Color::DarkGray),
        )),
    };
    let para = Paragraph::new(content).alignment(Alignment::Center);
    f.render_widget(para, content_area);
}
