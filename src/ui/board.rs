use crate::app::App;
use crate::game::Board;
use crate::models::Card;
use crate::ui::layout::{calculate_column_cells, calculate_grid_cells};
use crate::utils::truncate_string;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardLook {
    Idle,
    Focused,
    Selected,
    Failed,
    Matched,
}

pub fn card_look(app: &App, card: &Card, focused: bool) -> CardLook {
    let game = &app.game;
    if game.is_matched(card.id) {
        CardLook::Matched
    } else if game.is_selected(card) && game.is_resolving() {
        CardLook::Failed
    } else if game.is_selected(card) {
        CardLook::Selected
    } else if focused {
        CardLook::Focused
    } else {
        CardLook::Idle
    }
}

pub fn draw_card(f: &mut Frame, area: Rect, card: &Card, look: CardLook) {
    // Matched cards keep their slot but lose their text.
    let (content, border, text_style) = match look {
        CardLook::Matched => ("", Style::default().fg(Color::DarkGray), Style::default()),
        CardLook::Failed => (
            card.content.as_str(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Red),
        ),
        CardLook::Selected => (
            card.content.as_str(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        CardLook::Focused => (
            card.content.as_str(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            Style::default().fg(Color::White),
        ),
        CardLook::Idle => (
            card.content.as_str(),
            Style::default().fg(Color::Gray),
            Style::default().fg(Color::White),
        ),
    };

    let mut block = Block::default().borders(Borders::ALL).border_style(border);
    if look == CardLook::Focused {
        block = block.title(" > ");
    }

    let widget = Paragraph::new(fit_to_cell(content, area))
        .style(text_style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    f.render_widget(widget, area);
}

/// Long definitions are cut so they never spill past the cell border.
pub(crate) fn fit_to_cell(content: &str, area: Rect) -> String {
    let capacity = area.width.saturating_sub(2) as usize * area.height.saturating_sub(2) as usize;
    truncate_string(content, capacity.max(3))
}

pub fn draw_board(f: &mut Frame, app: &App, area: Rect) {
    match app.game.board() {
        Board::Empty => draw_empty(f, area),
        Board::Grid { cards } => {
            let cols = app.settings().grid_cols as usize;
            let cells = calculate_grid_cells(area, cols, cards.len());
            for (i, (card, cell)) in cards.iter().zip(cells).enumerate() {
                draw_card(f, cell, card, card_look(app, card, i == app.focus));
            }
        }
        Board::Column { words, definitions } => {
            let (left, right) = calculate_column_cells(area, words.len());
            for (i, (card, cell)) in words.iter().zip(left).enumerate() {
                draw_card(f, cell, card, card_look(app, card, i == app.focus));
            }
            for (i, (card, cell)) in definitions.iter().zip(right).enumerate() {
                let focused = words.len() + i == app.focus;
                draw_card(f, cell, card, card_look(app, card, focused));
            }
        }
        Board::Quiz(_) => super::quiz::draw_quiz(f, app, area),
    }
}

fn draw_empty(f: &mut Frame, area: Rect) {
    let message = Paragraph::new("No deck yet. Press e to add word,definition pairs.")
        .style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, area);
}
