pub mod board;
pub mod header;
pub mod layout;
mod popup;
mod quiz;

use crate::app::App;
use crate::models::AppState;
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::Span,
};
use std::time::Instant;

pub use board::draw_board;
pub use header::{draw_header, draw_help, draw_settings, format_saved_at};
pub use layout::calculate_play_chunks;
pub use popup::{draw_alert, draw_deck_editor};

pub fn draw(f: &mut Frame, app: &mut App, now: Instant) {
    let layout = calculate_play_chunks(f.area());

    draw_header(f, app, now, layout.header_area);
    draw_settings(f, app, layout.settings_area);
    draw_board(f, app, layout.board_area);
    draw_help(f, app, layout.help_area);

    match app.state {
        AppState::Play => {}
        AppState::DeckEditor => draw_deck_editor(f, &mut app.editor),
        AppState::Alert => {
            if let Some(message) = app.alert.as_deref() {
                draw_alert(f, message);
            }
        }
    }
}

pub(crate) fn key_hint(key: &'static str, label: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(
            key,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(label),
    ]
}
