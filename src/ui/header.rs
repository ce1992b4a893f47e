use crate::app::App;
use crate::game::Board;
use crate::models::GameMode;
use crate::ui::key_hint;
use crate::utils::format_elapsed;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::time::{Duration, Instant, UNIX_EPOCH};

const DATE_FORMAT_TODAY: &str = "Today %H:%M";
const DATE_FORMAT_YESTERDAY: &str = "Yesterday %H:%M";
const DATE_FORMAT_OTHER: &str = "%Y-%m-%d";

pub fn format_saved_at(timestamp: i64) -> String {
    let saved = UNIX_EPOCH + Duration::from_secs(timestamp.max(0) as u64);
    let datetime: chrono::DateTime<chrono::Local> = saved.into();

    let today = chrono::Local::now().date_naive();
    let saved_date = datetime.date_naive();

    if saved_date == today {
        datetime.format(DATE_FORMAT_TODAY).to_string()
    } else if saved_date == today - chrono::Duration::days(1) {
        datetime.format(DATE_FORMAT_YESTERDAY).to_string()
    } else {
        datetime.format(DATE_FORMAT_OTHER).to_string()
    }
}

/// The line under the title: the completion banner once a round is over,
/// progress otherwise.
pub fn status_line(app: &App, now: Instant) -> String {
    let game = &app.game;
    if matches!(game.board(), Board::Empty) {
        return "Add some cards to start playing".to_string();
    }

    let quiz_mode = game.quiz().is_some();
    if game.is_complete() {
        return if quiz_mode {
            format!(
                "🎉 Game completed! Final Score: {} / {}",
                game.score(),
                game.pairs_in_play()
            )
        } else {
            format!(
                "🎉 Game completed! Time: {} seconds!",
                format_elapsed(game.elapsed(now))
            )
        };
    }

    match game.quiz() {
        Some(quiz) => format!(
            "Word {} / {}  Score: {}  Time: {}s",
            (quiz.index + 1).min(quiz.deck.len()),
            quiz.deck.len(),
            game.score(),
            format_elapsed(game.elapsed(now))
        ),
        None => format!(
            "Matched {} / {}  Time: {}s",
            game.score(),
            game.pairs_in_play(),
            format_elapsed(game.elapsed(now))
        ),
    }
}

pub fn draw_header(f: &mut Frame, app: &App, now: Instant, area: Rect) {
    let status_style = if app.game.is_complete() {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let lines = vec![
        Line::from(Span::styled(
            "Flashcard Match Game",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(status_line(app, now), status_style)),
    ];

    let header = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

pub fn draw_settings(f: &mut Frame, app: &App, area: Rect) {
    let settings = app.settings();
    let value_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![
        Span::from("Mode: "),
        Span::styled(settings.game_mode.label(), value_style),
    ];
    if settings.game_mode == GameMode::Grid {
        spans.push(Span::from("   Columns: "));
        spans.push(Span::styled(settings.grid_cols.to_string(), value_style));
    }
    if settings.game_mode.is_pair_matching() {
        spans.push(Span::from("   Rows: "));
        spans.push(Span::styled(settings.grid_rows.to_string(), value_style));
    }
    spans.push(Span::from(format!("   Deck: {} pairs", app.pairs.len())));
    if let Some(ts) = app.saved_at {
        spans.push(Span::styled(
            format!("   Saved {}", format_saved_at(ts)),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let bar = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Settings"));
    f.render_widget(bar, area);
}

pub fn draw_help(f: &mut Frame, app: &App, area: Rect) {
    let settings = app.settings();
    let mut spans = Vec::new();
    spans.extend(key_hint("Arrows", " Move  "));
    if settings.game_mode == GameMode::MultipleChoice {
        spans.extend(key_hint("Enter/1-4", " Answer  "));
    } else {
        spans.extend(key_hint("Enter", " Pick  "));
    }
    spans.extend(key_hint("m", " Mode  "));
    if settings.game_mode == GameMode::Grid {
        spans.extend(key_hint("c/C", " Cols  "));
    }
    if settings.game_mode.is_pair_matching() {
        spans.extend(key_hint("r/R", " Rows  "));
    }
    spans.extend(key_hint("n", " Restart  "));
    spans.extend(key_hint("e", " Edit Deck  "));
    spans.extend(key_hint("q", " Quit"));

    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}
