use crate::app::App;
use crate::models::{ChoiceStatus, QuizChoice};
use crate::ui::board::fit_to_cell;
use crate::ui::layout::calculate_quiz_chunks;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn draw_quiz(f: &mut Frame, app: &App, area: Rect) {
    let Some(quiz) = app.game.quiz() else {
        return;
    };
    // The banner in the header takes over once the deck is used up.
    let Some(current) = quiz.current.as_ref().filter(|_| !app.game.is_complete()) else {
        return;
    };

    let layout = calculate_quiz_chunks(area, quiz.choices.len());

    let mut word_text = Text::default();
    word_text.push_line(Line::from(""));
    word_text.push_line(Line::from(Span::styled(
        current.word.as_str(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    let word = Paragraph::new(word_text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Word {} / {} ", quiz.index + 1, quiz.deck.len()))
                .border_style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(word, layout.word_area);

    for (choice, cell) in quiz.choices.iter().zip(layout.choice_areas) {
        draw_choice(f, cell, choice, choice.id == app.focus);
    }
}

fn draw_choice(f: &mut Frame, area: Rect, choice: &QuizChoice, focused: bool) {
    let (border, text_style) = match choice.status {
        Some(ChoiceStatus::Correct) => (
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Black).bg(Color::Green),
        ),
        Some(ChoiceStatus::Incorrect) => (
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            Style::default().fg(Color::White).bg(Color::Red),
        ),
        None if focused => (
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            Style::default().fg(Color::White),
        ),
        None => (Style::default().fg(Color::Gray), Style::default().fg(Color::White)),
    };

    let title = if focused {
        format!(" > {} ", choice.id + 1)
    } else {
        format!(" {} ", choice.id + 1)
    };

    let widget = Paragraph::new(fit_to_cell(&choice.content, area))
        .style(text_style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(border),
        );
    f.render_widget(widget, area);
}
