use crate::editor::DeckEditor;
use crate::ui::key_hint;
use crate::ui::layout::centered_rect;
use crate::utils::calculate_wrapped_cursor_position;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn draw_deck_editor(f: &mut Frame, editor: &mut DeckEditor) {
    let area = centered_rect(80, 80, f.area());
    f.render_widget(Clear, area);

    let outer = Block::default()
        .borders(Borders::ALL)
        .title(" Edit Flashcard Deck ")
        .border_style(Style::default().fg(Color::Cyan));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let intro = Paragraph::new(
        "Edit the word and definition pairs below, separated by a comma on each line.",
    )
    .style(Style::default().fg(Color::Gray))
    .wrap(Wrap { trim: true });
    f.render_widget(intro, chunks[0]);

    let text_area = chunks[1];
    let visible_height = text_area.height.saturating_sub(2) as usize;
    let text_width = text_area.width.saturating_sub(2) as usize;
    let (cursor_line, cursor_col) =
        calculate_wrapped_cursor_position(&editor.text, editor.cursor, text_width);

    // Keep the cursor line on screen.
    let mut scroll = editor.scroll_y as usize;
    if cursor_line < scroll {
        scroll = cursor_line;
    } else if visible_height > 0 && cursor_line >= scroll + visible_height {
        scroll = cursor_line + 1 - visible_height;
    }
    editor.scroll_y = scroll as u16;

    let content = if editor.text.is_empty() {
        let placeholder = Style::default().fg(Color::DarkGray);
        Text::from(vec![
            Line::styled("word,definition", placeholder),
            Line::styled("another word,another definition", placeholder),
        ])
    } else {
        Text::from(editor.text.as_str())
    };
    let input = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .scroll((editor.scroll_y, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(input, text_area);

    let cursor_x = text_area.x + 1 + cursor_col as u16;
    let cursor_y = text_area.y + 1 + (cursor_line as u16).saturating_sub(editor.scroll_y);
    f.set_cursor_position((cursor_x, cursor_y));

    let mut help_spans = Vec::new();
    help_spans.extend(key_hint("Ctrl+S", " Save Deck  "));
    help_spans.extend(key_hint("Esc", " Cancel  "));
    help_spans.extend(key_hint("Enter", " New Line"));
    let help = Paragraph::new(Line::from(help_spans))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

pub fn draw_alert(f: &mut Frame, message: &str) {
    let area = centered_rect(50, 30, f.area());
    f.render_widget(Clear, area);

    let mut text = Text::default();
    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        message.to_string(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    text.push_line(Line::from(""));
    text.push_line(Line::from(key_hint("Enter", " OK").to_vec()));

    let alert = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Invalid Size ")
                .border_style(Style::default().fg(Color::Red)),
        );
    f.render_widget(alert, area);
}
