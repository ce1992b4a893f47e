use crate::app::{App, FocusMove};
use crate::models::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.state {
        AppState::Play => handle_play_key(app, key, now),
        AppState::DeckEditor => handle_editor_key(app, key, now),
        AppState::Alert => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                app.dismiss_alert();
            }
        }
    }
}

fn handle_play_key(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Up | KeyCode::Char('k') => app.move_focus(FocusMove::Up),
        KeyCode::Down | KeyCode::Char('j') => app.move_focus(FocusMove::Down),
        KeyCode::Left | KeyCode::Char('h') => app.move_focus(FocusMove::Left),
        KeyCode::Right | KeyCode::Char('l') => app.move_focus(FocusMove::Right),
        KeyCode::Enter | KeyCode::Char(' ') => app.select_focused(now),
        KeyCode::Char(c @ '1'..='4') => {
            let id = c as usize - '1' as usize;
            if app.game.quiz().is_some() {
                app.focus = id.min(app.focus_len().saturating_sub(1));
                app.select_choice(id, now);
            }
        }
        KeyCode::Char('m') => app.cycle_mode(now),
        KeyCode::Char('c') => app.step_cols(1, now),
        KeyCode::Char('C') => app.step_cols(-1, now),
        KeyCode::Char('r') => app.step_rows(1, now),
        KeyCode::Char('R') => app.step_rows(-1, now),
        KeyCode::Char('n') => app.restart(now),
        KeyCode::Char('e') => app.open_editor(),
        _ => {}
    }
}

fn handle_editor_key(app: &mut App, key: KeyEvent, now: Instant) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('s') {
            app.save_deck(now);
        }
        return;
    }

    if key.code == KeyCode::Esc {
        app.close_editor();
        return;
    }

    let editor = &mut app.editor;
    match key.code {
        KeyCode::Enter => editor.newline(),
        KeyCode::Backspace => editor.backspace(),
        KeyCode::Delete => editor.delete(),
        KeyCode::Left => editor.move_left(),
        KeyCode::Right => editor.move_right(),
        KeyCode::Up => editor.move_up(),
        KeyCode::Down => editor.move_down(),
        KeyCode::Home => editor.move_line_start(),
        KeyCode::End => editor.move_line_end(),
        KeyCode::Char(c) => editor.insert_char(c),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::game::Game;
    use crate::models::{GameMode, Pair, Settings};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app_with_deck(n: usize) -> App {
        let mut app = App::new(
            Box::new(MemoryStore::new()),
            Game::with_rng(Settings::default(), StdRng::seed_from_u64(3)),
        );
        let pairs = (0..n)
            .map(|i| Pair::new(format!("w{}", i), format!("d{}", i)))
            .collect();
        app.replace_deck(pairs, Instant::now());
        app
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app_with_deck(2);
        handle_key(&mut app, key(KeyCode::Char('q')), Instant::now());
        assert!(app.should_quit);

        let mut app = app_with_deck(2);
        handle_key(&mut app, ctrl('c'), Instant::now());
        assert!(app.should_quit);
    }

    #[test]
    fn test_edit_type_and_save() {
        let mut app = app_with_deck(0);
        let now = Instant::now();
        handle_key(&mut app, key(KeyCode::Char('e')), now);
        assert_eq!(app.state, AppState::DeckEditor);

        for c in "sun,a star".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)), now);
        }
        handle_key(&mut app, key(KeyCode::Enter), now);
        for c in "moon,a satellite".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)), now);
        }
        // Command letters are plain text inside the editor.
        assert!(!app.should_quit);

        handle_key(&mut app, ctrl('s'), now);
        assert_eq!(app.state, AppState::Play);
        assert_eq!(
            app.pairs,
            vec![Pair::new("sun", "a star"), Pair::new("moon", "a satellite")]
        );
        assert_eq!(app.game.pairs_in_play(), 2);
    }

    #[test]
    fn test_editor_escape_discards() {
        let mut app = app_with_deck(2);
        handle_key(&mut app, key(KeyCode::Char('e')), Instant::now());
        handle_key(&mut app, key(KeyCode::Backspace), Instant::now());
        handle_key(&mut app, key(KeyCode::Esc), Instant::now());

        assert_eq!(app.state, AppState::Play);
        assert_eq!(app.pairs.len(), 2);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_editor_arrow_keys_move_between_lines() {
        let mut app = app_with_deck(2);
        handle_key(&mut app, key(KeyCode::Char('e')), Instant::now());
        assert_eq!(app.editor.text, "w0,d0\nw1,d1");

        handle_key(&mut app, key(KeyCode::Up), Instant::now());
        assert_eq!(app.editor.cursor, 5);
        handle_key(&mut app, key(KeyCode::Char('x')), Instant::now());
        handle_key(&mut app, key(KeyCode::Down), Instant::now());
        assert_eq!(app.editor.cursor, app.editor.text.len());
        assert_eq!(app.editor.text, "w0,d0x\nw1,d1");
    }

    #[test]
    fn test_mode_key_cycles() {
        let mut app = app_with_deck(5);
        handle_key(&mut app, key(KeyCode::Char('m')), Instant::now());
        assert_eq!(app.settings().game_mode, GameMode::Column);
    }

    #[test]
    fn test_alert_swallows_keys_until_dismissed() {
        let mut app = app_with_deck(10);
        let now = Instant::now();
        handle_key(&mut app, key(KeyCode::Char('C')), now);
        assert_eq!(app.settings().grid_cols, 3);
        handle_key(&mut app, key(KeyCode::Char('r')), now);
        assert_eq!(app.state, AppState::Alert);

        handle_key(&mut app, key(KeyCode::Char('q')), now);
        assert!(!app.should_quit);
        assert_eq!(app.state, AppState::Alert);

        handle_key(&mut app, key(KeyCode::Enter), now);
        assert_eq!(app.state, AppState::Play);
        assert_eq!(app.settings().grid_rows, 4);
    }

    #[test]
    fn test_number_keys_answer_quiz() {
        let mut app = app_with_deck(5);
        let now = Instant::now();
        app.change_mode(GameMode::MultipleChoice, now);

        handle_key(&mut app, key(KeyCode::Char('2')), now);
        assert_eq!(app.focus, 1);
        assert!(app.game.quiz_choices()[1].status.is_some());
    }

    #[test]
    fn test_number_keys_ignored_on_board() {
        let mut app = app_with_deck(5);
        handle_key(&mut app, key(KeyCode::Char('3')), Instant::now());
        assert_eq!(app.focus, 0);
        assert!(app.game.selected().is_empty());
    }
}
