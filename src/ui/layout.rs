use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct PlayLayout {
    pub header_area: Rect,
    pub settings_area: Rect,
    pub board_area: Rect,
    pub help_area: Rect,
}

pub struct QuizLayout {
    pub word_area: Rect,
    pub choice_areas: Vec<Rect>,
}

pub fn calculate_play_chunks(area: Rect) -> PlayLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    PlayLayout {
        header_area: chunks[0],
        settings_area: chunks[1],
        board_area: chunks[2],
        help_area: chunks[3],
    }
}

/// Splits `area` into `count` cells laid out `cols` per row, row-major.
pub fn calculate_grid_cells(area: Rect, cols: usize, count: usize) -> Vec<Rect> {
    if count == 0 || cols == 0 {
        return Vec::new();
    }
    let rows = count.div_ceil(cols);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(area);

    let mut cells = Vec::with_capacity(count);
    for row_area in row_areas.iter() {
        let row_cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, cols as u32); cols])
            .split(*row_area);
        cells.extend(row_cells.iter().copied());
    }
    cells.truncate(count);
    cells
}

/// Two equal columns of `rows` cells each.
pub fn calculate_column_cells(area: Rect, rows: usize) -> (Vec<Rect>, Vec<Rect>) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    (
        calculate_grid_cells(halves[0], 1, rows),
        calculate_grid_cells(halves[1], 1, rows),
    )
}

pub fn calculate_quiz_chunks(area: Rect, choices: usize) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    QuizLayout {
        word_area: chunks[0],
        choice_areas: calculate_grid_cells(chunks[1], 2, choices),
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
