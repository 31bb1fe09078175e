use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of one bordered input row.
pub const FIELD_HEIGHT: u16 = 3;

/// Regions of the form card.
pub struct FormLayout {
    pub header: Rect,
    pub fields: Vec<Rect>,
    pub button: Rect,
    pub hint: Rect,
    pub result: Rect,
    pub keys: Rect,
}

/// Computes the form card regions inside `area`.
pub fn form(area: Rect, field_count: usize) -> FormLayout {
    let card = centered_column(70, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(field_count as u16 * FIELD_HEIGHT),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .split(card);

    let fields = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            (0..field_count)
                .map(|_| Constraint::Length(FIELD_HEIGHT))
                .collect::<Vec<_>>(),
        )
        .split(chunks[1])
        .to_vec();

    FormLayout {
        header: chunks[0],
        fields,
        button: chunks[2],
        hint: chunks[3],
        result: chunks[4],
        keys: chunks[5],
    }
}

/// Splits the result panel into (text, gauge).
pub fn result(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(3)])
        .split(area);

    (rows[0], rows[1])
}

fn centered_column(percent_x: u16, r: Rect) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(r)[1]
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    centered_column(percent_x, vert[1])
}
