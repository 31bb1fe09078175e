use ratatui::{
    widgets::{Block, Clear},
    Frame,
};

use crate::state::model::FormView;

use super::{layout, theme::Theme, widgets};

/// Draws the entire UI.
pub fn draw(f: &mut Frame, view: &FormView) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let l = layout::form(area, view.rows.len());

    f.render_widget(widgets::header(view), l.header);

    for (row, rect) in view.rows.iter().zip(l.fields.iter()) {
        f.render_widget(widgets::field_row(row), *rect);
    }

    f.render_widget(widgets::submit_button(view), l.button);
    f.render_widget(widgets::hint(view), l.hint);

    match &view.result {
        Some(result) => {
            let (text, gauge) = layout::result(l.result);
            f.render_widget(widgets::result_panel(result), text);
            f.render_widget(widgets::confidence_gauge(result), gauge);
        }
        None => f.render_widget(widgets::empty_result(), l.result),
    }

    f.render_widget(widgets::keys(), l.keys);

    if let Some(notice) = &view.notice {
        let modal = layout::centered_rect(50, 25, area);
        f.render_widget(Clear, modal);
        f.render_widget(widgets::notice_modal(notice), modal);
    }
}
