use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

use predictor::{api::PredictionResult, Notice};

use crate::state::model::{FieldKind, FieldRow, FormView};

use super::theme::Theme;

pub fn header(view: &FormView) -> Paragraph<'_> {
    let lines = vec![
        Line::from(Span::styled("Customer Contract", Theme::title())),
        Line::from(Span::styled(
            "Enter contract details to predict churn risk",
            Theme::dim(),
        )),
        Line::from(Span::styled(format!("API: {}", view.endpoint), Theme::muted())),
    ];

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}

pub fn field_row(row: &FieldRow) -> Paragraph<'_> {
    let border = if row.active {
        Theme::border_active()
    } else {
        Theme::border()
    };

    let value = match &row.kind {
        FieldKind::Select { options } => {
            let arrow = if row.active { Theme::accent() } else { Theme::muted() };
            let position = options
                .iter()
                .position(|o| *o == row.value)
                .map_or_else(|| "-".to_string(), |i| (i + 1).to_string());
            Line::from(vec![
                Span::styled("◀ ", arrow),
                Span::styled(row.value.as_str(), Theme::text()),
                Span::styled(" ▶", arrow),
                Span::styled(format!("  {position}/{}", options.len()), Theme::muted()),
            ])
        }
        FieldKind::Numeric if row.value.is_empty() => {
            let mut spans = vec![Span::styled(
                format!("Enter {}", row.field.name()),
                Theme::muted(),
            )];
            if row.active {
                spans.insert(0, Span::styled("█", Theme::accent()));
            }
            Line::from(spans)
        }
        FieldKind::Numeric => {
            let mut spans = vec![Span::styled(row.value.as_str(), Theme::text())];
            if row.active {
                spans.push(Span::styled("█", Theme::accent()));
            }
            Line::from(spans)
        }
    };

    Paragraph::new(value).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" {} ", row.label))
            .title_style(if row.active { Theme::accent() } else { Theme::dim() }),
    )
}

pub fn submit_button(view: &FormView) -> Paragraph<'static> {
    let (label, style) = if view.loading {
        (format!("{} Processing...", view.spinner), Theme::button_disabled())
    } else {
        ("PREDICT CHURN RISK".to_string(), Theme::button())
    };

    Paragraph::new(Line::from(Span::styled(label, style)))
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(style))
}

pub fn hint(view: &FormView) -> Paragraph<'_> {
    let line = match &view.hint {
        Some(h) => Line::from(Span::styled(h.as_str(), Theme::error())),
        None => Line::from(""),
    };

    Paragraph::new(line).alignment(Alignment::Center)
}

pub fn result_panel(result: &PredictionResult) -> Paragraph<'_> {
    let high = result.is_likely_to_churn;
    let (verdict, sentence) = if high {
        ("High Churn Risk!", "This customer is likely to churn.")
    } else {
        ("Low Churn Risk", "This customer is unlikely to churn.")
    };

    let mut lines = vec![
        Line::from(Span::styled(verdict, Theme::risk(high))),
        Line::from(Span::styled(sentence, Theme::text())),
        Line::from(vec![
            Span::styled("Confidence Score  ", Theme::dim()),
            Span::styled(format!("{:.8}", result.confidence), Theme::title()),
        ]),
    ];

    if let Some(msg) = &result.message {
        lines.push(Line::from(Span::styled(msg.as_str(), Theme::muted())));
    }

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::risk(high))
                .title(" Prediction "),
        )
}

pub fn confidence_gauge(result: &PredictionResult) -> Gauge<'static> {
    let pct = result.confidence_percent();

    Gauge::default()
        .block(Block::default().borders(Borders::ALL).border_style(Theme::border()))
        .gauge_style(Theme::risk(result.is_likely_to_churn))
        .ratio(pct / 100.0)
        .label(format!("{pct:.1}%"))
}

pub fn empty_result() -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        "Submit the form to see the churn prediction.",
        Theme::muted(),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border())
            .title(" Prediction "),
    )
}

pub fn notice_modal(notice: &Notice) -> Paragraph<'_> {
    let title = if notice.server_reported {
        " Server Error "
    } else {
        " Error "
    };

    Paragraph::new(vec![
        Line::from(Span::styled(notice.message.as_str(), Theme::text())),
        Line::from(""),
        Line::from(Span::styled("press any key", Theme::muted())),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .style(Theme::base())
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::error())
            .title(title)
            .title_style(Theme::error()),
    )
}

pub fn keys() -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled("↑↓ / tab", Theme::dim()),
        Span::styled("  field    ", Theme::muted()),
        Span::styled("←→", Theme::dim()),
        Span::styled("  option    ", Theme::muted()),
        Span::styled("enter", Theme::dim()),
        Span::styled("  predict    ", Theme::muted()),
        Span::styled("q / esc", Theme::dim()),
        Span::styled("  quit", Theme::muted()),
    ]))
    .alignment(Alignment::Center)
}
