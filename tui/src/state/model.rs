use predictor::{api::PredictionResult, form::Field, Notice};

/// How a row is edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Select { options: Vec<&'static str> },
    Numeric,
}

/// One form row as rendered.
#[derive(Debug, Clone)]
pub struct FieldRow {
    pub field: Field,
    pub label: &'static str,
    pub value: String,
    pub kind: FieldKind,
    pub active: bool,
}

/// Full snapshot rendered by the TUI.
#[derive(Debug, Clone)]
pub struct FormView {
    pub endpoint: String,
    pub rows: Vec<FieldRow>,
    pub loading: bool,
    pub spinner: char,
    pub result: Option<PredictionResult>,
    pub notice: Option<Notice>,
    /// Message from an input widget that refused to submit.
    pub hint: Option<String>,
}
