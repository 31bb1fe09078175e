use predictor::{form::Field, PredictSession};

use super::model::{FieldKind, FieldRow, FormView};

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// Drives the form screen: focus, widget constraints and the prediction session.
pub struct FormState {
    session: PredictSession,
    endpoint: String,
    focus: usize,
    hint: Option<String>,
    ticks: usize,
}

impl FormState {
    /// Creates a new `FormState` with focus on the first field.
    ///
    /// # Args
    /// * `session` - The session holding the form values and the request in flight.
    /// * `endpoint` - Base URL shown in the header.
    pub fn new(session: PredictSession, endpoint: String) -> Self {
        Self {
            session,
            endpoint,
            focus: 0,
            hint: None,
            ticks: 0,
        }
    }

    /// Returns the current snapshot for rendering.
    pub fn view(&self) -> FormView {
        let rows = self
            .session
            .form()
            .fields()
            .enumerate()
            .map(|(i, (field, value))| FieldRow {
                field,
                label: field.label(),
                value: value.to_string(),
                kind: match field.options() {
                    Some(options) => FieldKind::Select { options },
                    None => FieldKind::Numeric,
                },
                active: i == self.focus,
            })
            .collect();

        FormView {
            endpoint: self.endpoint.clone(),
            rows,
            loading: self.session.is_loading(),
            spinner: SPINNER[self.ticks % SPINNER.len()],
            result: self.session.result().cloned(),
            notice: self.session.notice().cloned(),
            hint: self.hint.clone(),
        }
    }

    /// Picks up a finished request. Non-blocking.
    ///
    /// Should be called once per TUI frame tick.
    pub fn tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
        self.session.poll();
    }

    pub fn focused(&self) -> Field {
        Field::ALL[self.focus]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % Field::ALL.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + Field::ALL.len() - 1) % Field::ALL.len();
    }

    pub fn type_char(&mut self, c: char) {
        let field = self.focused();
        if self.session.form_mut().push_char(field, c) {
            self.hint = None;
        }
    }

    pub fn backspace(&mut self) {
        let field = self.focused();
        if self.session.form_mut().pop_char(field) {
            self.hint = None;
        }
    }

    pub fn cycle(&mut self, step: isize) {
        let field = self.focused();
        self.session.form_mut().cycle(field, step);
    }

    /// Submits unless the widgets refuse or a request is already in flight.
    ///
    /// # Returns
    /// Whether a request was started.
    pub fn submit(&mut self) -> bool {
        if self.session.is_loading() {
            return false;
        }

        if let Some((field, msg)) = self.session.form().constraint_violation() {
            self.focus = Field::ALL.iter().position(|f| *f == field).unwrap_or(0);
            self.hint = Some(format!("{}: {msg}", field.label()));
            return false;
        }

        self.hint = None;
        self.session.submit()
    }

    pub fn has_notice(&self) -> bool {
        self.session.notice().is_some()
    }

    pub fn dismiss_notice(&mut self) {
        self.session.dismiss_notice();
    }

    #[cfg(test)]
    pub fn session(&self) -> &PredictSession {
        &self.session
    }
}
