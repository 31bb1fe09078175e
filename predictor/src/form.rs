//! Form state holder: the current text of every field, in display order.

use crate::api::choices::{Choice, Contract, Gender, PaperlessBilling, PaymentMethod};

/// Smallest value the numeric inputs accept before submission.
pub const NUMERIC_MIN: u64 = 1;

/// Reads numeric text the way a number input reports it: blank counts as zero.
pub fn whole_number(value: &str) -> Option<u64> {
    let value = value.trim();
    if value.is_empty() {
        return Some(0);
    }
    value.parse().ok()
}

/// One input of the contract form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Contract,
    PaperlessBilling,
    PaymentMethod,
    Tenure,
    Gender,
    Age,
}

impl Field {
    /// Every field, in display order.
    pub const ALL: [Field; 6] = [
        Field::Contract,
        Field::PaperlessBilling,
        Field::PaymentMethod,
        Field::Tenure,
        Field::Gender,
        Field::Age,
    ];

    /// The name the form uses for this field.
    pub fn name(self) -> &'static str {
        match self {
            Self::Contract => "contract",
            Self::PaperlessBilling => "paperlessBilling",
            Self::PaymentMethod => "paymentMethod",
            Self::Tenure => "tenure",
            Self::Gender => "gender",
            Self::Age => "age",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Contract => "Contract",
            Self::PaperlessBilling => "Paperless Billing",
            Self::PaymentMethod => "Payment Method",
            Self::Tenure => "Tenure (months)",
            Self::Gender => "Gender",
            Self::Age => "Age",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Tenure | Self::Age)
    }

    /// The fixed options of a select field, `None` for numeric fields.
    pub fn options(self) -> Option<Vec<&'static str>> {
        fn names<C: Choice>() -> Vec<&'static str> {
            C::ALL.iter().map(|c| c.as_str()).collect()
        }

        match self {
            Self::Contract => Some(names::<Contract>()),
            Self::PaperlessBilling => Some(names::<PaperlessBilling>()),
            Self::PaymentMethod => Some(names::<PaymentMethod>()),
            Self::Gender => Some(names::<Gender>()),
            Self::Tenure | Self::Age => None,
        }
    }

    /// Whether the input widget lets `c` be typed into this field.
    ///
    /// Numeric inputs take digits only, select fields take no text at all.
    pub fn accepts_char(self, c: char) -> bool {
        self.is_numeric() && c.is_ascii_digit()
    }

    /// Returns the option `step` places away from `current` for select fields.
    pub fn cycle(self, current: &str, step: isize) -> Option<&'static str> {
        match self {
            Self::Contract => Some(Contract::cycle(current, step).as_str()),
            Self::PaperlessBilling => Some(PaperlessBilling::cycle(current, step).as_str()),
            Self::PaymentMethod => Some(PaymentMethod::cycle(current, step).as_str()),
            Self::Gender => Some(Gender::cycle(current, step).as_str()),
            Self::Tenure | Self::Age => None,
        }
    }
}

/// The text currently held by each field of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormData {
    pub contract: String,
    pub paperless_billing: String,
    pub payment_method: String,
    pub tenure: String,
    pub gender: String,
    pub age: String,
}

impl Default for FormData {
    fn default() -> Self {
        Self {
            contract: Contract::MonthToMonth.as_str().to_string(),
            paperless_billing: PaperlessBilling::No.as_str().to_string(),
            payment_method: PaymentMethod::ElectronicCheck.as_str().to_string(),
            tenure: "2".to_string(),
            gender: Gender::Male.as_str().to_string(),
            age: "30".to_string(),
        }
    }
}

impl FormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Contract => &self.contract,
            Field::PaperlessBilling => &self.paperless_billing,
            Field::PaymentMethod => &self.payment_method,
            Field::Tenure => &self.tenure,
            Field::Gender => &self.gender,
            Field::Age => &self.age,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Contract => &mut self.contract,
            Field::PaperlessBilling => &mut self.paperless_billing,
            Field::PaymentMethod => &mut self.payment_method,
            Field::Tenure => &mut self.tenure,
            Field::Gender => &mut self.gender,
            Field::Age => &mut self.age,
        }
    }

    /// Replaces the value of one field, leaving every other field untouched.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    /// Appends a typed character if the field's widget accepts it.
    ///
    /// # Returns
    /// Whether the value changed.
    pub fn push_char(&mut self, field: Field, c: char) -> bool {
        if !field.accepts_char(c) {
            return false;
        }
        self.slot(field).push(c);
        true
    }

    /// Removes the last typed character of a numeric field.
    pub fn pop_char(&mut self, field: Field) -> bool {
        field.is_numeric() && self.slot(field).pop().is_some()
    }

    /// Moves a select field to a neighbouring option.
    pub fn cycle(&mut self, field: Field, step: isize) -> bool {
        let Some(next) = field.cycle(self.get(field), step) else {
            return false;
        };
        self.set_field(field, next);
        true
    }

    /// Iterates `(field, value)` pairs in display order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.into_iter().map(move |f| (f, self.get(f)))
    }

    /// Checks the constraints a numeric input enforces before it lets the form submit.
    ///
    /// Empty values pass, as an empty number input does.
    ///
    /// # Returns
    /// The first offending field and the message to show, if any.
    pub fn constraint_violation(&self) -> Option<(Field, String)> {
        Field::ALL
            .into_iter()
            .filter(|f| f.is_numeric())
            .find_map(|f| {
                let value = self.get(f);
                if value.trim().is_empty() {
                    return None;
                }
                match whole_number(value) {
                    Some(n) if n >= NUMERIC_MIN => None,
                    Some(_) => Some((
                        f,
                        format!("Value must be greater than or equal to {NUMERIC_MIN}."),
                    )),
                    None => Some((f, "Please enter a number.".to_string())),
                }
            })
    }
}
