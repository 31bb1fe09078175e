use serde::{Deserialize, Serialize};

/// A closed set of options offered by a select field.
pub trait Choice: Sized + Copy + PartialEq + 'static {
    /// Every option, in display order.
    const ALL: &'static [Self];

    /// The exact string shown in the form and sent on the wire.
    fn as_str(self) -> &'static str;

    fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == s)
    }

    /// Returns the option `step` places away from `current`, wrapping around.
    ///
    /// An unknown `current` starts from the first option.
    fn cycle(current: &str, step: isize) -> Self {
        let len = Self::ALL.len() as isize;
        let idx = Self::ALL
            .iter()
            .position(|c| c.as_str() == current)
            .map_or(0, |i| (i as isize + step).rem_euclid(len));
        Self::ALL[idx as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Contract {
    #[serde(rename = "Month-to-month")]
    MonthToMonth,
    #[serde(rename = "One year")]
    OneYear,
    #[serde(rename = "Two year")]
    TwoYear,
}

impl Choice for Contract {
    const ALL: &'static [Self] = &[Self::MonthToMonth, Self::OneYear, Self::TwoYear];

    fn as_str(self) -> &'static str {
        match self {
            Self::MonthToMonth => "Month-to-month",
            Self::OneYear => "One year",
            Self::TwoYear => "Two year",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperlessBilling {
    Yes,
    No,
}

impl Choice for PaperlessBilling {
    const ALL: &'static [Self] = &[Self::Yes, Self::No];

    fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Electronic check")]
    ElectronicCheck,
    #[serde(rename = "Mailed check")]
    MailedCheck,
    #[serde(rename = "Bank transfer")]
    BankTransfer,
    #[serde(rename = "Credit card")]
    CreditCard,
}

impl Choice for PaymentMethod {
    const ALL: &'static [Self] = &[
        Self::ElectronicCheck,
        Self::MailedCheck,
        Self::BankTransfer,
        Self::CreditCard,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::ElectronicCheck => "Electronic check",
            Self::MailedCheck => "Mailed check",
            Self::BankTransfer => "Bank transfer",
            Self::CreditCard => "Credit card",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Choice for Gender {
    const ALL: &'static [Self] = &[Self::Male, Self::Female];

    fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}
