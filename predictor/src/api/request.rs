use serde::Serialize;

use super::choices::{Choice, Contract, Gender, PaperlessBilling, PaymentMethod};
use crate::{
    error::PredictError,
    form::{self, Field, FormData},
};

/// Body of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictRequest {
    #[serde(rename = "Contract")]
    pub contract: Contract,
    #[serde(rename = "PaperlessBilling")]
    pub paperless_billing: PaperlessBilling,
    pub tenure: u64,
    #[serde(rename = "PaymentMethod")]
    pub payment_method: PaymentMethod,
    #[serde(rename = "Gender")]
    pub gender: Gender,
    #[serde(rename = "Age")]
    pub age: u64,
}

impl TryFrom<&FormData> for PredictRequest {
    type Error = PredictError;

    fn try_from(form: &FormData) -> Result<Self, Self::Error> {
        Ok(Self {
            contract: choice(form, Field::Contract)?,
            paperless_billing: choice(form, Field::PaperlessBilling)?,
            tenure: number(form, Field::Tenure)?,
            payment_method: choice(form, Field::PaymentMethod)?,
            gender: choice(form, Field::Gender)?,
            age: number(form, Field::Age)?,
        })
    }
}

impl PredictRequest {
    pub fn to_json(&self) -> Result<Vec<u8>, PredictError> {
        Ok(serde_json::to_vec(self)?)
    }
}

fn choice<C: Choice>(form: &FormData, field: Field) -> Result<C, PredictError> {
    let value = form.get(field);
    C::parse(value).ok_or_else(|| PredictError::InvalidForm {
        field: field.name(),
        value: value.to_string(),
    })
}

fn number(form: &FormData, field: Field) -> Result<u64, PredictError> {
    let value = form.get(field);
    form::whole_number(value).ok_or_else(|| PredictError::InvalidForm {
        field: field.name(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    #[test]
    fn body_uses_the_service_key_names_and_types() {
        let req = PredictRequest::try_from(&FormData::default()).unwrap();
        let body: Value = serde_json::from_slice(&req.to_json().unwrap()).unwrap();

        assert_eq!(
            body,
            json!({
                "Contract": "Month-to-month",
                "PaperlessBilling": "No",
                "tenure": 2,
                "PaymentMethod": "Electronic check",
                "Gender": "Male",
                "Age": 30,
            })
        );
        assert!(body["tenure"].is_u64());
        assert!(body["Age"].is_u64());
    }

    #[test]
    fn every_option_combination_serializes_to_the_schema() {
        let mut form = FormData::default();
        for contract in Contract::ALL {
            for method in PaymentMethod::ALL {
                form.set_field(Field::Contract, contract.as_str());
                form.set_field(Field::PaymentMethod, method.as_str());
                form.set_field(Field::Tenure, "71");

                let req = PredictRequest::try_from(&form).unwrap();
                let body: Value = serde_json::from_slice(&req.to_json().unwrap()).unwrap();
                let obj = body.as_object().unwrap();

                let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
                keys.sort_unstable();
                assert_eq!(
                    keys,
                    ["Age", "Contract", "Gender", "PaperlessBilling", "PaymentMethod", "tenure"]
                );
                assert_eq!(obj["Contract"], contract.as_str());
                assert_eq!(obj["PaymentMethod"], method.as_str());
                assert_eq!(obj["tenure"], 71);
            }
        }
    }

    #[test]
    fn blank_numeric_field_is_sent_as_zero() {
        let mut form = FormData::default();
        form.set_field(Field::Tenure, "");
        let req = PredictRequest::try_from(&form).unwrap();
        assert_eq!(req.tenure, 0);
    }

    #[test]
    fn values_past_u32_are_sent_as_typed() {
        let mut form = FormData::default();
        form.set_field(Field::Tenure, "5000000000");
        assert_eq!(form.constraint_violation(), None);

        let req = PredictRequest::try_from(&form).unwrap();
        let body: Value = serde_json::from_slice(&req.to_json().unwrap()).unwrap();
        assert_eq!(body["tenure"], 5_000_000_000u64);
    }

    #[test]
    fn values_the_widget_refuses_are_the_ones_the_request_refuses() {
        let mut form = FormData::default();
        form.set_field(Field::Age, "99999999999999999999999");

        assert!(form.constraint_violation().is_some());
        assert!(PredictRequest::try_from(&form).is_err());
    }

    #[test]
    fn non_numeric_text_is_rejected_before_sending() {
        let mut form = FormData::default();
        form.set_field(Field::Age, "thirty");
        match PredictRequest::try_from(&form) {
            Err(PredictError::InvalidForm { field, value }) => {
                assert_eq!(field, "age");
                assert_eq!(value, "thirty");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn unknown_option_is_rejected() {
        let mut form = FormData::default();
        form.set_field(Field::Gender, "Other");
        assert!(matches!(
            PredictRequest::try_from(&form),
            Err(PredictError::InvalidForm { field: "gender", .. })
        ));
    }
}
