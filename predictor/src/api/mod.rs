pub mod choices;
mod request;
mod response;

pub use choices::{Choice, Contract, Gender, PaperlessBilling, PaymentMethod};
pub use request::PredictRequest;
pub use response::{PredictResponse, PredictionResult};
