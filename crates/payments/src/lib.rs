mod client;
mod error;
pub mod models;

pub use client::PaymentsClient;
pub use error::PaymentsError;
pub use models::{ActiveSubscription, CustomerState};

pub type Result<T> = std::result::Result<T, PaymentsError>;
