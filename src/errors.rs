use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug)]
pub enum LoanError {
    #[error("invalid loan amount: {amount}, must be positive")]
    InvalidAmount {
        amount: Money,
    },

    #[error("invalid loan duration: {months} months, must be positive")]
    InvalidDuration {
        months: u32,
    },

    #[error("invalid interest rate: {rate}")]
    InvalidRate {
        rate: f64,
    },

    #[error("invalid date: {message}")]
    InvalidDate {
        message: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("calculation error: {message}")]
    CalculationError {
        message: String,
    },

    #[error("too many terms to display: schedule exceeds {max_terms} terms")]
    TooManyTerms {
        max_terms: usize,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LoanError>;
