use hourglass_rs::SafeTimeProvider;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};
use crate::loan::Loan;
use crate::types::Origination;

/// number of minor-unit digits in amounts given in major units
pub const MINOR_UNIT_SCALE: u32 = 2;

/// earliest and latest origination years a request may ask for
pub const MIN_ORIGINATION_YEAR: i32 = 1900;
pub const MAX_ORIGINATION_YEAR: i32 = 2200;

/// schedule generation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// largest schedule a summary will accept, zero for no limit
    pub max_terms: usize,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self { max_terms: 1200 }
    }
}

impl ScheduleConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn unlimited() -> Self {
        Self { max_terms: 0 }
    }
}

/// loan request as submitted by a caller, amounts in major units and the
/// rate in percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub amount: Decimal,
    /// annual rate in percent, 4.5 = 4.5%
    pub rate: Decimal,
    pub term_months: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_month: Option<u32>,
}

impl LoanRequest {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// validate the request and build the loan and its origination.
    ///
    /// a missing start year or month is taken from the provider's current
    /// month.
    pub fn resolve(&self, time: &SafeTimeProvider) -> Result<(Loan, Origination)> {
        let current = Origination::current(time);
        let year = self.start_year.unwrap_or(current.year());
        let month = self.start_month.unwrap_or(current.month());

        if !(1..=12).contains(&month) {
            return Err(LoanError::InvalidConfiguration {
                message: "Please choose a month.".to_string(),
            });
        }
        if !(MIN_ORIGINATION_YEAR..=MAX_ORIGINATION_YEAR).contains(&year) {
            return Err(LoanError::InvalidConfiguration {
                message: format!(
                    "Please enter a year between {MIN_ORIGINATION_YEAR} and {MAX_ORIGINATION_YEAR}"
                ),
            });
        }

        let amount = Money::from_major(self.amount, MINOR_UNIT_SCALE).ok_or_else(|| {
            LoanError::InvalidConfiguration {
                message: format!("amount {} is not a whole number of cents", self.amount),
            }
        })?;

        let loan = Loan::builder()
            .amount(amount)
            .rate(Rate::from_decimal_percentage(self.rate))
            .term_months(self.term_months)
            .build()?;

        Ok((loan, Origination::new(year, month)?))
    }
}
