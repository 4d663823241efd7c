use chrono::{Datelike, NaiveDate};
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{LoanError, Result};

/// a single term within an amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// due date, always the first of a month
    pub date: NaiveDate,
    pub payment: Money,
    /// interest portion of the payment
    pub interest: Money,
    /// balance remaining after the payment
    pub balance: Money,
}

impl Term {
    /// principal paid during this term
    pub fn principal(&self) -> Money {
        self.payment - self.interest
    }
}

/// origination month of a loan. the first term falls due one month later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Origination {
    year: i32,
    month: u32,
}

impl Origination {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(LoanError::InvalidDate {
                message: format!("no such month: {year}-{month:02}"),
            });
        }
        Ok(Self { year, month })
    }

    /// origination in the provider's current month
    pub fn current(time: &SafeTimeProvider) -> Self {
        let now = time.now();
        Self {
            year: now.year(),
            month: now.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// first day of the origination month
    pub fn first_day(&self) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).ok_or_else(|| LoanError::InvalidDate {
            message: format!("no such month: {}-{:02}", self.year, self.month),
        })
    }
}
