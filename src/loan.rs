use log::debug;
use serde::Serialize;

use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};
use crate::payments::{generate_terms, solve_for_payment};
use crate::types::{Origination, Term};

/// a fixed-rate loan with monthly payments.
///
/// the payment is solved once at construction and never changes; a loan
/// has no mutating methods, so it can be shared freely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Loan {
    amount: Money,
    rate: Rate,
    duration_in_months: u32,
    payment: Money,
}

impl Loan {
    /// create a new loan.
    ///
    /// `amount` is the amount borrowed, `rate` the annual interest rate and
    /// `duration_in_months` the number of monthly payments it is priced
    /// over. amount and duration must be positive. zero and negative rates
    /// are accepted down to -1200% a year; below that a single month of
    /// interest would push the balance negative.
    pub fn new(amount: Money, rate: Rate, duration_in_months: u32) -> Result<Self> {
        if !amount.is_positive() {
            return Err(LoanError::InvalidAmount { amount });
        }
        if duration_in_months == 0 {
            return Err(LoanError::InvalidDuration {
                months: duration_in_months,
            });
        }
        if !rate.is_finite() || rate.monthly_rate() < -1.0 {
            return Err(LoanError::InvalidRate { rate: rate.as_f64() });
        }

        let payment = solve_for_payment(amount, rate.monthly_rate(), duration_in_months);
        debug!(
            "new loan: amount {} rate {} over {} months, payment {}",
            amount, rate, duration_in_months, payment
        );

        Ok(Self {
            amount,
            rate,
            duration_in_months,
            payment,
        })
    }

    /// builder for creating loans
    pub fn builder() -> LoanBuilder {
        LoanBuilder::new()
    }

    /// amount borrowed
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// annual interest rate
    pub fn rate(&self) -> Rate {
        self.rate
    }

    pub fn monthly_rate(&self) -> f64 {
        self.rate.monthly_rate()
    }

    /// number of months the payment was solved over. because the payment is
    /// rounded, paying the loan off may take a different number of months.
    pub fn duration_in_months(&self) -> u32 {
        self.duration_in_months
    }

    /// payment due each term
    pub fn payment(&self) -> Money {
        self.payment
    }

    /// all terms needed to pay off this loan, originated in `year`/`month`.
    ///
    /// returns at most `max_terms` terms; zero means no cap. the number of
    /// terms may differ from the duration depending on payment rounding.
    pub fn terms(&self, year: i32, month: u32, max_terms: usize) -> Result<Vec<Term>> {
        self.terms_from(Origination::new(year, month)?, max_terms)
    }

    /// same as [`Loan::terms`] with an already validated origination
    pub fn terms_from(&self, origination: Origination, max_terms: usize) -> Result<Vec<Term>> {
        generate_terms(self, origination, max_terms)
    }
}

/// builder for loans
#[derive(Debug, Clone, Default)]
pub struct LoanBuilder {
    amount: Option<Money>,
    rate: Option<Rate>,
    term_months: Option<u32>,
}

impl LoanBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn rate(mut self, rate: Rate) -> Self {
        self.rate = Some(rate);
        self
    }

    pub fn term_months(mut self, months: u32) -> Self {
        self.term_months = Some(months);
        self
    }

    pub fn build(self) -> Result<Loan> {
        let amount = self.amount.ok_or(LoanError::InvalidConfiguration {
            message: "Amount required".to_string(),
        })?;

        let rate = self.rate.ok_or(LoanError::InvalidConfiguration {
            message: "Rate required".to_string(),
        })?;

        let term = self.term_months.ok_or(LoanError::InvalidConfiguration {
            message: "Term required".to_string(),
        })?;

        Loan::new(amount, rate, term)
    }
}
