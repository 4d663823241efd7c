//! yearly and overall totals of a schedule, for display

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use log::{debug, warn};
use serde::Serialize;

use crate::config::ScheduleConfig;
use crate::decimal::Money;
use crate::errors::{LoanError, Result};
use crate::loan::Loan;
use crate::types::{Origination, Term};

/// totals for the terms reported in one year
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearTotals {
    pub year: i32,
    pub payment: Money,
    pub interest: Money,
    pub principal: Money,
    pub terms: Vec<Term>,
}

impl YearTotals {
    fn new(year: i32) -> Self {
        Self {
            year,
            payment: Money::ZERO,
            interest: Money::ZERO,
            principal: Money::ZERO,
            terms: Vec::new(),
        }
    }

    fn add(&mut self, term: &Term) -> Result<()> {
        accumulate(&mut self.payment, term.payment, term.date)?;
        accumulate(&mut self.interest, term.interest, term.date)?;
        accumulate(&mut self.principal, principal(term)?, term.date)?;
        self.terms.push(*term);
        Ok(())
    }
}

/// schedule totals broken down by year
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleSummary {
    pub payment: Money,
    pub interest: Money,
    pub principal: Money,
    pub term_count: usize,
    pub years: BTreeMap<i32, YearTotals>,
}

impl ScheduleSummary {
    /// summarize a schedule. terms are grouped by [`reporting_year`].
    ///
    /// fails with [`LoanError::CalculationError`] if a total does not fit.
    pub fn from_terms(terms: &[Term]) -> Result<Self> {
        let mut summary = Self {
            payment: Money::ZERO,
            interest: Money::ZERO,
            principal: Money::ZERO,
            term_count: terms.len(),
            years: BTreeMap::new(),
        };

        for term in terms {
            accumulate(&mut summary.payment, term.payment, term.date)?;
            accumulate(&mut summary.interest, term.interest, term.date)?;
            accumulate(&mut summary.principal, principal(term)?, term.date)?;

            let year = reporting_year(term.date);
            summary
                .years
                .entry(year)
                .or_insert_with(|| YearTotals::new(year))
                .add(term)?;
        }

        Ok(summary)
    }

    /// generate and summarize the schedule of `loan`.
    ///
    /// fails with [`LoanError::TooManyTerms`] when paying the loan off takes
    /// more than `config.max_terms` terms, rather than summarizing a cut
    /// short schedule.
    pub fn for_loan(loan: &Loan, origination: Origination, config: &ScheduleConfig) -> Result<Self> {
        let terms = if config.max_terms == 0 {
            loan.terms_from(origination, 0)?
        } else {
            let terms = loan.terms_from(origination, config.max_terms.saturating_add(1))?;
            if terms.len() > config.max_terms {
                warn!(
                    "schedule for {} at {} needs more than {} terms",
                    loan.amount(),
                    loan.rate(),
                    config.max_terms
                );
                return Err(LoanError::TooManyTerms {
                    max_terms: config.max_terms,
                });
            }
            terms
        };

        let summary = Self::from_terms(&terms)?;
        debug!(
            "summarized {} terms over {} years",
            summary.term_count,
            summary.years.len()
        );
        Ok(summary)
    }

    pub fn year(&self, year: i32) -> Option<&YearTotals> {
        self.years.get(&year)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn accumulate(total: &mut Money, amount: Money, due: NaiveDate) -> Result<()> {
    *total = total
        .checked_add(amount)
        .ok_or_else(|| LoanError::CalculationError {
            message: format!("schedule totals overflow at term due {due}"),
        })?;
    Ok(())
}

fn principal(term: &Term) -> Result<Money> {
    term.payment
        .checked_sub(term.interest)
        .ok_or_else(|| LoanError::CalculationError {
            message: format!("principal overflow in term due {}", term.date),
        })
}

/// year a term is reported in.
///
/// payments are assumed to be made the day before they fall due, so a
/// payment due on january 1st counts toward the previous year. term dates
/// themselves are never shifted.
pub fn reporting_year(due: NaiveDate) -> i32 {
    due.pred_opt().unwrap_or(due).year()
}
