use chrono::{Months, NaiveDate};
use log::{debug, trace, warn};

use crate::decimal::round_half_up;
use crate::errors::{LoanError, Result};
use crate::loan::Loan;
use crate::types::{Origination, Term};

/// most terms reserved up front; longer schedules grow as needed
const MAX_RESERVED_TERMS: usize = 1201;

/// generate the amortization schedule of `loan` originated in `origination`.
///
/// terms are produced one per month starting one month after origination,
/// until the balance reaches zero or `max_terms` terms have been produced.
/// a `max_terms` of zero means no cap. a schedule of exactly `max_terms`
/// terms may have been cut short; callers that care must check for it.
///
/// the result only depends on the arguments, so a shorter cap always
/// yields a prefix of a longer one.
pub fn generate_terms(loan: &Loan, origination: Origination, max_terms: usize) -> Result<Vec<Term>> {
    let monthly_rate = loan.monthly_rate();
    let mut date = origination.first_day()?;
    let mut balance = loan.amount();
    let mut terms = Vec::with_capacity(initial_capacity(loan, max_terms));

    debug!(
        "generating schedule: amount {} rate {} payment {} from {}-{:02}, max terms {}",
        loan.amount(),
        loan.rate(),
        loan.payment(),
        origination.year(),
        origination.month(),
        max_terms
    );

    while balance.is_positive() {
        date = add_month(date)?;

        // interest capitalizes before the payment is applied
        let interest = round_half_up(balance.as_f64() * monthly_rate);
        balance = balance.checked_add(interest).ok_or_else(|| overflow(date))?;

        // the last payment only covers what is left
        let payment = loan.payment().min(balance);
        balance -= payment;

        let term = Term {
            date,
            payment,
            interest,
            balance,
        };
        trace!(
            "term {}: {} payment {} interest {} balance {}",
            terms.len() + 1,
            date,
            payment,
            interest,
            balance
        );
        terms.push(term);

        if terms.len() == max_terms {
            if balance.is_positive() {
                warn!(
                    "schedule capped at {} terms with balance {} outstanding",
                    max_terms, balance
                );
            }
            break;
        }
    }

    debug!("generated {} terms", terms.len());
    Ok(terms)
}

/// first of the following month
fn add_month(date: NaiveDate) -> Result<NaiveDate> {
    date.checked_add_months(Months::new(1))
        .ok_or_else(|| LoanError::InvalidDate {
            message: format!("schedule runs past the last representable date after {date}"),
        })
}

fn overflow(date: NaiveDate) -> LoanError {
    LoanError::CalculationError {
        message: format!("balance overflow in term due {date}"),
    }
}

fn initial_capacity(loan: &Loan, max_terms: usize) -> usize {
    let expected = (loan.duration_in_months() as usize)
        .saturating_add(1)
        .min(MAX_RESERVED_TERMS);
    if max_terms == 0 {
        expected
    } else {
        expected.min(max_terms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::{Money, Rate};
    use chrono::Datelike;
    use proptest::prelude::*;

    fn loan(amount: i64, rate: f64, months: u32) -> Loan {
        Loan::new(Money::from_minor(amount), Rate::from_fraction(rate), months).unwrap()
    }

    fn jan_2015() -> Origination {
        Origination::new(2015, 1).unwrap()
    }

    /// balances chain, dates step one month from origination, schedule
    /// ends paid off
    fn verify_terms(terms: &[Term], amount: Money, origination: Origination) {
        let mut date = origination.first_day().unwrap();
        let mut previous = amount;
        for term in terms {
            date = date.checked_add_months(Months::new(1)).unwrap();
            assert_eq!(previous - term.principal(), term.balance, "balance wrong at {}", term.date);
            assert_eq!(term.date, date);
            assert!(!term.balance.is_negative());
            previous = term.balance;
        }
        assert_eq!(previous, Money::ZERO, "final balance not zero");
    }

    #[test]
    fn test_regular_schedule() {
        let loan = loan(23_800_000, 0.04, 360);
        let terms = generate_terms(&loan, jan_2015(), 0).unwrap();

        assert!(terms.len() == 360 || terms.len() == 361, "got {} terms", terms.len());
        verify_terms(&terms, loan.amount(), jan_2015());

        let first = &terms[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2015, 2, 1).unwrap());
        assert_eq!(first.interest, Money::from_minor(79_333));
        assert_eq!(first.payment, Money::from_minor(113_625));
        assert_eq!(first.balance, Money::from_minor(23_765_708));

        let last = terms.last().unwrap();
        assert!(last.payment <= loan.payment());
        assert_eq!(last.balance, Money::ZERO);
    }

    #[test]
    fn test_truncated_schedule_is_prefix() {
        let loan = loan(23_800_000, 0.04, 360);
        let full = generate_terms(&loan, jan_2015(), 0).unwrap();

        let first_hundred = generate_terms(&loan, jan_2015(), 100).unwrap();
        assert_eq!(first_hundred.len(), 100);
        assert_eq!(first_hundred[..], full[..100]);

        let generous = generate_terms(&loan, jan_2015(), 1000).unwrap();
        assert_eq!(generous, full);
    }

    #[test]
    fn test_big_interest_schedule() {
        let loan = loan(23_800_000, 0.60, 360);
        let terms = generate_terms(&loan, jan_2015(), 0).unwrap();
        verify_terms(&terms, loan.amount(), jan_2015());

        // first term only retires a single cent of principal
        assert_eq!(terms[0].interest, Money::from_minor(1_190_000));
        assert_eq!(terms[0].principal(), Money::ONE);
    }

    #[test]
    fn test_negative_interest_schedule() {
        let loan = loan(23_800_000, -0.60, 360);
        let terms = generate_terms(&loan, jan_2015(), 0).unwrap();
        verify_terms(&terms, loan.amount(), jan_2015());
        assert!(terms.iter().all(|t| t.payment == Money::ONE || t.balance.is_zero()));
        assert!(terms.iter().all(|t| !t.interest.is_positive()));
    }

    #[test]
    fn test_zero_rate_schedule() {
        let loan = loan(120_000, 0.0, 360);
        let terms = generate_terms(&loan, jan_2015(), 0).unwrap();
        verify_terms(&terms, loan.amount(), jan_2015());

        assert!(terms.iter().all(|t| t.interest.is_zero()));
        let total: Money = terms.iter().map(|t| t.payment).sum();
        assert_eq!(total, loan.amount());
        // 333 a month leaves 120 cents for a 361st term
        assert_eq!(terms.len(), 361);
        assert_eq!(terms.last().unwrap().payment, Money::from_minor(120));
    }

    #[test]
    fn test_dates_roll_over_year_end() {
        let loan = loan(1_000_000, 0.05, 24);
        let origination = Origination::new(2015, 11).unwrap();
        let terms = generate_terms(&loan, origination, 3).unwrap();

        let dates: Vec<_> = terms.iter().map(|t| (t.date.year(), t.date.month(), t.date.day())).collect();
        assert_eq!(dates, vec![(2015, 12, 1), (2016, 1, 1), (2016, 2, 1)]);
    }

    #[test]
    fn test_single_term_cap() {
        let loan = loan(23_800_000, 0.04, 360);
        let terms = generate_terms(&loan, jan_2015(), 1).unwrap();
        assert_eq!(terms.len(), 1);
        assert!(terms[0].balance.is_positive());
    }

    #[test]
    fn test_single_period_loan() {
        let loan = loan(100_000, 0.12, 1);
        let terms = generate_terms(&loan, jan_2015(), 0).unwrap();
        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].interest, Money::from_minor(1_000));
        assert_eq!(terms[0].payment, Money::from_minor(101_000));
        assert_eq!(terms[0].balance, Money::ZERO);
    }

    #[test]
    fn test_zero_rate_tiny_payment_pays_off() {
        // 100 cents over 1000 months pays a cent a month
        let loan = loan(100, 0.0, 1000);
        assert_eq!(loan.payment(), Money::ONE);

        let terms = generate_terms(&loan, jan_2015(), 0).unwrap();
        assert_eq!(terms.len(), 100);
        verify_terms(&terms, loan.amount(), jan_2015());

        let capped = generate_terms(&loan, jan_2015(), 5).unwrap();
        let balances: Vec<_> = capped.iter().map(|t| t.balance.as_minor()).collect();
        assert_eq!(balances, vec![99, 98, 97, 96, 95]);
    }

    #[test]
    fn test_huge_duration_does_not_reserve_duration() {
        let loan = loan(100, 0.04, u32::MAX);
        assert_eq!(loan.payment(), Money::ONE);
        assert_eq!(initial_capacity(&loan, 0), MAX_RESERVED_TERMS);

        let terms = generate_terms(&loan, jan_2015(), 0).unwrap();
        assert_eq!(terms.len(), 100);
        verify_terms(&terms, loan.amount(), jan_2015());
    }

    #[test]
    fn test_initial_capacity_bounds() {
        let short = loan(120_000, 0.0, 12);
        assert_eq!(initial_capacity(&short, 0), 13);
        assert_eq!(initial_capacity(&short, 5), 5);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_positive_rate_pays_off_strictly(
            amount in 1i64..100_000_000,
            rate in 0.0001f64..0.3,
            months in 1u32..480,
        ) {
            let loan = loan(amount, rate, months);
            let terms = generate_terms(&loan, jan_2015(), 0).unwrap();

            let mut previous = loan.amount();
            for term in &terms {
                prop_assert_eq!(previous - term.principal(), term.balance);
                prop_assert!(term.balance < previous);
                prop_assert!(term.payment <= loan.payment());
                previous = term.balance;
            }
            prop_assert_eq!(previous, Money::ZERO);
        }

        #[test]
        fn prop_zero_rate_pays_off_without_interest(
            amount in 1i64..1000,
            months in 1u32..5000,
        ) {
            let loan = loan(amount, 0.0, months);
            prop_assert!(loan.payment().is_positive());

            let terms = generate_terms(&loan, jan_2015(), 0).unwrap();
            prop_assert!(terms.iter().all(|t| t.interest.is_zero()));
            let total: Money = terms.iter().map(|t| t.payment).sum();
            prop_assert_eq!(total, loan.amount());
            prop_assert_eq!(terms.last().map(|t| t.balance), Some(Money::ZERO));
        }

        #[test]
        fn prop_shorter_cap_is_prefix(
            amount in 1i64..50_000_000,
            rate in -0.2f64..0.3,
            months in 1u32..360,
            cap in 1usize..400,
        ) {
            let loan = loan(amount, rate, months);
            let longer = generate_terms(&loan, jan_2015(), cap + 50).unwrap();
            let shorter = generate_terms(&loan, jan_2015(), cap).unwrap();

            prop_assert!(shorter.len() <= cap);
            prop_assert_eq!(&shorter[..], &longer[..shorter.len()]);
        }
    }
}
