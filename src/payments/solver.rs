use log::warn;

use crate::decimal::{round_half_up, Money};

/// solve for the fixed payment that amortizes `amount` over `periods`
/// periods at `periodic_rate` per period.
///
/// uses the closed-form annuity payment
/// `P * r * (1 + 1 / ((1 + r)^n - 1))`, or `P / n` when the rate is zero.
/// the result is then corrected so that it is always at least one minor
/// unit and always strictly greater than one period of interest on the
/// full amount. with a positive rate that guarantees the balance shrinks
/// every period.
///
/// `periods` must be positive.
pub fn solve_for_payment(amount: Money, periodic_rate: f64, periods: u32) -> Money {
    let amount_f = amount.as_f64();
    let periods_f = f64::from(periods);

    // a rate too small to move (1 + r) amortizes like a zero rate
    let compound = (1.0 + periodic_rate).powf(periods_f);
    let mut payment = if periodic_rate == 0.0 || compound == 1.0 {
        round_half_up(amount_f / periods_f)
    } else {
        round_half_up(amount_f * periodic_rate * (1.0 + 1.0 / (compound - 1.0)))
    };

    if !payment.is_positive() {
        warn!(
            "payment for {} over {} periods at {} solved to {}, using minimum payment",
            amount, periods, periodic_rate, payment
        );
        payment = Money::ONE;
    }

    let interest_only = round_half_up(amount_f * periodic_rate);
    if payment <= interest_only {
        warn!(
            "payment {} does not cover interest {} on {}, raising to {}",
            payment,
            interest_only,
            amount,
            interest_only.saturating_add(Money::ONE)
        );
        payment = interest_only.saturating_add(Money::ONE);
    }

    payment
}
