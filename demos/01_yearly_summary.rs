//! yearly summary - totals per year and for the whole loan
use mortgage_rs::{Loan, LoanError, Money, Origination, Rate, ScheduleConfig, ScheduleSummary};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let loan = Loan::new(Money::from_minor(23_800_000), Rate::from_percentage(4), 360)?;
    let origination = Origination::new(2015, 1)?;

    let summary = ScheduleSummary::for_loan(&loan, origination, &ScheduleConfig::default())?;

    println!("monthly payment:       ${}", loan.payment().to_major(2));
    println!("total cost:            ${}", summary.payment.to_major(2));
    println!("total finance charges: ${}", summary.interest.to_major(2));
    println!();

    for totals in summary.years.values() {
        println!(
            "{} totals  payment {:>10}  interest {:>10}  principal {:>10}",
            totals.year,
            totals.payment.to_major(2),
            totals.interest.to_major(2),
            totals.principal.to_major(2),
        );
    }

    // a loan that barely covers its interest runs past the display limit
    let slow = Loan::new(Money::from_minor(23_800_000), Rate::from_percentage(60), 360)?;
    let strict = ScheduleConfig { max_terms: 120 };
    match ScheduleSummary::for_loan(&slow, origination, &strict) {
        Err(LoanError::TooManyTerms { max_terms }) => {
            println!("\nschedule needs more than {max_terms} terms");
        }
        other => {
            other?;
        }
    }

    Ok(())
}
