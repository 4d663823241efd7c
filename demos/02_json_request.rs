//! json request - resolve a loan request and print its summary as json
use mortgage_rs::{LoanRequest, SafeTimeProvider, ScheduleConfig, ScheduleSummary, TimeSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // no start month given, so the loan originates this month
    let request = LoanRequest::from_json(
        r#"{"amount": "15000.00", "rate": "6.5", "term_months": 24}"#,
    )?;
    let config = ScheduleConfig::from_json(r#"{"max_terms": 600}"#)?;

    let time = SafeTimeProvider::new(TimeSource::System);
    let (loan, origination) = request.resolve(&time)?;

    println!(
        "originating {}-{:02}, payment {}",
        origination.year(),
        origination.month(),
        loan.payment()
    );

    let summary = ScheduleSummary::for_loan(&loan, origination, &config)?;
    println!("{}", summary.to_json()?);

    Ok(())
}
