//! quick start - solve a payment and print the first year of terms
use mortgage_rs::{Loan, Money, Rate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // $238,000 at 4% over 30 years
    let loan = Loan::builder()
        .amount(Money::from_minor(23_800_000))
        .rate(Rate::from_percentage(4))
        .term_months(360)
        .build()?;

    println!("monthly payment: ${}", loan.payment().to_major(2));

    for term in loan.terms(2015, 1, 12)? {
        println!(
            "{}  payment {:>10}  interest {:>10}  principal {:>10}  balance {:>12}",
            term.date,
            term.payment.to_major(2),
            term.interest.to_major(2),
            term.principal().to_major(2),
            term.balance.to_major(2),
        );
    }

    Ok(())
}
