pub mod config;
pub mod decimal;
pub mod errors;
pub mod loan;
pub mod payments;
pub mod summary;
pub mod types;

// re-export key types
pub use config::{LoanRequest, ScheduleConfig};
pub use decimal::{round_half_up, Money, Rate};
pub use errors::{LoanError, Result};
pub use loan::{Loan, LoanBuilder};
pub use payments::{generate_terms, solve_for_payment};
pub use summary::{reporting_year, ScheduleSummary, YearTotals};
pub use types::{Origination, Term};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
