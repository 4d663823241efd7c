pub mod amortization;
pub mod solver;

pub use amortization::generate_terms;
pub use solver::solve_for_payment;
