pub mod aggregate;

pub use aggregate::Expense;
