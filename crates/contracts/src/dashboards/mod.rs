pub mod d400_weekly_financials;
pub mod d401_installation_billing;
pub mod d402_progress;
pub mod d403_payroll;
pub mod d404_inventory;
