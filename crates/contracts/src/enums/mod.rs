pub mod expense_category;
pub mod material_category;
pub mod order_status;
pub mod rate_category;
pub mod worker_type;

pub use expense_category::ExpenseCategory;
pub use material_category::MaterialCategory;
pub use order_status::OrderStatus;
pub use rate_category::RateCategory;
pub use worker_type::{WorkerStatus, WorkerType};
